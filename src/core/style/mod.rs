// Style pipeline: rule-based classification and rewriting of raw model output
// into the persona's header-prefixed register. Deterministic, no model calls.

pub mod assembler;
pub mod category;
pub mod classifier;
pub mod extractor;
pub mod pipeline;
pub mod request;
pub mod rules;
pub mod transformer;

pub use assembler::{FormattedResponse, LABEL_SEPARATOR, assemble, assemble_tagged};
pub use category::Category;
pub use classifier::classify;
pub use extractor::extract_annotation;
pub use pipeline::StylePipeline;
pub use request::FormatRequest;
pub use transformer::{StyleTransformer, TERMINAL_MARK, transform};
