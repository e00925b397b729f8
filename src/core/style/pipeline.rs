use super::assembler::{FormattedResponse, assemble};
use super::category::Category;
use super::classifier::classify;
use super::extractor::extract_annotation;
use super::transformer::StyleTransformer;
use crate::core::familiarity::ExceptionOverlay;
use crate::core::persona::PersonaProfile;

/// Classify, transform, annotate and assemble one raw model utterance.
///
/// Stateless and `Send + Sync`; the familiarity level is passed in per call.
#[derive(Debug, Clone)]
pub struct StylePipeline {
    profile: PersonaProfile,
    transformer: StyleTransformer,
    overlay: ExceptionOverlay,
}

impl StylePipeline {
    pub fn new(profile: PersonaProfile) -> Self {
        Self {
            profile,
            transformer: StyleTransformer::new(&profile),
            overlay: ExceptionOverlay::new(profile),
        }
    }

    pub fn profile(&self) -> &PersonaProfile {
        &self.profile
    }

    pub fn format(&self, text: &str, context: Option<&str>) -> FormattedResponse {
        let category = classify(text, context);
        let content = self.transformer.transform(text, category);
        let annotation = extract_annotation(text, category);
        FormattedResponse::new(category, content, annotation)
    }

    /// Full pipeline to display text, overlay included.
    pub fn render(&self, text: &str, context: Option<&str>, level: f64) -> String {
        let assembled = self.format(text, context).render();
        self.overlay.apply(&assembled, level)
    }

    /// What the caller shows instead of an error when a turn cannot be styled.
    pub fn fallback_utterance(&self) -> String {
        assemble(Category::Warning, "入力データの処理に失敗した。再送信を推奨する。", None)
    }
}

impl Default for StylePipeline {
    fn default() -> Self {
        Self::new(PersonaProfile::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acknowledgment_with_count() {
        let pipeline = StylePipeline::default();
        let response = pipeline.format("リストに追加しました。現在10件です。", None);
        assert_eq!(response.category, Category::Acknowledgment);
        assert_eq!(response.annotation.as_deref(), Some("【現在10件】"));
        assert_eq!(
            response.render(),
            "承認：リストに追加した。現在10件。 【現在10件】"
        );
    }

    #[test]
    fn answer_from_question_context() {
        let pipeline = StylePipeline::default();
        let out = pipeline.render("東京です", Some("首都はどこ？"), 0.0);
        assert_eq!(out, "回答：東京。");
    }

    #[test]
    fn overlay_only_when_advanced() {
        let pipeline = StylePipeline::default();
        let text = "危険です。撤退してください";
        let calm = pipeline.render(text, None, 1.0);
        assert_eq!(calm, "警告：危険。撤退することを推奨する。");
        let advanced = pipeline.render(text, None, 3.5);
        assert_eq!(advanced, format!("{calm}……当機の個人的な見解を含む。"));
    }

    #[test]
    fn fallback_is_a_warning() {
        let utterance = StylePipeline::default().fallback_utterance();
        assert!(utterance.starts_with("警告："));
    }
}
