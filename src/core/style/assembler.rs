use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::error::StyleError;

/// Separator between the category label and the content (full-width colon).
pub const LABEL_SEPARATOR: char = '：';

// FormattedResponse: one turn's styled output, created once and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedResponse {
    pub category: Category,
    pub content: String,
    #[serde(default)]
    pub annotation: Option<String>,
}

impl FormattedResponse {
    pub fn new(category: Category, content: String, annotation: Option<String>) -> Self {
        Self {
            category,
            content,
            annotation,
        }
    }

    pub fn render(&self) -> String {
        assemble(self.category, &self.content, self.annotation.as_deref())
    }
}

impl fmt::Display for FormattedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// `"{label}：{content}"`, followed by `" {annotation}"` when one is present.
pub fn assemble(category: Category, content: &str, annotation: Option<&str>) -> String {
    match annotation {
        Some(annotation) => format!(
            "{}{LABEL_SEPARATOR}{content} {annotation}",
            category.label()
        ),
        None => format!("{}{LABEL_SEPARATOR}{content}", category.label()),
    }
}

/// Assemble from a string tag, as received across a serialization boundary.
pub fn assemble_tagged(
    tag: &str,
    content: &str,
    annotation: Option<&str>,
) -> Result<String, StyleError> {
    let category =
        Category::from_tag(tag).ok_or_else(|| StyleError::InvalidCategory(tag.to_string()))?;
    Ok(assemble(category, content, annotation))
}
