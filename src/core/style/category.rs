use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

// Category: rhetorical response category (closed set, no dynamic extension)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    #[default]
    Report,
    Suggestion,
    Answer,
    Acknowledgment,
    Understanding,
    Analysis,
    Warning,
    Confirmation,
}

impl Category {
    /// Header label the persona prefixes every response with.
    pub fn label(self) -> &'static str {
        match self {
            Self::Report => "報告",
            Self::Suggestion => "提案",
            Self::Answer => "回答",
            Self::Acknowledgment => "承認",
            Self::Understanding => "了解",
            Self::Analysis => "分析",
            Self::Warning => "警告",
            Self::Confirmation => "確認",
        }
    }

    /// Resolve a snake_case tag or a header label back to its category.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        tag.parse::<Self>()
            .ok()
            .or_else(|| Self::iter().find(|category| category.label() == tag))
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
