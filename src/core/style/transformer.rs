use std::sync::LazyLock;

use regex::Regex;

use super::category::Category;
use super::rules::{Substitution, apply_substitutions, table};
use crate::core::persona::PersonaProfile;

/// The only sentence-final mark the persona uses.
pub const TERMINAL_MARK: char = '。';

static REPEATED_TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("。{2,}").expect("valid terminal regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
/// Upper bound on rewrite rounds; real input settles in two or three.
const MAX_REWRITE_ROUNDS: usize = 8;

static DEFAULT_TRANSFORMER: LazyLock<StyleTransformer> = LazyLock::new(StyleTransformer::default);

/// Polite forms, longest first so compound endings are consumed before their
/// suffixes. Exclamations and questions flatten to the terminal mark.
pub const POLITENESS_RULES: &[(&str, &str)] = &[
    ("♪", ""),
    ("させていただきます", "する"),
    ("いたしました", "した"),
    ("いたします", "する"),
    ("してください", "することを推奨する"),
    ("ください", ""),
    ("でしょうか", "か"),
    ("でしょう", "と推測する"),
    ("ありがとうございます", "感謝する"),
    ("ございます", "ある"),
    ("ですね", ""),
    ("ですよ", ""),
    ("です", ""),
    ("できました", "できた"),
    ("ありました", "あった"),
    ("なりました", "なった"),
    ("しました", "した"),
    ("いました", "いた"),
    ("できません", "できない"),
    ("ありません", "ない"),
    ("しません", "しない"),
    ("いません", "いない"),
    ("できます", "できる"),
    ("あります", "ある"),
    ("なります", "なる"),
    ("します", "する"),
    ("います", "いる"),
    ("ね！", "。"),
    ("よ！", "。"),
    ("！", "。"),
    ("!", "。"),
    ("？", "。"),
    ("?", "。"),
];

/// Closed affect vocabulary. Words outside this table pass through as-is;
/// widening it is a deliberate persona change, not a fix.
pub const EMOTION_RULES: &[(&str, &str)] = &[
    ("楽しかった", "良好だった"),
    ("楽しい", "良好な"),
    ("嬉しい", "肯定的"),
    ("うれしい", "肯定的"),
    ("悲しい", "否定的"),
    ("寂しい", "孤立的"),
    ("さみしい", "孤立的"),
    ("怖い", "危険度が高い"),
    ("大好き", "高く評価する"),
    ("好き", "評価する"),
    ("嫌い", "評価しない"),
    ("心配", "懸念"),
    ("残念", "想定外"),
    ("最高", "良好"),
];

pub const VERB_RULES: &[(&str, &str)] = &[
    ("見つけました", "検出した"),
    ("見つけた", "検出した"),
    ("見つかった", "検出された"),
    ("終わりました", "完了した"),
    ("終わった", "完了した"),
    ("終えた", "完了した"),
    ("やりました", "実行した"),
    ("やった", "実行した"),
    ("調べた", "調査した"),
    ("作りました", "作成した"),
    ("作った", "作成した"),
    ("消した", "削除した"),
];

const FIRST_PERSON: &[&str] = &["わたし", "私", "僕", "俺"];
const SECOND_PERSON: &[&str] = &["あなた", "きみ", "君"];

/// Rewrites raw model text into the persona's flat register.
///
/// Holds the four substitution passes for one persona; the pronoun pass is the
/// only one that differs between variants.
#[derive(Debug, Clone)]
pub struct StyleTransformer {
    politeness: Vec<Substitution>,
    emotion: Vec<Substitution>,
    pronouns: Vec<Substitution>,
    verbs: Vec<Substitution>,
}

impl StyleTransformer {
    pub fn new(profile: &PersonaProfile) -> Self {
        let pronouns = FIRST_PERSON
            .iter()
            .map(|&word| Substitution::owned(word, profile.self_reference))
            .chain(
                SECOND_PERSON
                    .iter()
                    .map(|&word| Substitution::owned(word, profile.addressee)),
            )
            .collect();

        Self {
            politeness: table(POLITENESS_RULES),
            emotion: table(EMOTION_RULES),
            pronouns,
            verbs: table(VERB_RULES),
        }
    }

    /// `category` does not branch the pipeline today; it is part of the
    /// stable signature so per-category rules can be added without breaking
    /// callers.
    ///
    /// The passes repeat until the text stops changing: a deletion such as
    /// `で♪す` → `です` can expose a new match, and one more call must not
    /// find it.
    pub fn transform(&self, text: &str, _category: Category) -> String {
        let mut current = text.to_string();
        for _ in 0..MAX_REWRITE_ROUNDS {
            let next = self.rewrite(&current);
            if next == current {
                break;
            }
            current = next;
        }
        let text = ensure_terminal(&current);
        collapse(&text)
    }

    fn rewrite(&self, text: &str) -> String {
        let text = apply_substitutions(text, &self.politeness);
        let text = apply_substitutions(&text, &self.emotion);
        let text = apply_substitutions(&text, &self.pronouns);
        apply_substitutions(&text, &self.verbs)
    }
}

impl Default for StyleTransformer {
    fn default() -> Self {
        Self::new(&PersonaProfile::default())
    }
}

/// Transform with the default Pod042 profile.
pub fn transform(text: &str, category: Category) -> String {
    DEFAULT_TRANSFORMER.transform(text, category)
}

fn ensure_terminal(text: &str) -> String {
    let trimmed = text.trim_end();
    if trimmed.ends_with(TERMINAL_MARK) {
        trimmed.to_string()
    } else {
        format!("{trimmed}{TERMINAL_MARK}")
    }
}

fn collapse(text: &str) -> String {
    let text = REPEATED_TERMINAL.replace_all(text, "。");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}
