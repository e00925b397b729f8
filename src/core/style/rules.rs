//! Ordered, declarative rule tables shared by the classifier and transformer.
//!
//! Both stages are driven by data rather than control flow: the classifier
//! walks a list of [`KeywordRule`]s and stops at the first hit, the
//! transformer folds a list of [`Substitution`]s over the text. Table order is
//! part of the contract in both cases.

use std::borrow::Cow;

/// Maps any of `keywords` to `result`.
#[derive(Debug, Clone)]
pub struct KeywordRule<R> {
    pub keywords: &'static [&'static str],
    pub result: R,
}

impl<R> KeywordRule<R> {
    pub const fn new(keywords: &'static [&'static str], result: R) -> Self {
        Self { keywords, result }
    }

    pub fn matches(&self, haystack: &str) -> bool {
        contains_any(haystack, self.keywords)
    }
}

/// Global find/replace of `pattern` with `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: Cow<'static, str>,
    pub replacement: Cow<'static, str>,
}

impl Substitution {
    pub const fn fixed(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            replacement: Cow::Borrowed(replacement),
        }
    }

    pub fn owned(pattern: &'static str, replacement: impl Into<String>) -> Self {
        Self {
            pattern: Cow::Borrowed(pattern),
            replacement: Cow::Owned(replacement.into()),
        }
    }
}

/// Build a substitution table from `(pattern, replacement)` pairs.
pub fn table(pairs: &[(&'static str, &'static str)]) -> Vec<Substitution> {
    pairs
        .iter()
        .map(|&(pattern, replacement)| Substitution::fixed(pattern, replacement))
        .collect()
}

/// Result of the first rule whose keywords occur in `haystack`.
pub fn first_match<'r, R>(rules: &'r [KeywordRule<R>], haystack: &str) -> Option<&'r R> {
    rules
        .iter()
        .find(|rule| rule.matches(haystack))
        .map(|rule| &rule.result)
}

/// Apply every substitution in order, each over the whole string.
pub fn apply_substitutions(text: &str, rules: &[Substitution]) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| {
        if rule.pattern.is_empty() || !acc.contains(rule.pattern.as_ref()) {
            acc
        } else {
            acc.replace(rule.pattern.as_ref(), &rule.replacement)
        }
    })
}

pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Lowercase ASCII only; kana and kanji pass through untouched.
pub fn normalize_case(text: &str) -> String {
    text.to_ascii_lowercase()
}
