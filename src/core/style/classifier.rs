use super::category::Category;
use super::rules::{KeywordRule, contains_any, first_match, normalize_case};

/// Ordered text rules. The first rule with a keyword hit wins, so a message
/// such as "追加して確認" resolves to acknowledgment, not confirmation.
pub const CATEGORY_RULES: &[KeywordRule<Category>] = &[
    KeywordRule::new(
        &[
            "危険", "警告", "注意", "エラー", "失敗", "異常", "error", "warning", "danger",
        ],
        Category::Warning,
    ),
    KeywordRule::new(
        &["追加", "登録", "記録", "保存", "削除", "add", "register", "save"],
        Category::Acknowledgment,
    ),
    KeywordRule::new(
        &["確認", "よろしいですか", "いいですか", "confirm"],
        Category::Confirmation,
    ),
    KeywordRule::new(
        &[
            "提案",
            "おすすめ",
            "オススメ",
            "推奨",
            "したほうが",
            "した方が",
            "べき",
            "suggest",
            "recommend",
        ],
        Category::Suggestion,
    ),
    KeywordRule::new(
        &["分析", "解析", "統計", "傾向", "データ", "analy", "statistic"],
        Category::Analysis,
    ),
    KeywordRule::new(
        &[
            "了解",
            "承知",
            "わかった",
            "分かった",
            "理解",
            "リマインド",
            "予定",
            "remind",
            "schedule",
        ],
        Category::Understanding,
    ),
    KeywordRule::new(&["答え", "回答", "結論", "answer"], Category::Answer),
];

/// Markers that make the previous turn a question.
pub const QUESTION_MARKERS: &[&str] = &[
    "？", "?", "何", "どう", "なぜ", "いつ", "どこ", "誰", "what", "how", "why", "when", "where",
    "who",
];

/// Infer the rhetorical category of `text`.
///
/// Total and deterministic: text rules first, then a question in `context`
/// yields [`Category::Answer`], otherwise [`Category::Report`].
pub fn classify(text: &str, context: Option<&str>) -> Category {
    let normalized = normalize_case(text);
    if let Some(&category) = first_match(CATEGORY_RULES, &normalized) {
        tracing::debug!(%category, "classified by text rule");
        return category;
    }

    let asked = context
        .map(normalize_case)
        .is_some_and(|ctx| contains_any(&ctx, QUESTION_MARKERS));
    if asked {
        tracing::debug!("classified as answer from question context");
        return Category::Answer;
    }

    Category::Report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keyword_is_acknowledgment() {
        assert_eq!(
            classify("買い物リストに牛乳を追加して", None),
            Category::Acknowledgment
        );
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        assert_eq!(
            classify("追加した内容を確認してください", None),
            Category::Acknowledgment
        );
        assert_eq!(classify("エラーを確認", None), Category::Warning);
    }

    #[test]
    fn ascii_keywords_are_case_insensitive() {
        assert_eq!(classify("Please CONFIRM the order", None), Category::Confirmation);
        assert_eq!(classify("I Recommend this", None), Category::Suggestion);
    }

    #[test]
    fn each_rule_reachable() {
        assert_eq!(classify("周辺の地形を分析", None), Category::Analysis);
        assert_eq!(classify("15時にリマインド", None), Category::Understanding);
        assert_eq!(classify("答えは42", None), Category::Answer);
        assert_eq!(classify("休憩を提案", None), Category::Suggestion);
    }

    #[test]
    fn question_context_yields_answer() {
        assert_eq!(classify("東京だ", Some("首都はどこ？")), Category::Answer);
        assert_eq!(classify("42", Some("What is it")), Category::Answer);
    }

    #[test]
    fn fallback_is_report() {
        assert_eq!(classify("今日は晴れ", None), Category::Report);
        assert_eq!(classify("今日は晴れ", Some("天気の話")), Category::Report);
        assert_eq!(classify("", None), Category::Report);
    }
}
