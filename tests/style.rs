use pod042::core::persona::PersonaVariant;
use pod042::core::style::{
    Category, FormatRequest, StylePipeline, StyleTransformer, assemble, assemble_tagged, classify,
    extract_annotation, transform,
};
use pod042::error::StyleError;

const CORPUS: &[&str] = &[
    "今日は楽しい一日だった。",
    "ありがとうございます！とても嬉しいです。",
    "私はあなたのことが好きです",
    "データを調べた。。。  結果は？？",
    "",
    "   ",
    "Hello   world!",
    "確認してください？",
    "やったね！",
    "心配しないでください",
    "買い物リストに牛乳を追加して",
    "15時30分にリマインドを設定しました",
    "ログ 2.5GB を解析しました",
    "危険です。撤退してください",
    "現在10件registered.",
    "で♪す",
    "くだ♪さい",
    "地図でですす♪",
    "ありがとうござい♪ます",
];

mod worked_examples {
    use super::*;

    #[test]
    fn add_request_is_acknowledgment() {
        assert_eq!(
            classify("買い物リストに牛乳を追加して", None),
            Category::Acknowledgment
        );
    }

    #[test]
    fn emotion_and_politeness_normalized() {
        let out = transform("今日は楽しい一日だった。", Category::Report);
        assert_eq!(out, "今日は良好な一日だった。");
        assert!(!out.contains("楽しい"));
        assert!(!out.contains("です"));
        assert!(!out.contains("ます"));
        assert_eq!(out.matches('。').count(), 1);
        assert!(out.ends_with('。'));
    }

    #[test]
    fn count_annotation_is_category_gated() {
        assert_eq!(
            extract_annotation("現在10件registered.", Category::Acknowledgment).as_deref(),
            Some("【現在10件】")
        );
        assert_eq!(
            extract_annotation("現在10件registered.", Category::Confirmation),
            None
        );
    }

    #[test]
    fn assembled_string_is_exact() {
        assert_eq!(
            assemble(Category::Acknowledgment, "リストに追加した", Some("【現在10件】")),
            "承認：リストに追加した 【現在10件】"
        );
    }
}

mod properties {
    use super::*;

    #[test]
    fn transform_is_idempotent() {
        let pod153 = StyleTransformer::new(&PersonaVariant::Pod153.profile());
        for text in CORPUS {
            for category in Category::all() {
                let once = transform(text, category);
                assert_eq!(transform(&once, category), once, "input: {text:?}");

                let once = pod153.transform(text, category);
                assert_eq!(pod153.transform(&once, category), once, "input: {text:?}");
            }
        }
    }

    #[test]
    fn transform_always_ends_with_single_mark() {
        for text in CORPUS {
            let out = transform(text, Category::Report);
            assert!(out.ends_with('。'), "{out:?}");
            assert!(!out.contains("。。"), "{out:?}");
            assert_eq!(out, out.trim());
        }
    }

    #[test]
    fn classifier_is_total_and_deterministic() {
        let contexts = [None, Some(""), Some("何？"), Some("了解")];
        for text in CORPUS {
            for context in contexts {
                let first = classify(text, context);
                assert!(Category::all().any(|c| c == first));
                assert_eq!(classify(text, context), first);
            }
        }
    }

    #[test]
    fn assembled_output_starts_with_label() {
        let pipeline = StylePipeline::default();
        for text in CORPUS {
            let out = pipeline.render(text, None, 0.0);
            let label = out.split('：').next().unwrap();
            assert!(
                Category::all().any(|c| c.label() == label),
                "unexpected header in {out:?}"
            );
        }
    }
}

mod pipeline {
    use super::*;

    #[test]
    fn understanding_with_time() {
        let out = StylePipeline::default().render("15時30分にリマインドを設定しました", None, 0.0);
        assert_eq!(out, "了解：15時30分にリマインドを設定した。 【時刻15:30】");
    }

    #[test]
    fn analysis_with_volume() {
        let out = StylePipeline::default().render("ログ 2.5GB を解析しました", None, 0.0);
        assert_eq!(out, "分析：ログ 2.5GB を解析した。 【データ量2.5GB】");
    }

    #[test]
    fn report_with_count() {
        let out = StylePipeline::default().render("未処理のタスクは3件", None, 0.0);
        assert_eq!(out, "報告：未処理のタスクは3件。 【現在3件】");
    }

    #[test]
    fn pod153_variant_pipeline() {
        let pipeline = StylePipeline::new(PersonaVariant::Pod153.profile());
        assert_eq!(
            pipeline.render("あなたの後ろは私が守る", None, 0.0),
            "報告：9Sの後ろは当機が守る。"
        );
    }

    #[test]
    fn tagged_assembly_rejects_unknown() {
        assert_eq!(
            assemble_tagged("smalltalk", "x", None),
            Err(StyleError::InvalidCategory("smalltalk".into()))
        );
    }

    #[test]
    fn request_validation_fails_fast() {
        let err = FormatRequest::from_value(&serde_json::json!({"text": null})).unwrap_err();
        assert_eq!(err, StyleError::malformed("text", "is missing"));
    }
}
