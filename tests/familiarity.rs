use pod042::config::FamiliarityConfig;
use pod042::core::familiarity::{
    ADVANCED_PHASE_THRESHOLD, ExceptionOverlay, FamiliarityState, LEVEL_CEILING, Phase,
    apply_overlay,
};
use pod042::core::persona::PersonaVariant;

const MESSAGES: &[&str] = &[
    "ありがとう",
    "ポッド、大好き",
    "進捗は？",
    "Thanks pod, love you",
    "",
    "撫でてあげる",
    "ポッド042、ぎゅっとしていい？ありがとう",
];

mod state_machine {
    use super::*;

    #[test]
    fn twenty_gratitude_turns() {
        let mut state = FamiliarityState::new();
        for _ in 0..20 {
            state.update("いつもありがとう", "了解：問題ない。");
        }
        let expected = (20.0_f64 * 0.1 + 0.05).min(LEVEL_CEILING);
        assert!((state.level() - expected).abs() < 1e-9);
        assert_eq!(state.phase(), Phase::Trusting);
        assert_eq!(state.interaction_count(), 20);
    }

    #[test]
    fn level_and_phase_are_monotonic() {
        let mut state = FamiliarityState::new();
        let mut last_level = state.level();
        let mut last_phase = state.phase();
        let mut last_count = state.interaction_count();
        for i in 0..500 {
            state.update(MESSAGES[i % MESSAGES.len()], "");
            assert!(state.level() >= last_level);
            assert!(state.phase() >= last_phase);
            assert!(state.interaction_count() > last_count);
            last_level = state.level();
            last_phase = state.phase();
            last_count = state.interaction_count();
        }
    }

    #[test]
    fn never_exceeds_ceiling() {
        let mut state = FamiliarityState::new();
        for _ in 0..1_000 {
            state.update("ポッド042、ぎゅっとしていい？ありがとう", "");
            assert!(state.level() <= LEVEL_CEILING);
        }
        assert!((state.level() - LEVEL_CEILING).abs() < f64::EPSILON);
    }

    #[test]
    fn advanced_phase_threshold() {
        let mut state = FamiliarityState::new();
        while state.level() < ADVANCED_PHASE_THRESHOLD {
            assert!(!state.is_advanced_phase());
            state.update("ポッド、大好き", "");
        }
        assert!(state.is_advanced_phase());
        assert!(state.phase() >= Phase::Familiar);
    }

    #[test]
    fn custom_rules_apply() {
        let rules = FamiliarityConfig {
            gratitude_bonus: 1.0,
            periodic_interval: 2,
            periodic_bonus: 0.5,
            ..FamiliarityConfig::default()
        };
        let mut state = FamiliarityState::new();
        state.update_with(&rules, "感謝", "");
        state.update_with(&rules, "感謝", "");
        assert!((state.level() - 2.5).abs() < 1e-9);
        assert_eq!(state.phase(), Phase::Trusting);
    }
}

mod overlay {
    use super::*;

    const RESPONSES: &[&str] = &[
        "警告：前方に敵影。",
        "提案：休息を推奨する。",
        "報告：異常なし。",
        "",
        "推奨",
    ];

    #[test]
    fn identity_below_threshold_for_all_inputs() {
        let pod153 = ExceptionOverlay::new(PersonaVariant::Pod153.profile());
        for response in RESPONSES {
            for level in [0.0, 0.5, 1.0, 2.0, 2.5, 2.999_999] {
                assert_eq!(apply_overlay(response, level), *response);
                assert_eq!(pod153.apply(response, level), *response);
            }
        }
    }

    #[test]
    fn fragments_chosen_by_trigger() {
        let advisory = apply_overlay("提案：休息を推奨する。", 3.0);
        let concern = apply_overlay("警告：前方に敵影。", 3.0);
        assert!(advisory.starts_with("提案：休息を推奨する。"));
        assert!(concern.starts_with("警告：前方に敵影。"));
        assert_ne!(
            advisory.trim_start_matches("提案：休息を推奨する。"),
            concern.trim_start_matches("警告：前方に敵影。")
        );
    }

    #[test]
    fn untriggered_response_unchanged_when_advanced() {
        assert_eq!(apply_overlay("報告：異常なし。", 4.9), "報告：異常なし。");
    }
}
