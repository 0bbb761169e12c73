//! Property tests for spawning geometry, classification and scoring

use gap_flyer::Settings;
use gap_flyer::sim::{
    Category, Contact, ContactBody, ContactOutcome, GameEvent, GamePhase, GameState, PairLayout,
    classify, draw_offset, interaction,
};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Player),
        Just(Category::Solid),
        Just(Category::Gap),
    ]
}

proptest! {
    #[test]
    fn offset_stays_in_range(seed in any::<u64>(), height in 0.0f32..5000.0) {
        let mut rng = Pcg32::seed_from_u64(seed);
        for _ in 0..16 {
            let offset = draw_offset(&mut rng, height);
            prop_assert!(offset >= -height / 4.0);
            prop_assert!(offset < height / 4.0 || height < 2.0);
        }
    }

    #[test]
    fn gap_sits_between_facing_edges(
        offset in -500.0f32..500.0,
        player_h in 10.0f32..120.0,
        obstacle_h in 100.0f32..1200.0,
    ) {
        let settings = Settings {
            player_size: Vec2::new(60.0, player_h),
            obstacle_size: Vec2::new(104.0, obstacle_h),
            ..Settings::default()
        };
        let layout = PairLayout::new(&settings, offset);
        let midpoint = (layout.upper_edge() + layout.lower_edge()) / 2.0;

        prop_assert!((layout.gap.y - midpoint).abs() < 1e-2);
        prop_assert!((layout.gap_size.y - settings.gap_height()).abs() < 1e-3);
        prop_assert_eq!(layout.upper.x, layout.gap.x);
        prop_assert_eq!(layout.lower.x, layout.gap.x);
    }

    #[test]
    fn classification_is_total_and_symmetric(a in category(), b in category()) {
        let outcome = classify(a, b);
        let has_gap = a == Category::Gap || b == Category::Gap;
        // Exactly one branch, decided by whether a Gap is involved
        prop_assert_eq!(outcome == ContactOutcome::ScoreGap, has_gap);
        prop_assert_eq!(outcome == ContactOutcome::GameOver, !has_gap);
        prop_assert_eq!(outcome, classify(b, a));
        prop_assert_eq!(interaction(a, b), interaction(b, a));
    }

    #[test]
    fn score_only_grows_until_game_over(
        pairs in proptest::collection::vec((category(), category()), 1..40),
    ) {
        let mut state = GameState::new(1, Settings::default());
        let mut expected = 0u64;
        let mut over = false;

        for (i, (a, b)) in pairs.into_iter().enumerate() {
            let contact = Contact {
                a: ContactBody { id: 1000 + i as u32, category: a },
                b: ContactBody { id: 2000 + i as u32, category: b },
            };
            let before = state.score();
            let event = state.handle_contact(&contact);

            if over {
                prop_assert_eq!(event, None);
                prop_assert_eq!(state.score(), before);
                continue;
            }
            match classify(a, b) {
                ContactOutcome::ScoreGap => {
                    expected += 1;
                    prop_assert_eq!(event, Some(GameEvent::Scored { score: expected }));
                }
                ContactOutcome::GameOver => {
                    over = true;
                    prop_assert_eq!(event, Some(GameEvent::GameOver { score: expected }));
                    prop_assert_eq!(state.phase(), GamePhase::GameOver);
                }
            }
            prop_assert_eq!(state.score(), expected);
            prop_assert!(state.score() >= before);
        }

        if over {
            state.handle_tap();
            prop_assert_eq!(state.score(), 0);
            prop_assert_eq!(state.phase(), GamePhase::Playing);
            prop_assert!(!state.player_is_dynamic());
            prop_assert_eq!(state.player().map(|p| p.pos), Some(state.settings.mid()));
        }
    }
}
