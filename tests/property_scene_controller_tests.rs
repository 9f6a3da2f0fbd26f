use proptest::prelude::*;
use scene_chart::core::Viewport;
use scene_chart::{Scene, SceneController};

fn deck(len: usize) -> Vec<Scene> {
    (0..len)
        .map(|i| Scene::fixed(format!("scene-{i}"), 1900 + i as i32, 1910 + i as i32))
        .collect()
}

proptest! {
    #[test]
    fn advancing_deck_length_times_is_identity(
        len in 1usize..12,
        start_steps in 0usize..24
    ) {
        let mut controller =
            SceneController::with_scenes(deck(len), Viewport::default()).expect("controller");
        for _ in 0..start_steps {
            controller.advance();
        }
        let origin = controller.current_index();

        for _ in 0..len {
            controller.advance();
        }
        prop_assert_eq!(controller.current_index(), origin);
    }

    #[test]
    fn advance_and_retreat_cancel_out(
        len in 1usize..12,
        steps in 0usize..24
    ) {
        let mut controller =
            SceneController::with_scenes(deck(len), Viewport::default()).expect("controller");
        for _ in 0..steps {
            controller.advance();
        }
        let origin = controller.current_index();

        controller.advance();
        controller.retreat();
        prop_assert_eq!(controller.current_index(), origin);

        controller.retreat();
        controller.advance();
        prop_assert_eq!(controller.current_index(), origin);
    }

    #[test]
    fn index_stays_in_bounds_under_any_walk(
        len in 1usize..12,
        walk in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut controller =
            SceneController::with_scenes(deck(len), Viewport::default()).expect("controller");

        for forward in walk {
            if forward {
                controller.advance();
            } else {
                controller.retreat();
            }
            prop_assert!(controller.current_index() < len);
        }
    }
}
