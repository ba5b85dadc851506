//! Property tests for step navigation.

mod common;

use common::*;
use preeval_wizard::{WizardController, WizardStep};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Move {
    Next,
    Prev,
    Jump(usize),
}

fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        prop_oneof![
            Just(Move::Next),
            Just(Move::Prev),
            (0usize..5).prop_map(Move::Jump),
        ],
        0..64,
    )
}

proptest! {
    #[test]
    fn navigation_never_reaches_result(sequence in moves()) {
        let controller = WizardController::new(FakeService::new(Reply::Result(approved())));
        for step in sequence {
            match step {
                Move::Next => { controller.next_step(); }
                Move::Prev => { controller.prev_step(); }
                Move::Jump(index) => { let _ = controller.go_to_step(WizardStep::ALL[index]); }
            }
            let current = controller.current_step();
            prop_assert!(current.is_form_step());
            prop_assert!(controller.snapshot().result.is_none());
        }
    }

    #[test]
    fn next_then_prev_round_trips_inside_form(start in 0usize..3) {
        let controller = WizardController::new(FakeService::new(Reply::Result(approved())));
        let from = WizardStep::ALL[start];
        controller.go_to_step(from).unwrap();
        controller.next_step();
        controller.prev_step();
        prop_assert_eq!(controller.current_step(), from);
    }
}
