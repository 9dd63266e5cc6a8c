use rstest::rstest;

use super::*;
use crate::nav::NavigationIntent;
use crate::nav::controller::{CommitKind, ControlEvent};

/// Deterministic mix of every intent, including out-of-range jumps.
fn intents(count: usize) -> Vec<NavigationIntent> {
    let mut seed: u32 = 0x9E37_79B9;
    (0..40)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            match seed % 5 {
                0 => NavigationIntent::Next,
                1 => NavigationIntent::Previous,
                2 => NavigationIntent::First,
                3 => NavigationIntent::Last,
                _ => NavigationIntent::JumpTo((seed as usize / 5) % (count + 3)),
            }
        })
        .collect()
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
fn position_stays_in_range_and_menu_tracks_it(#[case] count: usize) {
    let mut h = Harness::new(count);
    for intent in intents(count) {
        let before = h.position();
        let expected = intent.execute(before, count).unwrap_or(before);
        h.ctl.navigate(intent);
        h.settle();
        assert!((1..=count).contains(&h.position()), "{intent:?}");
        assert_eq!(h.position(), expected, "{intent:?} from {before}");
        assert_eq!(h.marked(), vec![h.position()]);
        assert_eq!(h.field(), h.position().to_string());
    }
}

#[test]
fn next_at_last_slide_is_noop() {
    let mut h = Harness::new(3);
    h.ctl.navigate(NavigationIntent::Last);
    h.settle();
    assert_eq!(h.ctl.dispatch(ControlEvent::NextClicked), None);
    assert!(!h.ctl.scroller().is_animating());
    assert_eq!(h.position(), 3);
}

#[test]
fn previous_at_first_slide_is_noop() {
    let mut h = Harness::new(3);
    assert_eq!(h.ctl.dispatch(ControlEvent::PreviousClicked), None);
    assert!(!h.ctl.scroller().is_animating());
    assert_eq!(h.position(), 1);
}

#[rstest]
#[case("0")]
#[case("12")]
#[case("x")]
fn invalid_jump_reverts_field(#[case] text: &str) {
    let mut h = Harness::new(7);
    h.ctl.navigate(NavigationIntent::JumpTo(3));
    h.settle();

    h.ctl.dispatch(ControlEvent::InputFocused);
    let requested = h.ctl.dispatch(ControlEvent::InputCommitted {
        text: text.to_string(),
        kind: CommitKind::Enter,
    });
    assert_eq!(requested, None);
    assert_eq!(h.position(), 3);
    assert_eq!(h.field(), "3");
}

#[test]
fn rendering_twice_changes_nothing() {
    let mut h = Harness::new(5);
    h.ctl.navigate(NavigationIntent::JumpTo(4));
    h.settle();
    let before = h.ctl.surface().clone();
    // A rejected intent re-renders from the same position.
    h.ctl.navigate(NavigationIntent::JumpTo(99));
    assert_eq!(h.ctl.surface(), &before);
}
