use super::NavError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    Next,
    Previous,
    JumpTo(usize),
    First,
    Last,
}

impl NavigationIntent {
    /// Resolve the intent against the confirmed position and the deck size.
    ///
    /// Every target outside `1..=slide_count` is an [`NavError::InvalidTarget`],
    /// including First/Last on an empty deck.
    pub fn execute(self, current: usize, slide_count: usize) -> Result<usize, NavError> {
        let target = match self {
            Self::Next => current.checked_add(1),
            Self::Previous => current.checked_sub(1),
            Self::JumpTo(n) => Some(n),
            Self::First => Some(1),
            Self::Last => Some(slide_count),
        };
        match target {
            Some(t) if (1..=slide_count).contains(&t) => Ok(t),
            Some(t) => Err(NavError::invalid(t, slide_count)),
            None => Err(NavError::invalid(format!("{self:?}"), slide_count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::next(NavigationIntent::Next, 3, Ok(4))]
    #[case::next_at_end(NavigationIntent::Next, 7, Err(()))]
    #[case::previous(NavigationIntent::Previous, 3, Ok(2))]
    #[case::previous_at_start(NavigationIntent::Previous, 1, Err(()))]
    #[case::jump(NavigationIntent::JumpTo(6), 2, Ok(6))]
    #[case::jump_to_current(NavigationIntent::JumpTo(2), 2, Ok(2))]
    #[case::jump_zero(NavigationIntent::JumpTo(0), 2, Err(()))]
    #[case::jump_past_end(NavigationIntent::JumpTo(9), 2, Err(()))]
    #[case::first(NavigationIntent::First, 5, Ok(1))]
    #[case::last(NavigationIntent::Last, 1, Ok(7))]
    fn resolves_against_seven_slides(
        #[case] intent: NavigationIntent,
        #[case] current: usize,
        #[case] expected: Result<usize, ()>,
    ) {
        assert_eq!(intent.execute(current, 7).map_err(|_| ()), expected);
    }

    #[rstest]
    #[case(NavigationIntent::Next)]
    #[case(NavigationIntent::Previous)]
    #[case(NavigationIntent::JumpTo(1))]
    #[case(NavigationIntent::First)]
    #[case(NavigationIntent::Last)]
    fn empty_deck_rejects_everything(#[case] intent: NavigationIntent) {
        assert!(intent.execute(1, 0).is_err());
    }

    #[test]
    fn invalid_target_names_request() {
        let err = NavigationIntent::JumpTo(12).execute(1, 7).unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidTarget {
                requested: "12".to_string(),
                count: 7
            }
        );
        assert_eq!(
            err.to_string(),
            "invalid slide target '12' (deck has 7 slides)"
        );
    }
}
