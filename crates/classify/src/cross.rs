use rust_decimal::Decimal;
use sentinel_core::{CrossSignal, Direction};

/// Classify the crossover state of a fast indicator against a slow one.
///
/// Total over all inputs: missing, zero, or equal values classify as
/// `Undefined` rather than erroring. Zero is treated as missing because
/// the upstream table leaves uncomputed indicator cells at zero.
pub fn classify_cross(fast: Option<Decimal>, slow: Option<Decimal>) -> CrossSignal {
    let (fast, slow) = match (fast, slow) {
        (Some(f), Some(s)) if !f.is_zero() && !s.is_zero() => (f, s),
        _ => return CrossSignal::Undefined,
    };

    if fast > slow {
        CrossSignal::Rising
    } else if fast < slow {
        CrossSignal::Falling
    } else {
        CrossSignal::Undefined
    }
}

/// Decide whether a state change is a reportable transition.
///
/// Fires iff both states are defined and differ. `Undefined` never
/// participates: a row with missing data, or a row seen for the first
/// time, cannot produce an alert in either direction. Entities are
/// independent, so calling this in any order over a batch yields the
/// same set of transitions.
pub fn detect_transition(previous: CrossSignal, new: CrossSignal) -> Option<Direction> {
    if !previous.is_defined() || !new.is_defined() || previous == new {
        return None;
    }

    match new {
        CrossSignal::Rising => Some(Direction::Upward),
        CrossSignal::Falling => Some(Direction::Downward),
        CrossSignal::Undefined => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fast_above_slow_is_rising() {
        assert_eq!(
            classify_cross(Some(dec!(52)), Some(dec!(50))),
            CrossSignal::Rising
        );
    }

    #[test]
    fn test_fast_below_slow_is_falling() {
        assert_eq!(
            classify_cross(Some(dec!(48)), Some(dec!(50))),
            CrossSignal::Falling
        );
    }

    #[test]
    fn test_equal_inputs_are_undefined() {
        assert_eq!(
            classify_cross(Some(dec!(50)), Some(dec!(50))),
            CrossSignal::Undefined
        );
    }

    #[test]
    fn test_missing_or_zero_inputs_are_undefined() {
        assert_eq!(classify_cross(None, Some(dec!(50))), CrossSignal::Undefined);
        assert_eq!(classify_cross(Some(dec!(50)), None), CrossSignal::Undefined);
        assert_eq!(
            classify_cross(Some(Decimal::ZERO), Some(dec!(50))),
            CrossSignal::Undefined
        );
        assert_eq!(
            classify_cross(Some(dec!(50)), Some(Decimal::ZERO)),
            CrossSignal::Undefined
        );
    }

    #[test]
    fn test_unchanged_state_never_fires() {
        assert_eq!(
            detect_transition(CrossSignal::Rising, CrossSignal::Rising),
            None
        );
        assert_eq!(
            detect_transition(CrossSignal::Falling, CrossSignal::Falling),
            None
        );
        assert_eq!(
            detect_transition(CrossSignal::Undefined, CrossSignal::Undefined),
            None
        );
    }

    #[test]
    fn test_opposite_states_fire_with_direction() {
        assert_eq!(
            detect_transition(CrossSignal::Falling, CrossSignal::Rising),
            Some(Direction::Upward)
        );
        assert_eq!(
            detect_transition(CrossSignal::Rising, CrossSignal::Falling),
            Some(Direction::Downward)
        );
    }

    #[test]
    fn test_undefined_never_participates() {
        assert_eq!(
            detect_transition(CrossSignal::Undefined, CrossSignal::Rising),
            None
        );
        assert_eq!(
            detect_transition(CrossSignal::Undefined, CrossSignal::Falling),
            None
        );
        assert_eq!(
            detect_transition(CrossSignal::Rising, CrossSignal::Undefined),
            None
        );
        assert_eq!(
            detect_transition(CrossSignal::Falling, CrossSignal::Undefined),
            None
        );
    }
}
