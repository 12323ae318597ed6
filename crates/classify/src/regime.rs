use crate::error::{ClassifyError, ClassifyResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sentinel_core::RegimeBand;

/// Band boundaries derived from the rolling peak of the macro series.
///
/// `high` sits 20% below the peak and `low` 40% below it. Both bounds
/// are inclusive downward: a value exactly on `high` is still Stress,
/// a value exactly on `low` is already Crisis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeThresholds {
    pub peak: Decimal,
    pub high: Decimal,
    pub low: Decimal,
}

impl RegimeThresholds {
    /// Derive thresholds from the peak. A non-positive peak makes every
    /// boundary meaningless and is rejected rather than classified.
    pub fn from_peak(peak: Decimal) -> ClassifyResult<Self> {
        if peak <= Decimal::ZERO {
            return Err(ClassifyError::NonPositivePeak(peak.to_string()));
        }
        Ok(Self {
            peak,
            high: peak * dec!(0.8),
            low: peak * dec!(0.6),
        })
    }
}

/// Classify the current observation into a band.
///
/// Priority order matches the evaluation order of the thresholds:
/// at or below `low` is Crisis, then at or below `high` is Stress,
/// everything above `high` is Normal. Never returns `Unknown`.
pub fn classify_regime(thresholds: RegimeThresholds, current: Decimal) -> RegimeBand {
    if current <= thresholds.low {
        RegimeBand::Crisis
    } else if current <= thresholds.high {
        RegimeBand::Stress
    } else {
        RegimeBand::Normal
    }
}

/// Decide whether a band change is a reportable transition.
///
/// Re-entering the already-active band is suppressed (hysteresis), so a
/// value oscillating around a boundary fires once per side, not once
/// per run. Leaving `Unknown` does fire: the first classified band on a
/// fresh cell block is itself a state change worth recording.
pub fn regime_transition(
    active: RegimeBand,
    classified: RegimeBand,
) -> Option<(RegimeBand, RegimeBand)> {
    if active == classified {
        return None;
    }
    Some((active, classified))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn thresholds() -> RegimeThresholds {
        RegimeThresholds::from_peak(dec!(100)).unwrap()
    }

    #[test]
    fn test_threshold_derivation() {
        let t = thresholds();
        assert_eq!(t.high, dec!(80.0));
        assert_eq!(t.low, dec!(60.0));
    }

    #[test]
    fn test_non_positive_peak_rejected() {
        assert!(RegimeThresholds::from_peak(Decimal::ZERO).is_err());
        assert!(RegimeThresholds::from_peak(dec!(-10)).is_err());
    }

    #[test]
    fn test_band_classification() {
        assert_eq!(classify_regime(thresholds(), dec!(85)), RegimeBand::Normal);
        assert_eq!(classify_regime(thresholds(), dec!(75)), RegimeBand::Stress);
        assert_eq!(classify_regime(thresholds(), dec!(55)), RegimeBand::Crisis);
    }

    #[test]
    fn test_boundaries_are_inclusive_downward() {
        // Exactly 20% below peak is still Stress
        assert_eq!(classify_regime(thresholds(), dec!(80)), RegimeBand::Stress);
        // Exactly 40% below peak is already Crisis
        assert_eq!(classify_regime(thresholds(), dec!(60)), RegimeBand::Crisis);
    }

    #[test]
    fn test_reentry_is_suppressed() {
        assert_eq!(regime_transition(RegimeBand::Stress, RegimeBand::Stress), None);
        assert_eq!(regime_transition(RegimeBand::Normal, RegimeBand::Normal), None);
    }

    #[test]
    fn test_band_change_fires() {
        assert_eq!(
            regime_transition(RegimeBand::Normal, RegimeBand::Stress),
            Some((RegimeBand::Normal, RegimeBand::Stress))
        );
        assert_eq!(
            regime_transition(RegimeBand::Unknown, RegimeBand::Crisis),
            Some((RegimeBand::Unknown, RegimeBand::Crisis))
        );
    }
}
