use sentinel_core::RegimeTransition;
use sentinel_ports::Message;

/// Compose the regime-change mail.
///
/// Plain text, mirroring the fields persisted to the trigger cells:
/// old band, new band, triggering observation, and the rolling peak.
pub fn compose_regime_report(transition: &RegimeTransition) -> Message {
    let subject = format!(
        "Regime change: {} -> {}",
        transition.from.label(),
        transition.to.label()
    );

    let body = format!(
        "The watched series changed regime.\n\
         \n\
         Old regime: {}\n\
         New regime: {}\n\
         Current value: {}\n\
         Rolling peak: {}\n\
         Detected at: {}\n",
        transition.from.label(),
        transition.to.label(),
        transition.current_value.round_dp(2),
        transition.peak_value.round_dp(2),
        transition.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
    );

    Message::plain(subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use sentinel_core::RegimeBand;

    #[test]
    fn test_regime_report_names_both_bands() {
        let transition = RegimeTransition {
            from: RegimeBand::Normal,
            to: RegimeBand::Stress,
            current_value: dec!(75.5),
            peak_value: dec!(100),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
        };

        let message = compose_regime_report(&transition);
        assert_eq!(message.subject, "Regime change: Normal -> Stress");
        assert!(message.body.contains("Old regime: Normal"));
        assert!(message.body.contains("New regime: Stress"));
        assert!(message.body.contains("Current value: 75.50"));
        assert!(message.html_body.is_none());
    }
}
