use sentinel_core::RunReport;
use sentinel_ports::Message;

/// Reduced-fidelity report used when the primary send fails.
///
/// Counts only, no tables: the goal is to get *some* notification out
/// through a transport that just rejected the rich one.
pub fn compose_fallback_report(report: &RunReport, send_error: &str) -> Message {
    let mut body = format!(
        "Upward crossovers: {}\nDownward crossovers: {}\n",
        report.upward.len(),
        report.downward.len()
    );
    if let Some(regime) = &report.regime {
        body.push_str(&format!(
            "Regime change: {} -> {}\n",
            regime.from.label(),
            regime.to.label()
        ));
    }
    body.push_str(&format!(
        "\nError sending formatted report: {send_error}"
    ));

    Message::plain("Signals detected (simplified report)", body)
}

/// The "script error" report dispatched once when a run fails fatally.
pub fn compose_error_report(context: &str, error: &str) -> Message {
    Message::plain(
        format!("Error in {context}"),
        format!("An error occurred: {error}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_fallback_carries_counts_and_cause() {
        let mut report = RunReport::new(Utc::now());
        report.upward = vec![];
        let message = compose_fallback_report(&report, "mailbox full");
        assert!(message.body.contains("Upward crossovers: 0"));
        assert!(message.body.contains("mailbox full"));
        assert!(message.html_body.is_none());
    }

    #[test]
    fn test_error_report_names_context() {
        let message = compose_error_report("crossover check", "sheet missing");
        assert_eq!(message.subject, "Error in crossover check");
        assert!(message.body.contains("sheet missing"));
    }
}
