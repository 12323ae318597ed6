use sentinel_core::RunReport;
use sentinel_ports::{Message, NotificationSink};
use sentinel_report::{compose_error_report, compose_fallback_report};

/// Dispatch the run's primary message, falling back to a reduced
/// plain-text report if the sink rejects it.
///
/// Returns whether anything reached the sink. Sink failures never
/// escalate past this function: the state write already committed, and
/// a run must not fail after persisting just because mail bounced. A
/// fallback failure is only logged.
pub async fn dispatch_report(
    sink: &dyn NotificationSink,
    primary: Message,
    report: &RunReport,
) -> bool {
    match sink.send(primary).await {
        Ok(()) => true,
        Err(err) => {
            log::warn!("Primary report rejected, sending fallback: {err}");
            let fallback = compose_fallback_report(report, &err.to_string());
            match sink.send(fallback).await {
                Ok(()) => true,
                Err(fallback_err) => {
                    log::error!("Fallback report also rejected: {fallback_err}");
                    false
                }
            }
        }
    }
}

/// Report a fatal run failure once through the sink.
///
/// This is the last line of the error path; a failure here is logged
/// and swallowed so the caller surfaces the original error, not a
/// second one about the messenger.
pub async fn report_failure(sink: &dyn NotificationSink, context: &str, error: &str) {
    let message = compose_error_report(context, error);
    if let Err(err) = sink.send(message).await {
        log::error!("Could not deliver error report for {context}: {err}");
    }
}
