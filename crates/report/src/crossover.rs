use rust_decimal::Decimal;
use sentinel_core::{RunReport, TransitionEvent};
use sentinel_ports::Message;

/// Compose the primary crossover report.
///
/// Upward events are always rendered before downward events, and rows
/// keep the entity iteration order of the run, so the same inputs
/// always produce byte-identical output. The execution-time footer is
/// only included when `verbose` is set.
pub fn compose_crossover_report(report: &RunReport, verbose: bool) -> Message {
    let date = report.timestamp.format("%Y-%m-%d");
    let subject = format!("Crossover signals - {date}");

    let mut html = Vec::new();
    html.push(
        "<!DOCTYPE html><html><head>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"></head>\
         <body style=\"font-family: Arial, sans-serif; max-width: 800px; margin: 0 auto;\">"
            .to_string(),
    );
    html.push(format!("<h2>Crossover signals for {date}</h2>"));
    html.push(format!(
        "<p><b>Summary:</b> {} upward and {} downward crossovers.</p>",
        report.upward.len(),
        report.downward.len()
    ));

    if !report.upward.is_empty() {
        html.push(signal_table(
            &report.upward,
            "&#11014;&#65039; <font color=\"green\"><b>UPWARD CROSSOVER</b></font>",
            "(fast indicator crossed above slow):",
        ));
    }

    if !report.downward.is_empty() {
        html.push(signal_table(
            &report.downward,
            "&#11015;&#65039; <font color=\"red\"><b>DOWNWARD CROSSOVER</b></font>",
            "(fast indicator crossed below slow):",
        ));
    }

    html.push("<p><i>This is an automated message.</i></p>".to_string());

    if verbose {
        if let Some(diag) = &report.diagnostics {
            html.push(format!(
                "<p><i>Scanned {} rows ({} skipped) in {}ms</i></p>",
                diag.entities_scanned, diag.entities_skipped, diag.elapsed_ms
            ));
        }
    }

    html.push("</body></html>".to_string());

    Message::html(subject, plain_body(report), html.join(""))
}

fn signal_table(events: &[TransitionEvent], title: &str, subtitle: &str) -> String {
    let mut parts = vec![
        format!("<h3>{title} {subtitle}</h3>"),
        "<table border=\"0\" cellpadding=\"5\" \
         style=\"border-collapse: collapse; width: 100%; max-width: 800px;\">"
            .to_string(),
        "<tr style=\"background-color: #f2f2f2;\">\
         <th align=\"left\">Symbol</th>\
         <th align=\"left\">Name</th>\
         <th align=\"right\">Price</th>\
         <th align=\"center\">Currency</th>\
         <th align=\"right\">Fast</th>\
         <th align=\"right\">Slow</th>\
         <th align=\"right\">% Above Fast</th>\
         <th align=\"right\">% Above Slow</th></tr>"
            .to_string(),
    ];

    for (i, event) in events.iter().enumerate() {
        let shade = if i % 2 == 1 {
            " style=\"background-color: #f9f9f9;\""
        } else {
            ""
        };
        parts.push(format!(
            "<tr{shade}>\
             <td><b>{}</b></td>\
             <td>{}</td>\
             <td align=\"right\"><b>{}</b></td>\
             <td align=\"center\">{}</td>\
             <td align=\"right\">{}</td>\
             <td align=\"right\">{}</td>\
             <td align=\"right\" style=\"color: {}\">{}%</td>\
             <td align=\"right\" style=\"color: {}\">{}%</td></tr>",
            event.symbol,
            event.name,
            event.price.round_dp(2),
            event.currency,
            event.fast.round_dp(2),
            event.slow.round_dp(2),
            pct_color(event.pct_above_fast),
            event.pct_above_fast,
            pct_color(event.pct_above_slow),
            event.pct_above_slow,
        ));
    }

    parts.push("</table><br>".to_string());
    parts.join("")
}

fn pct_color(pct: Decimal) -> &'static str {
    if pct >= Decimal::ZERO { "green" } else { "red" }
}

/// Plain-text rendering carried alongside the HTML body.
fn plain_body(report: &RunReport) -> String {
    let mut lines = vec![format!(
        "Crossover signals: {} upward, {} downward",
        report.upward.len(),
        report.downward.len()
    )];
    for event in &report.upward {
        lines.push(format!(
            "UP   {} ({}) price {} fast {} slow {}",
            event.symbol,
            event.name,
            event.price.round_dp(2),
            event.fast.round_dp(2),
            event.slow.round_dp(2)
        ));
    }
    for event in &report.downward {
        lines.push(format!(
            "DOWN {} ({}) price {} fast {} slow {}",
            event.symbol,
            event.name,
            event.price.round_dp(2),
            event.fast.round_dp(2),
            event.slow.round_dp(2)
        ));
    }
    lines.join("\n")
}
