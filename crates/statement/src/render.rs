//! Statement rendering. Amounts arrive in cents and are shown as US dollars.

use playbill_billing::Statement;

use crate::config::OutputFormat;

/// Format minor units as US dollars, e.g. `123456789` -> `$1,234,567.89`.
pub fn format_usd(minor_units: u64) -> String {
    let dollars = (minor_units / 100).to_string();
    let cents = minor_units % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${grouped}.{cents:02}")
}

pub fn render_text(statement: &Statement) -> String {
    let mut out = format!("Statement for {}\n", statement.customer);
    for line in &statement.lines {
        out.push_str(&format!(
            "  {}: {} ({} seats)\n",
            line.play_name,
            format_usd(line.charge),
            line.audience
        ));
    }
    out.push_str(&format!(
        "Amount owed is {}\n",
        format_usd(statement.totals.total_charge)
    ));
    out.push_str(&format!(
        "You earned {} credits\n",
        statement.totals.total_credits
    ));
    out
}

pub fn render_json(statement: &Statement) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(statement)
}

/// Render a batch: text statements separated by a blank line, or one JSON array.
pub fn render_all(
    statements: &[Statement],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(statements
            .iter()
            .map(render_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(statements)?;
            out.push('\n');
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playbill_billing::{InvoiceTotals, LineResult};

    fn test_statement() -> Statement {
        Statement {
            customer: "BigCo".to_string(),
            lines: vec![
                LineResult {
                    play_name: "Hamlet".to_string(),
                    audience: 55,
                    charge: 81_500,
                    credits: 25,
                },
                LineResult {
                    play_name: "As You Like It".to_string(),
                    audience: 35,
                    charge: 58_000,
                    credits: 12,
                },
            ],
            totals: InvoiceTotals {
                total_charge: 139_500,
                total_credits: 37,
            },
        }
    }

    #[test]
    fn formats_dollars_with_grouping() {
        assert_eq!(format_usd(0), "$0.00");
        assert_eq!(format_usd(5), "$0.05");
        assert_eq!(format_usd(81_500), "$815.00");
        assert_eq!(format_usd(100_000), "$1,000.00");
        assert_eq!(format_usd(123_456_789), "$1,234,567.89");
    }

    #[test]
    fn renders_text_report() {
        let expected = "Statement for BigCo\n\
                        \x20 Hamlet: $815.00 (55 seats)\n\
                        \x20 As You Like It: $580.00 (35 seats)\n\
                        Amount owed is $1,395.00\n\
                        You earned 37 credits\n";
        assert_eq!(render_text(&test_statement()), expected);
    }

    #[test]
    fn renders_json_with_minor_units() {
        let rendered = render_json(&test_statement()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["customer"], "BigCo");
        assert_eq!(json["lines"][0]["charge"], 81_500);
        assert_eq!(json["totals"]["total_credits"], 37);
    }

    #[test]
    fn text_batch_separates_statements_with_blank_line() {
        let statements = [test_statement(), test_statement()];
        let out = render_all(&statements, OutputFormat::Text).unwrap();
        assert!(out.contains("You earned 37 credits\n\nStatement for BigCo\n"));
    }
}
