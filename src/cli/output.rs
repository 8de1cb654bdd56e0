use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use laf_search::{CategoryStats, ReportSummary};

/// Print reports as an aligned plain-text table.
pub(crate) fn print_reports(reports: &[ReportSummary]) {
    if reports.is_empty() {
        println!("No reports");
        return;
    }
    print!("{}", format_reports_table(reports));
}

/// Print reports as pretty JSON.
pub(crate) fn print_reports_json(reports: &[ReportSummary]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

/// Print category counts as an aligned plain-text table.
pub(crate) fn print_stats(stats: &CategoryStats) {
    if stats.is_empty() {
        println!("No reports");
        return;
    }
    print!("{}", format_stats_table(stats));
}

/// Print category counts as pretty JSON.
pub(crate) fn print_stats_json(stats: &CategoryStats) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

fn format_reports_table(reports: &[ReportSummary]) -> String {
    let mut rows = vec![[
        "NAME".to_string(),
        "KIND".to_string(),
        "CATEGORY".to_string(),
        "LOCATION".to_string(),
    ]];
    for report in reports {
        rows.push([
            report.item_name.clone(),
            report.item_type.label().to_string(),
            report.item_category.clone().unwrap_or_default(),
            report.item_location.clone().unwrap_or_default(),
        ]);
    }
    format_table(&rows)
}

fn format_stats_table(stats: &CategoryStats) -> String {
    let mut rows = vec![["CATEGORY".to_string(), "REPORTS".to_string()]];
    for (category, count) in stats {
        rows.push([category.clone(), count.to_string()]);
    }
    format_table(&rows)
}

/// Align columns by display width, two spaces between them.
fn format_table<const N: usize>(rows: &[[String; N]]) -> String {
    let mut widths = [0usize; N];
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.as_str().width());
        }
    }

    let mut out = String::new();
    for row in rows {
        let mut line = String::new();
        for (index, cell) in row.iter().enumerate() {
            line.push_str(cell);
            if index + 1 < N {
                let padding = widths[index] - cell.as_str().width() + 2;
                line.push_str(&" ".repeat(padding));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use laf_search::ReportKind;

    use super::*;

    fn report(name: &str, category: Option<&str>) -> ReportSummary {
        let mut report = ReportSummary::new("1", name, ReportKind::Found);
        report.item_category = category.map(str::to_string);
        report
    }

    #[test]
    fn report_table_aligns_columns() {
        let reports = vec![
            report("Black wallet", Some("Accessories")),
            report("Keys", None),
        ];

        let table = format_reports_table(&reports);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME"));
        let kind_column = lines[0].find("KIND").expect("header column");
        assert_eq!(&lines[1][kind_column..kind_column + 5], "found");
    }

    #[test]
    fn stats_table_lists_every_category() {
        let mut stats = CategoryStats::new();
        stats.insert("Electronics".to_string(), 4);
        stats.insert("Pets".to_string(), 1);

        let table = format_stats_table(&stats);
        assert!(table.contains("Electronics"));
        assert!(table.contains("Pets"));
    }

    #[test]
    fn json_output_round_trips_reports() {
        let reports = vec![report("Black wallet", Some("Accessories"))];
        let json = serde_json::to_string_pretty(&reports).expect("serializes");
        let parsed: Vec<ReportSummary> = serde_json::from_str(&json).expect("parses");
        assert_eq!(parsed, reports);
    }
}
