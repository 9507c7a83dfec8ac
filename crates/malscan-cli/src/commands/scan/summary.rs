//! Markdown job summary

use std::fmt::Write;

use malscan_core::ScanReport;

/// Render the results table, followed by the flagged files if any
#[must_use]
pub fn render_summary(report: &ScanReport) -> String {
    let mut out = String::new();
    let result = &report.result;

    let _ = writeln!(out, "## 🛡️ Malware Scan Results");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "| --- | --- |");
    let _ = writeln!(
        out,
        "| Verdict | **{}** |",
        result.verdict.as_str().to_uppercase()
    );
    let _ = writeln!(out, "| Files Scanned | {} |", result.scanned_files);
    let _ = writeln!(out, "| Mode | {} |", report.mode);

    let flagged: Vec<_> = report.flagged().collect();
    if !flagged.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "| File | Verdict | Detail |");
        let _ = writeln!(out, "| --- | --- | --- |");
        for file in flagged {
            let detail = file.error().map(ToString::to_string).unwrap_or_default();
            let _ = writeln!(
                out,
                "| `{}` | {} | {} |",
                escape_cell(&file.path.display().to_string()),
                file.verdict(),
                escape_cell(&detail)
            );
        }
    }

    out
}

/// Keep a value inside one table cell: pipes escaped, line breaks as `<br>`
fn escape_cell(value: &str) -> String {
    value
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('|', "\\|")
        .replace('\n', "<br>")
}
