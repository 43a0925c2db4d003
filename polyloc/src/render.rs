//! Table rendering for CLI output.

use console::Style;
use polyloclib::{Report, ReportRow};

const HEADERS: [&str; 6] = ["Language", "Files", "Code", "Comment", "Blank", "Total"];

/// Width of each column: wide enough for its header and every cell.
fn column_widths(report: &Report) -> [usize; 6] {
    let mut widths = HEADERS.map(str::len);

    for row in report.rows.iter().chain(std::iter::once(&report.total)) {
        let cells = row_cells(row);
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    widths
}

fn row_cells(row: &ReportRow) -> [String; 6] {
    [
        row.language.clone(),
        row.files.to_string(),
        row.code.to_string(),
        row.comment.to_string(),
        row.blank.to_string(),
        row.total.to_string(),
    ]
}

/// First column left-aligned, counts right-aligned.
fn format_line(cells: &[String; 6], widths: &[usize; 6]) -> String {
    let mut line = format!("{:<width$}", cells[0], width = widths[0]);
    for (cell, width) in cells.iter().zip(widths.iter().copied()).skip(1) {
        line.push_str(&format!("  {cell:>width$}"));
    }
    line.push('\n');
    line
}

/// Render the report as an aligned text table: header, per-language rows
/// sorted by descending code count, separator, totals row.
pub fn render_table(report: &Report) -> String {
    let widths = column_widths(report);
    let bold = Style::new().bold();

    let header_cells = HEADERS.map(str::to_string);
    let header = format_line(&header_cells, &widths);
    let separator = "-".repeat(header.trim_end().len());

    let mut out = String::new();
    out.push_str(&bold.apply_to(header.trim_end()).to_string());
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for row in &report.rows {
        out.push_str(&format_line(&row_cells(row), &widths));
    }

    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_line(&row_cells(&report.total), &widths));

    out
}
