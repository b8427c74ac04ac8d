use crate::types::report::ResultRecord;

pub const NO_RESULTS: &str = "No results found";

const HEADERS: [&str; 2] = ["Repo Name", "Security Risk"];

/// Boxed two-column table of scored records; unscored records are left out.
pub fn format_results(results: &[ResultRecord]) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }

    let rows: Vec<[&str; 2]> = results
        .iter()
        .filter_map(|result| {
            result
                .final_score
                .map(|score| [result.repo_name.as_str(), score.as_str()])
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut output = String::new();
    output.push_str(&border);
    output.push_str(&row_line(&HEADERS, &widths));
    output.push_str(&border);
    for row in &rows {
        output.push_str(&row_line(row, &widths));
    }
    if !rows.is_empty() {
        output.push_str(&border);
    }
    output.truncate(output.trim_end().len());
    output
}

fn border_line(widths: &[usize; 2]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(cells: &[&str; 2], widths: &[usize; 2]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let extra = width - cell.chars().count();
        let left = extra / 2;
        line.push(' ');
        line.push_str(&" ".repeat(left));
        line.push_str(cell);
        line.push_str(&" ".repeat(extra - left));
        line.push_str(" |");
    }
    line.push('\n');
    line
}
