//! Display utilities for the command line

use console::style;
use weissbench_types::{format_size, BenchmarkResult, CompressionAlgorithm};

const HEADERS: [&str; 6] = [
    "Algorithm",
    "Original",
    "Compressed",
    "Ratio",
    "Time (s)",
    "Weissman",
];

/// Render one results row; cells are plain text so widths line up
fn row_cells(result: &BenchmarkResult) -> [String; 6] {
    [
        result.algorithm().to_string(),
        format_size(result.original_size()),
        format_size(result.compressed_size()),
        format!("{:.2}", result.compression_ratio()),
        format!("{:.4}", result.compression_time()),
        format!("{:.4}", result.weissman_score()),
    ]
}

fn column_widths(rows: &[[String; 6]]) -> [usize; 6] {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

/// Format results as an aligned table, in the order given
pub fn format_results_table(results: &[BenchmarkResult]) -> Vec<String> {
    let rows: Vec<[String; 6]> = results.iter().map(row_cells).collect();
    let widths = column_widths(&rows);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (name, width))| pad(name, width, i == 0))
        .collect();
    lines.push(style(header.join("  ")).bold().to_string());

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    lines.push(style(rule.join("  ")).dim().to_string());

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                let padded = pad(cell, width, i == 0);
                if i == 0 {
                    style(padded).cyan().to_string()
                } else {
                    padded
                }
            })
            .collect();
        lines.push(cells.join("  "));
    }

    lines
}

fn pad(text: &str, width: usize, left: bool) -> String {
    if left {
        format!("{:<width$}", text, width = width)
    } else {
        format!("{:>width$}", text, width = width)
    }
}

/// Print the results table
pub fn display_results(results: &[BenchmarkResult]) {
    if results.is_empty() {
        display_warning("No algorithms were benchmarked");
        return;
    }

    println!();
    for line in format_results_table(results) {
        println!("{}", line);
    }
    println!();
}

/// Print the supported algorithms and mark the reference
pub fn display_algorithms() {
    println!("{} Supported algorithms:", style("⚙").blue().bold());
    for algorithm in CompressionAlgorithm::ALL {
        let marker = if algorithm.is_reference() {
            style(" (reference)").yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {}{}",
            style(format!("{:<6}", algorithm.as_str())).cyan(),
            algorithm.description(),
            marker
        );
    }
}

/// Display a warning message with proper formatting
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Display an error message with proper formatting
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), style(message).red());
}

/// Display a success message with proper formatting
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}

/// Display an info message with proper formatting
pub fn display_info(message: &str) {
    println!("{} {}", style("ℹ").blue().bold(), style(message).blue());
}
