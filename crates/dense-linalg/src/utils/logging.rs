use log::Level;

use crate::config::FormatOptions;
use crate::math::{Matrix, Vector};

/// Render one line of values, eliding the middle when it is more than twice
/// as wide as `max_cols`.
fn format_line(values: &[f64], options: &FormatOptions) -> String {
    let cols_to_print = options.max_cols.unwrap_or(values.len()).min(values.len());
    let cells: Vec<String> = if cols_to_print * 2 < values.len() {
        let head = values[..cols_to_print].iter();
        let tail = values[values.len() - cols_to_print..].iter();
        head.map(|&v| options.format_value(v))
            .chain(std::iter::once("...".to_string()))
            .chain(tail.map(|&v| options.format_value(v)))
            .collect()
    } else {
        values.iter().map(|&v| options.format_value(v)).collect()
    };
    format!("[{}]", cells.join(", "))
}

/// Render a vector as `[a, b, c]`.
pub fn format_vector(vector: &Vector, options: &FormatOptions) -> String {
    format_line(vector.as_slice(), options)
}

/// Render a matrix one row per line:
///
/// ```text
/// [
///   [1.0000, 2.0000],
///   [3.0000, 4.0000]
/// ]
/// ```
pub fn format_matrix(matrix: &Matrix, options: &FormatOptions) -> String {
    let rows = matrix.nrows();
    if rows == 0 {
        return "[]".to_string();
    }

    let rows_to_print = options.max_rows.unwrap_or(rows).min(rows);
    let mut lines: Vec<String> = (0..rows_to_print)
        .map(|row| format!("  {}", format_line(matrix.row_slice(row), options)))
        .collect();
    if rows_to_print < rows {
        lines.push("  ...".to_string());
    }

    format!("[\n{}\n]", lines.join(",\n"))
}

/// Dump a labelled matrix through the `log` facade at `level`.
pub fn log_matrix(level: Level, label: &str, matrix: &Matrix, options: &FormatOptions) {
    if log::log_enabled!(level) {
        let (width, height) = matrix.shape();
        log::log!(
            level,
            "{} ({}x{}):\n{}",
            label,
            width,
            height,
            format_matrix(matrix, options)
        );
    }
}
