//! Data Preview Module
//! Renders the head of a DataFrame as a fixed-width text table.

use polars::prelude::*;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Display text for a single cell. String cells are shown verbatim.
pub fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Render the first `rows` rows of `df`.
///
/// Layout: a header line with a blank index column, then one line per row
/// prefixed by its 0-based index. Every column is right-aligned to its
/// widest entry.
pub fn format_preview(df: &DataFrame, rows: usize) -> String {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if df.height() == 0 || rows == 0 {
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            names.join(", ")
        );
    }

    let shown = rows.min(df.height());

    // Column-major cell text, header first
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(names.len() + 1);
    let mut index_col = vec![String::new()];
    index_col.extend((0..shown).map(|i| i.to_string()));
    cells.push(index_col);

    for (name, column) in names.iter().zip(df.get_columns()) {
        let mut col_cells = Vec::with_capacity(shown + 1);
        col_cells.push(name.clone());
        for i in 0..shown {
            let text = column
                .get(i)
                .map(|v| cell_text(&v))
                .unwrap_or_else(|_| "null".to_string());
            col_cells.push(text);
        }
        cells.push(col_cells);
    }

    let widths: Vec<usize> = cells
        .iter()
        .map(|col| col.iter().map(|s| s.width()).max().unwrap_or(0))
        .collect();

    let mut lines = Vec::with_capacity(shown + 1);
    for line_idx in 0..=shown {
        let mut line = String::new();
        for (col_idx, col) in cells.iter().enumerate() {
            if col_idx > 0 {
                line.push_str(COLUMN_GAP);
            }
            let text = &col[line_idx];
            let pad = widths[col_idx].saturating_sub(text.width());
            line.extend(std::iter::repeat(' ').take(pad));
            line.push_str(text);
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_aligned_layout() {
        let df = df!(
            "A" => [1i64, 200],
            "Name" => ["x", "long"],
        )
        .unwrap();

        let text = format_preview(&df, 5);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "     A  Name");
        assert_eq!(lines[1], "0    1     x");
        assert_eq!(lines[2], "1  200  long");
    }

    #[test]
    fn test_row_limit() {
        let values: Vec<i64> = (0..1000).collect();
        let df = df!("v" => values).unwrap();

        assert_eq!(format_preview(&df, 5).lines().count(), 6);
        assert_eq!(format_preview(&df, 20).lines().count(), 21);
        assert!(format_preview(&df, 20).lines().last().unwrap().starts_with("19"));
    }

    #[test]
    fn test_nulls_and_wide_text() {
        let df = df!(
            "city" => [Some("東京"), None],
            "kwh" => [Some(1.5f64), Some(2.0)],
        )
        .unwrap();

        let text = format_preview(&df, 10);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].contains("東京"));
        assert!(lines[2].contains("null"));
        // "東京" is four display columns wide, same as "null"
        assert_eq!(lines[1].width(), lines[2].width());
    }

    #[test]
    fn test_empty_dataframe() {
        let df = df!("A" => Vec::<i64>::new(), "B" => Vec::<f64>::new()).unwrap();
        assert_eq!(
            format_preview(&df, 5),
            "Empty DataFrame\nColumns: [A, B]\nIndex: []"
        );
    }

    #[test]
    fn test_cell_text_keeps_quotes_in_data() {
        let df = df!("A" => ["\"hi\"", "plain"], "n" => [1i64, 2]).unwrap();
        let a = df.column("A").unwrap();
        let n = df.column("n").unwrap();

        assert_eq!(cell_text(&a.get(0).unwrap()), "\"hi\"");
        assert_eq!(cell_text(&a.get(1).unwrap()), "plain");
        assert_eq!(cell_text(&n.get(1).unwrap()), "2");
        assert_eq!(cell_text(&AnyValue::Null), "null");
    }
}
