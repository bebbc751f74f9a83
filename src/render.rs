//! Plain-text rendering of table previews.

/// Render rows as left-aligned columns with a header line.
///
/// Rows shorter than the header are padded with empty cells.
pub fn render_rows<S: AsRef<str>>(columns: &[S], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.as_ref().chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, columns.iter().map(|c| c.as_ref()), &widths);
    for row in rows {
        push_line(
            &mut out,
            (0..widths.len()).map(|i| row.get(i).map(String::as_str).unwrap_or("")),
            &widths,
        );
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}
