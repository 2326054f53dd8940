use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    print!("{}", render_table(headers, &rows));
}

/// Left-aligned columns separated by two spaces, with a dashed rule under
/// the header. Cells past the last header are dropped.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .fold(h.len(), usize::max)
        })
        .collect();

    let mut out = render_line(headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&render_line(rule.iter().map(String::as_str), &widths));
    for row in rows {
        out.push_str(&render_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(c, &w)| format!("{c:w$}"))
        .collect();
    format!("{}\n", padded.join("  ").trim_end())
}

/// `[1, 2]` style rendering for value lists in plain output.
pub fn join_values<T: ToString>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_to_widest_cell() {
        let rows = vec![
            vec!["0".to_string(), "100".to_string(), "Picking".to_string()],
            vec!["10".to_string(), "8100".to_string(), "Null".to_string()],
        ];
        let text = render_table(&["INDEX", "ID", "NAME"], &rows);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "INDEX  ID    NAME");
        assert_eq!(lines[1], "-----  ----  -------");
        assert_eq!(lines[2], "0      100   Picking");
        assert_eq!(lines[3], "10     8100  Null");
    }

    #[test]
    fn join_values_brackets() {
        assert_eq!(join_values(&[0usize, 10]), "[0, 10]");
        assert_eq!(join_values::<u32>(&[]), "[]");
    }
}
