//! Bordered text tables with centred cells.
//!
//! Column widths are measured in terminal columns, so CJK headers line
//! up with ASCII values. Every row is separated by a rule and the output
//! ends with a newline.

use unicode_width::UnicodeWidthStr;

/// The characters used to draw one table style.
#[derive(Debug, Clone, Copy)]
pub struct Border {
    pub top_body: char,
    pub top_join: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_body: char,
    pub bottom_join: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub body_left: char,
    pub body_right: char,
    pub body_join: char,
    pub join_body: char,
    pub join_left: char,
    pub join_right: char,
    pub join_join: char,
}

/// Plain ASCII borders.
pub const RAMAC: Border = Border {
    top_body: '-',
    top_join: '+',
    top_left: '+',
    top_right: '+',
    bottom_body: '-',
    bottom_join: '+',
    bottom_left: '+',
    bottom_right: '+',
    body_left: '|',
    body_right: '|',
    body_join: '|',
    join_body: '-',
    join_left: '|',
    join_right: '|',
    join_join: '|',
};

/// Box-drawing borders.
pub const NORC: Border = Border {
    top_body: '─',
    top_join: '┬',
    top_left: '┌',
    top_right: '┐',
    bottom_body: '─',
    bottom_join: '┴',
    bottom_left: '└',
    bottom_right: '┘',
    body_left: '│',
    body_right: '│',
    body_join: '│',
    join_body: '─',
    join_left: '├',
    join_right: '┤',
    join_join: '┼',
};

pub fn render_table(rows: &[Vec<String>], border: &Border) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_rule(
        &mut out,
        &widths,
        border.top_left,
        border.top_body,
        border.top_join,
        border.top_right,
    );
    for (idx, row) in rows.iter().enumerate() {
        if idx > 0 {
            push_rule(
                &mut out,
                &widths,
                border.join_left,
                border.join_body,
                border.join_join,
                border.join_right,
            );
        }
        out.push(border.body_left);
        for (col, width) in widths.iter().enumerate() {
            if col > 0 {
                out.push(border.body_join);
            }
            let cell = row.get(col).map(String::as_str).unwrap_or("");
            out.push(' ');
            out.push_str(&center(cell, *width));
            out.push(' ');
        }
        out.push(border.body_right);
        out.push('\n');
    }
    push_rule(
        &mut out,
        &widths,
        border.bottom_left,
        border.bottom_body,
        border.bottom_join,
        border.bottom_right,
    );
    out
}

fn push_rule(out: &mut String, widths: &[usize], left: char, body: char, join: char, right: char) {
    out.push(left);
    for (idx, width) in widths.iter().enumerate() {
        if idx > 0 {
            out.push(join);
        }
        out.extend(std::iter::repeat(body).take(width + 2));
    }
    out.push(right);
    out.push('\n');
}

fn center(text: &str, width: usize) -> String {
    let free = width.saturating_sub(text.width());
    let left = free / 2;
    let right = free - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn ascii_table_matches_expected_layout() {
        let rows = vec![cells(&["AQI", "空气"]), cells(&["41", "优"])];
        let table = render_table(&rows, &RAMAC);
        let expected = "\
+-----+------+
| AQI | 空气 |
|-----|------|
| 41  |  优  |
+-----+------+
";
        assert_eq!(table, expected);
    }

    #[test]
    fn box_table_uses_box_drawing_joins() {
        let rows = vec![cells(&["a", "bb"]), cells(&["ccc", "d"])];
        let table = render_table(&rows, &NORC);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "┌─────┬────┐");
        assert_eq!(lines[1], "│  a  │ bb │");
        assert_eq!(lines[2], "├─────┼────┤");
        assert_eq!(lines[3], "│ ccc │ d  │");
        assert_eq!(lines[4], "└─────┴────┘");
        assert!(table.ends_with('\n'));
    }

    #[test]
    fn ragged_rows_are_padded() {
        let rows = vec![cells(&["x", "y"]), cells(&["z"])];
        let table = render_table(&rows, &RAMAC);
        assert!(table.contains("| z |   |"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_table(&[], &RAMAC), "");
    }
}
