#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned two-space separated table.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let padded = pad(&truncated, *width, numeric);
                if options.color {
                    colorize_label(&padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = vec![header_line.trim_end().to_string(), divider];
    lines.extend(row_lines);
    lines.join("\n")
}

const MIN_WIDTH: usize = 6;

/// Shrink the widest columns one char at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_end_matches('%');
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color verdict and status words; padding is applied before so widths stay exact.
fn colorize_label(cell: &str) -> String {
    let word = cell.trim();
    let code = match word.to_ascii_lowercase().as_str() {
        "true" | "likely authentic" | "resolved" | "authenticated" | "ok" => Some("32"),
        "analyzing" | "coming soon" | "idle" => Some("33"),
        "fake" | "potentially fake" | "potentially manipulated" | "false" | "error" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => cell.replacen(word, &format!("\u{1b}[{code}m{word}\u{1b}[0m"), 1),
        None => cell.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_table, truncate_text};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_mixed_widths() {
        let rows = vec![
            vec!["label".to_string(), "FAKE".to_string()],
            vec!["confidence".to_string(), "87.3%".to_string()],
        ];
        let table = render_table(&["key", "value"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("FAKE"), lines[0].find("value"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec![
            "details".to_string(),
            "This news article appears authentic based on language patterns".to_string(),
        ]];
        let table = render_table(
            &["key", "value"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );

        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn color_wraps_verdict_words_only() {
        let rows = vec![
            vec!["label".to_string(), "FAKE".to_string()],
            vec!["file_name".to_string(), "photo.png".to_string()],
        ];
        let table = render_table(
            &["key", "value"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );

        assert!(table.contains("\u{1b}[31mFAKE\u{1b}[0m"));
        assert!(!table.contains("\u{1b}[31mphoto"));
    }

    #[test]
    fn truncate_keeps_short_values() {
        assert_eq!(truncate_text("TRUE", 6), "TRUE");
        assert_eq!(truncate_text("Likely Authentic", 8), "Likely …");
    }
}
