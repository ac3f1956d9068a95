// Plain-text export of a window as a two-column Title | URL table.
// This format is used for "copy as text" and must stay byte-stable.

use std::borrow::Cow;

/// Column header line of the export table, including its line terminator.
pub const EXPORT_TABLE_HEADER: &str = "Title                                  | URL\n";

/// Separator line under the column header, including its line terminator.
pub const EXPORT_TABLE_RULE: &str = "---------------------------------------|-----------\n";

/// Neutralizes characters that would break a table cell.
pub trait CellEscaper {
    fn escape_cell<'a>(&self, text: &'a str) -> Cow<'a, str>;
}

/// Escapes the column separator as `\|` and folds line breaks into a single space.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownCellEscaper;

impl CellEscaper for MarkdownCellEscaper {
    fn escape_cell<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.contains(|c: char| matches!(c, '|' | '\n' | '\r')) {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() + 4);
        let mut in_break = false;
        for ch in text.chars() {
            match ch {
                '\n' | '\r' => {
                    if !in_break {
                        out.push(' ');
                    }
                    in_break = true;
                }
                '|' => {
                    out.push_str("\\|");
                    in_break = false;
                }
                _ => {
                    out.push(ch);
                    in_break = false;
                }
            }
        }
        Cow::Owned(out)
    }
}

/// Renders the export table for a window title and its `(title, url)` rows.
pub fn render_table<'a, I>(window_title: &str, rows: I, escaper: &dyn CellEscaper) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = format!("### {}\n\n", window_title);
    out.push_str(EXPORT_TABLE_HEADER);
    out.push_str(EXPORT_TABLE_RULE);
    for (title, url) in rows {
        out.push_str(&escaper.escape_cell(title));
        out.push_str(" | ");
        out.push_str(url);
        out.push('\n');
    }
    out
}
