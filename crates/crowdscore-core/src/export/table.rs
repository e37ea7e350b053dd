//! Console table for a CrowdScore series.

use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::score::ScoreRecord;

pub const TIME_HEADER: &str = "Time";
pub const SCORE_HEADER: &str = "CrowdScore";

/// comfy-table preset drawing only the dash rule under the header.
const HEADER_RULE_ONLY: &str = "     -             ";

/// Layout options for the console table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    /// Prefix placed in front of the timestamp column and every table line.
    pub indent: String,
    /// Keep leading whitespace in cells. When false, cells are trimmed and
    /// the indent is dropped.
    pub preserve_whitespace: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            indent: "\t\t".to_string(),
            preserve_whitespace: true,
        }
    }
}

impl TableStyle {
    /// No indent, trimmed cells.
    pub fn plain() -> Self {
        Self {
            indent: String::new(),
            preserve_whitespace: false,
        }
    }

    fn effective_indent(&self) -> &str {
        if self.preserve_whitespace {
            &self.indent
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRow {
    pub timestamp: String,
    pub score: i64,
}

/// Display-ready projection of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    pub headers: [&'static str; 2],
    pub rows: Vec<ScoreRow>,
}

impl ScoreTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableFormatter {
    style: TableStyle,
}

impl TableFormatter {
    pub fn new(style: TableStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &TableStyle {
        &self.style
    }

    /// Project records 1:1 into table rows, optionally in reverse order.
    ///
    /// Only the returned rows are reordered; `records` is left as is.
    pub fn format(&self, records: &[ScoreRecord], reverse: bool) -> ScoreTable {
        let mut rows: Vec<ScoreRow> = records
            .iter()
            .map(|record| ScoreRow {
                timestamp: format!("{}{}", self.style.indent, record.timestamp),
                score: record.score,
            })
            .collect();

        if reverse {
            rows.reverse();
        }

        ScoreTable {
            headers: [TIME_HEADER, SCORE_HEADER],
            rows,
        }
    }

    /// Render the table followed by a blank line and the count line.
    ///
    /// Every line is prefixed with the indent; the indent carried in the
    /// timestamp cells is moved in front of the line so columns stay aligned.
    pub fn render(&self, table: &ScoreTable) -> String {
        let indent = self.style.effective_indent();

        let mut grid = Table::new();
        grid.load_preset(HEADER_RULE_ONLY)
            .set_style(TableComponent::VerticalLines, ' ')
            .set_style(TableComponent::MiddleHeaderIntersections, ' ')
            .set_header(vec![Cell::new(table.headers[0]), Cell::new(table.headers[1])]);

        for row in &table.rows {
            grid.add_row(vec![
                Cell::new(self.time_cell(&row.timestamp)),
                Cell::new(row.score).set_alignment(CellAlignment::Right),
            ]);
        }
        if let Some(column) = grid.column_mut(1) {
            column.set_cell_alignment(CellAlignment::Right);
        }

        let lines: Vec<String> = grid
            .to_string()
            .lines()
            .map(|line| format!("{}{}", indent, line.trim_end()))
            .collect();

        format!(
            "{}\n\n{}",
            lines.join("\n"),
            summary_line(indent, table.len())
        )
    }

    fn time_cell<'a>(&self, timestamp: &'a str) -> &'a str {
        if self.style.preserve_whitespace {
            timestamp
                .strip_prefix(self.style.indent.as_str())
                .unwrap_or(timestamp)
        } else {
            timestamp.trim()
        }
    }
}

fn summary_line(indent: &str, count: usize) -> String {
    format!("{}{} scores returned.", indent, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ScoreRecord> {
        vec![
            ScoreRecord::new("2024-05-02T00:20:00Z", 12),
            ScoreRecord::new("2024-05-02T00:10:00Z", 7),
            ScoreRecord::new("2024-05-02T00:00:00Z", 105),
        ]
    }

    #[test]
    fn test_headers() {
        let table = TableFormatter::default().format(&records(), false);
        assert_eq!(table.headers, ["Time", "CrowdScore"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_timestamp_cells_are_indented() {
        let table = TableFormatter::default().format(&records(), false);
        assert_eq!(table.rows[0].timestamp, "\t\t2024-05-02T00:20:00Z");
        assert_eq!(table.rows[0].score, 12);
    }

    #[test]
    fn test_reverse_reads_forward_backwards() {
        let formatter = TableFormatter::default();
        let input = records();

        let forward = formatter.format(&input, false);
        let reversed = formatter.format(&input, true);

        let backwards: Vec<_> = forward.rows.iter().rev().cloned().collect();
        assert_eq!(reversed.rows, backwards);
        assert_eq!(input, records());
    }

    #[test]
    fn test_empty_series() {
        let formatter = TableFormatter::new(TableStyle::plain());
        let table = formatter.format(&[], true);
        assert!(table.is_empty());

        let rendered = formatter.render(&table);
        assert!(rendered.ends_with("\n\n0 scores returned."));
    }

    fn table_lines(rendered: &str) -> Vec<&str> {
        rendered.split("\n\n").next().unwrap().lines().collect()
    }

    #[test]
    fn test_render_plain() {
        let formatter = TableFormatter::new(TableStyle::plain());
        let rendered = formatter.render(&formatter.format(&records()[..2], false));
        let lines = table_lines(&rendered);

        assert_eq!(lines.len(), 4);
        let time_at = lines[0].find("Time").unwrap();
        let score_at = lines[0].find("CrowdScore").unwrap();
        assert!(time_at < score_at);

        assert!(lines[1].contains('-'));
        assert!(lines[1].chars().all(|c| c == '-' || c == ' '));

        assert!(lines[2].trim_start().starts_with("2024-05-02T00:20:00Z"));
        assert!(lines[2].ends_with("12"));
        assert!(lines[3].trim_start().starts_with("2024-05-02T00:10:00Z"));
        assert!(lines[3].ends_with('7'));
        assert!(rendered.ends_with("\n\n2 scores returned."));
    }

    #[test]
    fn test_render_right_aligns_scores() {
        let formatter = TableFormatter::new(TableStyle::plain());
        let rendered = formatter.render(&formatter.format(&records(), false));
        let lines = table_lines(&rendered);

        let header_end = lines[0].chars().count();
        for row in &lines[2..] {
            assert_eq!(row.chars().count(), header_end, "row {:?}", row);
        }
    }

    #[test]
    fn test_render_indented() {
        let style = TableStyle {
            indent: "  ".to_string(),
            preserve_whitespace: true,
        };
        let formatter = TableFormatter::new(style);
        let indented = formatter.render(&formatter.format(&records()[..1], false));
        let plain = TableFormatter::new(TableStyle::plain());
        let reference = plain.render(&plain.format(&records()[..1], false));

        for (line, expected) in table_lines(&indented).iter().zip(table_lines(&reference)) {
            assert_eq!(*line, format!("  {}", expected));
        }
        assert!(indented.ends_with("\n\n  1 scores returned."));
    }

    #[test]
    fn test_render_trims_when_not_preserving() {
        let style = TableStyle {
            indent: "\t\t".to_string(),
            preserve_whitespace: false,
        };
        let formatter = TableFormatter::new(style);
        let rendered = formatter.render(&formatter.format(&records(), true));

        assert!(!rendered.contains('\t'));
        let first_row = rendered.lines().nth(2).unwrap();
        assert!(first_row.trim_start().starts_with("2024-05-02T00:00:00Z"));
        assert!(first_row.ends_with("105"));
    }
}
