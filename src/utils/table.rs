use tabled::builder::Builder;
use tabled::settings::object::{Cell as GridCell, Rows};
use tabled::settings::style::{HorizontalLine, Style};
use tabled::settings::{Alignment, Modify, Panel};
use tabled::Table;

/// A table cell. Numbers are right-aligned, text is left-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Number(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn number(value: impl ToString) -> Self {
        Cell::Number(value.to_string())
    }

    fn content(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Number(s) => s,
        }
    }
}

/// Plain-text table in the classic `.---.` box style, or borderless for
/// score lines.
#[derive(Debug, Clone, Default)]
pub struct AsciiTable {
    title: Option<String>,
    headings: Vec<String>,
    rows: Vec<Vec<Cell>>,
    borderless: bool,
}

impl AsciiTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn set_headings<S: Into<String>>(&mut self, headings: impl IntoIterator<Item = S>) {
        self.headings = headings.into_iter().map(Into::into).collect();
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn remove_border(&mut self) {
        self.borderless = true;
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headings.len()))
            .max()
            .unwrap_or(0)
    }

    /// Headings and rows as a grid, short rows filled with blanks
    fn build_grid(&self, columns: usize) -> Table {
        let fill = |mut record: Vec<String>| {
            record.resize(columns, String::new());
            record
        };

        let mut builder = Builder::default();
        if !self.headings.is_empty() {
            builder.push_record(fill(self.headings.clone()));
        }
        for row in &self.rows {
            builder.push_record(fill(row.iter().map(|c| c.content().to_string()).collect()));
        }
        builder.build()
    }

    /// Right-align number cells; `first_row` is the grid row of the first data row
    fn align_numbers(&self, table: &mut Table, first_row: usize) {
        for (i, row) in self.rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if let Cell::Number(_) = cell {
                    table.with(Modify::new(GridCell::new(first_row + i, j)).with(Alignment::right()));
                }
            }
        }
    }

    pub fn render(&self) -> String {
        let columns = self.column_count();
        if columns == 0 {
            return String::new();
        }

        let mut table = self.build_grid(columns);

        if self.borderless {
            table.with(Style::empty().left(' ').right(' ').vertical(' '));
            self.align_numbers(&mut table, 0);
            return table.to_string();
        }

        let has_headings = !self.headings.is_empty();
        let mut next_row = 0;

        if let Some(title) = &self.title {
            table.with(Panel::header(title.as_str()));
            table.with(Modify::new(Rows::first()).with(Alignment::center()));
            next_row += 1;
        }
        if has_headings {
            table.with(Modify::new(Rows::single(next_row)).with(Alignment::center()));
            next_row += 1;
        }
        self.align_numbers(&mut table, next_row);

        // Junctions on the outer rules and under the title are drawn as
        // plain dashes; only the rule under the headings shows `|`.
        let frame = Style::ascii()
            .remove_horizontal()
            .corner_top_left('.')
            .corner_top_right('.')
            .corner_bottom_left('\'')
            .corner_bottom_right('\'')
            .intersection_top('-')
            .intersection_bottom('-');
        let title_rule = HorizontalLine::full('-', '-', '|', '|');
        let heading_rule = HorizontalLine::full('-', '|', '|', '|');

        match (self.title.is_some(), has_headings) {
            (true, true) => {
                table.with(frame.horizontals([(1, title_rule), (2, heading_rule)]));
            }
            (true, false) => {
                table.with(frame.horizontals([(1, title_rule)]));
            }
            (false, true) => {
                table.with(frame.horizontals([(1, heading_rule)]));
            }
            (false, false) => {
                table.with(frame);
            }
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaders_table(title: &str, extended: bool) -> AsciiTable {
        let mut table = AsciiTable::with_title(title);
        let mut headings = vec!["Team", "GP", "W", "L", "OT", "PTS"];
        if extended {
            headings.extend(["P%", "L10", "STRK"]);
        }
        table.set_headings(headings);

        let rows = [
            ("Vegas Golden Knights", 13, 11, 1, 1, 23, "0.885", "8-1-1", "L1"),
            ("Boston Bruins", 12, 10, 1, 1, 21, "0.875", "8-1-1", "W1"),
            ("New York Rangers", 12, 9, 2, 1, 19, "0.792", "8-1-1", "W1"),
            ("Dallas Stars", 11, 7, 3, 1, 15, "0.682", "6-3-1", "L2"),
        ];
        for (name, gp, w, l, ot, pts, pctg, l10, streak) in rows {
            let mut cells = vec![
                Cell::text(name),
                Cell::number(gp),
                Cell::number(w),
                Cell::number(l),
                Cell::number(ot),
                Cell::number(pts),
            ];
            if extended {
                cells.extend([Cell::text(pctg), Cell::text(l10), Cell::text(streak)]);
            }
            table.add_row(cells);
        }
        table
    }

    #[test]
    fn test_borderless_score_table() {
        let mut table = AsciiTable::new();
        table.add_row(vec![Cell::text("Nashville Predators"), Cell::text("2")]);
        table.add_row(vec![Cell::text("Calgary Flames"), Cell::text("3")]);
        table.remove_border();

        assert_eq!(
            table.render(),
            "  Nashville Predators   2  \n  Calgary Flames        3  "
        );
    }

    #[test]
    fn test_borderless_single_column() {
        let mut table = AsciiTable::new();
        table.add_row(vec![Cell::text("Nashville Predators")]);
        table.add_row(vec![Cell::text("Vancouver Canucks")]);
        table.remove_border();

        assert_eq!(
            table.render(),
            "  Nashville Predators  \n  Vancouver Canucks    "
        );
    }

    #[test]
    fn test_bordered_table_with_title() {
        let expected = ".-----------------------------------------------.\n\
                        |               Division Leaders                |\n\
                        |-----------------------------------------------|\n\
                        |         Team         | GP | W  | L | OT | PTS |\n\
                        |----------------------|----|----|---|----|-----|\n\
                        | Vegas Golden Knights | 13 | 11 | 1 |  1 |  23 |\n\
                        | Boston Bruins        | 12 | 10 | 1 |  1 |  21 |\n\
                        | New York Rangers     | 12 |  9 | 2 |  1 |  19 |\n\
                        | Dallas Stars         | 11 |  7 | 3 |  1 |  15 |\n\
                        '-----------------------------------------------'";
        assert_eq!(leaders_table("Division Leaders", false).render(), expected);
    }

    #[test]
    fn test_extended_columns() {
        let expected = ".----------------------------------------------------------------------.\n\
                        |                           Division Leaders                           |\n\
                        |----------------------------------------------------------------------|\n\
                        |         Team         | GP | W  | L | OT | PTS |  P%   |  L10  | STRK |\n\
                        |----------------------|----|----|---|----|-----|-------|-------|------|\n\
                        | Vegas Golden Knights | 13 | 11 | 1 |  1 |  23 | 0.885 | 8-1-1 | L1   |\n\
                        | Boston Bruins        | 12 | 10 | 1 |  1 |  21 | 0.875 | 8-1-1 | W1   |\n\
                        | New York Rangers     | 12 |  9 | 2 |  1 |  19 | 0.792 | 8-1-1 | W1   |\n\
                        | Dallas Stars         | 11 |  7 | 3 |  1 |  15 | 0.682 | 6-3-1 | L2   |\n\
                        '----------------------------------------------------------------------'";
        assert_eq!(leaders_table("Division Leaders", true).render(), expected);
    }

    #[test]
    fn test_long_title_widens_the_table() {
        let mut table = AsciiTable::with_title("A Very Long Title For Two Columns");
        table.set_headings(["A", "B"]);
        table.add_row(vec![Cell::text("x"), Cell::number(1)]);

        let rendered = table.render();
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(rendered.contains("| A Very Long Title For Two Columns |"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(AsciiTable::with_title("Nothing").render(), "");
    }
}
