//! Plain-text and markdown table rendering.

/// A header row plus data rows, all as display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Short rows are padded with empty cells when rendered.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| cell(row, col).chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect()
    }

    fn padded<'a>(&self, row: &'a [String]) -> impl Iterator<Item = &'a str> + 'a {
        let width = self.headers.len();
        (0..width).map(move |col| cell(row, col))
    }

    /// Renders a centred ASCII grid:
    ///
    /// ```text
    /// +------+----+
    /// | name | n  |
    /// +------+----+
    /// |  ab  | 10 |
    /// +------+----+
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut border = String::from("+");
        for w in &widths {
            border.push_str(&"-".repeat(w + 2));
            border.push('+');
        }

        let mut out = Vec::with_capacity(self.rows.len() + 4);
        out.push(border.clone());
        out.push(grid_line(self.headers.iter().map(String::as_str), &widths));
        out.push(border.clone());
        for row in &self.rows {
            out.push(grid_line(self.padded(row), &widths));
        }
        out.push(border);
        out.join("\n")
    }

    /// Renders a GitHub-flavoured markdown table. Pipes inside cells are
    /// escaped.
    #[must_use]
    pub fn render_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&markdown_line(self.headers.iter().map(String::as_str)));
        out.push_str(&markdown_line(self.headers.iter().map(|_| "---")));
        for row in &self.rows {
            out.push_str(&markdown_line(self.padded(row)));
        }
        out
    }
}

fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map_or("", String::as_str)
}

fn grid_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (text, w) in cells.zip(widths) {
        line.push(' ');
        line.push_str(&centre(text, *w));
        line.push_str(" |");
    }
    line
}

fn centre(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
}

fn markdown_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for cell in cells {
        line.push(' ');
        line.push_str(&cell.replace('|', "\\|"));
        line.push_str(" |");
    }
    line.push('\n');
    line
}
