use crate::utils::cpu::matrix::Grid;

/// Labeled text a program prints once its input has been read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lines: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(self) -> Self {
        self.line("")
    }

    pub fn grid<const N: usize>(mut self, grid: &Grid<N>) -> Self {
        self.push_grid(grid);
        self
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn push_grid<const N: usize>(&mut self, grid: &Grid<N>) {
        for row in grid.rows() {
            self.lines.push(format_row(row));
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = String::new();
        for line in &self.lines {
            buffer.push_str(line);
            buffer.push('\n');
        }
        buffer.into_bytes()
    }
}

pub fn format_row(row: &[i64]) -> String {
    row.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" ")
}
