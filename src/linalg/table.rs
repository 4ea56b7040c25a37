//! Solution vectors laid out as two-row tables.

use std::fmt;

/// A solution vector with `x1..xn` column headers.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionTable {
    pub title: String,
    pub headers: Vec<String>,
    pub values: Vec<f64>,
}

impl SolutionTable {
    pub fn new(title: impl Into<String>, solution: &[f64]) -> Self {
        Self {
            title: title.into(),
            headers: (1..=solution.len()).map(|i| format!("x{}", i)).collect(),
            values: solution.to_vec(),
        }
    }

    /// Cell text of the value row, at full round-trip precision.
    pub fn value_cells(&self) -> Vec<String> {
        self.values.iter().map(|v| format!("{:?}", v)).collect()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .zip(self.value_cells())
            .map(|(h, v)| h.len().max(v.len()))
            .collect()
    }
}

impl fmt::Display for SolutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let rule: String = widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+");

        writeln!(f, "{}", self.title)?;
        writeln!(f, "+{}+", rule)?;
        for cells in [self.headers.clone(), self.value_cells()] {
            let line: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!(" {:<w$} ", c, w = w))
                .collect();
            writeln!(f, "|{}|", line.join("|"))?;
            writeln!(f, "+{}+", rule)?;
        }
        Ok(())
    }
}
