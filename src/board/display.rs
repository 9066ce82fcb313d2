use super::{Board, EMPTY_SYMBOL};
use std::fmt;

impl fmt::Display for Board {
    /// Draws the board top row first. Empty cells that can be played show
    /// their index so a human knows what to type.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cell_width = self.cell_count().saturating_sub(1).to_string().len() + 1;
        for row in (0..self.height()).rev() {
            let mut line = String::new();
            for column in 0..self.width() {
                let index = self.index_of(row, column);
                let label = match self.get(index) {
                    Some(color) => color.symbol().to_string(),
                    None if self.is_legal_drop(index) => index.to_string(),
                    None => EMPTY_SYMBOL.to_string(),
                };
                line.push_str(&format!("{:<width$}", label, width = cell_width));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
