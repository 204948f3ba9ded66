use serde::{Deserialize, Serialize};

use crate::*;

/// Every `f64` at or beyond this magnitude is an integer.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Board size plus the inclusive range of mine counts a player may ask for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub min_mines: CellCount,
    pub max_mines: CellCount,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (10, 10);
    pub const DEFAULT_MIN_MINES: CellCount = 5;
    pub const DEFAULT_MAX_MINES: CellCount = 30;

    pub fn new((cols, rows): Coord2, min_mines: CellCount, max_mines: CellCount) -> Self {
        Self {
            size: (cols.max(1), rows.max(1)),
            min_mines,
            max_mines,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Lower bound actually enforced, a board always gets at least one mine.
    pub fn effective_min_mines(&self) -> CellCount {
        self.min_mines.max(1)
    }

    /// Upper bound actually enforced, at least one cell must stay free for the first click.
    pub fn effective_max_mines(&self) -> CellCount {
        self.max_mines.min(self.total_cells().saturating_sub(1))
    }

    /// Parses the mine count typed by the player.
    ///
    /// The text is read as a decimal number so that `7.5` is reported as a non-integer rather
    /// than as garbage, and `10.0` is accepted as `10`.
    pub fn parse_mines(&self, input: &str) -> core::result::Result<CellCount, ValidationError> {
        let min = self.effective_min_mines();
        let max = self.effective_max_mines();
        let not_integer = ValidationError::NotInteger { min, max };

        let value: f64 = input.trim().parse().map_err(|_| not_integer)?;
        if !is_integral(value) {
            return Err(not_integer);
        }
        if value < f64::from(min) {
            return Err(ValidationError::TooLow { min });
        }
        if value > f64::from(max) {
            return Err(ValidationError::TooHigh { max });
        }

        Ok(value as CellCount)
    }

    pub fn validate_mines(
        &self,
        mines: CellCount,
    ) -> core::result::Result<CellCount, ValidationError> {
        let min = self.effective_min_mines();
        let max = self.effective_max_mines();
        if mines < min {
            Err(ValidationError::TooLow { min })
        } else if mines > max {
            Err(ValidationError::TooHigh { max })
        } else {
            Ok(mines)
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SIZE,
            Self::DEFAULT_MIN_MINES,
            Self::DEFAULT_MAX_MINES,
        )
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite()
        && (value >= EXACT_INTEGER_LIMIT
            || value <= -EXACT_INTEGER_LIMIT
            || value == (value as i64) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn default_policy() {
        let config = GameConfig::default();

        assert_eq!(config.parse_mines("3"), Err(ValidationError::TooLow { min: 5 }));
        assert_eq!(
            config.parse_mines("31"),
            Err(ValidationError::TooHigh { max: 30 })
        );
        assert_eq!(
            config.parse_mines("7.5"),
            Err(ValidationError::NotInteger { min: 5, max: 30 })
        );
        assert_eq!(config.parse_mines("10"), Ok(10));
    }

    #[test]
    fn bounds_are_inclusive() {
        let config = GameConfig::default();

        assert_eq!(config.parse_mines("5"), Ok(5));
        assert_eq!(config.parse_mines("30"), Ok(30));
        assert_eq!(config.validate_mines(5), Ok(5));
        assert_eq!(config.validate_mines(31), Err(ValidationError::TooHigh { max: 30 }));
    }

    #[test]
    fn lenient_number_forms() {
        let config = GameConfig::default();

        assert_eq!(config.parse_mines(" 12 "), Ok(12));
        assert_eq!(config.parse_mines("10.0"), Ok(10));
        assert_eq!(config.parse_mines("1e1"), Ok(10));
    }

    #[test]
    fn garbage_is_not_an_integer() {
        let config = GameConfig::default();
        let not_integer = Err(ValidationError::NotInteger { min: 5, max: 30 });

        assert_eq!(config.parse_mines(""), not_integer);
        assert_eq!(config.parse_mines("ten"), not_integer);
        assert_eq!(config.parse_mines("NaN"), not_integer);
        assert_eq!(config.parse_mines("inf"), not_integer);
    }

    #[test]
    fn huge_and_negative_values_hit_the_bounds() {
        let config = GameConfig::default();

        assert_eq!(
            config.parse_mines("1e30"),
            Err(ValidationError::TooHigh { max: 30 })
        );
        assert_eq!(config.parse_mines("-4"), Err(ValidationError::TooLow { min: 5 }));
    }

    #[test]
    fn max_is_capped_by_board_area() {
        let config = GameConfig::new((3, 3), 1, 30);

        assert_eq!(config.effective_max_mines(), 8);
        assert_eq!(config.parse_mines("8"), Ok(8));
        assert_eq!(config.parse_mines("9"), Err(ValidationError::TooHigh { max: 8 }));
    }

    #[test]
    fn zero_minimum_still_requires_a_mine() {
        let config = GameConfig::new((5, 5), 0, 10);

        assert_eq!(config.parse_mines("0"), Err(ValidationError::TooLow { min: 1 }));
    }

    #[test]
    fn messages_name_the_failed_bound() {
        let config = GameConfig::default();

        assert_eq!(
            config.parse_mines("2").unwrap_err().to_string(),
            "The input for Bombs must be larger than 5"
        );
        assert_eq!(
            config.parse_mines("99").unwrap_err().to_string(),
            "The input for Bombs must be smaller than 30"
        );
        assert_eq!(
            config.parse_mines("x").unwrap_err().to_string(),
            "The input for Bombs must be an integer between 5 and 30"
        );
    }
}
