use pest::Parser;
use pest_derive::Parser;

// 2413432311323
// 3215453535623
// ...one row of digit entry costs per line.
#[derive(Parser)]
#[grammar = "grid.pest"]
struct GridParser;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cost {value} at row {row}, column {column} is not a single digit")]
    CostRange {
        row: usize,
        column: usize,
        value: u8,
    },

    #[error(transparent)]
    Syntax(Box<pest::error::Error<Rule>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The two directions a walker may turn into from this one.
    pub fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Entry costs for every cell, fixed once parsed.
#[readonly::make]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    costs: Vec<u8>,
}

impl Grid {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        let grid_pair = GridParser::parse(Rule::grid, text)
            .map_err(|e| ParseError::Syntax(Box::new(e)))?
            .next()
            .expect("grammar yields exactly one grid");

        let mut width = 0;
        let mut height = 0;
        let mut costs = Vec::new();
        for (i, row) in grid_pair
            .into_inner()
            .filter(|pair| pair.as_rule() == Rule::row)
            .enumerate()
        {
            let row = row.as_str();
            if i == 0 {
                width = row.len();
            } else if row.len() != width {
                return Err(ParseError::RaggedRow {
                    row: i + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            costs.extend(row.bytes().map(|b| b - b'0'));
            height += 1;
        }
        Ok(Grid {
            width,
            height,
            costs,
        })
    }

    /// Build a grid directly from rows of costs, checking the same invariants
    /// the text parser enforces.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, ParseError> {
        let Some(first) = rows.first() else {
            return Err(ParseError::Empty);
        };
        let width = first.len();
        if width == 0 {
            return Err(ParseError::Empty);
        }
        let mut costs = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::RaggedRow {
                    row: y + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value > 9 {
                    return Err(ParseError::CostRange {
                        row: y + 1,
                        column: x + 1,
                        value,
                    });
                }
                costs.push(value);
            }
        }
        Ok(Grid {
            width,
            height: rows.len(),
            costs,
        })
    }

    pub fn cost(&self, x: usize, y: usize) -> u32 {
        self.costs[y * self.width + x] as u32
    }

    /// One step from (x, y), or None at a border.
    pub fn step(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (x, y) = match dir {
            Direction::Left => (x.checked_sub(1)?, y),
            Direction::Right => (x + 1, y),
            Direction::Up => (x, y.checked_sub(1)?),
            Direction::Down => (x, y + 1),
        };
        (x < self.width && y < self.height).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Grid, ParseError};
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_rows_of_digits() {
        let grid = Grid::parse("241\n321\n").unwrap();
        assert_eq!(grid.width, 3);
        assert_eq!(grid.height, 2);
        assert_eq!(grid.cost(0, 0), 2);
        assert_eq!(grid.cost(2, 0), 1);
        assert_eq!(grid.cost(1, 1), 2);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::parse("12\n345\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::RaggedRow {
                row: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(Grid::parse(""), Err(ParseError::Empty)));
        assert!(matches!(Grid::parse("\n\n"), Err(ParseError::Empty)));
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(Grid::parse("12\n3a\n"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn from_rows_matches_parse() {
        let parsed = Grid::parse("90\n05\n").unwrap();
        let built = Grid::from_rows(&[vec![9, 0], vec![0, 5]]).unwrap();
        assert_eq!(parsed, built);
    }

    #[test]
    fn from_rows_rejects_costs_above_nine() {
        let err = Grid::from_rows(&[vec![1, 10]]).unwrap_err();
        assert!(matches!(
            err,
            ParseError::CostRange {
                row: 1,
                column: 2,
                value: 10
            }
        ));
    }

    #[test]
    fn steps_stay_in_bounds() {
        let grid = Grid::parse("12\n34\n").unwrap();
        assert_eq!(grid.step(0, 0, Direction::Left), None);
        assert_eq!(grid.step(0, 0, Direction::Up), None);
        assert_eq!(grid.step(0, 0, Direction::Right), Some((1, 0)));
        assert_eq!(grid.step(1, 1, Direction::Right), None);
        assert_eq!(grid.step(1, 1, Direction::Down), None);
        assert_eq!(grid.step(1, 1, Direction::Up), Some((1, 0)));
    }
}
