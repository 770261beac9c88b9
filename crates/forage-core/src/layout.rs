//! ASCII level layouts.
//!
//! A [`Layout`] is parsed from text where each character is one cell:
//!
//! | Char | Meaning |
//! |---|---|
//! | `%` or `#` | wall |
//! | `.` | goal |
//! | `P` | agent start |
//! | ` ` | open floor |
//!
//! Lines are separated by `'\n'` and must all have the same width. Leading
//! and trailing blank lines are ignored, but spaces inside lines are cells.

use thiserror::Error;

use crate::geom::Point;
use crate::goals::GoalSet;
use crate::grid::WallGrid;

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("layout line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Point },
    #[error("layout has no start cell")]
    MissingStart,
    #[error("layout has a second start cell at {0}")]
    MultipleStarts(Point),
}

/// A parsed level: walls, agent start and goal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub walls: WallGrid,
    pub start: Point,
    pub goals: GoalSet,
}

impl Layout {
    /// Parse a layout from its textual form.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        if s.is_empty() {
            return Err(LayoutError::Empty);
        }
        let lines: Vec<&str> = s.lines().collect();
        let width = lines[0].chars().count();
        for (i, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::InconsistentWidth {
                    line: i,
                    expected: width,
                    found,
                });
            }
        }

        let mut walls = WallGrid::new(width as i32, lines.len() as i32);
        let mut start = None;
        let mut goals = Vec::new();
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '%' | '#' => walls.set_wall(p, true),
                    '.' => goals.push(p),
                    'P' => {
                        if start.is_some() {
                            return Err(LayoutError::MultipleStarts(p));
                        }
                        start = Some(p);
                    }
                    ' ' => {}
                    _ => return Err(LayoutError::InvalidChar { ch, pos: p }),
                }
            }
        }

        let start = start.ok_or(LayoutError::MissingStart)?;
        Ok(Self {
            walls,
            start,
            goals: GoalSet::new(goals),
        })
    }

    /// Render back to text, using `%` for walls.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for y in 0..self.walls.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.walls.width() {
                let p = Point::new(x, y);
                let ch = if p == self.start {
                    'P'
                } else if self.walls.is_wall(p) {
                    '%'
                } else if self.goals.contains(p) {
                    '.'
                } else {
                    ' '
                };
                out.push(ch);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "
%%%%%
%P .%
% %.%
%%%%%
";

    #[test]
    fn parse_room() {
        let l = Layout::parse(ROOM).unwrap();
        assert_eq!(l.walls.width(), 5);
        assert_eq!(l.walls.height(), 4);
        assert_eq!(l.start, Point::new(1, 1));
        assert_eq!(l.goals.len(), 2);
        assert!(l.goals.contains(Point::new(3, 1)));
        assert!(l.goals.contains(Point::new(3, 2)));
        assert!(l.walls.is_wall(Point::new(2, 2)));
        assert!(l.walls.passable(Point::new(1, 2)));
    }

    #[test]
    fn render_round_trips() {
        let l = Layout::parse(ROOM).unwrap();
        assert_eq!(l.render(), ROOM.trim_matches('\n'));
    }

    #[test]
    fn hash_is_a_wall_too() {
        let l = Layout::parse("#P.#").unwrap();
        assert!(l.walls.is_wall(Point::new(0, 0)));
        assert!(l.walls.is_wall(Point::new(3, 0)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Layout::parse("\n\n"), Err(LayoutError::Empty));
        assert_eq!(
            Layout::parse("%%%\n%P\n%%%"),
            Err(LayoutError::InconsistentWidth {
                line: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Layout::parse("%P?%"),
            Err(LayoutError::InvalidChar {
                ch: '?',
                pos: Point::new(2, 0)
            })
        );
        assert_eq!(Layout::parse("% .%"), Err(LayoutError::MissingStart));
        assert_eq!(
            Layout::parse("PP"),
            Err(LayoutError::MultipleStarts(Point::new(1, 0)))
        );
    }
}
