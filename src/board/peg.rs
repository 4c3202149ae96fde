use std::fmt;
use std::str::FromStr;

/// One of the three pegs, in fixed display order.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Peg {
    Left = 0,
    Middle = 1,
    Right = 2,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

    /// Every game starts with the full tower on this peg.
    pub const SOURCE: Peg = Peg::Left;

    /// The game is won once every disk sits on this peg.
    pub const TARGET: Peg = Peg::Right;

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Peg::Left => "Left",
            Peg::Middle => "Middle",
            Peg::Right => "Right",
        }
    }

    pub fn code(&self) -> char {
        match self {
            Peg::Left => 'L',
            Peg::Middle => 'M',
            Peg::Right => 'R',
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

type ParseError = &'static str;
impl FromStr for Peg {
    type Err = ParseError;
    fn from_str(peg: &str) -> Result<Self, Self::Err> {
        match peg.trim().to_lowercase().as_str() {
            "l" | "left" => Ok(Peg::Left),
            "m" | "middle" => Ok(Peg::Middle),
            "r" | "right" => Ok(Peg::Right),
            _ => Err("invalid peg; options are: L, M, R"),
        }
    }
}
