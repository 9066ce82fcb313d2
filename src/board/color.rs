use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Blue];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// The character used for this color's stones in position strings and board output.
    pub fn symbol(&self) -> char {
        match self {
            Color::Red => 'X',
            Color::Blue => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(Color::Red),
            'O' => Some(Color::Blue),
            _ => None,
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Color::Red)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Red => "red",
            Color::Blue => "blue",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "random" => Ok(Color::random()),
            _ => Err("invalid color; options are: red, blue, random"),
        }
    }
}
