use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PuzzleError;

/// How many symbols are printed on a card. Serialized as the plain integer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Number {
    One = 1,
    Two,
    Three,
}

impl Number {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Number {
    type Error = PuzzleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Number::One),
            2 => Ok(Number::Two),
            3 => Ok(Number::Three),
            n => Err(PuzzleError::InvalidCard(format!("number {} is not 1, 2 or 3", n))),
        }
    }
}

impl From<Number> for u8 {
    fn from(value: Number) -> Self {
        value.value()
    }
}

/// The outline of the symbols on a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Diamond,
    Oval,
    Squiggle,
}

/// The ink color of the symbols on a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Purple,
}

/// How the symbols on a card are filled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shading {
    /// Fully filled
    Solid,
    /// Hatched with lines
    Striped,
    /// Outline only
    Empty,
}

/// A single card of the 81-card deck.
/// Cards are plain values: two cards with the same four attributes are the same card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub number: Number,
    pub shape: Shape,
    pub color: Color,
    pub shading: Shading,
}

pub const DECK_SIZE: usize = 81;

pub fn all_numbers() -> [Number; 3] {
    [Number::One, Number::Two, Number::Three]
}

pub fn all_shapes() -> [Shape; 3] {
    [Shape::Diamond, Shape::Oval, Shape::Squiggle]
}

pub fn all_colors() -> [Color; 3] {
    [Color::Red, Color::Green, Color::Purple]
}

pub fn all_shadings() -> [Shading; 3] {
    [Shading::Solid, Shading::Striped, Shading::Empty]
}

/// Builds the full deck in canonical order: number, then shape, then color,
/// then shading (outermost first).
///
/// The order is stable across calls; the daily board depends on it because the
/// seeded shuffle always starts from this sequence.
///
/// ```
/// use dailyset_engine::cards::{generate_all_cards, DECK_SIZE};
///
/// let deck = generate_all_cards();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].to_string(), "1DRF");
/// assert_eq!(deck[80].to_string(), "3SPE");
/// ```
pub fn generate_all_cards() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &number in &all_numbers() {
        for &shape in &all_shapes() {
            for &color in &all_colors() {
                for &shading in &all_shadings() {
                    v.push(Card {
                        number,
                        shape,
                        color,
                        shading,
                    });
                }
            }
        }
    }
    v
}

impl Number {
    fn code(self) -> char {
        match self {
            Number::One => '1',
            Number::Two => '2',
            Number::Three => '3',
        }
    }
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::Diamond => "diamond",
            Shape::Oval => "oval",
            Shape::Squiggle => "squiggle",
        }
    }

    fn code(self) -> char {
        match self {
            Shape::Diamond => 'D',
            Shape::Oval => 'O',
            Shape::Squiggle => 'S',
        }
    }
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        }
    }

    fn code(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Purple => 'P',
        }
    }
}

impl Shading {
    pub fn name(self) -> &'static str {
        match self {
            Shading::Solid => "solid",
            Shading::Striped => "striped",
            Shading::Empty => "empty",
        }
    }

    // 'F' (filled) for solid so it does not collide with the squiggle code
    fn code(self) -> char {
        match self {
            Shading::Solid => 'F',
            Shading::Striped => 'T',
            Shading::Empty => 'E',
        }
    }
}

impl Card {
    pub fn new(number: Number, shape: Shape, color: Color, shading: Shading) -> Self {
        Self {
            number,
            shape,
            color,
            shading,
        }
    }

    /// Long human-readable form, e.g. `"2 oval green striped"`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} {}",
            self.number.value(),
            self.shape.name(),
            self.color.name(),
            self.shading.name()
        )
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.number.code(),
            self.shape.code(),
            self.color.code(),
            self.shading.code()
        )
    }
}

impl FromStr for Card {
    type Err = PuzzleError;

    /// Parses the four-character code printed by `Display` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PuzzleError::InvalidCard(s.to_string());
        let code: Vec<char> = s.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        if code.len() != 4 {
            return Err(invalid());
        }
        let number = match code[0] {
            '1' => Number::One,
            '2' => Number::Two,
            '3' => Number::Three,
            _ => return Err(invalid()),
        };
        let shape = match code[1] {
            'D' => Shape::Diamond,
            'O' => Shape::Oval,
            'S' => Shape::Squiggle,
            _ => return Err(invalid()),
        };
        let color = match code[2] {
            'R' => Color::Red,
            'G' => Color::Green,
            'P' => Color::Purple,
            _ => return Err(invalid()),
        };
        let shading = match code[3] {
            'F' => Shading::Solid,
            'T' => Shading::Striped,
            'E' => Shading::Empty,
            _ => return Err(invalid()),
        };
        Ok(Card::new(number, shape, color, shading))
    }
}
