use crate::cards::{all_colors, all_numbers, all_shadings, all_shapes, Card};

/// One of the four card attributes compared by the Set rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Attribute {
    Number,
    Shape,
    Color,
    Shading,
}

impl Attribute {
    pub fn all() -> [Attribute; 4] {
        [
            Attribute::Number,
            Attribute::Shape,
            Attribute::Color,
            Attribute::Shading,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Number => "number",
            Attribute::Shape => "shape",
            Attribute::Color => "color",
            Attribute::Shading => "shading",
        }
    }

    fn index_of(self, card: &Card) -> usize {
        match self {
            Attribute::Number => card.number as usize - 1,
            Attribute::Shape => card.shape as usize,
            Attribute::Color => card.color as usize,
            Attribute::Shading => card.shading as usize,
        }
    }
}

/// How three cards relate on a single attribute.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verdict {
    AllSame,
    AllDifferent,
    /// Exactly two of the three cards match; this breaks a Set.
    TwoMatch,
}

impl Verdict {
    pub fn is_ok(self) -> bool {
        !matches!(self, Verdict::TwoMatch)
    }
}

fn verdict<T: Eq>(x: T, y: T, z: T) -> Verdict {
    if x == y && y == z {
        Verdict::AllSame
    } else if x != y && y != z && x != z {
        Verdict::AllDifferent
    } else {
        Verdict::TwoMatch
    }
}

/// Compares three cards attribute by attribute.
pub fn attribute_verdicts(a: &Card, b: &Card, c: &Card) -> [(Attribute, Verdict); 4] {
    Attribute::all().map(|attr| {
        let v = verdict(attr.index_of(a), attr.index_of(b), attr.index_of(c));
        (attr, v)
    })
}

/// Returns `true` when, for every attribute, the three cards are either all the
/// same or all different.
///
/// The result does not depend on argument order.
///
/// ```
/// use dailyset_engine::cards::{Card, Color, Number, Shading, Shape};
/// use dailyset_engine::rules::is_valid_set;
///
/// let card = |n, s| Card::new(n, s, Color::Red, Shading::Solid);
/// assert!(is_valid_set(
///     &card(Number::One, Shape::Diamond),
///     &card(Number::Two, Shape::Diamond),
///     &card(Number::Three, Shape::Diamond),
/// ));
/// assert!(!is_valid_set(
///     &card(Number::One, Shape::Diamond),
///     &card(Number::Two, Shape::Oval),
///     &card(Number::Three, Shape::Diamond),
/// ));
/// ```
pub fn is_valid_set(a: &Card, b: &Card, c: &Card) -> bool {
    verdict(a.number, b.number, c.number).is_ok()
        && verdict(a.shape, b.shape, c.shape).is_ok()
        && verdict(a.color, b.color, c.color).is_ok()
        && verdict(a.shading, b.shading, c.shading).is_ok()
}

/// The unique card that forms a Set with `a` and `b`.
///
/// When `a == b` the answer is that same card, which cannot appear twice on a
/// board, so callers looking for hints should pass distinct cards.
pub fn third_card(a: &Card, b: &Card) -> Card {
    // (6 - x - y) % 3 is the missing value, or x itself when x == y
    let complete = |attr: Attribute| (6 - attr.index_of(a) - attr.index_of(b)) % 3;
    Card::new(
        all_numbers()[complete(Attribute::Number)],
        all_shapes()[complete(Attribute::Shape)],
        all_colors()[complete(Attribute::Color)],
        all_shadings()[complete(Attribute::Shading)],
    )
}
