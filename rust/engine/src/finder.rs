//! Exhaustive Set search over a board.
//!
//! Boards are small (12 cards gives 220 triples), so every combination of
//! positions is checked rather than pruning the search.

use crate::cards::Card;
use crate::rules::is_valid_set;

/// Three board positions, always stored in ascending order.
pub type Triple = [usize; 3];

/// Returns every triple of positions `i < j < k` whose cards form a Set,
/// in ascending lexicographic order.
///
/// The order is relied on for labelling: the first triple is Set "A", the
/// second "B", and so on.
pub fn find_all_sets(board: &[Card]) -> Vec<Triple> {
    let n = board.len();
    let mut sets = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                if is_valid_set(&board[i], &board[j], &board[k]) {
                    sets.push([i, j, k]);
                }
            }
        }
    }
    sets
}

pub fn count_sets(board: &[Card]) -> usize {
    find_all_sets(board).len()
}

/// Key identifying a triple regardless of the order the positions were picked in.
///
/// ```
/// use dailyset_engine::finder::set_key;
/// assert_eq!(set_key([7, 2, 4]), "2-4-7");
/// ```
pub fn set_key(mut triple: Triple) -> String {
    triple.sort_unstable();
    format!("{}-{}-{}", triple[0], triple[1], triple[2])
}

/// Parses a key produced by [`set_key`].
pub fn parse_set_key(key: &str) -> Option<Triple> {
    let mut parts = key.split('-').map(|p| p.parse::<usize>().ok());
    let triple = [parts.next()??, parts.next()??, parts.next()??];
    if parts.next().is_some() {
        return None;
    }
    Some(triple)
}

/// Spreadsheet-style label for the set at `index`: A..Z, then AA, AB, ...
pub fn set_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}
