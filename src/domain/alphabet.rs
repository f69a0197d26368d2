// ============================================================
// Layer 3 — Alphabet Domain Type
// ============================================================
// The fixed, ordered set of characters the encoder recognises.
// A character's position in the sequence is its row in the
// one-hot matrix.
//
// The position map is built once at construction so every
// lookup during encoding is a single hash lookup instead of a
// scan over the alphabet string.
//
// Duplicate characters keep the position of their FIRST
// occurrence, but every occurrence still counts towards len()
// (and therefore towards the number of matrix rows).

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Characters in encoding order
    chars: Vec<char>,

    /// char → first position in `chars`
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from a string; each char is one symbol.
    pub fn new(symbols: &str) -> Self {
        let chars: Vec<char> = symbols.chars().collect();

        let mut positions = HashMap::with_capacity(chars.len());
        for (i, &c) in chars.iter().enumerate() {
            positions.entry(c).or_insert(i);
        }

        Self { chars, positions }
    }

    /// Build an alphabet by concatenating a list of strings,
    /// the way the JSON alphabet file is read.
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined: String = symbols
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect();
        Self::new(&joined)
    }

    /// Number of symbols, duplicates included
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Position of `c`, or None if the character is not recognised
    pub fn position(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    /// Character stored at `index`
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Characters that appear more than once, in first-seen order
    pub fn duplicates(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for (i, &c) in self.chars.iter().enumerate() {
            if self.positions[&c] != i && !seen.contains(&c) {
                seen.push(c);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_follow_order() {
        let a = Alphabet::new("abc");
        assert_eq!(a.len(), 3);
        assert_eq!(a.position('a'), Some(0));
        assert_eq!(a.position('c'), Some(2));
        assert_eq!(a.position('z'), None);
    }

    #[test]
    fn test_from_symbols_concatenates() {
        let a = Alphabet::from_symbols(["a", "b", "-,"]);
        assert_eq!(a.len(), 4);
        assert_eq!(a.position('-'), Some(2));
        assert_eq!(a.position(','), Some(3));
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let a = Alphabet::new("abca");
        assert_eq!(a.len(), 4);
        assert_eq!(a.position('a'), Some(0));
        assert_eq!(a.duplicates(), vec!['a']);
    }

    #[test]
    fn test_char_at_round_trips_position() {
        let a = Alphabet::new("xyz");
        assert_eq!(a.char_at(1), Some('y'));
        assert_eq!(a.char_at(3), None);
    }

    #[test]
    fn test_empty_alphabet() {
        let a = Alphabet::new("");
        assert!(a.is_empty());
        assert_eq!(a.position('a'), None);
    }
}
