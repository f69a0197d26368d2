// ============================================================
// Layer 4 — One-Hot Character Encoder
// ============================================================
// Converts a text into an (alphabet_size × max_length) binary
// matrix, reading the text BACKWARDS:
//
//   alphabet = "ab", max_length = 3, text = "ba"
//   reversed = "ab"
//
//              col 0   col 1   col 2
//     row 'a'    1       0       0
//     row 'b'    0       1       0
//
// Rules:
//   - column j holds the j-th character of the reversed text
//   - characters outside the alphabet leave their column empty
//   - only the first max_length reversed characters are kept,
//     i.e. long texts lose their BEGINNING, not their end
//   - short texts leave the trailing columns all zero
//
// Reference: Zhang, Zhao & LeCun (2015) "Character-level
//            Convolutional Networks for Text Classification"

use crate::domain::{alphabet::Alphabet, one_hot::OneHotMatrix, traits::TextEncoder};

#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    alphabet: Alphabet,
    max_length: usize,
}

impl OneHotEncoder {
    pub fn new(alphabet: Alphabet, max_length: usize) -> Self {
        Self {
            alphabet,
            max_length,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Map each column back to its character (None = empty column).
    /// The result reads in reversed-text order, like the matrix.
    pub fn decode_columns(&self, matrix: &OneHotMatrix) -> Vec<Option<char>> {
        (0..matrix.cols())
            .map(|col| {
                matrix
                    .hot_row(col)
                    .and_then(|row| self.alphabet.char_at(row))
            })
            .collect()
    }
}

impl TextEncoder for OneHotEncoder {
    fn encode(&self, text: &str) -> OneHotMatrix {
        let mut matrix = OneHotMatrix::zeros(self.alphabet.len(), self.max_length);

        for (col, c) in text.chars().rev().take(self.max_length).enumerate() {
            if let Some(row) = self.alphabet.position(c) {
                matrix.set(row, col);
            }
        }

        matrix
    }

    fn shape(&self) -> [usize; 2] {
        [self.alphabet.len(), self.max_length]
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn encoder(alphabet: &str, max_length: usize) -> OneHotEncoder {
        OneHotEncoder::new(Alphabet::new(alphabet), max_length)
    }

    #[test]
    fn test_reverse_order_example() {
        let e = encoder("ab", 3);
        let m = e.encode("ba");

        assert_eq!(m.shape(), [2, 3]);
        // column 0 = 'a', column 1 = 'b', column 2 empty
        assert_eq!(m.hot_row(0), Some(0));
        assert_eq!(m.hot_row(1), Some(1));
        assert_eq!(m.hot_row(2), None);
        assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_unknown_chars_write_nothing() {
        let e = encoder("abc", 5);
        let m = e.encode("a?c!");

        // reversed: "!c?a"
        assert_eq!(m.hot_row(0), None);
        assert_eq!(m.hot_row(1), Some(2));
        assert_eq!(m.hot_row(2), None);
        assert_eq!(m.hot_row(3), Some(0));
        assert_eq!(m.populated_columns(), 2);
    }

    #[test]
    fn test_first_char_lands_in_last_used_column() {
        let e = encoder("abcdefghijklmnopqrstuvwxyz", 10);
        let text = "hello";
        let m = e.encode(text);

        let last = text.chars().count() - 1;
        assert_eq!(m.hot_row(last), e.alphabet().position('h'));
        assert_eq!(m.populated_columns(), 5);
        assert!((last + 1..10).all(|c| m.hot_row(c).is_none()));
    }

    #[test]
    fn test_long_text_keeps_the_tail() {
        let e = encoder("abcdef", 3);
        let m = e.encode("abcdef");

        // reversed "fedcba" truncated to "fed"
        let decoded: String = e.decode_columns(&m).into_iter().flatten().collect();
        assert_eq!(decoded, "fed");
        assert_eq!(m.cols(), 3);
    }

    #[test]
    fn test_at_most_one_hot_per_column_and_binary() {
        let e = encoder("abcab", 8);
        let m = e.encode("cabbage!");

        for col in 0..m.cols() {
            let hot = (0..m.rows())
                .filter(|&r| m.get(r, col) == Some(1.0))
                .count();
            assert!(hot <= 1);
        }
        assert!(m.as_slice().iter().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        let e = encoder("ab", 4);
        assert_eq!(e.encode("").populated_columns(), 0);
    }

    #[test]
    fn test_multibyte_chars_are_single_columns() {
        let e = encoder("éa", 4);
        let m = e.encode("aé");
        assert_eq!(m.hot_row(0), Some(0));
        assert_eq!(m.hot_row(1), Some(1));
    }

    #[test]
    fn test_shape_matches_matrix() {
        let e = encoder("xyz", 7);
        assert_eq!(e.shape(), e.encode("zyx").shape());
    }
}
