use itertools::Itertools;

use crate::letter::{Letter, LETTER_COUNT, LETTER_INFO};
use crate::lexicon::Lexicon;
use crate::rack::Rack;
use crate::search::find_words;

/// Per-letter point values. Swap the table to score a different edition
/// without touching the search core.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LetterValues([u8; LETTER_COUNT]);

impl LetterValues {
    /// The standard English edition values.
    pub const STANDARD: LetterValues = {
        let mut values = [0; LETTER_COUNT];
        let mut i = 0;
        while i < LETTER_COUNT {
            values[i] = LETTER_INFO[i].score();
            i += 1;
        }
        LetterValues(values)
    };

    pub const fn new(values: [u8; LETTER_COUNT]) -> LetterValues {
        LetterValues(values)
    }

    pub fn value(&self, letter: Letter) -> u8 {
        self.0[letter.index() as usize]
    }

    /// Sum of letter values; characters outside the alphabet score zero.
    pub fn word_score(&self, word: &str) -> u32 {
        word.chars()
            .filter_map(|c| Letter::from_char(c).ok())
            .map(|letter| self.value(letter) as u32)
            .sum()
    }
}

/// Every word buildable from `rack`, highest score first, ties broken
/// alphabetically.
///
/// The comparator is a total order over distinct words, so the output is
/// deterministic for a given lexicon and rack.
pub fn ranked_words(lexicon: &Lexicon, rack: Rack, values: &LetterValues) -> Vec<String> {
    find_words(lexicon, rack)
        .into_iter()
        .sorted_by(|a, b| {
            values
                .word_score(b)
                .cmp(&values.word_score(a))
                .then_with(|| a.cmp(b))
        })
        .collect()
}
