//! Russian alphabet tables and source-word validation.

use std::collections::HashSet;

lazy_static::lazy_static! {
    /// Lowercase Russian letters.
    static ref RUS_LETTERS: HashSet<char> =
        "абвгдеёжзийклмнопрстуфхцчшщъыьэюя".chars().collect();

    /// Lowercase Russian vowels.
    static ref RUS_VOWELS: HashSet<char> = "аоуэыияёюе".chars().collect();
}

/// True if `c` is a lowercase Russian letter.
pub fn is_russian_letter(c: char) -> bool {
    RUS_LETTERS.contains(&c)
}

/// True if `c` is a Russian vowel.
pub fn is_russian_vowel(c: char) -> bool {
    RUS_VOWELS.contains(&c)
}

/// Remove accent characters (`'` and `` ` ``) from a word.
pub fn strip_accents(word: &str) -> String {
    word.chars().filter(|c| *c != '\'' && *c != '`').collect()
}

/// Check that every character of `word`, case-insensitively, is a Russian
/// letter or a hyphen, and that at least one letter is present.
pub fn is_source_word(word: &str) -> bool {
    let mut has_letter = false;
    for c in word.to_lowercase().chars() {
        if is_russian_letter(c) {
            has_letter = true;
        } else if c != '-' {
            return false;
        }
    }
    has_letter
}

/// Number of vowels in `word`.
pub fn vowel_count(word: &str) -> usize {
    word.chars().filter(|c| is_russian_vowel(*c)).count()
}
