use serde::{Deserialize, Serialize};

const KEYBOARD_ROWS: [&str; 4] = ["qwertyuiop", "asdfghjkl", "zxcvbnm", "1234567890"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("password must be at least {0} characters")]
    TooShort(usize),
    #[error("password cannot exceed {0} characters")]
    TooLong(usize),
    #[error("password must contain a lowercase letter")]
    MissingLowercase,
    #[error("password must contain an uppercase letter")]
    MissingUppercase,
    #[error("password must contain a digit")]
    MissingDigit,
    #[error("password must contain a punctuation character")]
    MissingPunctuation,
    #[error("password cannot contain {0} keyboard-adjacent characters")]
    KeyboardOrder(usize),
    #[error("password cannot contain {0} sequential letters")]
    ContinuousLetter(usize),
    #[error("password cannot contain {0} sequential digits")]
    ContinuousDigit(usize),
    #[error("password cannot repeat one character {0} times in a row")]
    RepeatedSymbol(usize),
}

/// Password complexity rule. `not_continuous_count` is the window size the
/// continuity checks apply to; 0 turns them all off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordRule {
    pub min_length: usize,
    pub max_length: usize,
    pub contain_lowercase: bool,
    pub contain_uppercase: bool,
    pub contain_digit: bool,
    pub contain_punctuation: bool,
    pub not_continuous_count: usize,
    pub not_keyboard_order: bool,
    pub not_continuous_letter: bool,
    pub not_continuous_digit: bool,
    pub not_repeated_symbol: bool,
}

impl Default for PasswordRule {
    fn default() -> Self {
        Self {
            min_length: 12,
            max_length: 32,
            contain_lowercase: true,
            contain_uppercase: true,
            contain_digit: true,
            contain_punctuation: true,
            not_continuous_count: 0,
            not_keyboard_order: false,
            not_continuous_letter: false,
            not_continuous_digit: false,
            not_repeated_symbol: false,
        }
    }
}

impl PasswordRule {
    /// First violation wins: length, then character classes, then the
    /// continuity window checks.
    pub fn validate(&self, password: &str) -> Result<(), PasswordError> {
        let chars: Vec<char> = password.chars().collect();

        if chars.len() < self.min_length {
            return Err(PasswordError::TooShort(self.min_length));
        }
        if chars.len() > self.max_length {
            return Err(PasswordError::TooLong(self.max_length));
        }
        if self.contain_lowercase && !chars.iter().any(|c| c.is_ascii_lowercase()) {
            return Err(PasswordError::MissingLowercase);
        }
        if self.contain_uppercase && !chars.iter().any(|c| c.is_ascii_uppercase()) {
            return Err(PasswordError::MissingUppercase);
        }
        if self.contain_digit && !chars.iter().any(|c| c.is_ascii_digit()) {
            return Err(PasswordError::MissingDigit);
        }
        if self.contain_punctuation && !chars.iter().any(|c| c.is_ascii_punctuation()) {
            return Err(PasswordError::MissingPunctuation);
        }

        let n = self.not_continuous_count;
        if n >= 2 {
            for window in chars.windows(n) {
                if self.not_repeated_symbol && window.iter().all(|&c| c == window[0]) {
                    return Err(PasswordError::RepeatedSymbol(n));
                }
                if self.not_continuous_letter && is_sequential(window, true) {
                    return Err(PasswordError::ContinuousLetter(n));
                }
                if self.not_continuous_digit && is_sequential(window, false) {
                    return Err(PasswordError::ContinuousDigit(n));
                }
                if self.not_keyboard_order && is_keyboard_run(window) {
                    return Err(PasswordError::KeyboardOrder(n));
                }
            }
        }

        Ok(())
    }
}

/// Ascending or descending run of letters (case-insensitive) or digits.
fn is_sequential(window: &[char], letters: bool) -> bool {
    let in_class = |c: char| {
        if letters {
            c.is_ascii_alphabetic()
        } else {
            c.is_ascii_digit()
        }
    };
    if !window.iter().all(|&c| in_class(c)) {
        return false;
    }

    let codes: Vec<u32> = window
        .iter()
        .map(|c| c.to_ascii_lowercase() as u32)
        .collect();
    codes.windows(2).all(|pair| pair[1] == pair[0] + 1)
        || codes.windows(2).all(|pair| pair[0] == pair[1] + 1)
}

/// A window that reads along a keyboard row, in either direction.
fn is_keyboard_run(window: &[char]) -> bool {
    let lowered: String = window.iter().map(|c| c.to_ascii_lowercase()).collect();
    let reversed: String = lowered.chars().rev().collect();
    KEYBOARD_ROWS
        .iter()
        .any(|row| row.contains(&lowered) || row.contains(&reversed))
}
