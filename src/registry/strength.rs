//! Password strength classification
//!
//! Partitions characters into four classes and decides whether a password
//! satisfies the length and character-variety rules.

use std::fmt;

/// Minimum number of characters for a strong password.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Outcome of classifying a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthVerdict {
    Strong,
    Weak,
}

impl StrengthVerdict {
    pub fn is_strong(self) -> bool {
        self == StrengthVerdict::Strong
    }
}

/// Exhaustive ASCII-based partition of characters.
///
/// Anything that is not an ASCII letter or digit falls into `Other`,
/// including whitespace and non-ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            CharClass::Upper
        } else if c.is_ascii_lowercase() {
            CharClass::Lower
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// A single rule a password can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    MinLength(usize),
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::MinLength(n) => write!(f, "At least {} characters", n),
            Requirement::Uppercase => write!(f, "At least one uppercase letter"),
            Requirement::Lowercase => write!(f, "At least one lowercase letter"),
            Requirement::Digit => write!(f, "At least one digit"),
            Requirement::Symbol => write!(f, "At least one symbol"),
        }
    }
}

/// Verdict plus every requirement the password is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub verdict: StrengthVerdict,
    pub missing: Vec<Requirement>,
}

/// Classification rule parameterised by minimum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthPolicy {
    pub min_length: usize,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Which of the four character classes appear in a password.
#[derive(Debug, Default, Clone, Copy)]
struct ClassFlags {
    upper: bool,
    lower: bool,
    digit: bool,
    other: bool,
}

impl ClassFlags {
    fn scan(password: &str) -> Self {
        let mut flags = Self::default();
        for c in password.chars() {
            match CharClass::of(c) {
                CharClass::Upper => flags.upper = true,
                CharClass::Lower => flags.lower = true,
                CharClass::Digit => flags.digit = true,
                CharClass::Other => flags.other = true,
            }
        }
        flags
    }

    fn all(&self) -> bool {
        self.upper && self.lower && self.digit && self.other
    }
}

impl StrengthPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Returns `Strong` only when the password is long enough and contains
    /// an uppercase letter, a lowercase letter, a digit and a symbol.
    pub fn classify(&self, password: &str) -> StrengthVerdict {
        if password.chars().count() < self.min_length {
            return StrengthVerdict::Weak;
        }

        if ClassFlags::scan(password).all() {
            StrengthVerdict::Strong
        } else {
            StrengthVerdict::Weak
        }
    }

    /// Like [`classify`](Self::classify), but lists every failed requirement.
    pub fn assess(&self, password: &str) -> StrengthReport {
        let flags = ClassFlags::scan(password);
        let mut missing = Vec::new();

        if password.chars().count() < self.min_length {
            missing.push(Requirement::MinLength(self.min_length));
        }
        if !flags.upper {
            missing.push(Requirement::Uppercase);
        }
        if !flags.lower {
            missing.push(Requirement::Lowercase);
        }
        if !flags.digit {
            missing.push(Requirement::Digit);
        }
        if !flags.other {
            missing.push(Requirement::Symbol);
        }

        let verdict = if missing.is_empty() {
            StrengthVerdict::Strong
        } else {
            StrengthVerdict::Weak
        };

        StrengthReport { verdict, missing }
    }
}

/// Classifies a password with the default policy.
pub fn classify(password: &str) -> StrengthVerdict {
    StrengthPolicy::default().classify(password)
}

/// Assesses a password with the default policy.
pub fn assess(password: &str) -> StrengthReport {
    StrengthPolicy::default().assess(password)
}
