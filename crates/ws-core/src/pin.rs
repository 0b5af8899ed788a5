//! Identification PIN policy.
//!
//! A valid PIN is exactly six decimal digits that are neither all the same
//! nor a run that ascends or descends by one at every step.

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in an identification PIN.
pub const PIN_LENGTH: usize = 6;

static PIN_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9]{{{PIN_LENGTH}}}$")).expect("PIN format regex is valid")
});

/// Candidate PIN as received at the boundary.
///
/// Numbers are coerced to their decimal string before validation, so `12345`
/// (five digits) is rejected even if the user meant `012345`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinInput(String);

impl PinInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PinInput {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PinInput {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&String> for PinInput {
    fn from(s: &String) -> Self {
        Self(s.clone())
    }
}

macro_rules! impl_pin_input_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PinInput {
                fn from(n: $ty) -> Self {
                    Self(n.to_string())
                }
            }
        )*
    };
}

impl_pin_input_from_int!(u32, u64, i32, i64, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SequenceOrder {
    Ascending,
    Descending,
}

impl SequenceOrder {
    fn step(self) -> i8 {
        match self {
            SequenceOrder::Ascending => 1,
            SequenceOrder::Descending => -1,
        }
    }
}

fn is_sequence(digits: &[i8], order: SequenceOrder) -> bool {
    digits
        .windows(2)
        .all(|pair| pair[1] == pair[0] + order.step())
}

/// Check whether `input` is an acceptable identification PIN.
///
/// Never fails: malformed input simply yields `false`.
pub fn is_valid_pin(input: impl Into<PinInput>) -> bool {
    let input = input.into();
    let candidate = input.as_str();

    if !PIN_FORMAT.is_match(candidate) {
        return false;
    }

    let digits: Vec<i8> = candidate.bytes().map(|b| (b - b'0') as i8).collect();

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    !(is_sequence(&digits, SequenceOrder::Ascending)
        || is_sequence(&digits, SequenceOrder::Descending))
}
