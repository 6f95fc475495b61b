//! Character classes addressable from a mask.
//!
//! Every class maps to a fixed, ordered alphabet. The order is the
//! enumeration order of the candidate generator.

const DIGITS: &[u8] = b"1234567890";
const LOWER: &[u8] = b"qwertyuiopasdfghjklzxcvbnm";
const UPPER: &[u8] = b"QWERTYUIOPASDFGHJKLZXCVBNM";
const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";
const ALPHANUMERIC: &[u8] = b"qwertyuiopasdfghjklzxcvbnmQWERTYUIOPASDFGHJKLZXCVBNM1234567890";

/// One mask symbol's character class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a`: letters of both cases plus digits
    All,
    /// `d`
    Digit,
    /// `l`
    Lower,
    /// `u`
    Upper,
    /// `s`: fixed punctuation set
    Special,
}

impl CharClass {
    pub const ALL: [CharClass; 5] = [
        CharClass::All,
        CharClass::Digit,
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Special,
    ];

    /// Look up the class for a mask symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'a' => Some(CharClass::All),
            'd' => Some(CharClass::Digit),
            'l' => Some(CharClass::Lower),
            'u' => Some(CharClass::Upper),
            's' => Some(CharClass::Special),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            CharClass::All => 'a',
            CharClass::Digit => 'd',
            CharClass::Lower => 'l',
            CharClass::Upper => 'u',
            CharClass::Special => 's',
        }
    }

    /// Ordered alphabet for this class
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            CharClass::All => ALPHANUMERIC,
            CharClass::Digit => DIGITS,
            CharClass::Lower => LOWER,
            CharClass::Upper => UPPER,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn size(&self) -> usize {
        self.alphabet().len()
    }
}

/// Alphabet for a raw mask symbol, `None` when the symbol is unknown
pub fn charset_for(symbol: char) -> Option<&'static [u8]> {
    CharClass::from_symbol(symbol).map(|class| class.alphabet())
}
