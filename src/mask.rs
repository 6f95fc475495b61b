use crate::charset::{charset_for, CharClass};
use crate::error::{CrackError, Result};
use crate::types::SearchSpace;

/// Ordered per-position character class specification
///
/// Symbols are kept as typed by the operator. Unknown symbols survive
/// parsing; the generator refuses them when it resolves the alphabets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    symbols: Vec<char>,
}

impl Mask {
    /// Parse a mask string. Only emptiness is rejected here.
    pub fn parse(mask: &str) -> Result<Self> {
        let symbols: Vec<char> = mask.chars().collect();
        if symbols.is_empty() {
            return Err(CrackError::EmptyMask);
        }
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Length of every candidate this mask produces
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Reject the mask if any symbol has no character class
    pub fn validate(&self) -> Result<()> {
        self.classes().map(|_| ())
    }

    pub fn classes(&self) -> Result<Vec<CharClass>> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                CharClass::from_symbol(symbol)
                    .ok_or(CrackError::UnknownMaskSymbol { symbol, position })
            })
            .collect()
    }

    /// Per-position alphabets, failing on the first unknown symbol
    pub fn resolve(&self) -> Result<Vec<&'static [u8]>> {
        Ok(self.classes()?.iter().map(|class| class.alphabet()).collect())
    }

    /// Product of alphabet sizes over the recognized positions
    pub fn search_space(&self) -> SearchSpace {
        let total = self
            .symbols
            .iter()
            .filter_map(|&symbol| charset_for(symbol))
            .fold(1u128, |acc, alphabet| acc.saturating_mul(alphabet.len() as u128));
        SearchSpace::new(total)
    }
}

impl std::fmt::Display for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Mask {
    type Err = CrackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask_rejected() {
        assert!(matches!(Mask::parse(""), Err(CrackError::EmptyMask)));
    }

    #[test]
    fn test_search_space() {
        assert_eq!(Mask::parse("dd").unwrap().search_space().as_u128(), 100);
        assert_eq!(Mask::parse("ld").unwrap().search_space().as_u128(), 260);
        assert_eq!(
            Mask::parse("aaadd").unwrap().search_space().as_u128(),
            62 * 62 * 62 * 10 * 10
        );
    }

    #[test]
    fn test_search_space_saturates() {
        let mask = Mask::parse(&"a".repeat(40)).unwrap();
        assert_eq!(mask.search_space().as_u128(), u128::MAX);
    }

    #[test]
    fn test_unknown_symbol_excluded_from_space() {
        let mask = Mask::parse("dxd").unwrap();
        assert_eq!(mask.search_space().as_u128(), 100);
        match mask.validate() {
            Err(CrackError::UnknownMaskSymbol { symbol, position }) => {
                assert_eq!(symbol, 'x');
                assert_eq!(position, 1);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_display_keeps_original_text() {
        let mask: Mask = "ulds".parse().unwrap();
        assert_eq!(mask.to_string(), "ulds");
        assert_eq!(mask.len(), 4);
        assert!(mask.validate().is_ok());
    }
}
