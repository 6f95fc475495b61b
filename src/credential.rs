//! Credential record: `N*r*p*keyLen*saltHex*digestHex`.

use crate::error::{CrackError, Result};
use crate::oracle::derive_key;
use rand::RngCore;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const FIELD_SEPARATOR: char = '*';
const FIELD_COUNT: usize = 6;

/// Bytes of random salt in a freshly generated record
pub const SALT_LEN: usize = 16;

/// The hash being attacked, decoded from its record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCredential {
    /// CPU/memory cost, expected to be a power of two
    pub n: u64,
    /// Block size
    pub r: u32,
    /// Parallelization
    pub p: u32,
    /// Derived key length in bytes
    pub key_len: usize,
    pub salt: Vec<u8>,
    pub digest: Vec<u8>,
}

impl TargetCredential {
    pub fn new(n: u64, r: u32, p: u32, key_len: usize, salt: Vec<u8>, digest: Vec<u8>) -> Self {
        Self {
            n,
            r,
            p,
            key_len,
            salt,
            digest,
        }
    }

    /// Derive a new record for `password` under a random salt
    pub fn generate(password: &[u8], n: u64, r: u32, p: u32, key_len: usize) -> Result<Self> {
        let mut salt = vec![0u8; SALT_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        let digest = derive_key(password, &salt, n, r, p, key_len)?;
        Ok(Self::new(n, r, p, key_len, salt, digest))
    }

    /// Read and parse a record file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        content.parse()
    }

    /// Write the record to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| CrackError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_hex(field: &'static str, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|source| CrackError::InvalidHex { field, source })
}

impl FromStr for TargetCredential {
    type Err = CrackError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(FIELD_SEPARATOR).collect();
        if parts.len() != FIELD_COUNT {
            return Err(CrackError::FieldCount {
                expected: FIELD_COUNT,
                found: parts.len(),
            });
        }

        Ok(Self {
            n: parse_number("N", parts[0])?,
            r: parse_number("r", parts[1])?,
            p: parse_number("p", parts[2])?,
            key_len: parse_number("keyLen", parts[3])?,
            salt: parse_hex("salt", parts[4])?,
            digest: parse_hex("hash", parts[5])?,
        })
    }
}

impl std::fmt::Display for TargetCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{n}{sep}{r}{sep}{p}{sep}{len}{sep}{salt}{sep}{digest}",
            n = self.n,
            r = self.r,
            p = self.p,
            len = self.key_len,
            salt = hex::encode(&self.salt),
            digest = hex::encode(&self.digest),
            sep = FIELD_SEPARATOR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = "16384*8*1*32*00112233445566778899aabbccddeeff*deadbeef";

    #[test]
    fn test_parse_record() {
        let cred: TargetCredential = RECORD.parse().unwrap();
        assert_eq!(cred.n, 16384);
        assert_eq!(cred.r, 8);
        assert_eq!(cred.p, 1);
        assert_eq!(cred.key_len, 32);
        assert_eq!(cred.salt.len(), 16);
        assert_eq!(cred.digest, vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let cred: TargetCredential = format!("  {}\n", RECORD).parse().unwrap();
        assert_eq!(cred.to_string(), RECORD);
    }

    #[test]
    fn test_wrong_field_count() {
        let err = "16384*8*1*32*00".parse::<TargetCredential>().unwrap_err();
        assert!(matches!(err, CrackError::FieldCount { expected: 6, found: 5 }));

        let err = format!("{}*extra", RECORD)
            .parse::<TargetCredential>()
            .unwrap_err();
        assert!(matches!(err, CrackError::FieldCount { found: 7, .. }));
    }

    #[test]
    fn test_non_numeric_field_is_named() {
        let err = "16384*eight*1*32*00*00".parse::<TargetCredential>().unwrap_err();
        match err {
            CrackError::InvalidNumber { field, value } => {
                assert_eq!(field, "r");
                assert_eq!(value, "eight");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_negative_number_rejected() {
        let err = "-1*8*1*32*00*00".parse::<TargetCredential>().unwrap_err();
        assert!(matches!(err, CrackError::InvalidNumber { field: "N", .. }));
    }

    #[test]
    fn test_invalid_hex() {
        let err = "16384*8*1*32*zz*00".parse::<TargetCredential>().unwrap_err();
        assert!(matches!(err, CrackError::InvalidHex { field: "salt", .. }));

        let err = "16384*8*1*32*00*abc".parse::<TargetCredential>().unwrap_err();
        assert!(matches!(err, CrackError::InvalidHex { field: "hash", .. }));
        assert!(err.to_string().starts_with("invalid hash"));
    }

    #[test]
    fn test_generate_uses_fresh_salt() {
        let a = TargetCredential::generate(b"pw", 16, 1, 1, 24).unwrap();
        let b = TargetCredential::generate(b"pw", 16, 1, 1, 24).unwrap();
        assert_eq!(a.salt.len(), SALT_LEN);
        assert_eq!(a.digest.len(), 24);
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.digest, b.digest);
    }

    #[test]
    fn test_generate_rejects_invalid_cost() {
        let err = TargetCredential::generate(b"pw", 1000, 1, 1, 32).unwrap_err();
        assert!(matches!(err, CrackError::InvalidParams(_)));
    }

    #[test]
    fn test_display_round_trip() {
        let cred = TargetCredential::new(16, 1, 1, 4, vec![1, 2, 3], vec![0xab; 4]);
        let parsed: TargetCredential = cred.to_string().parse().unwrap();
        assert_eq!(parsed, cred);
        assert_eq!(cred.to_string(), "16*1*1*4*010203*abababab");
    }
}
