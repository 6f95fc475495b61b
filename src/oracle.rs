//! Verification oracle around the scrypt key-derivation function.

use crate::credential::TargetCredential;
use crate::error::{CrackError, Result};
use scrypt::Params;

/// Decides whether a candidate is the target's password
pub trait Verifier: Send + Sync {
    fn verify(&self, candidate: &[u8]) -> bool;
}

impl<F> Verifier for F
where
    F: Fn(&[u8]) -> bool + Send + Sync,
{
    fn verify(&self, candidate: &[u8]) -> bool {
        self(candidate)
    }
}

/// scrypt takes log2(N); only powers of two above one are representable
fn log2_cost(n: u64) -> Option<u8> {
    if n < 2 || !n.is_power_of_two() {
        return None;
    }
    Some(n.trailing_zeros() as u8)
}

fn build_params(n: u64, r: u32, p: u32) -> Result<Params> {
    let log_n = log2_cost(n).ok_or_else(|| {
        CrackError::InvalidParams(format!("N={} must be a power of 2 above 1", n))
    })?;
    Params::new(log_n, r, p, Params::RECOMMENDED_LEN)
        .map_err(|err| CrackError::InvalidParams(format!("N={}, r={}, p={}: {}", n, r, p, err)))
}

/// One-shot scrypt derivation of `key_len` bytes
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    n: u64,
    r: u32,
    p: u32,
    key_len: usize,
) -> Result<Vec<u8>> {
    let params = build_params(n, r, p)?;
    let mut output = vec![0u8; key_len];
    scrypt::scrypt(password, salt, &params, &mut output)
        .map_err(|err| CrackError::InvalidParams(format!("keyLen={}: {}", key_len, err)))?;
    Ok(output)
}

/// Recomputes scrypt for every candidate and compares against the digest.
///
/// Parameters that scrypt rejects make every candidate a non-match.
#[derive(Debug, Clone)]
pub struct ScryptOracle {
    target: TargetCredential,
    params: Option<Params>,
}

impl ScryptOracle {
    pub fn new(target: TargetCredential) -> Self {
        let params = build_params(target.n, target.r, target.p).ok();
        Self { target, params }
    }

    /// False when no candidate can ever match
    pub fn params_valid(&self) -> bool {
        self.params.is_some() && self.target.key_len > 0
    }
}

impl Verifier for ScryptOracle {
    fn verify(&self, candidate: &[u8]) -> bool {
        let Some(params) = &self.params else {
            return false;
        };
        let mut output = vec![0u8; self.target.key_len];
        match scrypt::scrypt(candidate, &self.target.salt, params, &mut output) {
            Ok(()) => output == self.target.digest,
            Err(_) => false,
        }
    }
}
