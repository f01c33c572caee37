use num_bigint::BigUint;
use rand::Rng;

use crate::{CurveError, PrimeFieldElement};

// Extra bytes drawn beyond the modulus width keep the modular bias negligible.
const EXTRA_BYTES: usize = 8;

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R, prime: &BigUint) -> Result<Self, CurveError>;
}

impl RandomField for PrimeFieldElement {
    fn random<R: Rng + ?Sized>(rng: &mut R, prime: &BigUint) -> Result<Self, CurveError> {
        let len = (prime.bits() as usize).div_ceil(8) + EXTRA_BYTES;
        let mut bytes = vec![0u8; len];
        rng.fill(bytes.as_mut_slice());
        PrimeFieldElement::new(BigUint::from_bytes_le(&bytes), prime)
    }
}
