//! Truncated p-adic integers.

use core::fmt::{self, Display, Formatter};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// A p-adic integer known to finitely many digits.
///
/// Digits are stored least significant first: `[c0, c1, ..., c(n-1)]` stands
/// for `c0 + c1*p + ... + c(n-1)*p^(n-1) + O(p^n)`. Only non-negative
/// valuations are representable and no arithmetic is defined.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PAdic {
    #[serde(with = "crate::serde_decimal::biguint_vec")]
    digits: Vec<BigUint>,
}

impl PAdic {
    pub fn new(digits: Vec<BigUint>) -> Self {
        PAdic { digits }
    }

    #[inline]
    pub fn digits(&self) -> &[BigUint] {
        &self.digits
    }

    /// Number of known digits.
    #[inline]
    pub fn precision(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl From<Vec<u64>> for PAdic {
    fn from(digits: Vec<u64>) -> Self {
        PAdic::new(digits.into_iter().map(BigUint::from).collect())
    }
}

impl Display for PAdic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.digits.split_first() else {
            return write!(f, "0");
        };

        write!(f, "{first}")?;
        for (i, digit) in rest.iter().enumerate() {
            write!(f, " + {digit}p^{}", i + 1)?;
        }
        write!(f, " + O({})", self.precision())
    }
}
