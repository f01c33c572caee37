use core::fmt::{self, Display, Formatter};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Element of the prime field `GF(p)`.
///
/// The modulus travels with the element, so elements of fields picked at
/// runtime can be mixed freely; arithmetic between elements of different
/// moduli fails with [`CurveError::ModulusMismatch`]. The stored value is
/// always the canonical representative in `[0, p)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFieldElement")]
pub struct PrimeFieldElement {
    #[serde(with = "crate::serde_decimal::biguint")]
    value: BigUint,
    #[serde(with = "crate::serde_decimal::biguint")]
    prime: BigUint,
}

// Untrusted input is reduced through `PrimeFieldElement::new`.
#[derive(Deserialize)]
struct RawFieldElement {
    #[serde(with = "crate::serde_decimal::biguint")]
    value: BigUint,
    #[serde(with = "crate::serde_decimal::biguint")]
    prime: BigUint,
}

impl TryFrom<RawFieldElement> for PrimeFieldElement {
    type Error = CurveError;

    fn try_from(raw: RawFieldElement) -> Result<Self, CurveError> {
        Self::new(raw.value, &raw.prime)
    }
}

impl PrimeFieldElement {
    /// Reduce `value` modulo `prime`. Negative values wrap around.
    pub fn new(value: impl Into<BigInt>, prime: &BigUint) -> Result<Self, CurveError> {
        if *prime < BigUint::from(2u32) {
            return Err(CurveError::InvalidCoordinate(format!(
                "modulus must be at least 2, got {prime}"
            )));
        }
        let value: BigInt = value.into();
        let modulus = BigInt::from(prime.clone());
        let (_, value) = value.mod_floor(&modulus).into_parts();
        Ok(Self {
            value,
            prime: prime.clone(),
        })
    }

    pub fn zero(prime: &BigUint) -> Result<Self, CurveError> {
        Self::new(BigInt::zero(), prime)
    }

    pub fn one(prime: &BigUint) -> Result<Self, CurveError> {
        Self::new(BigInt::one(), prime)
    }

    // `value` is already reduced modulo `self.prime`.
    #[inline]
    fn with_value(&self, value: BigUint) -> Self {
        Self {
            value,
            prime: self.prime.clone(),
        }
    }

    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    #[inline]
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The canonical representative as a signed integer.
    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.value.clone())
    }

    fn check_modulus(&self, other: &Self) -> Result<(), CurveError> {
        if self.prime == other.prime {
            Ok(())
        } else {
            Err(CurveError::ModulusMismatch {
                left: self.prime.clone(),
                right: other.prime.clone(),
            })
        }
    }

    pub fn add(&self, other: &Self) -> Result<Self, CurveError> {
        self.check_modulus(other)?;
        Ok(self.with_value((&self.value + &other.value) % &self.prime))
    }

    pub fn sub(&self, other: &Self) -> Result<Self, CurveError> {
        self.check_modulus(other)?;
        Ok(self.with_value((&self.value + &self.prime - &other.value) % &self.prime))
    }

    pub fn mul(&self, other: &Self) -> Result<Self, CurveError> {
        self.check_modulus(other)?;
        Ok(self.with_value((&self.value * &other.value) % &self.prime))
    }

    /// Multiplication by the inverse of `other`.
    pub fn div(&self, other: &Self) -> Result<Self, CurveError> {
        self.check_modulus(other)?;
        self.mul(&other.inverse()?)
    }

    pub fn neg(&self) -> Self {
        self.with_value((&self.prime - &self.value) % &self.prime)
    }

    pub fn square(&self) -> Self {
        self.with_value((&self.value * &self.value) % &self.prime)
    }

    /// Multiply by a small integer constant, e.g. the `3` and `2` of the tangent slope.
    pub fn mul_u64(&self, k: u64) -> Self {
        self.with_value((&self.value * BigUint::from(k)) % &self.prime)
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    pub fn inverse(&self) -> Result<Self, CurveError> {
        if self.is_zero() {
            return Err(CurveError::DivisionByZero {
                prime: self.prime.clone(),
            });
        }

        let modulus = BigInt::from(self.prime.clone());
        let egcd = self.to_bigint().extended_gcd(&modulus);
        if !egcd.gcd.is_one() {
            return Err(CurveError::NotInvertible {
                value: self.value.clone(),
                prime: self.prime.clone(),
            });
        }

        let (_, inverse) = egcd.x.mod_floor(&modulus).into_parts();
        Ok(self.with_value(inverse))
    }
}

impl Display for PrimeFieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value, f)
    }
}
