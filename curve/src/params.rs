//! Short Weierstrass curve parameters `y^2 = x^3 + a*x + b` over `GF(p)`.

use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::{CurveError, Point, PrimeFieldElement};

/// Parameters of a curve over a prime field.
///
/// Nothing is validated here: `prime` is not tested for primality and the
/// curve is not checked for singularity. A modulus below 2 surfaces as
/// [`CurveError::InvalidCoordinate`] as soon as a field element is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimeCurve {
    #[serde(with = "crate::serde_decimal::biguint")]
    prime: BigUint,
    #[serde(with = "crate::serde_decimal::bigint")]
    a: BigInt,
    #[serde(with = "crate::serde_decimal::bigint")]
    b: BigInt,
}

impl PrimeCurve {
    pub fn new(prime: impl Into<BigUint>, a: impl Into<BigInt>, b: impl Into<BigInt>) -> Self {
        PrimeCurve {
            prime: prime.into(),
            a: a.into(),
            b: b.into(),
        }
    }

    #[inline]
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    #[inline]
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    #[inline]
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Reduce an integer into this curve's base field.
    pub fn element(&self, value: impl Into<BigInt>) -> Result<PrimeFieldElement, CurveError> {
        PrimeFieldElement::new(value, &self.prime)
    }

    pub fn coeff_a(&self) -> Result<PrimeFieldElement, CurveError> {
        self.element(self.a.clone())
    }

    pub fn coeff_b(&self) -> Result<PrimeFieldElement, CurveError> {
        self.element(self.b.clone())
    }

    /// Check `y^2 - x^3 - a*x - b == 0` in the field.
    pub fn on_curve(
        &self,
        x: &PrimeFieldElement,
        y: &PrimeFieldElement,
    ) -> Result<bool, CurveError> {
        let y2 = y.square();
        let x3 = x.square().mul(x)?;
        let ax = self.coeff_a()?.mul(x)?;
        let rhs = x3.add(&ax)?.add(&self.coeff_b()?)?;

        Ok(y2.sub(&rhs)?.is_zero())
    }

    /// `y^2 - x^3 - a*x - b` over the integers, with `a` and `b` taken as
    /// their canonical representatives in `[0, p)`.
    pub fn integer_defect(&self, x: &BigInt, y: &BigInt) -> Result<BigInt, CurveError> {
        let a = self.coeff_a()?.to_bigint();
        let b = self.coeff_b()?.to_bigint();
        Ok(y * y - x * x * x - a * x - b)
    }
}

/// The secp256k1 curve `y^2 = x^3 + 7` and its standard generator.
pub fn secp256k1() -> Result<(Arc<PrimeCurve>, Point), CurveError> {
    const PRIME: [u32; 8] = [
        0xfffffc2f, 0xfffffffe, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
        0xffffffff,
    ];
    const GENERATOR_X: [u32; 8] = [
        0x16f81798, 0x59f2815b, 0x2dce28d9, 0x029bfcdb, 0xce870b07, 0x55a06295, 0xf9dcbbac,
        0x79be667e,
    ];
    const GENERATOR_Y: [u32; 8] = [
        0xfb10d4b8, 0x9c47d08f, 0xa6855419, 0xfd17b448, 0x0e1108a8, 0x5da4fbfc, 0x26a3c465,
        0x483ada77,
    ];

    let curve = Arc::new(PrimeCurve::new(BigUint::from_slice(&PRIME), 0, 7));
    let generator = Point::affine(
        BigUint::from_slice(&GENERATOR_X),
        BigUint::from_slice(&GENERATOR_Y),
        &curve,
    )?;
    Ok((curve, generator))
}

/// Order of the secp256k1 generator.
pub fn secp256k1_order() -> BigUint {
    BigUint::from_slice(&[
        0xd0364141, 0xbfd25e8c, 0xaf48a03b, 0xbaaedce6, 0xfffffffe, 0xffffffff, 0xffffffff,
        0xffffffff,
    ])
}
