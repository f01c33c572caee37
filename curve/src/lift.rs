//! One step of Hensel lifting for the y-coordinate of a curve point.

use core::fmt::{self, Display, Formatter};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::{CurveError, PAdic, Point, PrimeFieldElement};

/// A point whose y-coordinate is known modulo `p^2`.
///
/// `y` holds two base-p digits `[y0, h1]`, meaning `y = y0 + h1*p (mod p^2)`,
/// and `(x, y)` satisfies the curve equation modulo `p^2`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lift {
    pub x: PrimeFieldElement,
    pub y: PAdic,
}

impl Display for Lift {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Point {
    /// Extend the y-coordinate by one base-p digit.
    ///
    /// With `f = -(y^2 - x^3 - a*x - b)` over the integers, `f` is divisible
    /// by `p` for a point on the curve, and the next digit is
    /// `h1 = (f / p) / (2y) mod p`. Fails with
    /// [`CurveError::PreconditionViolated`] when the point is not on its
    /// curve and with [`CurveError::DivisionByZero`] when `y = 0`.
    pub fn compute_lift(&self) -> Result<Lift, CurveError> {
        let Point::Affine { x, y, curve } = self else {
            return Err(CurveError::PointAtInfinity);
        };

        let defect = -curve.integer_defect(&x.to_bigint(), &y.to_bigint())?;
        let prime = BigInt::from(curve.prime().clone());
        let (quotient, remainder) = defect.div_mod_floor(&prime);
        if !remainder.is_zero() {
            log::warn!("({x}, {y}) is not on the curve modulo {}", curve.prime());
            return Err(CurveError::PreconditionViolated {
                prime: curve.prime().clone(),
            });
        }

        let h1 = curve.element(quotient)?.div(&y.mul_u64(2))?;
        log::trace!("lifted ({x}, {y}): next y digit {h1}");

        Ok(Lift {
            x: x.clone(),
            y: PAdic::new(vec![y.value().clone(), h1.value().clone()]),
        })
    }
}
