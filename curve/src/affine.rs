use core::fmt::{self, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use num_bigint::{BigInt, BigUint};
use serde::{Deserialize, Serialize};

use crate::{CurveError, Group, PrimeCurve, PrimeFieldElement};

/// Point on a short Weierstrass curve over a prime field.
///
/// Affine points keep a shared handle to the curve they were built on. The
/// curve equation is not checked on construction; use [`Point::is_on_curve`].
/// Points are never mutated: every operation returns a new point.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub enum Point {
    /// The point at infinity (identity element)
    Infinity,
    Affine {
        x: PrimeFieldElement,
        y: PrimeFieldElement,
        curve: Arc<PrimeCurve>,
    },
}

// Same shape as `Point`; affine input goes through `Point::from_field_elements`.
#[derive(Deserialize)]
enum RawPoint {
    Infinity,
    Affine {
        x: PrimeFieldElement,
        y: PrimeFieldElement,
        curve: Arc<PrimeCurve>,
    },
}

impl TryFrom<RawPoint> for Point {
    type Error = CurveError;

    fn try_from(raw: RawPoint) -> Result<Self, CurveError> {
        match raw {
            RawPoint::Infinity => Ok(Point::Infinity),
            RawPoint::Affine { x, y, curve } => Point::from_field_elements(x, y, &curve),
        }
    }
}

impl Point {
    /// The point at infinity (identity element)
    pub const INFINITY: Self = Point::Infinity;

    #[inline]
    pub fn identity() -> Self {
        Self::INFINITY
    }

    /// Create an affine point from raw integer coordinates, reduced modulo the curve's prime.
    pub fn affine(
        x: impl Into<BigInt>,
        y: impl Into<BigInt>,
        curve: &Arc<PrimeCurve>,
    ) -> Result<Self, CurveError> {
        Ok(Point::Affine {
            x: curve.element(x)?,
            y: curve.element(y)?,
            curve: Arc::clone(curve),
        })
    }

    /// Create an affine point from coordinates already in the curve's field.
    pub fn from_field_elements(
        x: PrimeFieldElement,
        y: PrimeFieldElement,
        curve: &Arc<PrimeCurve>,
    ) -> Result<Self, CurveError> {
        for coord in [&x, &y] {
            if coord.prime() != curve.prime() {
                return Err(CurveError::InvalidCoordinate(format!(
                    "coordinate {coord} is reduced modulo {}, but the curve prime is {}",
                    coord.prime(),
                    curve.prime()
                )));
            }
        }
        Ok(Point::Affine {
            x,
            y,
            curve: Arc::clone(curve),
        })
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn x(&self) -> Option<&PrimeFieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&PrimeFieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    pub fn curve(&self) -> Option<&Arc<PrimeCurve>> {
        match self {
            Point::Infinity => None,
            Point::Affine { curve, .. } => Some(curve),
        }
    }

    /// Check the point against its own curve. The identity is always on the curve.
    pub fn is_on_curve(&self) -> Result<bool, CurveError> {
        match self {
            Point::Infinity => Ok(true),
            Point::Affine { x, y, curve } => curve.on_curve(x, y),
        }
    }

    /// Equality that rejects affine points from different curves instead of
    /// comparing their coordinates.
    pub fn try_eq(&self, other: &Self) -> Result<bool, CurveError> {
        if let (Point::Affine { curve: c1, .. }, Point::Affine { curve: c2, .. }) = (self, other) {
            if !same_curve(c1, c2) {
                return Err(CurveError::CurveMismatch);
            }
        }
        Ok(self == other)
    }

    /// Point doubling: 2*P.
    ///
    /// A point with `y = 0` is not special-cased: the tangent slope divides by
    /// `2y` and the call fails with [`CurveError::DivisionByZero`].
    pub fn double(&self) -> Result<Self, CurveError> {
        let Point::Affine { x, y, curve } = self else {
            return Ok(Point::Infinity);
        };

        // λ = (3x^2 + a) / (2y)
        let numerator = x.square().mul_u64(3).add(&curve.coeff_a()?)?;
        let lambda = numerator.div(&y.mul_u64(2)).inspect_err(|_| {
            log::debug!("cannot double 2-torsion point ({x}, {y})");
        })?;

        // x_r = λ^2 - 2x
        let x_r = lambda.square().sub(&x.mul_u64(2))?;

        // y_r = λ(x - x_r) - y
        let y_r = lambda.mul(&x.sub(&x_r)?)?.sub(y)?;

        Ok(Point::Affine {
            x: x_r,
            y: y_r,
            curve: Arc::clone(curve),
        })
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y, curve } => Point::Affine {
                x: x.clone(),
                y: y.neg(),
                curve: Arc::clone(curve),
            },
        }
    }

    /// Chord-and-tangent addition.
    pub fn geometric_add(&self, other: &Self) -> Result<Self, CurveError> {
        let (
            Point::Affine {
                x: x1,
                y: y1,
                curve,
            },
            Point::Affine {
                x: x2,
                y: y2,
                curve: other_curve,
            },
        ) = (self, other)
        else {
            // Handle infinity cases
            return Ok(if self.is_infinity() {
                other.clone()
            } else {
                self.clone()
            });
        };

        if !same_curve(curve, other_curve) {
            return Err(CurveError::CurveMismatch);
        }

        // Points are inverses, return infinity
        if *self == other.negate() {
            return Ok(Point::Infinity);
        }
        if self == other {
            return self.double();
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = y2.sub(y1)?.div(&x2.sub(x1)?)?;

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square().sub(x1)?.sub(x2)?;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda.mul(&x1.sub(&x_r)?)?.sub(y1)?;

        Ok(Point::Affine {
            x: x_r,
            y: y_r,
            curve: Arc::clone(curve),
        })
    }
}

#[inline]
fn same_curve(lhs: &Arc<PrimeCurve>, rhs: &Arc<PrimeCurve>) -> bool {
    Arc::ptr_eq(lhs, rhs) || lhs == rhs
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Point::Infinity, Point::Infinity) => true,
            (Point::Affine { x: x1, y: y1, .. }, Point::Affine { x: x2, y: y2, .. }) => {
                x1 == x2 && y1 == y2
            }
            _ => false,
        }
    }
}

impl Eq for Point {}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "(INF)"),
            Point::Affine { x, y, .. } => write!(f, "({x}, {y})"),
        }
    }
}

impl Group for Point {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn double(&self) -> Result<Self, CurveError> {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    #[inline]
    fn geometric_add(&self, other: &Self) -> Result<Self, CurveError> {
        Self::geometric_add(self, other)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl<'a, 'b> Add<&'b Point> for &'a Point {
    type Output = Result<Point, CurveError>;

    fn add(self, other: &'b Point) -> Self::Output {
        self.geometric_add(other)
    }
}

impl<'a, 'b> Sub<&'b Point> for &'a Point {
    type Output = Result<Point, CurveError>;

    fn sub(self, other: &'b Point) -> Self::Output {
        self.geometric_add(&other.negate())
    }
}

// Scalar multiplication
impl Mul<u64> for &Point {
    type Output = Result<Point, CurveError>;

    fn mul(self, scalar: u64) -> Self::Output {
        <Point as Group>::scalar_mul(self, &scalar)
    }
}

impl Mul<&BigUint> for &Point {
    type Output = Result<Point, CurveError>;

    fn mul(self, scalar: &BigUint) -> Self::Output {
        <Point as Group>::scalar_mul(self, scalar)
    }
}
