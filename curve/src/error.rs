//! Error types for field and curve arithmetic.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors surfaced by field-element arithmetic, point operations and the lift.
///
/// All arithmetic is deterministic, so none of these are worth retrying. A
/// `DivisionByZero` coming out of [`Point::double`](crate::Point::double) or
/// [`Point::compute_lift`](crate::Point::compute_lift) means the point has
/// `y = 0`, i.e. it is a 2-torsion point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("division by zero in the field of order {prime}")]
    DivisionByZero { prime: BigUint },

    #[error("{value} has no inverse modulo {prime}")]
    NotInvertible { value: BigUint, prime: BigUint },

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("field elements have different moduli: {left} and {right}")]
    ModulusMismatch { left: BigUint, right: BigUint },

    #[error("points lie on different curves")]
    CurveMismatch,

    #[error("point does not satisfy the curve equation modulo {prime}")]
    PreconditionViolated { prime: BigUint },

    /// The point at infinity was given where an affine point is required.
    #[error("expected an affine point, got the point at infinity")]
    PointAtInfinity,
}
