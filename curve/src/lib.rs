//! Elliptic curve groups over prime fields chosen at runtime.
//!
//! This crate provides the group law on short Weierstrass curves
//! `y^2 = x^3 + a*x + b` over `GF(p)`, two double-and-add scalar
//! multiplications, enumeration of small multiples, and one step of Hensel
//! lifting that extends a point's y-coordinate to a two-digit p-adic value.
//!
//! ```
//! use std::sync::Arc;
//! use primecurve::{Group, Point, PrimeCurve};
//!
//! let curve = Arc::new(PrimeCurve::new(11u32, 0, 7));
//! let p = Point::affine(4, 4, &curve)?;
//! let p3 = p.scalar_mul(&3u64)?;
//! assert_eq!(p3, (&p + &p.double()?)?);
//! assert_eq!(p.compute_lift()?.y.to_string(), "4 + 2p^1 + O(2)");
//! # Ok::<(), primecurve::CurveError>(())
//! ```

mod affine;
mod basefield;
mod error;
mod group;
mod lift;
mod padic;
mod params;
mod random;
mod serde_decimal;

#[cfg(test)]
mod tests;

pub use affine::Point;
pub use basefield::PrimeFieldElement;
pub use error::CurveError;
pub use group::{Group, ScalarBits};
pub use lift::Lift;
pub use padic::PAdic;
pub use params::{secp256k1, secp256k1_order, PrimeCurve};
pub use random::RandomField;
