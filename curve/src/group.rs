use num_bigint::BigUint;

use crate::CurveError;

/// Non-negative multiplier read bit by bit.
pub trait ScalarBits {
    /// Position of the most significant `1` bit plus one; zero for zero.
    fn bit_len(&self) -> u64;

    fn bit(&self, index: u64) -> bool;
}

macro_rules! impl_scalar_bits {
    ($($t:ty),*) => {
        $(
            impl ScalarBits for $t {
                #[inline]
                fn bit_len(&self) -> u64 {
                    (<$t>::BITS - self.leading_zeros()) as u64
                }

                #[inline]
                fn bit(&self, index: u64) -> bool {
                    index < <$t>::BITS as u64 && (self >> index) & 1 == 1
                }
            }
        )*
    };
}

impl_scalar_bits!(u32, u64, usize);

impl ScalarBits for BigUint {
    #[inline]
    fn bit_len(&self) -> u64 {
        self.bits()
    }

    #[inline]
    fn bit(&self, index: u64) -> bool {
        BigUint::bit(self, index)
    }
}

/// Additive group law with fallible doubling and addition.
///
/// Both scalar multiplication algorithms compute the same multiple. They only
/// differ in which intermediate multiples get doubled, which matters for
/// points whose multiples hit `y = 0`: there one algorithm may fail with
/// [`CurveError::DivisionByZero`] while the other succeeds.
pub trait Group: Sized + Clone {
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn double(&self) -> Result<Self, CurveError>;
    fn negate(&self) -> Self;
    fn geometric_add(&self, other: &Self) -> Result<Self, CurveError>;

    /// Double-and-add, most significant bit first.
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Result<Self, CurveError> {
        let mut result = Self::identity();

        for index in (0..scalar.bit_len()).rev() {
            result = result.double()?;
            if scalar.bit(index) {
                result = result.geometric_add(self)?;
            }
        }

        Ok(result)
    }

    /// Double-and-add, least significant bit first.
    ///
    /// Iterative form of `k*P = (k/2)*(2P)` for even `k` and
    /// `k*P = P + ((k-1)/2)*(2P)` for odd `k`, with `0*P = O` and `1*P = P`.
    /// The running point is not doubled past the top bit.
    fn scalar_mul_lsb<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Result<Self, CurveError> {
        let bits = scalar.bit_len();
        let mut result = Self::identity();
        let mut temp = self.clone();

        for index in 0..bits {
            if scalar.bit(index) {
                result = temp.geometric_add(&result)?;
            }
            if index + 1 < bits {
                temp = temp.double()?;
            }
        }

        Ok(result)
    }

    fn mul_u64(&self, n: u64) -> Result<Self, CurveError> {
        self.scalar_mul(&n)
    }

    /// `[O, P, 2P, ..., end*P]`, built by repeated addition.
    fn multiples(&self, end: u64) -> Result<Vec<Self>, CurveError> {
        let mut table = Vec::with_capacity(end as usize + 1);
        let mut current = Self::identity();
        table.push(current.clone());

        for _ in 0..end {
            current = current.geometric_add(self)?;
            table.push(current.clone());
        }

        Ok(table)
    }
}
