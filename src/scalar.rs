use approx::AbsDiffEq;
use num_traits::{Float, FloatConst};
use std::fmt::Debug;

/// The basic scalar type of a coordinate system
///
/// Implemented for `f32` and `f64`, matching the single and double precision
/// vector types of `ultraviolet`.
pub trait Scalar:
    'static + Float + FloatConst + Default + Debug + Send + Sync + AbsDiffEq<Epsilon = Self>
{
    /// Convert a literal into this scalar type
    fn from_literal(value: f64) -> Self;

    /// Narrow to `f32`, the precision colours are computed in
    fn as_f32(self) -> f32;
}

macro_rules! impl_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn from_literal(value: f64) -> Self {
                    value as $t
                }

                #[inline(always)]
                fn as_f32(self) -> f32 {
                    self as f32
                }
            }
        )+
    };
}

impl_scalar!(f32, f64);
