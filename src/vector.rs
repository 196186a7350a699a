use crate::matrix::Matrix;
use crate::scalar::Scalar;
use std::fmt::Debug;
use std::ops::{Add, Neg, Sub};
use ultraviolet::{DMat4, DVec3, Mat4, Vec3};

/// Three dimensional vector of a coordinate system
///
/// Geometry, rays and transforms are generic over this trait so a scene can be
/// built in single or double precision.
pub trait Vector:
    'static
    + Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Neg<Output = Self>
{
    type Scalar: Scalar;
    /// Homogeneous 4x4 matrix acting on this vector type
    type Matrix: Matrix<Vector = Self>;

    fn new(x: Self::Scalar, y: Self::Scalar, z: Self::Scalar) -> Self;

    fn zero() -> Self;

    fn x(&self) -> Self::Scalar;
    fn y(&self) -> Self::Scalar;
    fn z(&self) -> Self::Scalar;

    fn dot(&self, other: Self) -> Self::Scalar;

    fn scaled(&self, factor: Self::Scalar) -> Self;

    fn mag_sq(&self) -> Self::Scalar;

    fn mag(&self) -> Self::Scalar;

    fn normalized(&self) -> Self;
}

macro_rules! impl_vector {
    ($($vector:ident => ($scalar:ty, $matrix:ty)),+) => {
        $(
            impl Vector for $vector {
                type Scalar = $scalar;
                type Matrix = $matrix;

                #[inline(always)]
                fn new(x: $scalar, y: $scalar, z: $scalar) -> Self {
                    $vector::new(x, y, z)
                }

                #[inline(always)]
                fn zero() -> Self {
                    $vector::zero()
                }

                #[inline(always)]
                fn x(&self) -> $scalar {
                    self.x
                }

                #[inline(always)]
                fn y(&self) -> $scalar {
                    self.y
                }

                #[inline(always)]
                fn z(&self) -> $scalar {
                    self.z
                }

                #[inline(always)]
                fn dot(&self, other: Self) -> $scalar {
                    $vector::dot(self, other)
                }

                #[inline(always)]
                fn scaled(&self, factor: $scalar) -> Self {
                    *self * factor
                }

                #[inline(always)]
                fn mag_sq(&self) -> $scalar {
                    $vector::mag_sq(self)
                }

                #[inline(always)]
                fn mag(&self) -> $scalar {
                    $vector::mag(self)
                }

                #[inline(always)]
                fn normalized(&self) -> Self {
                    $vector::normalized(self)
                }
            }
        )+
    };
}

impl_vector!(Vec3 => (f32, Mat4), DVec3 => (f64, DMat4));
