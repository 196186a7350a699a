use crate::vector::Vector;
use std::fmt::Debug;
use std::ops::Mul;
use ultraviolet::{DMat4, DVec3, Mat4, Vec3};

/// Scalar type of the vector a matrix acts on
pub type MatrixScalar<M> = <<M as Matrix>::Vector as Vector>::Scalar;

/// Homogeneous 4x4 matrix acting on the vectors of one coordinate system
///
/// Forwards to the matrix operations of `ultraviolet`.
pub trait Matrix: 'static + Copy + Debug + PartialEq + Send + Sync + Mul<Self, Output = Self> {
    type Vector: Vector<Matrix = Self>;

    fn identity() -> Self;

    fn transposed(&self) -> Self;

    /// Columns as `[x, y, z, w]`
    fn columns(&self) -> [[MatrixScalar<Self>; 4]; 4];

    /// Apply to a point (`w = 1`)
    fn transform_point(&self, point: Self::Vector) -> Self::Vector;

    /// Apply to a direction (`w = 0`), translation is ignored
    fn transform_direction(&self, direction: Self::Vector) -> Self::Vector;

    fn from_translation(by: Self::Vector) -> Self;

    fn from_nonuniform_scale(by: Self::Vector) -> Self;

    /// Right handed rotation about the x axis, angle in radians
    fn from_rotation_x(angle: MatrixScalar<Self>) -> Self;

    fn from_rotation_y(angle: MatrixScalar<Self>) -> Self;

    fn from_rotation_z(angle: MatrixScalar<Self>) -> Self;
}

macro_rules! impl_matrix {
    ($($mat:ident ($vector:ident | $scalar:ty)),+) => {
        $(
            impl Matrix for $mat {
                type Vector = $vector;

                #[inline(always)]
                fn identity() -> Self {
                    $mat::identity()
                }

                #[inline(always)]
                fn transposed(&self) -> Self {
                    $mat::transposed(self)
                }

                #[inline]
                fn columns(&self) -> [[$scalar; 4]; 4] {
                    self.cols.map(|c| [c.x, c.y, c.z, c.w])
                }

                #[inline(always)]
                fn transform_point(&self, point: $vector) -> $vector {
                    self.transform_point3(point)
                }

                #[inline(always)]
                fn transform_direction(&self, direction: $vector) -> $vector {
                    self.transform_vec3(direction)
                }

                #[inline(always)]
                fn from_translation(by: $vector) -> Self {
                    $mat::from_translation(by)
                }

                #[inline(always)]
                fn from_nonuniform_scale(by: $vector) -> Self {
                    $mat::from_nonuniform_scale(by)
                }

                #[inline(always)]
                fn from_rotation_x(angle: $scalar) -> Self {
                    $mat::from_rotation_x(angle)
                }

                #[inline(always)]
                fn from_rotation_y(angle: $scalar) -> Self {
                    $mat::from_rotation_y(angle)
                }

                #[inline(always)]
                fn from_rotation_z(angle: $scalar) -> Self {
                    $mat::from_rotation_z(angle)
                }
            }
        )+
    };
}

impl_matrix!(Mat4 (Vec3 | f32), DMat4 (DVec3 | f64));
