use crate::geometry::Ray;
use crate::matrix::Matrix;
use crate::vector::Vector;
use approx::AbsDiffEq;
use num_traits::One;

/// Pair of matrices mapping between world and local space
///
/// `forward` maps world to local, `backward` local to world. Every elementary
/// transform is built together with its analytic inverse and composition only
/// multiplies those, so `backward` stays the inverse of `forward` without ever
/// inverting a matrix. Rounding drift over long chains is not corrected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform<V: Vector> {
    pub forward: V::Matrix,
    pub backward: V::Matrix,
}

impl<V: Vector> Transform<V> {
    pub fn identity() -> Self {
        Self {
            forward: V::Matrix::identity(),
            backward: V::Matrix::identity(),
        }
    }

    /// Move by `by`
    pub fn translate(by: V) -> Self {
        Self {
            forward: V::Matrix::from_translation(-by),
            backward: V::Matrix::from_translation(by),
        }
    }

    /// Scale each axis about the origin, every factor must be non zero
    pub fn scale(by: V) -> Self {
        let one = V::Scalar::one();
        let inverse = V::new(one / by.x(), one / by.y(), one / by.z());

        Self {
            forward: V::Matrix::from_nonuniform_scale(inverse),
            backward: V::Matrix::from_nonuniform_scale(by),
        }
    }

    pub fn uniform_scale(by: V::Scalar) -> Self {
        Self::scale(V::new(by, by, by))
    }

    /// Rotate about the x axis, angle in radians
    pub fn rotate_x(angle: V::Scalar) -> Self {
        Self {
            forward: V::Matrix::from_rotation_x(-angle),
            backward: V::Matrix::from_rotation_x(angle),
        }
    }

    pub fn rotate_y(angle: V::Scalar) -> Self {
        Self {
            forward: V::Matrix::from_rotation_y(-angle),
            backward: V::Matrix::from_rotation_y(angle),
        }
    }

    pub fn rotate_z(angle: V::Scalar) -> Self {
        Self {
            forward: V::Matrix::from_rotation_z(-angle),
            backward: V::Matrix::from_rotation_z(angle),
        }
    }

    /// Apply `next` after `self`
    ///
    /// `rotate_x(a).then(translate(v))` rotates first and then moves by `v`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self {
            forward: self.forward * next.forward,
            backward: next.backward * self.backward,
        }
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            forward: self.backward,
            backward: self.forward,
        }
    }

    /// Map a world space ray into local space
    ///
    /// The direction is not renormalised so ray parameters agree in both spaces.
    #[inline]
    pub fn to_local(&self, ray: &Ray<V>) -> Ray<V> {
        ray.transformed(&self.forward)
    }

    /// Map a local space ray into world space
    #[inline]
    pub fn to_world(&self, ray: &Ray<V>) -> Ray<V> {
        ray.transformed(&self.backward)
    }

    /// Matrix for carrying local normals into world space
    #[inline]
    pub fn normal_to_world(&self) -> V::Matrix {
        self.forward.transposed()
    }
}

impl<V: Vector> Default for Transform<V> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<V: Vector> AbsDiffEq for Transform<V> {
    type Epsilon = V::Scalar;

    fn default_epsilon() -> Self::Epsilon {
        V::Scalar::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let close = |a: &V::Matrix, b: &V::Matrix| {
            a.columns()
                .iter()
                .flatten()
                .zip(b.columns().iter().flatten())
                .all(|(x, y)| x.abs_diff_eq(y, epsilon))
        };

        close(&self.forward, &other.forward) && close(&self.backward, &other.backward)
    }
}
