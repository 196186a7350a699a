use crate::matrix::Matrix;
use crate::vector::Vector;

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Ray<V>
where
    V: Vector,
{
    pub from: V,
    pub direction: V,
}

impl<V> Ray<V>
where
    V: Vector,
{
    /// Ray from `from` along the normalised `direction`
    #[inline]
    pub fn new(from: V, direction: V) -> Self {
        Self {
            from,
            direction: direction.normalized(),
        }
    }

    #[inline(always)]
    pub fn at(&self, t: V::Scalar) -> V {
        self.from + self.direction.scaled(t)
    }

    /// Map origin as a point and direction as a vector through `matrix`
    ///
    /// The direction keeps the length the matrix gives it, so `t` stays the
    /// same in both frames.
    #[inline]
    pub fn transformed(&self, matrix: &V::Matrix) -> Self {
        Self {
            from: matrix.transform_point(self.from),
            direction: matrix.transform_direction(self.direction),
        }
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(self.from, self.direction)
    }
}

#[cfg(test)]
mod test_ray {
    use super::*;
    use ultraviolet::{DMat4, DVec3, Vec3};

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(0.0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(ray.at(1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.25), Vec3::new(2.25, 0.0, 0.0));
    }

    #[test]
    fn transformed_keeps_parameter() {
        let ray = Ray::new(DVec3::new(0.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 1.0));
        let scale = <DMat4 as Matrix>::from_nonuniform_scale(DVec3::new(1.0, 1.0, 0.5));

        let local = ray.transformed(&scale);

        assert_eq!(local.direction, DVec3::new(0.0, 0.0, 0.5));
        assert_eq!(local.at(4.0), scale.transform_point(ray.at(4.0)));
    }
}
