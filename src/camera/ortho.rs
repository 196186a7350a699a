use crate::camera::{Camera, film_position};
use crate::geometry::Ray;
use crate::scalar::Scalar;
use crate::vector::Vector;
use num_traits::{One, Zero};

/// Parallel projection, rays start on the `z = 0` plane and travel along `+z`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthoCamera<V: Vector> {
    film: (V::Scalar, V::Scalar),
    image: (V::Scalar, V::Scalar),
}

impl<V: Vector> OrthoCamera<V> {
    pub fn new(film_width: V::Scalar, film_height: V::Scalar, width: usize, height: usize) -> Self {
        Self {
            film: (film_width, film_height),
            image: (
                V::Scalar::from_literal(width as f64),
                V::Scalar::from_literal(height as f64),
            ),
        }
    }
}

impl<V: Vector> Camera<V> for OrthoCamera<V> {
    fn ray(&self, x: V::Scalar, y: V::Scalar) -> Ray<V> {
        let (fx, fy) = film_position(self.film, self.image, x, y);
        let zero = V::Scalar::zero();
        let one = V::Scalar::one();

        Ray::new(V::new(fx, fy, zero), V::new(zero, zero, one))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Movable, UnitSphere};
    use crate::raytracing::{Intersectable, Strike};
    use ultraviolet::DVec3;

    #[test]
    fn rays_are_parallel() {
        let camera = OrthoCamera::<DVec3>::new(4.0, 2.0, 400, 200);

        let corner = camera.ray(0.0, 0.0);
        let centre = camera.ray(200.0, 100.0);

        assert_eq!(corner.from, DVec3::new(-2.0, 1.0, 0.0));
        assert_eq!(corner.direction, centre.direction);
        assert_eq!(centre.from, DVec3::zero());
    }

    #[test]
    fn movable_camera_sees_the_sphere() {
        let camera = Movable::new(OrthoCamera::<DVec3>::new(4.0, 2.0, 400, 200))
            .translated(DVec3::new(0.0, 0.0, -9.0));

        let ray = camera.ray(200.0, 100.0);
        let hit = UnitSphere.intersects(&ray, 0.0).unwrap();

        assert_eq!(ray.from, DVec3::new(0.0, 0.0, -9.0));
        assert_eq!(hit.from(), DVec3::new(0.0, 0.0, -1.0));
    }
}
