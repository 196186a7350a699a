use crate::geometry::Ray;
use crate::math::{first_root_at_or_above, has_solution};
use crate::raytracing::{Intersectable, Intersection};
use crate::scalar::Scalar;
use crate::vector::Vector;
use num_traits::{One, Zero};

/// Sphere of radius one about the origin of its frame
///
/// Place and size it with `Movable`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UnitSphere;

impl<V: Vector> Intersectable<V> for UnitSphere {
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>> {
        let u = ray.direction;
        let v = ray.from;

        let a = u.dot(u);
        let b = V::Scalar::from_literal(2.0) * u.dot(v);
        let c = v.dot(v) - V::Scalar::one();

        let t = first_root_at_or_above(a, b, c, epsilon)?;
        let strike = ray.at(t);

        Some(Intersection::Primitive(Ray::new(strike, strike)))
    }

    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        let u = ray.direction;
        let v = ray.from;

        let a = u.dot(u);
        if a == V::Scalar::zero() {
            return false;
        }

        let b = V::Scalar::from_literal(2.0) * u.dot(v);
        let c = v.dot(v) - V::Scalar::one();

        has_solution(b / a, c / a, epsilon)
    }
}

/// Sphere with its own centre and radius
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere<V: Vector> {
    pub center: V,
    radius: V::Scalar,
    r_sq: V::Scalar,
}

impl<V: Vector> Sphere<V> {
    pub fn new(center: V, radius: V::Scalar) -> Self {
        Self {
            center,
            radius,
            r_sq: radius * radius,
        }
    }

    pub fn radius(&self) -> V::Scalar {
        self.radius
    }

    #[inline(always)]
    fn coefficients(&self, ray: &Ray<V>) -> (V::Scalar, V::Scalar, V::Scalar) {
        let u = ray.direction;
        let v = ray.from - self.center;

        (
            u.dot(u),
            V::Scalar::from_literal(2.0) * u.dot(v),
            v.dot(v) - self.r_sq,
        )
    }
}

impl<V: Vector> Intersectable<V> for Sphere<V> {
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>> {
        let (a, b, c) = self.coefficients(ray);

        let t = first_root_at_or_above(a, b, c, epsilon)?;
        let strike = ray.at(t);

        Some(Intersection::Primitive(Ray::new(
            strike,
            strike - self.center,
        )))
    }

    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        let (a, b, c) = self.coefficients(ray);
        if a == V::Scalar::zero() {
            return false;
        }

        has_solution(b / a, c / a, epsilon)
    }
}
