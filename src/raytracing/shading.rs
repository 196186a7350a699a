use crate::geometry::Ray;
use crate::helpers::{ColorType, black};
use crate::raytracing::{Intersectable, Intersection};
use crate::vector::Vector;
use num_traits::Zero;
use palette::Srgb;

const WHITE: ColorType = Srgb::new(1.0, 1.0, 1.0);

/// Matte reflectance at the strike, white when no material is attached
pub fn surface_albedo<V: Vector>(intersection: &Intersection<V>) -> ColorType {
    match intersection {
        Intersection::Primitive(_) => WHITE,
        Intersection::Surface(hit) => hit.material.albedo,
        Intersection::Compound(hit) => surface_albedo(&hit.inner),
    }
}

/// Light emitted by the struck surface towards `observer`
///
/// Surfaces emit from their front side only.
pub fn emission<V, G>(observer: &Ray<V>, intersection: &Intersection<V>, geometry: &G) -> ColorType
where
    V: Vector,
    G: Intersectable<V> + ?Sized,
{
    match intersection {
        Intersection::Primitive(_) => black(),
        Intersection::Surface(hit) => {
            if hit.strike.direction.dot(observer.direction) < V::Scalar::zero() {
                hit.material.emission
            } else {
                black()
            }
        }
        Intersection::Compound(hit) => emission(observer, &hit.inner, geometry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::UnitSphere;
    use crate::helpers::grey;
    use crate::raytracing::Material;
    use ultraviolet::DVec3;

    fn strike() -> Ray<DVec3> {
        Ray::new(DVec3::new(0.0, 0.0, -1.0), DVec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn compound_forwards_to_the_inner_surface() {
        let material = Material::new(Srgb::new(0.5, 0.25, 1.0), grey(20.0));
        let hit = Intersection::compound(0, Intersection::surface(strike(), material));
        let observer = Ray::new(DVec3::new(0.0, 0.0, -5.0), DVec3::new(0.0, 0.0, 1.0));

        assert_eq!(surface_albedo(&hit), material.albedo);
        assert_eq!(emission(&observer, &hit, &UnitSphere), grey(20.0));
    }

    #[test]
    fn back_side_and_bare_primitives_do_not_emit() {
        let hit = Intersection::surface(strike(), Material::emissive(grey(20.0)));
        let behind = Ray::new(DVec3::new(0.0, 0.0, -5.0), DVec3::new(0.0, 0.0, -1.0));

        assert_eq!(emission(&behind, &hit, &UnitSphere), black());
        assert_eq!(
            emission(&behind, &Intersection::Primitive(strike()), &UnitSphere),
            black()
        );
        assert_eq!(surface_albedo(&Intersection::Primitive(strike())), WHITE);
    }
}
