use crate::geometry::Ray;
use crate::raytracing::{Intersectable, Intersection, Material};
use crate::vector::Vector;

/// Geometry with a material attached
///
/// Hits are reported as `Intersection::Surface`, replacing whatever material
/// the wrapped geometry reported.
#[derive(Debug, Clone)]
pub struct Surface<G> {
    pub geometry: G,
    pub material: Material,
}

impl<G> Surface<G> {
    pub fn new(geometry: G, material: Material) -> Self {
        Self { geometry, material }
    }
}

impl<V, G> Intersectable<V> for Surface<G>
where
    V: Vector,
    G: Intersectable<V>,
{
    fn intersects(&self, ray: &Ray<V>, epsilon: V::Scalar) -> Option<Intersection<V>> {
        let hit = self.geometry.intersects(ray, epsilon)?;
        Some(Intersection::surface(*hit.strike(), self.material))
    }

    fn occludes(&self, ray: &Ray<V>, epsilon: V::Scalar) -> bool {
        self.geometry.occludes(ray, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::UnitSphere;
    use crate::helpers::grey;
    use crate::raytracing::IntersectionKind;
    use enumcapsulate::VariantDiscriminant;
    use ultraviolet::DVec3;

    #[test]
    fn hits_carry_the_material() {
        let material = Material::emissive(grey(42.0));
        let surface = Surface::new(UnitSphere, material);
        let ray = Ray::new(DVec3::new(0.0, 0.0, -5.0), DVec3::new(0.0, 0.0, 1.0));

        let hit = surface.intersects(&ray, 0.0).unwrap();

        assert!(matches!(hit.variant_discriminant(), IntersectionKind::Surface));
        assert_eq!(hit.material(), Some(&material));
        assert_eq!(hit.strike(), UnitSphere.intersects(&ray, 0.0).unwrap().strike());
    }
}
