use crate::geometry::Ray;
use crate::helpers::{ColorType, black};
use crate::raytracing::{Intersectable, Intersection, Strike, surface_albedo};
use crate::scalar::Scalar;
use crate::vector::Vector;
use enumcapsulate::VariantDiscriminant;
use itertools::iproduct;
use num_traits::Zero;
use rand::Rng;

/// Base trait for all light types
pub trait Light<V>: Send + Sync
where
    V: Vector,
{
    /// Photons reflected towards the viewer by the struck surface
    ///
    /// `geometry` is the whole scene, queried for shadows with `epsilon`.
    fn light<G>(
        &self,
        intersection: &Intersection<V>,
        geometry: &G,
        epsilon: V::Scalar,
    ) -> ColorType
    where
        G: Intersectable<V> + ?Sized;
}

/// Constant light reaching every surface
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AmbientLight {
    pub color: ColorType,
}

impl AmbientLight {
    pub const fn new(color: ColorType) -> Self {
        Self { color }
    }
}

impl<V: Vector> Light<V> for AmbientLight {
    fn light<G>(&self, intersection: &Intersection<V>, _: &G, _: V::Scalar) -> ColorType
    where
        G: Intersectable<V> + ?Sized,
    {
        self.color * surface_albedo(intersection)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointLight<V>
where
    V: Vector,
{
    pub position: V,
    pub color: ColorType,
}

impl<V> PointLight<V>
where
    V: Vector,
{
    pub const fn new(position: V, color: ColorType) -> Self {
        Self { position, color }
    }
}

impl<V: Vector> Light<V> for PointLight<V> {
    fn light<G>(
        &self,
        intersection: &Intersection<V>,
        geometry: &G,
        epsilon: V::Scalar,
    ) -> ColorType
    where
        G: Intersectable<V> + ?Sized,
    {
        let shadow = Ray::new(intersection.from(), self.position - intersection.from());
        let incident_light_angle_cos = shadow.direction.dot(intersection.direction());

        // light behind the surface or blocked
        if incident_light_angle_cos <= V::Scalar::zero() || geometry.occludes(&shadow, epsilon) {
            return black();
        }

        self.color * surface_albedo(intersection) * incident_light_angle_cos.as_f32()
    }
}

/// Rectangular light made of a jittered grid of point lights
///
/// The total colour is shared evenly between the samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLight<V>
where
    V: Vector,
{
    samples: Vec<PointLight<V>>,
}

impl<V: Vector> AreaLight<V> {
    /// Spread `color` over the parallelogram `corner + s·edge_u + t·edge_v`
    ///
    /// One sample is placed at a random spot inside each of the
    /// `divisions.0 × divisions.1` cells.
    pub fn new<R: Rng>(
        corner: V,
        (edge_u, edge_v): (V, V),
        divisions: (usize, usize),
        color: ColorType,
        rng: &mut R,
    ) -> Self {
        let (nu, nv) = (divisions.0.max(1), divisions.1.max(1));
        let share = color * (1.0 / (nu * nv) as f32);

        let samples = iproduct!(0..nu, 0..nv)
            .map(|(i, j)| {
                let s = (i as f64 + rng.gen_range(0.0..1.0)) / nu as f64;
                let t = (j as f64 + rng.gen_range(0.0..1.0)) / nv as f64;

                let position = corner
                    + edge_u.scaled(V::Scalar::from_literal(s))
                    + edge_v.scaled(V::Scalar::from_literal(t));

                PointLight::new(position, share)
            })
            .collect();

        Self { samples }
    }

    pub fn samples(&self) -> &[PointLight<V>] {
        &self.samples
    }
}

impl<V: Vector> Light<V> for AreaLight<V> {
    fn light<G>(
        &self,
        intersection: &Intersection<V>,
        geometry: &G,
        epsilon: V::Scalar,
    ) -> ColorType
    where
        G: Intersectable<V> + ?Sized,
    {
        self.samples.light(intersection, geometry, epsilon)
    }
}

/// Any of the shadow casting light kinds
#[derive(Debug, Clone, PartialEq, VariantDiscriminant)]
#[enumcapsulate(discriminant(name = SceneLightSourceKind))]
pub enum SceneLightSource<V>
where
    V: Vector,
{
    PointLight(PointLight<V>),
    AreaLight(AreaLight<V>),
}

impl<V: Vector> From<PointLight<V>> for SceneLightSource<V> {
    fn from(light: PointLight<V>) -> Self {
        SceneLightSource::PointLight(light)
    }
}

impl<V: Vector> From<AreaLight<V>> for SceneLightSource<V> {
    fn from(light: AreaLight<V>) -> Self {
        SceneLightSource::AreaLight(light)
    }
}

impl<V: Vector> Light<V> for SceneLightSource<V> {
    fn light<G>(
        &self,
        intersection: &Intersection<V>,
        geometry: &G,
        epsilon: V::Scalar,
    ) -> ColorType
    where
        G: Intersectable<V> + ?Sized,
    {
        match self {
            SceneLightSource::PointLight(light) => light.light(intersection, geometry, epsilon),
            SceneLightSource::AreaLight(light) => light.light(intersection, geometry, epsilon),
        }
    }
}

/// Sum of the contributions of every light
impl<V: Vector, L: Light<V>> Light<V> for Vec<L> {
    fn light<G>(
        &self,
        intersection: &Intersection<V>,
        geometry: &G,
        epsilon: V::Scalar,
    ) -> ColorType
    where
        G: Intersectable<V> + ?Sized,
    {
        self.iter().fold(black(), |photons, light| {
            photons + light.light(intersection, geometry, epsilon)
        })
    }
}

/// Ambient light plus any number of shadow casting lights
#[derive(Debug, Clone, PartialEq)]
pub struct LightModel<V>
where
    V: Vector,
{
    pub ambient: AmbientLight,
    pub lights: Vec<SceneLightSource<V>>,
}

impl<V: Vector> LightModel<V> {
    pub fn new(ambient: AmbientLight) -> Self {
        Self {
            ambient,
            lights: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, light: impl Into<SceneLightSource<V>>) -> Self {
        self.lights.push(light.into());
        self
    }
}

impl<V: Vector> Light<V> for LightModel<V> {
    fn light<G>(
        &self,
        intersection: &Intersection<V>,
        geometry: &G,
        epsilon: V::Scalar,
    ) -> ColorType
    where
        G: Intersectable<V> + ?Sized,
    {
        Light::<V>::light(&self.ambient, intersection, geometry, epsilon)
            + self.lights.light(intersection, geometry, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Compound, Movable, UnitSphere};
    use crate::helpers::grey;
    use crate::raytracing::Material;
    use assert_float_eq::assert_float_absolute_eq;
    use palette::Srgb;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use ultraviolet::DVec3;

    fn front_of_unit_sphere() -> Intersection<DVec3> {
        Intersection::Primitive(Ray::new(
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(0.0, 0.0, -1.0),
        ))
    }

    #[test]
    fn ambient_is_tinted_by_the_albedo() {
        let hit = Intersection::surface(
            *front_of_unit_sphere().strike(),
            Material::matte(Srgb::new(1.0, 0.5, 0.0)),
        );
        let ambient = AmbientLight::new(grey(50.0));
        let photons = Light::<DVec3>::light(&ambient, &hit, &UnitSphere, 1e-9);

        assert_eq!(photons, Srgb::new(50.0, 25.0, 0.0));
    }

    #[test]
    fn point_light_follows_lamberts_law() {
        let light = PointLight::new(DVec3::new(0.0, 0.0, -10.0), grey(200.0));
        let photons = light.light(&front_of_unit_sphere(), &UnitSphere, 1e-9);
        assert_float_absolute_eq!(photons.red, 200.0, 1e-4);

        let oblique = PointLight::new(DVec3::new(5.0, 5.0, -5.0), grey(200.0));
        let photons = oblique.light(&front_of_unit_sphere(), &UnitSphere, 1e-9);
        // towards the light is (5, 5, -4), the normal is -z
        let cos = 4.0 / 66.0f32.sqrt();
        assert_float_absolute_eq!(photons.green, 200.0 * cos, 1e-3);
    }

    #[test]
    fn light_behind_the_surface_contributes_nothing() {
        let light = PointLight::new(DVec3::new(0.0, 0.0, 10.0), grey(200.0));
        assert_eq!(light.light(&front_of_unit_sphere(), &UnitSphere, 1e-9), black());
    }

    #[test]
    fn blocker_casts_a_shadow() {
        let scene = Compound::new()
            .with(UnitSphere)
            .with(Movable::new(UnitSphere).translated(DVec3::new(0.0, 0.0, -5.0)));
        let light = PointLight::new(DVec3::new(0.0, 0.0, -10.0), grey(200.0));

        assert_eq!(light.light(&front_of_unit_sphere(), &scene, 1e-9), black());
    }

    #[test]
    fn area_light_shares_its_colour() {
        let mut rng = SmallRng::seed_from_u64(1);
        let area = AreaLight::new(
            DVec3::new(-1.0, -1.0, -10.0),
            (DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0)),
            (4, 2),
            grey(80.0),
            &mut rng,
        );

        assert_eq!(area.samples().len(), 8);
        for sample in area.samples() {
            assert_eq!(sample.color, grey(10.0));
            assert!((-1.0..=1.0).contains(&sample.position.x));
            assert!((-1.0..=1.0).contains(&sample.position.y));
        }

        let photons = area.light(&front_of_unit_sphere(), &UnitSphere, 1e-9);
        assert!(photons.red > 79.0 && photons.red <= 80.0);
    }

    #[test]
    fn sources_convert_into_their_kind() {
        let mut rng = SmallRng::seed_from_u64(2);
        let point: SceneLightSource<DVec3> =
            PointLight::new(DVec3::new(1.0, 2.0, 3.0), grey(10.0)).into();
        let area: SceneLightSource<DVec3> = AreaLight::new(
            DVec3::zero(),
            (DVec3::new(1.0, 0.0, 0.0), DVec3::new(0.0, 1.0, 0.0)),
            (1, 1),
            grey(10.0),
            &mut rng,
        )
        .into();

        assert_eq!(point.variant_discriminant(), SceneLightSourceKind::PointLight);
        assert_eq!(area.variant_discriminant(), SceneLightSourceKind::AreaLight);
    }

    #[test]
    fn model_adds_ambient_and_lights() {
        let model = LightModel::new(AmbientLight::new(grey(50.0)))
            .with(PointLight::new(DVec3::new(0.0, 0.0, -10.0), grey(100.0)))
            .with(PointLight::new(DVec3::new(0.0, 0.0, 10.0), grey(100.0)));

        let photons = model.light(&front_of_unit_sphere(), &UnitSphere, 1e-9);
        assert_float_absolute_eq!(photons.blue, 150.0, 1e-4);
    }
}
