use crate::camera::{OrthoCamera, PinholeCamera, film_size};
use crate::geometry::{Collection, Compound, Movable, Sphere, Surface, Transform, UnitSphere};
use crate::helpers::{black, grey};
use crate::raytracing::Material;
use crate::scene::{AmbientLight, LightModel, PointLight, Scene};
use crate::scenes::lights::wide_block;
use palette::Srgb;
use rand::Rng;
use ultraviolet::DVec3;

/// Film size of the pinhole cameras, the shorter side in metres
const FILM: f64 = 0.024;

pub type Pinhole = Movable<DVec3, PinholeCamera<DVec3>>;
pub type Ortho = Movable<DVec3, OrthoCamera<DVec3>>;

pub type FiveSpheres = Collection<Movable<DVec3, UnitSphere>>;
pub type MatteSpheres = Collection<Movable<DVec3, Surface<UnitSphere>>>;

/// Positions shared by the five sphere scenes
const FIVE: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 5.0),
    (-1.0, -1.0, 0.0),
    (1.0, -1.0, 0.0),
    (-1.0, 1.0, 0.0),
    (1.0, 1.0, 0.0),
];

fn pinhole(width: usize, height: usize, focal_length: f64) -> PinholeCamera<DVec3> {
    let (fw, fh) = film_size(width, height, FILM);
    PinholeCamera::new(fw, fh, width, height, focal_length)
}

/// Single unit sphere seen through a parallel projection
pub fn white_sphere_ortho(width: usize, height: usize) -> (Scene<DVec3, UnitSphere>, Ortho) {
    let (fw, fh) = film_size(width, height, 2.0);
    let camera = Movable::new(OrthoCamera::new(fw, fh, width, height))
        .translated(DVec3::new(0.0, 0.0, -9.0));

    let light = LightModel::new(AmbientLight::new(grey(50.0)))
        .with(PointLight::new(DVec3::new(5.0, 5.0, -5.0), grey(205.0)));

    (Scene::new(UnitSphere, light, black()), camera)
}

pub fn five_spheres_coloured_lights(
    width: usize,
    height: usize,
) -> (Scene<DVec3, FiveSpheres>, Pinhole) {
    let spheres = FIVE
        .into_iter()
        .map(|(x, y, z)| Movable::new(UnitSphere).translated(DVec3::new(x, y, z)))
        .collect();

    let light = LightModel::new(AmbientLight::new(grey(50.0)))
        .with(PointLight::new(
            DVec3::new(-5.0, 5.0, -5.0),
            Srgb::new(64.0, 160.0, 64.0),
        ))
        .with(PointLight::new(
            DVec3::new(-5.0, -5.0, -5.0),
            Srgb::new(160.0, 64.0, 64.0),
        ))
        .with(PointLight::new(
            DVec3::new(5.0, -5.0, -5.0),
            Srgb::new(64.0, 64.0, 160.0),
        ));

    let camera = Movable::new(pinhole(width, height, 0.05)).translated(DVec3::new(0.0, 0.0, -8.5));

    (Scene::new(spheres, light, Srgb::new(10.0, 50.0, 70.0)), camera)
}

pub fn coloured_matte_surfaces<R: Rng>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> (Scene<DVec3, MatteSpheres>, Pinhole) {
    let albedos = [
        Srgb::new(1.0, 1.0, 1.0),
        Srgb::new(0.0, 1.0, 1.0),
        Srgb::new(1.0, 0.25, 0.5),
        Srgb::new(0.25, 1.0, 0.5),
        Srgb::new(0.25, 0.5, 1.0),
    ];

    let spheres = FIVE
        .into_iter()
        .zip(albedos)
        .map(|((x, y, z), albedo)| {
            Movable::new(Surface::new(UnitSphere, Material::matte(albedo)))
                .translated(DVec3::new(x, y, z))
        })
        .collect();

    let camera = Movable::new(pinhole(width, height, 0.05)).translated(DVec3::new(0.0, 0.0, -8.5));

    (
        Scene::new(spheres, wide_block(rng), Srgb::new(10.0, 50.0, 70.0)),
        camera,
    )
}

/// Unit spheres scattered over a huge floor sphere, seen at a low angle
///
/// Each of the `spheres` lands in one of two collections at random, both sit
/// at `z = 0` with `x` and `y` drawn from `-20..20`.
pub fn spheres_white<R: Rng>(
    width: usize,
    height: usize,
    spheres: usize,
    focal_length: f64,
    rng: &mut R,
) -> (Scene<DVec3, Compound<DVec3>>, Pinhole) {
    let mut metallic = Collection::new();
    let mut glossy = Collection::new();

    for _ in 0..spheres {
        let x = rng.gen_range(-20.0..20.0);
        let y = rng.gen_range(-20.0..20.0);
        let sphere = Sphere::new(DVec3::new(x, y, 0.0), 1.0);

        if rng.gen_range(0..2) == 0 {
            metallic.insert(sphere);
        } else {
            glossy.insert(sphere);
        }
    }

    let scale = 200.0;
    let floor = Movable::new(Surface::new(UnitSphere, Material::matte(grey(0.3))))
        .translated(DVec3::new(0.0, 0.0, scale + 1.0))
        .scaled(scale);

    let geometry = Compound::new()
        .with(floor)
        .with(Surface::new(metallic, Material::default()))
        .with(Surface::new(glossy, Material::default()));

    // the tilt acts after the move, swinging the camera up and back around the origin
    let camera = Movable::new(pinhole(width, height, focal_length))
        .transformed(Transform::rotate_x((-65.0f64).to_radians()))
        .translated(DVec3::new(0.0, -4.0, -40.0));

    (
        Scene::new(geometry, wide_block(rng), Srgb::new(20.0, 70.0, 100.0)),
        camera,
    )
}
