mod settings;

use crate::camera::Camera;
use crate::error::{RenderError, Result};
use crate::helpers::{ColorType, Pixel, black};
use crate::image_buffer::Film;
use crate::random::seeded_rng;
use crate::raytracing::Intersectable;
use crate::scalar::Scalar;
use crate::scene::{Light, Scene};
use crate::vector::Vector;
use rand::Rng;
use rayon::prelude::*;

pub use settings::{CancellationToken, DEFAULT_SAMPLES, RenderSettings};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct RenderCoordinates {
    pub x: usize,
    pub y: usize,
}

impl From<(usize, usize)> for RenderCoordinates {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Renders scenes into a film, one row per task on a rayon pool
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    settings: RenderSettings,
    cancellation: CancellationToken,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            cancellation: CancellationToken::new(),
        }
    }

    #[must_use]
    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Token cancelling renders started by this renderer
    pub fn cancellation(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn render<V, G, L, C>(&self, scene: &Scene<V, G, L>, camera: &C) -> Result<Film>
    where
        V: Vector,
        G: Intersectable<V>,
        L: Light<V>,
        C: Camera<V> + ?Sized,
    {
        self.settings.validate()?;

        let mut film = Film::new(self.settings.width, self.settings.height)?;
        let width = film.width();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.settings.threads.unwrap_or(0))
            .build()?;

        pool.install(|| {
            film.par_chunks_mut(width)
                .enumerate()
                .try_for_each(|(y, row)| self.render_row(scene, camera, y, row))
        })?;

        Ok(film)
    }

    fn render_row<V, G, L, C>(
        &self,
        scene: &Scene<V, G, L>,
        camera: &C,
        y: usize,
        row: &mut [Pixel],
    ) -> Result<()>
    where
        V: Vector,
        G: Intersectable<V>,
        L: Light<V>,
        C: Camera<V> + ?Sized,
    {
        if self.cancellation.is_cancelled() {
            return Err(RenderError::Cancelled);
        }

        let mut rng = seeded_rng(self.settings.seed, y as u64);

        for (x, pixel) in row.iter_mut().enumerate() {
            let photons = self.sample_pixel(scene, camera, (x, y).into(), &mut rng);
            *pixel = Pixel::from_photons(photons, self.settings.exposure);
        }

        Ok(())
    }

    #[inline]
    fn sample_pixel<V, G, L, C, R>(
        &self,
        scene: &Scene<V, G, L>,
        camera: &C,
        RenderCoordinates { x, y }: RenderCoordinates,
        rng: &mut R,
    ) -> ColorType
    where
        V: Vector,
        G: Intersectable<V>,
        L: Light<V>,
        C: Camera<V> + ?Sized,
        R: Rng,
    {
        let (x, y) = (x as f64, y as f64);
        let at = |dx: f64, dy: f64| {
            scene.evaluate(
                camera,
                V::Scalar::from_literal(x + dx),
                V::Scalar::from_literal(y + dy),
            )
        };

        if self.settings.samples == 1 {
            return at(0.5, 0.5);
        }

        let scale = 1.0 / self.settings.samples as f32;

        (0..self.settings.samples).fold(black(), |photons, _| {
            let (dx, dy) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            photons + at(dx, dy) * scale
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{OrthoCamera, PinholeCamera, film_size};
    use crate::geometry::{Collection, Movable, UnitSphere};
    use crate::helpers::grey;
    use crate::scene::{AmbientLight, LightModel, PointLight};
    use palette::Srgb;
    use ultraviolet::DVec3;

    fn settings(threads: usize, samples: usize) -> RenderSettings {
        RenderSettings {
            width: 48,
            height: 32,
            samples,
            exposure: 1.0,
            threads: Some(threads),
            seed: 11,
        }
    }

    fn scene() -> Scene<DVec3, Collection<Movable<DVec3, UnitSphere>>> {
        let spheres = [(0.0, 0.0, 5.0), (-1.0, -1.0, 0.0), (1.0, 1.0, 0.0)]
            .into_iter()
            .map(|(x, y, z)| Movable::new(UnitSphere).translated(DVec3::new(x, y, z)))
            .collect();
        let light = LightModel::new(AmbientLight::new(grey(50.0)))
            .with(PointLight::new(DVec3::new(-5.0, 5.0, -5.0), grey(150.0)));

        Scene::new(spheres, light, Srgb::new(10.0, 50.0, 70.0))
    }

    fn camera() -> Movable<DVec3, PinholeCamera<DVec3>> {
        let (fw, fh) = film_size(48, 32, 0.024);
        Movable::new(PinholeCamera::new(fw, fh, 48, 32, 0.05))
            .translated(DVec3::new(0.0, 0.0, -8.5))
    }

    #[test]
    fn output_does_not_depend_on_thread_count() {
        let single = Renderer::new(settings(1, 4)).render(&scene(), &camera()).unwrap();
        let many = Renderer::new(settings(4, 4)).render(&scene(), &camera()).unwrap();

        assert_eq!(single, many);
    }

    #[test]
    fn background_and_geometry_both_show() {
        let film = Renderer::new(settings(2, 1)).render(&scene(), &camera()).unwrap();

        assert_eq!(film.get(0, 0), Some(Pixel::new(10, 50, 70)));
        assert!(film.iter().any(|p| *p != Pixel::new(10, 50, 70)));
    }

    #[test]
    fn single_sample_hits_the_pixel_centre() {
        let settings = RenderSettings {
            width: 2,
            height: 2,
            samples: 1,
            ..settings(1, 1)
        };
        let scene: Scene<DVec3, UnitSphere> =
            Scene::new(UnitSphere, LightModel::new(AmbientLight::new(grey(80.0))), grey(0.0));
        // film of 4 units, so pixel centres sit at ±1 and the sphere covers none of them
        let camera = Movable::new(OrthoCamera::<DVec3>::new(4.0, 4.0, 2, 2))
            .translated(DVec3::new(0.0, 0.0, -5.0));

        let film = Renderer::new(settings).render(&scene, &camera).unwrap();
        assert!(film.iter().all(|p| *p == Pixel::new(0, 0, 0)));
    }

    #[test]
    fn cancelled_render_stops() {
        let renderer = Renderer::new(settings(2, 1));
        renderer.cancellation().cancel();

        assert!(matches!(
            renderer.render(&scene(), &camera()),
            Err(RenderError::Cancelled)
        ));
    }

    #[test]
    fn invalid_settings_fail_before_rendering() {
        let renderer = Renderer::new(RenderSettings {
            samples: 0,
            ..settings(1, 1)
        });

        assert!(matches!(
            renderer.render(&scene(), &camera()),
            Err(RenderError::InvalidSamples)
        ));
    }
}
