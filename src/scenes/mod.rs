//! Ready made scenes, each paired with the camera it is meant to be seen through

mod early;
mod lights;

use crate::error::Result;
use crate::image_buffer::Film;
use crate::random::seeded_rng;
use crate::renderer::{RenderSettings, Renderer};

pub use early::{
    FiveSpheres, MatteSpheres, Ortho, Pinhole, coloured_matte_surfaces,
    five_spheres_coloured_lights, spheres_white, white_sphere_ortho,
};
pub use lights::wide_block;

/// Stream of the seeded generator used for building scenes, rows use the
/// streams from zero upwards
const CONSTRUCTION_STREAM: u64 = u64::MAX;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum DemoScene {
    WhiteSphereOrtho,
    FiveSpheresColouredLights,
    ColouredMatteSurfaces,
    SpheresWhite,
}

/// Knobs only some scenes look at
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DemoOptions {
    /// Scattered spheres in `spheres-white`
    pub spheres: usize,
    /// Focal length of the `spheres-white` camera in metres
    pub focal_length: f64,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            spheres: 10,
            focal_length: 0.05,
        }
    }
}

impl DemoScene {
    pub fn file_name(&self) -> &'static str {
        match self {
            DemoScene::WhiteSphereOrtho => "white-sphere-ortho.png",
            DemoScene::FiveSpheresColouredLights => "five-spheres-coloured-lights.png",
            DemoScene::ColouredMatteSurfaces => "coloured-matte-surfaces.png",
            DemoScene::SpheresWhite => "spheres-white.png",
        }
    }

    /// Size, sampling and exposure the scene was composed for
    pub fn settings(&self) -> RenderSettings {
        let base = RenderSettings::default();

        match self {
            DemoScene::WhiteSphereOrtho => RenderSettings {
                width: 1920,
                height: 1080,
                samples: 1,
                ..base
            },
            DemoScene::FiveSpheresColouredLights | DemoScene::ColouredMatteSurfaces => {
                RenderSettings {
                    width: 300,
                    height: 200,
                    samples: 1,
                    exposure: 1.2,
                    ..base
                }
            }
            DemoScene::SpheresWhite => RenderSettings {
                width: 150,
                height: 100,
                samples: 6,
                exposure: 1.4,
                ..base
            },
        }
    }

    /// Build the scene at the renderer's size and render it
    pub fn render(&self, renderer: &Renderer, options: &DemoOptions) -> Result<Film> {
        let settings = renderer.settings();
        let (width, height) = (settings.width, settings.height);
        let mut rng = seeded_rng(settings.seed, CONSTRUCTION_STREAM);

        match self {
            DemoScene::WhiteSphereOrtho => {
                let (scene, camera) = white_sphere_ortho(width, height);
                renderer.render(&scene, &camera)
            }
            DemoScene::FiveSpheresColouredLights => {
                let (scene, camera) = five_spheres_coloured_lights(width, height);
                renderer.render(&scene, &camera)
            }
            DemoScene::ColouredMatteSurfaces => {
                let (scene, camera) = coloured_matte_surfaces(width, height, &mut rng);
                renderer.render(&scene, &camera)
            }
            DemoScene::SpheresWhite => {
                let (scene, camera) = spheres_white(
                    width,
                    height,
                    options.spheres,
                    options.focal_length,
                    &mut rng,
                );
                renderer.render(&scene, &camera)
            }
        }
    }
}
