use anyhow::Context;
use clap::Parser;
use raytracer::helpers::RenderTiming;
use raytracer::output::{FileOutput, Output};
use raytracer::renderer::{RenderSettings, Renderer};
use raytracer::scenes::{DemoOptions, DemoScene};
use std::path::PathBuf;

/// Render one of the built in scenes to a PNG file
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Image file to write, named after the scene when left out
    output: Option<PathBuf>,

    /// Image width in pixels
    width: Option<usize>,

    /// Image height in pixels
    height: Option<usize>,

    #[arg(long, value_enum, default_value_t = DemoScene::SpheresWhite)]
    scene: DemoScene,

    /// Render threads, one per core when left out
    #[arg(short, long)]
    threads: Option<usize>,

    /// Samples per pixel
    #[arg(long)]
    samples: Option<usize>,

    /// Scattered spheres, spheres-white only
    #[arg(long, default_value_t = DemoOptions::default().spheres)]
    spheres: usize,

    /// Camera focal length in metres, spheres-white only
    #[arg(long, default_value_t = DemoOptions::default().focal_length)]
    focal: f64,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long)]
    exposure: Option<f32>,
}

impl Args {
    fn settings(&self) -> RenderSettings {
        let defaults = self.scene.settings();

        RenderSettings {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            samples: self.samples.unwrap_or(defaults.samples),
            exposure: self.exposure.unwrap_or(defaults.exposure),
            threads: self.threads,
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.settings();
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(args.scene.file_name()));

    println!(
        "Rendering {:?} at {}x{} with {} samples per pixel",
        args.scene, settings.width, settings.height, settings.samples
    );

    let mut timing = RenderTiming::default();
    let options = DemoOptions {
        spheres: args.spheres,
        focal_length: args.focal,
    };
    let film = args
        .scene
        .render(&Renderer::new(settings), &options)
        .context("render failed")?;
    timing.next();
    println!("Render done, {timing:?}");

    FileOutput::new(&path)
        .write_film(&film)
        .with_context(|| format!("unable to write {}", path.display()))?;
    timing.next();
    println!("Wrote {}, {timing:?}", path.display());

    Ok(())
}
