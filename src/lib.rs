pub mod camera;
pub mod error;
pub mod geometry;
pub mod helpers;
pub mod image_buffer;
pub mod math;
pub mod matrix;
pub mod output;
pub mod random;
pub mod raytracing;
pub mod renderer;
pub mod scalar;
pub mod scene;
pub mod scenes;
pub mod vector;

pub use error::{RenderError, Result};

/// Default image size, set through the resolution features or overridden by the
/// `WINDOW_WIDTH` and `WINDOW_HEIGHT` variables at build time
pub const CONFIGURED_WINDOW_WIDTH: usize = if cfg!(feature = "high_resolution") {
    1620
} else if cfg!(feature = "medium_resolution") {
    1100
} else {
    768
};

pub const CONFIGURED_WINDOW_HEIGHT: usize = if cfg!(feature = "high_resolution") {
    1280
} else if cfg!(feature = "medium_resolution") {
    830
} else {
    640
};

pub const WINDOW_WIDTH: usize = match option_env!("WINDOW_WIDTH") {
    Some(width) => {
        let parsed = usize::from_str_radix(width, 10);

        match parsed {
            Ok(parsed) => parsed,
            Err(_) => CONFIGURED_WINDOW_WIDTH,
        }
    }
    None => CONFIGURED_WINDOW_WIDTH,
};
pub const WINDOW_HEIGHT: usize = match option_env!("WINDOW_HEIGHT") {
    Some(height) => {
        let parsed = usize::from_str_radix(height, 10);

        match parsed {
            Ok(parsed) => parsed,
            Err(_) => CONFIGURED_WINDOW_HEIGHT,
        }
    }
    None => CONFIGURED_WINDOW_HEIGHT,
};
