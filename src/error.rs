use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image dimensions {width}x{height} must both be non zero")]
    InvalidDimensions { width: usize, height: usize },

    #[error("at least one sample per pixel is required")]
    InvalidSamples,

    #[error("exposure must be a positive finite number, got {0}")]
    InvalidExposure(f32),

    #[error("render was cancelled")]
    Cancelled,

    #[error("unable to start render threads")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("unable to write image")]
    Io(#[from] std::io::Error),

    #[error("unable to encode image")]
    Png(#[from] png::EncodingError),
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
