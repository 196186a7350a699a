mod file;

use crate::error::Result;
use crate::image_buffer::Film;

pub use file::FileOutput;

/// Destination for a finished film
pub trait Output {
    fn write_film(&mut self, film: &Film) -> Result<()>;
}
