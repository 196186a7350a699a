use crate::error::Result;
use crate::image_buffer::Film;
use crate::output::Output;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes films as 8 bit RGB PNG files
#[derive(Debug, Clone)]
pub struct FileOutput {
    path: PathBuf,
}

impl FileOutput {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Output for FileOutput {
    fn write_film(&mut self, film: &Film) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut w = BufWriter::new(file);

        encode_png(&mut w, film)?;
        w.flush()?;

        Ok(())
    }
}

/// Encode `film` as PNG into `w`, rows top to bottom
pub fn encode_png<W: Write>(w: W, film: &Film) -> Result<()> {
    let mut encoder = png::Encoder::new(w, film.width() as u32, film.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&film.to_rgb8())?;
    writer.finish()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::Pixel;

    fn film() -> Film {
        let mut film = Film::new(3, 2).unwrap();
        film.set(0, 0, Pixel::new(255, 0, 0));
        film.set(2, 1, Pixel::new(1, 2, 3));
        film
    }

    #[test]
    fn png_decodes_to_the_same_pixels() {
        let mut bytes = Vec::new();
        encode_png(&mut bytes, &film()).unwrap();

        let decoder = png::Decoder::new(bytes.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut data = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut data).unwrap();

        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.color_type, png::ColorType::Rgb);
        assert_eq!(&data[..info.buffer_size()], film().to_rgb8().as_slice());
    }

    #[test]
    fn file_output_writes_to_disk() {
        let path = std::env::temp_dir().join(format!("raytracer-{}.png", std::process::id()));
        let mut output = FileOutput::new(&path);

        output.write_film(&film()).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(&written[1..4], b"PNG");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let mut output = FileOutput::new("/nonexistent-directory/film.png");

        assert!(output.write_film(&film()).is_err());
    }
}
