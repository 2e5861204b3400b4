use std::io::{self, Write};
use std::path::Path;

use crate::film::Film;
use crate::math::RGBColor;

pub trait Tonemapper {
    fn map(&self, color: RGBColor) -> [u8; 3];
}

/// Gamma-2 display transform: per-channel square root, clamped below 1 so
/// quantization never overflows a channel.
pub struct Gamma2;

impl Gamma2 {
    fn encode(c: f32) -> u8 {
        let gamma = c.max(0.0).sqrt();
        (255.0 * gamma.clamp(0.0, 0.999)).round() as u8
    }
}

impl Tonemapper for Gamma2 {
    fn map(&self, color: RGBColor) -> [u8; 3] {
        [
            Self::encode(color.r),
            Self::encode(color.g),
            Self::encode(color.b),
        ]
    }
}

/// Plain-text PPM: `P3`, dimensions, max value, then one `r g b` line per
/// pixel in row-major order.
pub fn write_ppm<T: Tonemapper>(
    tonemapper: &T,
    film: &Film<RGBColor>,
    writer: &mut impl Write,
) -> io::Result<()> {
    write!(writer, "P3\n{} {}\n255\n", film.width, film.height)?;
    for color in film.buffer.iter() {
        let [r, g, b] = tonemapper.map(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }
    Ok(())
}

pub fn write_png<T: Tonemapper>(
    tonemapper: &T,
    film: &Film<RGBColor>,
    path: &Path,
) -> Result<(), image::ImageError> {
    let mut img = image::RgbImage::new(film.width as u32, film.height as u32);
    for (i, color) in film.buffer.iter().enumerate() {
        let x = (i % film.width) as u32;
        let y = (i / film.width) as u32;
        img.put_pixel(x, y, image::Rgb(tonemapper.map(*color)));
    }
    img.save(path)
}
