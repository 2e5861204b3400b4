use crate::math::{Point3, RGBColor};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidTexture {
    pub color: RGBColor,
}

impl SolidTexture {
    pub fn new(color: RGBColor) -> SolidTexture {
        SolidTexture { color }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Texture {
    Solid(SolidTexture),
}

impl Texture {
    pub fn solid(r: f32, g: f32, b: f32) -> Texture {
        Texture::Solid(SolidTexture::new(RGBColor::new(r, g, b)))
    }

    pub fn evaluate(&self, _uv: (f32, f32), _point: Point3) -> RGBColor {
        match self {
            Texture::Solid(texture) => texture.color,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_solid_ignores_surface_coords() {
        let texture = Texture::solid(0.3, 0.6, 0.9);
        let color = RGBColor::new(0.3, 0.6, 0.9);
        assert_eq!(texture.evaluate((0.0, 0.0), Point3::ORIGIN), color);
        assert_eq!(
            texture.evaluate((0.75, 0.25), Point3::new(5.0, -2.0, 1.0)),
            color
        );
    }
}
