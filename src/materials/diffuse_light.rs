use super::Material;
use crate::geometry::SurfaceIntersectionData;
use crate::math::{Point3, RGBColor, Ray, Sampler};
use crate::texture::Texture;

#[derive(Clone)]
pub struct DiffuseLight {
    pub emit: Texture,
}

impl DiffuseLight {
    pub fn new(emit: Texture) -> DiffuseLight {
        DiffuseLight { emit }
    }
}

impl Material for DiffuseLight {
    fn scatter(
        &self,
        _ray_in: Ray,
        _isect: &SurfaceIntersectionData,
        _sampler: &mut dyn Sampler,
    ) -> Option<(RGBColor, Ray)> {
        None
    }

    fn emitted(&self, uv: (f32, f32), point: Point3) -> RGBColor {
        self.emit.evaluate(uv, point)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{RandomSampler, Vec3};

    #[test]
    fn test_emits_and_never_scatters() {
        let material = DiffuseLight::new(Texture::solid(4.0, 4.0, 4.0));
        let mut sampler = RandomSampler::new(0);
        let isect = SurfaceIntersectionData::new(
            1.0,
            Point3::ORIGIN,
            Vec3::new(0.0, 1.0, 0.0),
            (0.5, 0.5),
            true,
            0,
        );
        let ray_in = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        assert!(material.scatter(ray_in, &isect, &mut sampler).is_none());
        assert_eq!(
            material.emitted(isect.uv, isect.point),
            RGBColor::new(4.0, 4.0, 4.0)
        );
    }
}
