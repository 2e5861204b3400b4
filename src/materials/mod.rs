mod dielectric;
mod diffuse_light;
mod lambertian;
mod metal;

pub use dielectric::Dielectric;
pub use diffuse_light::DiffuseLight;
pub use lambertian::Lambertian;
pub use metal::Metal;

use crate::geometry::SurfaceIntersectionData;
use crate::math::{Point3, RGBColor, Ray, Sampler};

pub trait Material {
    /// Returns the attenuation and the continued ray, or None when the
    /// incoming ray is absorbed.
    fn scatter(
        &self,
        ray_in: Ray,
        isect: &SurfaceIntersectionData,
        sampler: &mut dyn Sampler,
    ) -> Option<(RGBColor, Ray)>;

    fn emitted(&self, _uv: (f32, f32), _point: Point3) -> RGBColor {
        RGBColor::BLACK
    }
}

#[derive(Clone)]
pub enum MaterialEnum {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
    DiffuseLight(DiffuseLight),
}

impl Material for MaterialEnum {
    fn scatter(
        &self,
        ray_in: Ray,
        isect: &SurfaceIntersectionData,
        sampler: &mut dyn Sampler,
    ) -> Option<(RGBColor, Ray)> {
        match self {
            MaterialEnum::Lambertian(mat) => mat.scatter(ray_in, isect, sampler),
            MaterialEnum::Metal(mat) => mat.scatter(ray_in, isect, sampler),
            MaterialEnum::Dielectric(mat) => mat.scatter(ray_in, isect, sampler),
            MaterialEnum::DiffuseLight(mat) => mat.scatter(ray_in, isect, sampler),
        }
    }

    fn emitted(&self, uv: (f32, f32), point: Point3) -> RGBColor {
        match self {
            MaterialEnum::Lambertian(mat) => mat.emitted(uv, point),
            MaterialEnum::Metal(mat) => mat.emitted(uv, point),
            MaterialEnum::Dielectric(mat) => mat.emitted(uv, point),
            MaterialEnum::DiffuseLight(mat) => mat.emitted(uv, point),
        }
    }
}
