use super::Material;
use crate::geometry::SurfaceIntersectionData;
use crate::math::{random_in_hemisphere, RGBColor, Ray, Sampler};
use crate::texture::Texture;

#[derive(Clone)]
pub struct Lambertian {
    pub albedo: Texture,
}

impl Lambertian {
    pub fn new(albedo: Texture) -> Lambertian {
        Lambertian { albedo }
    }
}

impl Material for Lambertian {
    fn scatter(
        &self,
        ray_in: Ray,
        isect: &SurfaceIntersectionData,
        sampler: &mut dyn Sampler,
    ) -> Option<(RGBColor, Ray)> {
        let mut direction = isect.normal + random_in_hemisphere(sampler.draw_2d(), isect.normal);

        // a sample opposite the normal cancels it out and would scatter nowhere
        if direction.near_zero() {
            direction = isect.normal;
        }

        let scattered = Ray::new_with_time(isect.point, direction, ray_in.time);
        Some((self.albedo.evaluate(isect.uv, isect.point), scattered))
    }
}
