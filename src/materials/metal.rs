use super::Material;
use crate::geometry::SurfaceIntersectionData;
use crate::math::{random_in_hemisphere, reflect, RGBColor, Ray, Sampler};
use crate::texture::Texture;

#[derive(Clone)]
pub struct Metal {
    pub albedo: Texture,
    pub fuzz: f32,
}

impl Metal {
    pub fn new(albedo: Texture, fuzz: f32) -> Metal {
        Metal {
            albedo,
            fuzz: fuzz.clamp(0.0, 0.999),
        }
    }
}

impl Material for Metal {
    fn scatter(
        &self,
        ray_in: Ray,
        isect: &SurfaceIntersectionData,
        sampler: &mut dyn Sampler,
    ) -> Option<(RGBColor, Ray)> {
        let reflected = reflect(ray_in.direction.normalized(), isect.normal);
        let direction =
            reflected + self.fuzz * random_in_hemisphere(sampler.draw_2d(), isect.normal);

        // fuzz can push the reflection below the surface; those rays are absorbed
        if direction * isect.normal > 0.0 {
            let scattered = Ray::new_with_time(isect.point, direction, ray_in.time);
            Some((self.albedo.evaluate(isect.uv, isect.point), scattered))
        } else {
            None
        }
    }
}
