use super::Material;
use crate::geometry::SurfaceIntersectionData;
use crate::math::{reflect, refract, RGBColor, Ray, Sampler};

#[derive(Clone)]
pub struct Dielectric {
    pub ir: f32,
}

impl Dielectric {
    pub fn new(ir: f32) -> Dielectric {
        Dielectric { ir }
    }

    fn reflectance(cosine: f32, refraction_ratio: f32) -> f32 {
        let r0 = ((1.0 - refraction_ratio) / (1.0 + refraction_ratio)).powi(2);
        r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
    }
}

impl Material for Dielectric {
    fn scatter(
        &self,
        ray_in: Ray,
        isect: &SurfaceIntersectionData,
        sampler: &mut dyn Sampler,
    ) -> Option<(RGBColor, Ray)> {
        let refraction_ratio = if isect.front_face {
            1.0 / self.ir
        } else {
            self.ir
        };

        let unit_direction = ray_in.direction.normalized();
        let cos_theta = (-unit_direction * isect.normal).min(1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

        let cannot_refract = refraction_ratio * sin_theta > 1.0;

        let direction = if cannot_refract
            || Self::reflectance(cos_theta, refraction_ratio) > sampler.draw_1d().x
        {
            reflect(unit_direction, isect.normal)
        } else {
            refract(unit_direction, isect.normal, refraction_ratio)
        };

        let scattered = Ray::new_with_time(isect.point, direction, ray_in.time);
        Some((RGBColor::WHITE, scattered))
    }
}
