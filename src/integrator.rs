use crate::materials::Material;
use crate::math::{RGBColor, Ray, Sampler};
use crate::scene::Scene;

// offset against self-intersection of the originating surface
pub const HIT_EPSILON: f32 = 1e-3;

/// Recursive radiance estimate along `r`, cut off hard at `depth` bounces.
pub fn ray_color(r: Ray, scene: &Scene, depth: u32, sampler: &mut dyn Sampler) -> RGBColor {
    if depth == 0 {
        return RGBColor::BLACK;
    }

    match scene.intersect(r, HIT_EPSILON, f32::INFINITY) {
        None => scene.background.evaluate(r),
        Some(isect) => {
            let material = scene.material(isect.material_id);
            let emitted = material.emitted(isect.uv, isect.point);
            match material.scatter(r, &isect, sampler) {
                None => emitted,
                Some((attenuation, scattered)) => {
                    emitted + attenuation * ray_color(scattered, scene, depth - 1, sampler)
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::camera::Camera;
    use crate::geometry::{PrimitiveEnum, PrimitiveList, Sphere};
    use crate::materials::{DiffuseLight, Lambertian, MaterialEnum};
    use crate::math::{Point3, RandomSampler, Vec3};
    use crate::scene::Background;
    use crate::texture::Texture;

    fn red_sphere_scene() -> Scene {
        Scene::new(
            Background::SKY,
            vec![MaterialEnum::Lambertian(Lambertian::new(Texture::solid(
                0.9, 0.1, 0.1,
            )))],
            PrimitiveList::new(vec![PrimitiveEnum::Sphere(Sphere::new(
                0.5,
                Point3::new(0.0, 0.0, -1.0),
                0,
            ))]),
        )
    }

    #[test]
    fn test_depth_zero_is_black() {
        let scene = red_sphere_scene();
        let mut sampler = RandomSampler::new(0);
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray_color(r, &scene, 0, &mut sampler), RGBColor::BLACK);
    }

    #[test]
    fn test_miss_equals_background_exactly() {
        let scene = red_sphere_scene();
        let mut sampler = RandomSampler::new(0);
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 1.0, 0.1));
        assert_eq!(
            ray_color(r, &scene, 50, &mut sampler),
            scene.background.evaluate(r)
        );
    }

    #[test]
    fn test_center_pixel_is_not_background() {
        // one sample, one bounce: the camera ray lands on the sphere and the
        // single bounce terminates at the depth cutoff, so the pixel must
        // differ from the sky gradient behind it
        let scene = red_sphere_scene();
        let camera = Camera::new(Point3::ORIGIN, 16.0 / 9.0, 2.0, 1.0);
        let mut sampler = RandomSampler::new(0);
        let r = camera.get_ray((0.5, 0.5), 0.0);
        let color = ray_color(r, &scene, 1, &mut sampler);
        assert!(color != scene.background.evaluate(r));
    }

    #[test]
    fn test_light_reaches_camera_through_bounce() {
        // lambertian floor under a dome light, black background: any energy
        // in the result arrived via emission
        let scene = Scene::new(
            Background::Solid(RGBColor::BLACK),
            vec![
                MaterialEnum::Lambertian(Lambertian::new(Texture::solid(0.5, 0.5, 0.5))),
                MaterialEnum::DiffuseLight(DiffuseLight::new(Texture::solid(4.0, 4.0, 4.0))),
            ],
            PrimitiveList::new(vec![
                PrimitiveEnum::Sphere(Sphere::new(100.0, Point3::new(0.0, -100.5, -1.0), 0)),
                PrimitiveEnum::Sphere(Sphere::new(90.0, Point3::new(0.0, 0.0, 0.0), 1)),
            ]),
        );
        let mut sampler = RandomSampler::new(123);
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, -1.0, -0.2));
        let mut total = RGBColor::ZERO;
        for _ in 0..32 {
            total += ray_color(r, &scene, 8, &mut sampler);
        }
        assert!(total.r > 0.0 && total.g > 0.0 && total.b > 0.0);
    }

    #[test]
    fn test_emitter_hit_directly_returns_emission() {
        let scene = Scene::new(
            Background::Solid(RGBColor::BLACK),
            vec![MaterialEnum::DiffuseLight(DiffuseLight::new(
                Texture::solid(2.0, 3.0, 4.0),
            ))],
            PrimitiveList::new(vec![PrimitiveEnum::Sphere(Sphere::new(
                0.5,
                Point3::new(0.0, 0.0, -1.0),
                0,
            ))]),
        );
        let mut sampler = RandomSampler::new(0);
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(
            ray_color(r, &scene, 50, &mut sampler),
            RGBColor::new(2.0, 3.0, 4.0)
        );
    }
}
