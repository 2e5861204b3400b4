use crate::math::{Point3, Ray, Vec3};

#[derive(Copy, Clone, Debug)]
pub struct Camera {
    origin: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Point3,
}

impl Camera {
    pub fn new(origin: Point3, aspect_ratio: f32, viewport_height: f32, focal_length: f32) -> Camera {
        let viewport_width = aspect_ratio * viewport_height;
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, viewport_height, 0.0);
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - Vec3::new(0.0, 0.0, focal_length);

        Camera {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    /// uv values range from 0 to 1 across the viewport, (0, 0) at the lower left.
    pub fn get_ray(&self, uv: (f32, f32), time: f32) -> Ray {
        let direction =
            (self.lower_left_corner + uv.0 * self.horizontal + uv.1 * self.vertical) - self.origin;
        Ray::new_with_time(self.origin, direction, time)
    }
}
