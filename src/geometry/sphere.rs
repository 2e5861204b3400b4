use crate::geometry::{Primitive, SurfaceIntersectionData};
use crate::math::{direction_to_uv, Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub origin: Point3,
    pub material_id: usize,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3, material_id: usize) -> Sphere {
        Sphere {
            radius,
            origin,
            material_id,
        }
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<SurfaceIntersectionData> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        let b = oc * r.direction;
        let c = oc * oc - self.radius * self.radius;
        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();

        // near root first, far root only if the near one is out of range
        let mut time = (-b - discriminant_sqrt) / a;
        if time <= t0 || time >= t1 {
            time = (-b + discriminant_sqrt) / a;
            if time <= t0 || time >= t1 {
                return None;
            }
        }

        let point = r.point_at_parameter(time);
        let outward_normal = (point - self.origin) / self.radius;
        let front_face = r.direction * outward_normal < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        let uv = direction_to_uv(outward_normal);

        Some(SurfaceIntersectionData::new(
            time,
            point,
            normal,
            uv,
            front_face,
            self.material_id,
        ))
    }
}
