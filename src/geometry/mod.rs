mod list;
mod sphere;

pub use list::PrimitiveList;
pub use sphere::Sphere;

use crate::math::{Point3, Ray, Vec3};

/// Transient record of a ray-surface intersection. The stored normal is unit
/// length and always opposes the incoming ray; `front_face` remembers which
/// side the geometric normal was on.
#[derive(Copy, Clone, Debug)]
pub struct SurfaceIntersectionData {
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
    pub uv: (f32, f32),
    pub front_face: bool,
    pub material_id: usize,
}

impl SurfaceIntersectionData {
    pub fn new(
        time: f32,
        point: Point3,
        normal: Vec3,
        uv: (f32, f32),
        front_face: bool,
        material_id: usize,
    ) -> Self {
        SurfaceIntersectionData {
            time,
            point,
            normal,
            uv,
            front_face,
            material_id,
        }
    }
}

pub trait Primitive {
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<SurfaceIntersectionData>;
}

#[derive(Clone)]
pub enum PrimitiveEnum {
    Sphere(Sphere),
    List(PrimitiveList),
}

impl Primitive for PrimitiveEnum {
    fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<SurfaceIntersectionData> {
        match self {
            PrimitiveEnum::Sphere(primitive) => primitive.intersect(r, t0, t1),
            PrimitiveEnum::List(primitive) => primitive.intersect(r, t0, t1),
        }
    }
}
