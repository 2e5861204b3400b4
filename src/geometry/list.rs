use super::{Primitive, PrimitiveEnum, SurfaceIntersectionData};
use crate::math::Ray;

/// Ordered aggregate of primitives, tested brute force.
#[derive(Clone, Default)]
pub struct PrimitiveList {
    primitives: Vec<PrimitiveEnum>,
}

impl PrimitiveList {
    pub fn new(primitives: Vec<PrimitiveEnum>) -> PrimitiveList {
        PrimitiveList { primitives }
    }

    pub fn push(&mut self, primitive: PrimitiveEnum) {
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Primitive for PrimitiveList {
    fn intersect(&self, r: Ray, t0: f32, mut t1: f32) -> Option<SurfaceIntersectionData> {
        let mut closest: Option<SurfaceIntersectionData> = None;
        for primitive in self.primitives.iter() {
            if let Some(isect) = primitive.intersect(r, t0, t1) {
                // shrink the window so later children must beat this hit
                t1 = isect.time;
                closest = Some(isect);
            }
        }
        closest
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Sphere;
    use crate::math::{Point3, Vec3};

    fn two_spheres() -> (PrimitiveEnum, PrimitiveEnum) {
        (
            PrimitiveEnum::Sphere(Sphere::new(0.5, Point3::new(0.0, 0.0, -1.0), 0)),
            PrimitiveEnum::Sphere(Sphere::new(0.5, Point3::new(0.0, 0.0, -3.0), 1)),
        )
    }

    #[test]
    fn test_closest_hit_wins_regardless_of_order() {
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let (near, far) = two_spheres();
        for list in [
            PrimitiveList::new(vec![near.clone(), far.clone()]),
            PrimitiveList::new(vec![far, near]),
        ] {
            let isect = list.intersect(r, 0.001, f32::INFINITY).unwrap();
            assert!((isect.time - 0.5).abs() < 1e-6);
            assert_eq!(isect.material_id, 0);
        }
    }

    #[test]
    fn test_empty_list_misses() {
        let list = PrimitiveList::default();
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        assert!(list.intersect(r, 0.001, f32::INFINITY).is_none());
    }

    #[test]
    fn test_nested_lists() {
        let (near, far) = two_spheres();
        let inner = PrimitiveEnum::List(PrimitiveList::new(vec![near]));
        let outer = PrimitiveList::new(vec![inner, far]);
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let isect = outer.intersect(r, 0.001, f32::INFINITY).unwrap();
        assert_eq!(isect.material_id, 0);
    }

    #[test]
    fn test_occluded_child_skipped() {
        // shrunken window from the near hit rejects the far sphere
        let r = Ray::new(Point3::ORIGIN, Vec3::new(0.0, 0.0, -1.0));
        let (near, far) = two_spheres();
        let list = PrimitiveList::new(vec![near, far]);
        let isect = list.intersect(r, 0.001, 2.0).unwrap();
        assert_eq!(isect.material_id, 0);
        assert!(isect.time < 2.0);
    }
}
