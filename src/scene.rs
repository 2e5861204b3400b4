use crate::geometry::{Primitive, PrimitiveList, SurfaceIntersectionData};
use crate::materials::MaterialEnum;
use crate::math::{RGBColor, Ray};

/// What a ray sees when it escapes the scene.
#[derive(Copy, Clone, Debug)]
pub enum Background {
    Gradient { top: RGBColor, bottom: RGBColor },
    Solid(RGBColor),
}

impl Background {
    // the book-cover sky: white overhead fading to pale blue at the horizon
    pub const SKY: Background = Background::Gradient {
        top: RGBColor::WHITE,
        bottom: RGBColor::new(0.5, 0.7, 1.0),
    };

    pub fn evaluate(&self, r: Ray) -> RGBColor {
        match self {
            Background::Solid(color) => *color,
            Background::Gradient { top, bottom } => {
                let unit_direction = r.direction.normalized();
                let t = 0.5 * (unit_direction.y + 1.0);
                (1.0 - t) * *bottom + t * *top
            }
        }
    }
}

/// Read-only during a render. Materials live in an arena; primitives address
/// them by index, so any number of primitives can share one material.
pub struct Scene {
    pub background: Background,
    pub materials: Vec<MaterialEnum>,
    pub root: PrimitiveList,
}

impl Scene {
    pub fn new(background: Background, materials: Vec<MaterialEnum>, root: PrimitiveList) -> Scene {
        Scene {
            background,
            materials,
            root,
        }
    }

    pub fn intersect(&self, r: Ray, t0: f32, t1: f32) -> Option<SurfaceIntersectionData> {
        self.root.intersect(r, t0, t1)
    }

    pub fn material(&self, material_id: usize) -> &MaterialEnum {
        &self.materials[material_id]
    }
}
