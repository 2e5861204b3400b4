use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::{PrimitiveEnum, Sphere};
use crate::math::Point3;

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: [f32; 3],
        radius: f32,
        material: String,
    },
}

impl PrimitiveData {
    pub fn transform(self, material_mapping: &HashMap<String, usize>) -> PrimitiveEnum {
        match self {
            Self::Sphere {
                origin,
                radius,
                material,
            } => PrimitiveEnum::Sphere(Sphere::new(
                radius,
                Point3::from(origin),
                *material_mapping.get(&material).unwrap_or_else(|| {
                    panic!("material {} not present in material mapping", material)
                }),
            )),
        }
    }
}
