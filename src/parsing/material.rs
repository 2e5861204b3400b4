use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::materials::{Dielectric, DiffuseLight, Lambertian, MaterialEnum, Metal};
use crate::texture::Texture;

use super::textures::TextureDataOrReference;

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialData {
    Lambertian {
        albedo: TextureDataOrReference,
    },
    Metal {
        albedo: TextureDataOrReference,
        fuzz: f32,
    },
    Dielectric {
        ir: f32,
    },
    DiffuseLight {
        emit: TextureDataOrReference,
    },
}

impl MaterialData {
    pub fn transform(self, textures: &HashMap<String, Texture>) -> Option<MaterialEnum> {
        match self {
            MaterialData::Lambertian { albedo } => albedo
                .resolve(textures)
                .map(|albedo| MaterialEnum::Lambertian(Lambertian::new(albedo))),
            MaterialData::Metal { albedo, fuzz } => albedo
                .resolve(textures)
                .map(|albedo| MaterialEnum::Metal(Metal::new(albedo, fuzz))),
            MaterialData::Dielectric { ir } => {
                Some(MaterialEnum::Dielectric(Dielectric::new(ir)))
            }
            MaterialData::DiffuseLight { emit } => emit
                .resolve(textures)
                .map(|emit| MaterialEnum::DiffuseLight(DiffuseLight::new(emit))),
        }
    }
}
