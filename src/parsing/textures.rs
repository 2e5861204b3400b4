use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::texture::{SolidTexture, Texture};

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TextureData {
    Solid { color: [f32; 3] },
}

impl From<TextureData> for Texture {
    fn from(data: TextureData) -> Texture {
        match data {
            TextureData::Solid { color } => Texture::Solid(SolidTexture::new(color.into())),
        }
    }
}

/// Either the name of a texture in the scene's texture library, or an inline
/// texture literal.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextureDataOrReference {
    Reference(String),
    Literal(TextureData),
}

impl TextureDataOrReference {
    pub fn resolve(&self, textures: &HashMap<String, Texture>) -> Option<Texture> {
        match self {
            Self::Reference(name) => textures.get(name).copied(),
            Self::Literal(data) => Some(data.clone().into()),
        }
    }
}
