mod material;
mod primitives;
mod textures;

pub use material::MaterialData;
pub use primitives::PrimitiveData;
pub use textures::{TextureData, TextureDataOrReference};

use std::{collections::HashMap, error::Error, fs::File, io::Read, path::PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::geometry::PrimitiveList;
use crate::scene::{Background, Scene};
use crate::texture::Texture;

#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BackgroundData {
    Gradient { top: [f32; 3], bottom: [f32; 3] },
    Solid { color: [f32; 3] },
}

impl From<BackgroundData> for Background {
    fn from(data: BackgroundData) -> Background {
        match data {
            BackgroundData::Gradient { top, bottom } => Background::Gradient {
                top: top.into(),
                bottom: bottom.into(),
            },
            BackgroundData::Solid { color } => Background::Solid(color.into()),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TexturesData {
    Path(PathBuf),
    Literal(HashMap<String, TextureData>),
}

impl TexturesData {
    pub fn loaded(self) -> Result<HashMap<String, TextureData>, Box<dyn Error>> {
        match self {
            Self::Path(path) => load_json(path),
            Self::Literal(inner) => Ok(inner),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaterialsData {
    Path(PathBuf),
    Literal(HashMap<String, MaterialData>),
}

impl MaterialsData {
    pub fn loaded(self) -> Result<HashMap<String, MaterialData>, Box<dyn Error>> {
        match self {
            Self::Path(path) => load_json(path),
            Self::Literal(inner) => Ok(inner),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SceneData {
    pub background: BackgroundData,
    pub textures_lib: TexturesData,
    pub materials_lib: MaterialsData,
    pub primitives: Vec<PrimitiveData>,
}

impl From<SceneData> for Scene {
    fn from(mut data: SceneData) -> Self {
        let textures_map: HashMap<String, Texture> = data
            .textures_lib
            .loaded()
            .expect("failed to parse textures_map from disk")
            .drain()
            .map(|(k, v)| (k, v.into()))
            .collect();

        let mut material_name_to_id = HashMap::new();
        let mut materials = Vec::new();
        for (name, material) in data
            .materials_lib
            .loaded()
            .expect("failed to parse materials_map from disk")
            .drain()
        {
            let id = materials.len();
            materials.push(
                material
                    .transform(&textures_map)
                    .unwrap_or_else(|| panic!("material {} references a missing texture", name)),
            );
            material_name_to_id.insert(name, id);
        }

        let primitives = data
            .primitives
            .drain(..)
            .map(|e| e.transform(&material_name_to_id))
            .collect::<Vec<_>>();

        Scene::new(
            data.background.into(),
            materials,
            PrimitiveList::new(primitives),
        )
    }
}

pub fn load_json<T>(path: PathBuf) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path).and_then(|mut f| f.read_to_string(&mut input))?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}
