use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

// opaque id assigned by the backend
pub type ItemId = String;

// the three browsable collections, which double as the route segment and the
// rest path for each kind of record
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    #[default]
    Cues,
    Accessories,
    Materials,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [Self::Cues, Self::Accessories, Self::Materials];

    pub fn segment(&self) -> &'static str {
        match self {
            Self::Cues => "cues",
            Self::Accessories => "accessories",
            Self::Materials => "materials",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Cues => "Cues",
            Self::Accessories => "Accessories",
            Self::Materials => "Materials",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for CollectionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cues" => Ok(Self::Cues),
            "accessories" => Ok(Self::Accessories),
            "materials" => Ok(Self::Materials),
            other => Err(anyhow::Error::msg(format!("unknown collection: {other}"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    #[serde(rename = "Sold")]
    Sold,
}

impl Status {
    pub const ALL: [Status; 3] = [Self::Available, Self::ComingSoon, Self::Sold];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::ComingSoon => "Coming Soon",
            Self::Sold => "Sold",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// boolean build options on a cue
//
// these are flattened into the cue document by the backend, and any that are
// missing are taken to be false
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CueFeatures {
    pub has_inlays: bool,
    pub has_wrap: bool,
    pub is_full_splice: bool,
    pub has_rings: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub cue_number: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub features: CueFeatures,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    #[serde(rename = "_id")]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub accessory_number: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Wood,
    Crystal,
}

impl MaterialType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Crystal => "Crystal",
        }
    }
}

// raw materials are either woods (common_name) or crystals (crystal_name);
// the backend guarantees that exactly one of the two is set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(rename = "_id")]
    pub id: ItemId,
    #[serde(default)]
    pub common_name: Option<String>,
    #[serde(default)]
    pub crystal_name: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Material {
    pub fn name(&self) -> &str {
        self.common_name
            .as_deref()
            .or(self.crystal_name.as_deref())
            .unwrap_or_default()
    }

    pub fn material_type(&self) -> Option<MaterialType> {
        match (&self.common_name, &self.crystal_name) {
            (Some(_), _) => Some(MaterialType::Wood),
            (None, Some(_)) => Some(MaterialType::Crystal),
            (None, None) => None,
        }
    }
}

// a single record in one of the collection listings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CatalogItem {
    Cue(Cue),
    Accessory(Accessory),
    Material(Material),
}

impl CatalogItem {
    pub fn kind(&self) -> CollectionKind {
        match self {
            Self::Cue(_) => CollectionKind::Cues,
            Self::Accessory(_) => CollectionKind::Accessories,
            Self::Material(_) => CollectionKind::Materials,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Cue(cue) => &cue.id,
            Self::Accessory(accessory) => &accessory.id,
            Self::Material(material) => &material.id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Cue(cue) => &cue.name,
            Self::Accessory(accessory) => &accessory.name,
            Self::Material(material) => material.name(),
        }
    }

    // materials are priced per build, so they never carry a price
    pub fn price(&self) -> Option<f64> {
        match self {
            Self::Cue(cue) => cue.price,
            Self::Accessory(accessory) => accessory.price,
            Self::Material(_) => None,
        }
    }

    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Cue(cue) => cue.status,
            Self::Accessory(accessory) => accessory.status,
            Self::Material(material) => material.status,
        }
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Cue(cue) => cue.created_at,
            Self::Accessory(accessory) => accessory.created_at,
            Self::Material(material) => material.created_at,
        }
    }

    pub fn image_urls(&self) -> &[String] {
        match self {
            Self::Cue(cue) => &cue.image_urls,
            Self::Accessory(accessory) => &accessory.image_urls,
            Self::Material(material) => &material.image_urls,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Cue(cue) => &cue.description,
            Self::Accessory(accessory) => &accessory.description,
            Self::Material(material) => &material.description,
        }
    }
}

// messages

// list every cue
endpoint!(query ListCues, get, "/cues");

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListCuesReq {}

pub type ListCuesResp = Vec<Cue>;

// list every accessory
endpoint!(query ListAccessories, get, "/accessories");

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListAccessoriesReq {}

pub type ListAccessoriesResp = Vec<Accessory>;

// list every material, woods and crystals together
endpoint!(query ListMaterials, get, "/materials");

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListMaterialsReq {}

pub type ListMaterialsResp = Vec<Material>;

// the listing endpoints return untagged arrays, so we pick the endpoint by
// kind and wrap the results afterwards
pub async fn fetch_catalog(kind: CollectionKind) -> anyhow::Result<Vec<CatalogItem>> {
    let items = match kind {
        CollectionKind::Cues => list_cues(&ListCuesReq {})
            .await?
            .into_iter()
            .map(CatalogItem::Cue)
            .collect(),
        CollectionKind::Accessories => list_accessories(&ListAccessoriesReq {})
            .await?
            .into_iter()
            .map(CatalogItem::Accessory)
            .collect(),
        CollectionKind::Materials => list_materials(&ListMaterialsReq {})
            .await?
            .into_iter()
            .map(CatalogItem::Material)
            .collect(),
    };

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_document_decodes_flattened_features() {
        let doc = r#"{
            "_id": "65f0",
            "name": "Alpha",
            "cueNumber": "101",
            "price": 1250.0,
            "status": "Coming Soon",
            "imageUrls": ["a.jpg", "b.jpg"],
            "hasInlays": true,
            "createdAt": "2024-03-01T12:00:00Z"
        }"#;

        let cue: Cue = serde_json::from_str(doc).unwrap();

        assert_eq!(cue.id, "65f0");
        assert_eq!(cue.status, Some(Status::ComingSoon));
        assert!(cue.features.has_inlays);
        assert!(!cue.features.has_wrap);
        assert_eq!(cue.image_urls.len(), 2);
        assert!(cue.created_at.is_some());
    }

    #[test]
    fn sparse_accessory_document_uses_defaults() {
        let accessory: Accessory = serde_json::from_str(r#"{"_id": "1", "name": "Chalk"}"#).unwrap();

        assert_eq!(accessory.price, None);
        assert_eq!(accessory.status, None);
        assert!(accessory.image_urls.is_empty());
    }

    #[test]
    fn material_name_and_type_follow_populated_field() {
        let wood = Material {
            common_name: Some("Oak".into()),
            ..Default::default()
        };
        let crystal = Material {
            crystal_name: Some("Quartz".into()),
            ..Default::default()
        };

        assert_eq!(wood.name(), "Oak");
        assert_eq!(wood.material_type(), Some(MaterialType::Wood));
        assert_eq!(crystal.name(), "Quartz");
        assert_eq!(crystal.material_type(), Some(MaterialType::Crystal));
        assert_eq!(Material::default().material_type(), None);
    }

    #[test]
    fn collection_kind_round_trips_through_segment() {
        for kind in CollectionKind::ALL {
            assert_eq!(kind.to_string().parse::<CollectionKind>().unwrap(), kind);
        }

        assert!("sticks".parse::<CollectionKind>().is_err());
    }
}
