use serde::{Deserialize, Serialize};

use crate::{
    catalog::{CollectionKind, ItemId, Status},
    endpoint,
};

// structs and types

// partial update for a catalog record
//
// None leaves the field untouched on the backend; tier only has meaning for
// materials and is ignored for the other kinds
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

impl ItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.status.is_none() && self.tier.is_none()
    }
}

// messages

// change the properties of a record
endpoint!(body UpdateItem, put, "/{}/{}", kind, id);

#[derive(Clone, Debug, Serialize)]
pub struct UpdateItemReq {
    #[serde(skip_serializing)]
    pub kind: CollectionKind,
    #[serde(skip_serializing)]
    pub id: ItemId,
    #[serde(flatten)]
    pub update: ItemUpdate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateItemResp {}

// remove a record from its collection
endpoint!(query DeleteItem, delete, "/{}/{}", kind, id);

#[derive(Clone, Debug, Serialize)]
pub struct DeleteItemReq {
    pub kind: CollectionKind,
    pub id: ItemId,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteItemResp {}
