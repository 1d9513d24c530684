use serde::{Deserialize, Serialize};

use crate::{
    catalog::{CatalogItem, CollectionKind, ItemId},
    endpoint,
};

// structs and types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub kind: CollectionKind,
    pub id: ItemId,
    pub name: String,
    pub price: Option<f64>,
    pub quantity: u32,
}

impl CartLine {
    pub fn from_item(item: &CatalogItem, quantity: u32) -> Self {
        CartLine {
            kind: item.kind(),
            id: item.id().to_owned(),
            name: item.display_name().to_owned(),
            price: item.price(),
            quantity,
        }
    }

    pub fn total(&self) -> f64 {
        self.price.unwrap_or(0.0) * f64::from(self.quantity)
    }
}

// the cart lives in the browser and is mirrored to the backend on every
// change, so it carries enough of each record to render without a lookup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    // adding a record that is already in the cart bumps its quantity
    pub fn add(&mut self, line: CartLine) {
        match self
            .lines
            .iter_mut()
            .find(|l| l.kind == line.kind && l.id == line.id)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
    }

    pub fn remove(&mut self, kind: CollectionKind, id: &str) {
        self.lines.retain(|l| !(l.kind == kind && l.id == id));
    }

    pub fn set_quantity(&mut self, kind: CollectionKind, id: &str, quantity: u32) {
        if quantity == 0 {
            return self.remove(kind, id);
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.kind == kind && l.id == id)
        {
            line.quantity = quantity;
        }
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// messages

// replace the server-side copy of the cart
endpoint!(body UpdateCart, put, "/cart");

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateCartReq {
    pub cart: Cart,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateCartResp {}

// turn the cart into an order
endpoint!(body Checkout, post, "/checkout");

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReq {
    pub cart: Cart,
    pub email: String,
    pub note: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResp {
    pub order_id: String,
}
