use dioxus::prelude::*;

use api::{
    cart::CartLine,
    catalog::{CatalogItem, Material, Status},
};
use common::dialog::{Dialog, Gallery};

use crate::common::context::{use_config, use_shop};

pub fn status_class(status: Status) -> &'static str {
    match status {
        Status::Available => "status-badge status-available",
        Status::ComingSoon => "status-badge status-upcoming",
        Status::Sold => "status-badge status-sold",
    }
}

// one tile in the result grid; materials get their own layout since they are
// browsed rather than bought
#[component]
pub fn ItemCard(item: CatalogItem) -> Element {
    match item {
        CatalogItem::Material(material) => rsx! {
            MaterialCard { material }
        },
        item => rsx! {
            ProductCard { item }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct CardImageProps {
    images: Vec<String>,
    alt: String,
}

#[component]
fn CardImage(props: CardImageProps) -> Element {
    let shop = use_shop();

    match props.images.first() {
        Some(src) => {
            let src = src.clone();
            let images = props.images.clone();

            rsx! {
                img {
                    src: "{src}",
                    alt: "{props.alt}",
                    loading: "lazy",
                    onclick: move |_| shop.open(Dialog::Gallery(Gallery::new(images.clone(), 0))),
                }
            }
        }
        None => rsx! {
            div { class: "skeleton", style: "aspect-ratio: 1;" }
        },
    }
}

#[component]
fn ProductCard(item: CatalogItem) -> Element {
    let shop = use_shop();
    let config = use_config();

    let number = match &item {
        CatalogItem::Cue(cue) => cue.cue_number.clone(),
        CatalogItem::Accessory(accessory) => accessory.accessory_number.clone(),
        CatalogItem::Material(_) => String::new(),
    };

    let name = item.display_name().to_owned();
    let images = item.image_urls().to_vec();
    let price = config.format_price(item.price());
    let status = item.status();
    let sold = status == Some(Status::Sold);
    let added = format!("Added {name} to your cart");

    rsx! {
        div { class: "catalog-card",
            CardImage { images, alt: name.clone() }
            div { class: "catalog-card-body",
                h3 { "{name}" }
                if !number.is_empty() {
                    span { style: "color: var(--text-tertiary);", "#{number}" }
                }
                if let Some(status) = status {
                    span { class: status_class(status), "{status}" }
                }
                strong { "{price}" }
                button {
                    class: "btn btn-primary btn-sm",
                    disabled: sold,
                    onclick: move |_| {
                        let line = CartLine::from_item(&item, 1);
                        shop.change_cart(move |cart| cart.add(line));
                        shop.notify(added.clone());
                    },
                    if sold {
                        "Sold"
                    } else {
                        "Add to cart"
                    }
                }
            }
        }
    }
}

#[component]
fn MaterialCard(material: Material) -> Element {
    let shop = use_shop();

    let name = material.name().to_owned();
    let images = material.image_urls.clone();
    let status = material.status;
    let kind = material.material_type().map(|t| t.label()).unwrap_or_default();
    let tier = material.tier.clone().unwrap_or_default();

    rsx! {
        div { class: "catalog-card",
            CardImage { images, alt: name.clone() }
            div { class: "catalog-card-body",
                h3 { "{name}" }
                span { style: "color: var(--text-tertiary);", "{kind} {tier}" }
                if let Some(status) = status {
                    span { class: status_class(status), "{status}" }
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| shop.open(Dialog::MaterialDetail(material.clone())),
                    "Details"
                }
            }
        }
    }
}
