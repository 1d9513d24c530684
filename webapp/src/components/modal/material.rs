use dioxus::prelude::*;

use api::catalog::Material;
use common::dialog::{Dialog, Gallery};

use crate::{common::context::use_shop, components::modal::ModernModal};

#[derive(Clone, PartialEq, Props)]
pub struct MaterialModalProps {
    material: Material,
}

#[component]
pub fn MaterialModal(props: MaterialModalProps) -> Element {
    let shop = use_shop();
    let material = props.material;

    let kind = match material.material_type() {
        Some(t) => t.label(),
        None => "Material",
    };
    let tier = material.tier.clone().unwrap_or_else(|| String::from("Untiered"));
    let status = material.status.map(|s| s.label()).unwrap_or("Status unknown");
    let colors = material.colors.join(", ");
    let images = material.image_urls.clone();
    let gallery_images = images.clone();

    rsx! {
        ModernModal { title: material.name().to_owned(),
            div { style: "display: flex; flex-direction: column; gap: var(--space-3);",
                if let Some(url) = images.first() {
                    img {
                        src: "{url}",
                        style: "max-width: 100%; max-height: 320px; object-fit: cover; cursor: zoom-in;",
                        onclick: move |_| shop.open(Dialog::Gallery(Gallery::new(gallery_images.clone(), 0))),
                    }
                }
                p { "{kind} · {tier} · {status}" }
                if !colors.is_empty() {
                    p { "Colors: {colors}" }
                }
                if !material.description.is_empty() {
                    p { "{material.description}" }
                }
            }
        }
    }
}
