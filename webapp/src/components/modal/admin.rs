use dioxus::prelude::*;
use tracing::info;

use api::{
    admin::{delete_item, update_item, DeleteItemReq, ItemUpdate, UpdateItemReq},
    catalog::{CatalogItem, Status},
};

use crate::{
    common::context::use_shop,
    components::modal::{ModalSize, ModernModal},
};

// compare the submitted form against the record so that only the fields the
// admin actually touched are sent
fn collect_update(
    item: &CatalogItem,
    field: impl Fn(&str) -> Option<String>,
) -> Result<ItemUpdate, String> {
    let mut update = ItemUpdate::default();

    if let Some(name) = field("name") {
        if !name.is_empty() && name != item.display_name() {
            update.name = Some(name);
        }
    }

    if let Some(price) = field("price") {
        if !price.is_empty() {
            let price = price
                .trim_start_matches('$')
                .parse::<f64>()
                .map_err(|_| format!("\"{price}\" is not a price"))?;

            if price < 0.0 {
                return Err(String::from("Price cannot be negative"));
            }

            if item.price() != Some(price) {
                update.price = Some(price);
            }
        }
    }

    if let Some(label) = field("status") {
        let status = Status::ALL.into_iter().find(|s| s.label() == label);

        if status.is_some() && status != item.status() {
            update.status = status;
        }
    }

    if let (CatalogItem::Material(material), Some(tier)) = (item, field("tier")) {
        if !tier.is_empty() && Some(tier.as_str()) != material.tier.as_deref() {
            update.tier = Some(tier);
        }
    }

    Ok(update)
}

#[component]
pub fn EditItemModal(item: CatalogItem) -> Element {
    let shop = use_shop();
    let mut status_message = use_signal(String::new);

    let title = format!("Edit {}", item.display_name());
    let name = item.display_name().to_owned();
    let priced = !matches!(item, CatalogItem::Material(_));
    let price = item.price().map(|p| format!("{p:.2}")).unwrap_or_default();
    let current_status = item.status();
    let tier = match &item {
        CatalogItem::Material(material) => Some(material.tier.clone().unwrap_or_default()),
        _ => None,
    };

    let footer = rsx! {
        span { class: "status-message", "{status_message}" }
        div { class: "modal-buttons",
            button { class: "btn btn-secondary", onclick: move |_| shop.close(), "Cancel" }
        }
    };

    rsx! {
        ModernModal { title, footer,
            form {
                class: "form",
                onsubmit: move |event| {
                    let item = item.clone();
                    async move {
                        let values = event.values();
                        let field = |name: &str| {
                            values.get(name).map(|v| v.as_value().trim().to_owned())
                        };

                        let update = match collect_update(&item, field) {
                            Ok(update) => update,
                            Err(err) => {
                                status_message.set(err);
                                return;
                            }
                        };

                        if update.is_empty() {
                            status_message.set(String::from("Nothing to save"));
                            return;
                        }

                        let req = UpdateItemReq {
                            kind: item.kind(),
                            id: item.id().to_owned(),
                            update,
                        };

                        match update_item(&req).await {
                            Ok(_) => {
                                info!({ kind = %req.kind, id = %req.id }, "item updated");
                                shop.refreshed();
                                shop.close();
                            }
                            Err(err) => status_message.set(format!("Error: {err}")),
                        }
                    }
                },

                label { "Name" }
                input {
                    class: "form-input",
                    name: "name",
                    r#type: "text",
                    value: "{name}",
                }

                if priced {
                    label { "Price" }
                    input {
                        class: "form-input",
                        name: "price",
                        r#type: "text",
                        value: "{price}",
                    }
                }

                label { "Status" }
                select { class: "form-select", name: "status",
                    if current_status.is_none() {
                        option { value: "", selected: true, "Unset" }
                    }
                    for status in Status::ALL {
                        option {
                            value: "{status.label()}",
                            selected: current_status == Some(status),
                            "{status.label()}"
                        }
                    }
                }

                if let Some(tier) = tier {
                    label { "Tier" }
                    input {
                        class: "form-input",
                        name: "tier",
                        r#type: "text",
                        value: "{tier}",
                    }
                }

                input { class: "btn btn-primary", r#type: "submit", value: "Save" }
            }
        }
    }
}

#[component]
pub fn DeleteItemModal(item: CatalogItem) -> Element {
    let shop = use_shop();
    let mut status_message = use_signal(String::new);

    let name = item.display_name().to_owned();
    let kind = item.kind();
    let id = item.id().to_owned();

    let footer = rsx! {
        span { class: "status-message", "{status_message}" }
        div { class: "modal-buttons",
            button { class: "btn btn-secondary", onclick: move |_| shop.close(), "Cancel" }
            button {
                class: "btn btn-danger",
                onclick: move |_| {
                    let req = DeleteItemReq { kind, id: id.clone() };
                    async move {
                        match delete_item(&req).await {
                            Ok(_) => {
                                info!({ kind = %req.kind, id = %req.id }, "item deleted");
                                shop.refreshed();
                                shop.close();
                            }
                            Err(err) => status_message.set(format!("Error: {err}")),
                        }
                    }
                },
                "Delete"
            }
        }
    };

    rsx! {
        ModernModal { title: "Confirm Deletion", size: ModalSize::Small, footer,
            p { "Are you sure you want to delete \"{name}\" from {kind.title()}? This action cannot be undone." }
        }
    }
}
