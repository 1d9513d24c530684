use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::info;

use api::{
    cart::{checkout, CheckoutReq},
    catalog::CollectionKind,
};

use crate::{
    common::context::{use_config, use_shop},
    Route,
};

#[component]
pub fn CartPage() -> Element {
    let shop = use_shop();
    let config = use_config();
    let mut status_signal = use_signal(String::new);

    let cart = shop.cart.read().clone();
    let subtotal = config.format_price(Some(cart.subtotal()));

    if cart.is_empty() {
        return rsx! {
            div { class: "container empty-state",
                h1 { "Your cart is empty" }
                p { "{status_signal}" }
                Link {
                    class: "btn btn-primary",
                    to: Route::CollectionsPage {
                        kind: CollectionKind::Cues.to_string(),
                        query: String::new(),
                    },
                    "Browse cues"
                }
            }
        };
    }

    rsx! {
        div { class: "container",
            h1 { "Cart" }
            table { class: "table",
                thead {
                    tr {
                        th { "Item" }
                        th { "Price" }
                        th { "Quantity" }
                        th { "Total" }
                        th {}
                    }
                }
                tbody {
                    for line in cart.lines {
                        tr { key: "{line.kind}-{line.id}",
                            td { "{line.name}" }
                            td { "{config.format_price(line.price)}" }
                            td {
                                input {
                                    class: "form-input",
                                    r#type: "number",
                                    min: "0",
                                    style: "width: 80px;",
                                    value: "{line.quantity}",
                                    onchange: {
                                        let (kind, id) = (line.kind, line.id.clone());
                                        move |event: Event<FormData>| {
                                            if let Ok(quantity) = event.value().parse::<u32>() {
                                                let id = id.clone();
                                                shop.change_cart(move |cart| cart.set_quantity(kind, &id, quantity));
                                            }
                                        }
                                    },
                                }
                            }
                            td { "{config.format_price(Some(line.total()))}" }
                            td {
                                button {
                                    class: "btn btn-secondary btn-sm",
                                    onclick: {
                                        let (kind, id) = (line.kind, line.id.clone());
                                        move |_| {
                                            let id = id.clone();
                                            shop.change_cart(move |cart| cart.remove(kind, &id));
                                        }
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
            p { style: "text-align: right; font-weight: 600;", "Subtotal: {subtotal}" }

            h2 { "Place order" }
            form {
                class: "form",
                onsubmit: move |event| async move {
                    let email = match event.values().get("email") {
                        Some(val) => val.as_value(),
                        None => String::new(),
                    };
                    let note = match event.values().get("note") {
                        Some(val) => val.as_value(),
                        None => String::new(),
                    };

                    if !email.contains('@') {
                        status_signal.set(String::from("Please enter an email address"));
                        return;
                    }

                    let req = CheckoutReq {
                        cart: shop.cart.peek().clone(),
                        email,
                        note,
                    };

                    match checkout(&req).await {
                        Ok(resp) => {
                            info!({ order_id = %resp.order_id }, "order placed");
                            shop.change_cart(|cart| cart.lines.clear());
                            status_signal.set(format!("Thank you! Your order number is {}", resp.order_id));
                        }
                        Err(err) => status_signal.set(format!("Error placing order: {err}")),
                    }
                },

                label { "Email" }
                input { class: "form-input", name: "email", r#type: "email", value: "" }

                label { "Note" }
                textarea { class: "form-input", name: "note", rows: "4", value: "" }

                input { class: "btn btn-primary", r#type: "submit", value: "Place order" }
            }
            p { class: "status-message", "{status_signal}" }
        }
    }
}
