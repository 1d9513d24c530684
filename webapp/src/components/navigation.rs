use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::catalog::CollectionKind;
use common::dialog::Dialog;

use crate::{
    common::context::{use_config, use_shop},
    components::modal::ModalBox,
    Route,
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();

    // listings differ only by query string, so compare on the collection
    let active = match (&current_path, &target) {
        (Route::CollectionsPage { kind: a, .. }, Route::CollectionsPage { kind: b, .. }) => a == b,
        _ => current_path == target,
    };

    rsx! {
        Link {
            class: if active { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let shop = use_shop();
    let config = use_config();
    let cart_count = shop.cart.read().item_count();

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home {},
                        span { style: "font-weight: 600; font-size: 1.25rem;", "{config.shop_name}" }
                    }
                }

                nav { class: "nav-links",
                    for kind in CollectionKind::ALL {
                        NavBarButton {
                            name: kind.title().to_owned(),
                            target: Route::CollectionsPage {
                                kind: kind.to_string(),
                                query: String::new(),
                            },
                        }
                    }
                    button {
                        class: "btn btn-secondary btn-sm",
                        onclick: move |_| shop.open(Dialog::Search),
                        "Search"
                    }
                    NavBarButton {
                        name: format!("Cart ({cart_count})"),
                        target: Route::CartPage {},
                    }
                }
            }
        }
    }
}

#[component]
fn NoticeBar() -> Element {
    let mut notice = use_shop().notice;

    let message = notice();

    rsx! {
        if let Some(message) = message {
            div { class: "notice",
                span { "{message}" }
                button { class: "btn-close", onclick: move |_| notice.set(None), "×" }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        NoticeBar {}
        ModalBox {}
        Outlet::<Route> {}
    }
}
