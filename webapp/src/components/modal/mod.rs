use dioxus::prelude::*;

use common::dialog::Dialog;

use crate::common::context::use_shop;

mod admin;
use admin::{DeleteItemModal, EditItemModal};

mod gallery;
use gallery::GalleryModal;

mod material;
use material::MaterialModal;

mod search;
use search::SearchModal;

// ModalBox
//
// displays the dialog on the top of the shop's dialog stack.  it is mounted
// once by the NavBar layout, so every page can open a dialog by pushing onto
// the stack through the ShopContext
#[component]
pub fn ModalBox() -> Element {
    let shop = use_shop();

    // clone out of the stack so the read guard is not held while rendering
    let top = shop.dialogs.read().top().cloned();

    match top {
        Some(Dialog::Search) => rsx! {
            SearchModal {}
        },
        Some(Dialog::Gallery(_)) => rsx! {
            GalleryModal {}
        },
        Some(Dialog::MaterialDetail(material)) => rsx! {
            MaterialModal { material }
        },
        Some(Dialog::EditItem(item)) => rsx! {
            EditItemModal { item }
        },
        Some(Dialog::DeleteItem(item)) => rsx! {
            DeleteItemModal { item }
        },
        None => rsx! {},
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    #[props(default)]
    size: ModalSize,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[derive(Clone, Default, PartialEq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let shop = use_shop();

    let width = match props.size {
        ModalSize::Small => "max-width: 400px;",
        ModalSize::Medium => "max-width: 600px;",
        ModalSize::Large => "max-width: 960px;",
    };

    rsx! {
        div {
            class: "modal-overlay",
            // clicking the backdrop closes the dialog
            onclick: move |evt| {
                evt.stop_propagation();
                shop.close();
            },
            div {
                class: "modal-content",
                style: "{width}",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button { class: "btn-close", onclick: move |_| shop.close(), "×" }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div {
                        class: "modal-footer",
                        style: "display: flex; align-items: center; justify-content: space-between; gap: var(--space-4);",
                        {footer.clone()}
                    }
                }
            }
        }
    }
}
