use dioxus::prelude::*;

use common::dialog::Dialog;

use crate::{
    common::context::use_shop,
    components::modal::{ModalSize, ModernModal},
};

// full size image viewer
//
// the Gallery itself stays on the dialog stack, so stepping through images
// only rewrites the top entry
#[component]
pub fn GalleryModal() -> Element {
    let shop = use_shop();
    let mut dialogs = shop.dialogs;

    let gallery = match dialogs.read().top() {
        Some(Dialog::Gallery(gallery)) => gallery.clone(),
        _ => return rsx! {},
    };

    let mut step = move |forward: bool| {
        if let Some(Dialog::Gallery(gallery)) = dialogs.write().top_mut() {
            if forward {
                gallery.next()
            } else {
                gallery.prev()
            }
        }
    };

    let title = format!("Image {} of {}", gallery.index() + 1, gallery.images().len());
    let many = gallery.images().len() > 1;

    rsx! {
        ModernModal { title, size: ModalSize::Large,
            div { class: "gallery-frame",
                if many {
                    button { class: "btn btn-secondary", onclick: move |_| step(false), "‹" }
                }
                if let Some(url) = gallery.current() {
                    img { src: "{url}" }
                }
                if many {
                    button { class: "btn btn-secondary", onclick: move |_| step(true), "›" }
                }
            }
            if many {
                div { class: "gallery-thumbs",
                    for (index, url) in gallery.images().iter().enumerate() {
                        img {
                            key: "{index}",
                            class: if index == gallery.index() { "selected" } else { "" },
                            src: "{url}",
                            onclick: move |_| {
                                if let Some(Dialog::Gallery(gallery)) = dialogs.write().top_mut() {
                                    gallery.select(index);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}
