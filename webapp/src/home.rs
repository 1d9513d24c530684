use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::catalog::CollectionKind;

use crate::{common::context::use_config, Route};

fn blurb(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Cues => "Handmade playing cues, one of a kind",
        CollectionKind::Accessories => "Cases, chalk holders and everything else",
        CollectionKind::Materials => "The woods and crystals we build with",
    }
}

#[component]
pub fn Home() -> Element {
    let config = use_config();

    rsx! {
        section { class: "hero",
            div { class: "container",
                h1 { "{config.shop_name}" }
                p { "{config.tagline}" }
                div { class: "hero-links",
                    for kind in CollectionKind::ALL {
                        Link {
                            key: "{kind}",
                            class: "btn btn-primary",
                            to: Route::CollectionsPage {
                                kind: kind.to_string(),
                                query: String::new(),
                            },
                            "Browse {kind.title()}"
                        }
                    }
                }
            }
        }

        div { class: "container",
            div { class: "catalog-grid",
                for kind in CollectionKind::ALL {
                    div { key: "{kind}", class: "catalog-card",
                        div { class: "catalog-card-body",
                            h3 { "{kind.title()}" }
                            p { "{blurb(kind)}" }
                        }
                    }
                }
            }
            p { style: "margin-top: var(--space-6); color: var(--text-tertiary);",
                "Questions about a build? Write to {config.contact_email}"
            }
        }
    }
}
