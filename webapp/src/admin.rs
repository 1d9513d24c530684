use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::catalog::{fetch_catalog, CollectionKind};
use common::{
    catalog::sort::{sort_items, SortKey},
    dialog::Dialog,
};

use crate::{
    collection::status_class,
    common::{
        context::{use_config, use_shop},
        local_date,
    },
    Route,
};

// AdminConsole
//
// a plain table of every record in a collection, newest first, with edit and
// delete going through dialogs.  the listing refetches whenever a dialog
// reports a successful change
#[component]
pub fn AdminConsole(kind: String) -> Element {
    let kind = match kind.parse::<CollectionKind>() {
        Ok(kind) => kind,
        Err(err) => {
            return rsx! {
                div { class: "container",
                    span { class: "notice", "{err}" }
                }
            }
        }
    };

    rsx! {
        AdminTable { kind }
    }
}

#[component]
fn AdminTable(kind: CollectionKind) -> Element {
    let shop = use_shop();
    let config = use_config();

    let kind_memo = use_memo(use_reactive(&kind, |kind| kind));

    let catalog_future = use_resource(move || async move {
        let kind = kind_memo();
        (shop.refresh)();

        fetch_catalog(kind).await
    });

    let table = match &*catalog_future.read() {
        Some(Ok(items)) => {
            let mut rows: Vec<_> = items.iter().collect();
            sort_items(&mut rows, Some(SortKey::Newest));

            rsx! {
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Price" }
                            th { "Status" }
                            th { "Added" }
                            th {}
                        }
                    }
                    tbody {
                        for item in rows.into_iter().cloned() {
                            tr { key: "{item.id()}",
                                td { "{item.display_name()}" }
                                td { "{config.format_price(item.price())}" }
                                td {
                                    if let Some(status) = item.status() {
                                        span { class: status_class(status), "{status}" }
                                    }
                                }
                                td { "{local_date(item.created_at())}" }
                                td {
                                    button {
                                        class: "btn btn-secondary btn-sm",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| shop.open(Dialog::EditItem(item.clone()))
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-danger btn-sm",
                                        onclick: {
                                            let item = item.clone();
                                            move |_| shop.open(Dialog::DeleteItem(item.clone()))
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            span { class: "notice", "Failed to load {kind.title()}: {err}" }
        },
        None => rsx! {
            div { class: "skeleton", style: "height: 200px;" }
        },
    };

    rsx! {
        div { class: "container",
            h1 { "Manage {kind.title()}" }
            div { style: "display: flex; gap: var(--space-2); margin-bottom: var(--space-4);",
                for other in CollectionKind::ALL {
                    Link {
                        key: "{other}",
                        class: if other == kind { "btn btn-primary btn-sm" } else { "btn btn-secondary btn-sm" },
                        to: Route::AdminConsole {
                            kind: other.to_string(),
                        },
                        "{other.title()}"
                    }
                }
            }
            {table}
        }
    }
}
