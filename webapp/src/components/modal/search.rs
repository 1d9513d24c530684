use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::catalog::{fetch_catalog, CatalogItem, CollectionKind};
use common::{
    catalog::{filter::Filters, refine, sort::SortKey},
    query::QueryState,
};

use crate::{
    common::context::{use_config, use_shop},
    components::modal::ModernModal,
    Route,
};

fn listing_route(kind: CollectionKind, search: &str) -> Route {
    let state = QueryState {
        search: search.to_owned(),
        ..Default::default()
    };

    Route::CollectionsPage {
        kind: kind.to_string(),
        query: state.to_query(),
    }
}

// type-ahead search over every collection
//
// picking a result (or "see all") jumps to that collection with the search
// text already applied
#[component]
pub fn SearchModal() -> Element {
    let shop = use_shop();
    let config = use_config();
    let mut search_signal = use_signal(String::new);

    let catalog_future = use_resource(move || async move {
        let mut items = Vec::new();

        for kind in CollectionKind::ALL {
            items.extend(fetch_catalog(kind).await?);
        }

        Ok::<Vec<CatalogItem>, anyhow::Error>(items)
    });

    let search = search_signal();

    let results = match &*catalog_future.read() {
        Some(Ok(items)) if !search.is_empty() => {
            let matches = refine(items, &search, &Filters::default(), Some(SortKey::AlphabetAZ));

            let counts: Vec<(CollectionKind, usize)> = CollectionKind::ALL
                .into_iter()
                .map(|kind| (kind, matches.iter().filter(|i| i.kind() == kind).count()))
                .filter(|(_, count)| *count > 0)
                .collect();

            let preview: Vec<CatalogItem> = matches
                .into_iter()
                .take(config.search_preview_limit)
                .cloned()
                .collect();

            rsx! {
                if preview.is_empty() {
                    p { class: "empty-state", "Nothing matches \"{search}\"" }
                }
                ul { class: "search-results",
                    for item in preview {
                        li {
                            key: "{item.kind()}-{item.id()}",
                            onclick: {
                                let route = listing_route(item.kind(), item.display_name());
                                move |_| {
                                    shop.close_all();
                                    navigator().push(route.clone());
                                }
                            },
                            strong { "{item.display_name()}" }
                            span { style: "color: var(--text-tertiary); margin-left: var(--space-2);",
                                "{item.kind().title()}"
                            }
                        }
                    }
                }
                div { style: "display: flex; gap: var(--space-2); margin-top: var(--space-3);",
                    for (kind, count) in counts {
                        button {
                            class: "btn btn-secondary btn-sm",
                            onclick: {
                                let route = listing_route(kind, &search);
                                move |_| {
                                    shop.close_all();
                                    navigator().push(route.clone());
                                }
                            },
                            "See all {count} in {kind.title()}"
                        }
                    }
                }
            }
        }
        Some(Ok(_)) => rsx! {
            p { style: "color: var(--text-tertiary);", "Start typing to search cues, accessories and materials" }
        },
        Some(Err(err)) => rsx! {
            p { style: "color: var(--error);", "Search is unavailable: {err}" }
        },
        None => rsx! {
            div { class: "skeleton", style: "height: 80px;" }
        },
    };

    rsx! {
        ModernModal { title: "Search",
            input {
                class: "form-input",
                r#type: "search",
                placeholder: "Search the catalog...",
                autofocus: true,
                value: "{search}",
                oninput: move |event| search_signal.set(event.value()),
            }
            div { style: "margin-top: var(--space-3);", {results} }
        }
    }
}
