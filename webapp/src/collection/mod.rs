use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{debug, error};

use api::catalog::{fetch_catalog, CatalogItem, CollectionKind};
use common::{
    catalog::{
        filter::filter_groups,
        page::{page_slice, total_pages},
        refine,
    },
    sync::{Action, UrlSync},
};

use crate::{common::context::use_shop, Route};

mod card;
pub use card::status_class;

mod filters;
mod pagination;

mod view;
use view::{CollectionView, Listing};

#[component]
pub fn CollectionsPage(kind: String, query: String) -> Element {
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
        ErrorBoundary {
            handle_error: |error: ErrorContext| {
                rsx! {
                    if let Some(error_ui) = error.show() {
                        {error_ui}
                    } else {
                        div { "This collection encountered an error.  Check the logs or reach out to the shop." }
                    }
                }
            },
            CollectionListing { kind, query }
        }
    }
}

// CollectionListing
//
// owns the url synchronizer and the loaded records for one collection.  the
// route is the source of truth on the way in and is replaced (never pushed)
// on the way out, so back/forward moves between pages the user visited rather
// than every keystroke
#[component]
fn CollectionListing(kind: CollectionKind, query: String) -> Element {
    let shop = use_shop();

    let mut sync = use_signal(|| UrlSync::hydrate(kind, &query));

    // route -> state: collection switches, back/forward, and our own writes
    // echoed back by the router (which observe() ignores)
    use_effect(use_reactive((&kind, &query), move |(kind, query)| {
        sync.write().observe(kind, &query);
    }));

    let kind_memo = use_memo(use_reactive(&kind, |kind| kind));

    let catalog_future = use_resource(move || async move {
        let kind = kind_memo();

        // admin edits bump this to force a refetch
        (shop.refresh)();

        // the previous value lingers while a new collection loads, so the
        // records carry the kind they were fetched for
        (kind, fetch_catalog(kind).await)
    });

    // state -> route
    use_effect(move || {
        let Some(write) = sync.read().pending_write() else {
            return;
        };

        // a write computed for the previous collection is refused here
        if !sync.write().commit(&write) {
            return;
        }

        let target = Route::CollectionsPage {
            kind: sync.peek().kind().to_string(),
            query: write.query,
        };

        debug!({ route = %target }, "replacing listing url");

        if let Some(failure) = navigator().replace(target) {
            error!("failed to update listing url: {failure:?}");
        }
    });

    // a deep-linked page past the end is pulled back once the records are in
    use_effect(move || {
        if let Some((loaded, Ok(items))) = &*catalog_future.read() {
            let clamp = {
                let sync = sync.read();
                let state = sync.state();
                let total = refine(items, &state.search, &state.filters, state.sort).len();
                (sync.kind() == *loaded && state.page > total_pages(total, state.per_page)).then_some(total)
            };

            if let Some(total) = clamp {
                sync.write().clamp_loaded(*loaded, total);
            }
        }
    });

    let (current, state) = {
        let sync = sync.read();
        (sync.kind(), sync.state().clone())
    };

    let (groups, listing) = match &*catalog_future.read() {
        Some((loaded, _)) if *loaded != kind || current != kind => {
            (filter_groups(kind, &[], &state.filters), Listing::Loading)
        }
        Some((_, Ok(items))) => {
            let refined = refine(items, &state.search, &state.filters, state.sort);
            let page: Vec<CatalogItem> = page_slice(&refined, state.per_page, state.page)
                .iter()
                .map(|item| (*item).clone())
                .collect();

            (
                filter_groups(kind, items, &state.filters),
                Listing::Loaded {
                    items: page,
                    total: refined.len(),
                },
            )
        }
        Some((_, Err(err))) => (
            filter_groups(kind, &[], &state.filters),
            Listing::Failed(err.to_string()),
        ),
        None => (filter_groups(kind, &[], &state.filters), Listing::Loading),
    };

    rsx! {
        CollectionView {
            kind,
            state,
            groups,
            listing,
            on_action: move |action: Action| {
                if matches!(action, Action::Page(_)) {
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }

                sync.write().apply(action);
            },
        }
    }
}
