use dioxus::prelude::*;

use api::catalog::{CatalogItem, CollectionKind};
use common::{
    catalog::{filter::FilterGroup, page::total_pages, sort::SortKey},
    query::QueryState,
    sync::Action,
};

use crate::{
    collection::{
        card::ItemCard,
        filters::{ActiveFilters, FilterPanel},
        pagination::Pagination,
    },
    common::context::use_config,
};

// what the result area should show
#[derive(Clone, PartialEq)]
pub enum Listing {
    Loading,
    Failed(String),
    // one page of refined records, plus the size of the whole refined set
    Loaded { items: Vec<CatalogItem>, total: usize },
}

#[derive(Clone, PartialEq, Props)]
pub struct CollectionViewProps {
    kind: CollectionKind,
    state: QueryState,
    groups: Vec<FilterGroup>,
    listing: Listing,
    on_action: EventHandler<Action>,
}

// CollectionView
//
// everything here is derived from the props; each control reports an Action
// and the owner decides what to do with it.  the only local state is whether
// the filter drawer is open on narrow screens
#[component]
pub fn CollectionView(props: CollectionViewProps) -> Element {
    let config = use_config();
    let mut drawer_open = use_signal(|| false);

    let on_action = props.on_action;
    let state = props.state;

    let mut page_sizes = config.page_sizes.clone();
    if !page_sizes.contains(&state.per_page) {
        page_sizes.push(state.per_page);
        page_sizes.sort_unstable();
    }

    let sidebar_class = if drawer_open() {
        "filter-sidebar drawer-open"
    } else {
        "filter-sidebar"
    };

    let results = match props.listing {
        Listing::Loading => rsx! {
            div { class: "catalog-grid",
                for i in 0..state.per_page.min(8) {
                    div { key: "{i}", class: "catalog-card skeleton", style: "height: 280px;" }
                }
            }
        },
        Listing::Failed(message) => rsx! {
            div { class: "notice", "Could not load {props.kind.title()}: {message}" }
        },
        Listing::Loaded { items, .. } if items.is_empty() => rsx! {
            div { class: "empty-state",
                p { "No {props.kind.title()} match your search." }
                if !state.filters.is_empty() || !state.search.is_empty() {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            on_action.call(Action::Search(String::new()));
                            on_action.call(Action::ClearFilters);
                        },
                        "Reset filters"
                    }
                }
            }
        },
        Listing::Loaded { items, total } => {
            let pages = total_pages(total, state.per_page);

            rsx! {
                p { style: "color: var(--text-tertiary);", "{total} results" }
                div { class: "catalog-grid",
                    for item in items {
                        ItemCard { key: "{item.kind()}-{item.id()}", item: item.clone() }
                    }
                }
                Pagination {
                    current: state.page,
                    total: pages,
                    on_page: move |page| on_action.call(Action::Page(page)),
                }
            }
        }
    };

    rsx! {
        div { class: "container",
            h1 { "{props.kind.title()}" }

            div { class: "collection-toolbar",
                button {
                    class: "btn btn-secondary filter-toggle",
                    onclick: move |_| drawer_open.toggle(),
                    if drawer_open() {
                        "Hide filters"
                    } else {
                        "Filters"
                    }
                }
                input {
                    class: "form-input",
                    r#type: "search",
                    placeholder: "Search {props.kind.title()}...",
                    value: "{state.search}",
                    oninput: move |event| on_action.call(Action::Search(event.value())),
                }
                select {
                    class: "form-select",
                    onchange: move |event| on_action.call(Action::Sort(event.value().parse::<SortKey>().ok())),
                    option { value: "", selected: state.sort.is_none(), "Featured" }
                    for sort in SortKey::ALL {
                        option {
                            value: "{sort.param()}",
                            selected: state.sort == Some(sort),
                            "{sort.label()}"
                        }
                    }
                }
                select {
                    class: "form-select",
                    onchange: move |event| {
                        if let Ok(per_page) = event.value().parse::<usize>() {
                            on_action.call(Action::PerPage(per_page));
                        }
                    },
                    for size in page_sizes {
                        option {
                            value: "{size}",
                            selected: state.per_page == size,
                            "{size} per page"
                        }
                    }
                }
            }

            ActiveFilters { filters: state.filters.clone(), on_action }

            div { class: "collection-layout",
                aside { class: sidebar_class,
                    FilterPanel {
                        kind: props.kind,
                        groups: props.groups,
                        filters: state.filters.clone(),
                        on_action,
                    }
                }
                section { {results} }
            }
        }
    }
}
