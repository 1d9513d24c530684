use dioxus::prelude::*;

use api::catalog::CollectionKind;
use common::{
    catalog::filter::{has_price_range, Bound, FilterGroup, Filters},
    sync::Action,
};

// checkbox groups and the price range for one collection
//
// bounds that do not parse as whole numbers are treated as cleared
#[derive(Clone, PartialEq, Props)]
pub struct FilterPanelProps {
    kind: CollectionKind,
    groups: Vec<FilterGroup>,
    filters: Filters,
    on_action: EventHandler<Action>,
}

#[component]
pub fn FilterPanel(props: FilterPanelProps) -> Element {
    let on_action = props.on_action;

    rsx! {
        if has_price_range(props.kind) {
            div { class: "filter-group",
                h4 { "Price" }
                div { class: "price-range",
                    for bound in [Bound::Min, Bound::Max] {
                        input {
                            key: "{bound.param()}",
                            class: "form-input",
                            r#type: "number",
                            min: "0",
                            placeholder: bound.label(),
                            value: props.filters.bound(bound).map(|v| v.to_string()).unwrap_or_default(),
                            onchange: move |event| {
                                let value = event.value().trim().parse::<i64>().ok();
                                on_action.call(Action::SetBound(bound, value));
                            },
                        }
                    }
                }
            }
        }

        for group in props.groups {
            div { key: "{group.title}", class: "filter-group",
                h4 { "{group.title}" }
                for option in group.options {
                    label { key: "{option.flag.param()}", class: "filter-option",
                        input {
                            r#type: "checkbox",
                            checked: option.active,
                            onchange: {
                                let flag = option.flag.clone();
                                let active = option.active;
                                move |_| on_action.call(Action::SetFlag(flag.clone(), !active))
                            },
                        }
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// removable bubbles for every active filter
#[derive(Clone, PartialEq, Props)]
pub struct ActiveFiltersProps {
    filters: Filters,
    on_action: EventHandler<Action>,
}

#[component]
pub fn ActiveFilters(props: ActiveFiltersProps) -> Element {
    let on_action = props.on_action;

    if props.filters.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "filter-bubbles",
            for key in props.filters.keys() {
                button {
                    key: "{key.param()}",
                    class: "filter-bubble",
                    onclick: {
                        let key = key.clone();
                        move |_| on_action.call(Action::RemoveFilter(key.clone()))
                    },
                    "{props.filters.label(&key)} ✕"
                }
            }
            button {
                class: "btn btn-secondary btn-sm",
                onclick: move |_| on_action.call(Action::ClearFilters),
                "Clear all"
            }
        }
    }
}
