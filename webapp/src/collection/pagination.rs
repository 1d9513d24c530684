use dioxus::prelude::*;

use common::catalog::page::{page_window, PageToken};

#[derive(Clone, PartialEq, Props)]
pub struct PaginationProps {
    current: usize,
    total: usize,
    on_page: EventHandler<usize>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let current = props.current;
    let total = props.total;
    let on_page = props.on_page;

    if total <= 1 {
        return rsx! {};
    }

    rsx! {
        nav { class: "pagination",
            button {
                class: "btn btn-secondary btn-sm",
                disabled: current <= 1,
                onclick: move |_| on_page.call(current.saturating_sub(1).max(1)),
                "Previous"
            }
            for (i , token) in page_window(current, total).into_iter().enumerate() {
                match token {
                    PageToken::Page(page) => rsx! {
                        button {
                            key: "page-{page}",
                            class: if page == current { "btn btn-sm active" } else { "btn btn-secondary btn-sm" },
                            onclick: move |_| on_page.call(page),
                            "{page}"
                        }
                    },
                    PageToken::Ellipsis => rsx! {
                        span { key: "gap-{i}", class: "ellipsis", "…" }
                    },
                }
            }
            button {
                class: "btn btn-secondary btn-sm",
                disabled: current >= total,
                onclick: move |_| on_page.call((current + 1).min(total)),
                "Next"
            }
        }
    }
}
