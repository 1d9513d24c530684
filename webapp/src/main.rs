#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod collection;
use collection::CollectionsPage;

mod cart;
use cart::CartPage;

mod admin;
use admin::AdminConsole;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// collection listings carry their whole state in the query string, which the
// router hands over verbatim so that CollectionsPage can parse it
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/collections/:kind?:..query")]
        CollectionsPage { kind: String, query: String },
        #[route("/cart")]
        CartPage {},
        #[route("/admin/:kind")]
        AdminConsole { kind: String },
}

#[component]
pub fn App() -> Element {
    common::context::provide_shop_context();

    rsx! {
        style { "{common::style::STOREFRONT_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
