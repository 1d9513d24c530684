// shared, target-independent logic for the storefront
//
// nothing in here touches the browser, so it can be unit tested natively and
// driven by the webapp components

pub mod catalog;
pub mod config;
pub mod dialog;
pub mod outbox;
pub mod query;
pub mod sync;
