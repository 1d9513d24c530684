use dioxus::prelude::*;
use tracing::{error, info};

use api::cart::{update_cart, Cart, UpdateCartReq};
use common::{
    config::{parse_config, StorefrontConfig},
    dialog::{Dialog, DialogStack},
    outbox::Outbox,
};

use crate::common::storage::{set_local_storage, try_local_storage};

const CONFIG_TOML: &str = include_str!("../../storefront.toml");
const CART_KEY: &str = "cart";

// ShopContext
//
// handles shared by every page.  App provides a single instance, and since all
// of the members are signals the struct is Copy and cheap to pass around
//
// the dialog stack lives here instead of in a global so that its lifetime is
// tied to the app root
#[derive(Clone, Copy, PartialEq)]
pub struct ShopContext {
    pub dialogs: Signal<DialogStack>,
    // bumped after an admin mutation so listings know to refetch
    pub refresh: Signal<()>,
    pub cart: Signal<Cart>,
    // cart snapshots waiting for the backend, uploaded one at a time
    pub cart_outbox: Signal<Outbox<Cart>>,
    // one-line status shown under the header, used to report failed requests
    pub notice: Signal<Option<String>>,
}

impl ShopContext {
    pub fn open(&self, dialog: Dialog) {
        let mut dialogs = self.dialogs;
        dialogs.write().push(dialog);
    }

    pub fn close(&self) {
        let mut dialogs = self.dialogs;
        dialogs.write().pop();
    }

    pub fn close_all(&self) {
        let mut dialogs = self.dialogs;
        dialogs.write().clear();
    }

    pub fn refreshed(&self) {
        let mut refresh = self.refresh;
        refresh.set(());
    }

    pub fn notify(&self, message: impl Into<String>) {
        let mut notice = self.notice;
        notice.set(Some(message.into()));
    }

    // apply a change to the cart, persist it locally and mirror it to the
    // backend; a failed upload is reported but the local copy is kept
    //
    // changes made while an upload is out are folded into the next one, so
    // the backend never sees an older cart after a newer one
    pub fn change_cart(&self, change: impl FnOnce(&mut Cart)) {
        let mut cart = self.cart;
        change(&mut *cart.write());

        let snapshot = cart.peek().clone();
        set_local_storage(CART_KEY, &snapshot);

        let mut outbox = self.cart_outbox;
        if !outbox.write().queue(snapshot) {
            return;
        }

        // not tied to the calling component, which may unmount mid-drain
        let ctx = *self;
        spawn_forever(async move {
            loop {
                let next = outbox.write().take_next();
                let Some(cart) = next else {
                    break;
                };

                match update_cart(&UpdateCartReq { cart }).await {
                    Ok(_) => info!("cart synced"),
                    Err(err) => {
                        error!("failed to sync cart: {err}");
                        ctx.notify(format!("Could not update your cart: {err}"));
                    }
                }
            }
        });
    }
}

pub fn provide_shop_context() {
    use_context_provider(|| match parse_config(CONFIG_TOML) {
        Ok(config) => config,
        Err(err) => panic!("failed to parse storefront config: {err}"),
    });

    use_context_provider(|| ShopContext {
        dialogs: Signal::new(DialogStack::default()),
        refresh: Signal::new(()),
        cart: Signal::new(try_local_storage::<Cart>(CART_KEY)),
        cart_outbox: Signal::new(Outbox::default()),
        notice: Signal::new(None),
    });
}

pub fn use_shop() -> ShopContext {
    use_context::<ShopContext>()
}

pub fn use_config() -> StorefrontConfig {
    use_context::<StorefrontConfig>()
}
