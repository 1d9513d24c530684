use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = format!("storefront_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

pub fn get_local_storage<T>(key: &str) -> anyhow::Result<T>
where
    T: for<'a> Deserialize<'a>,
{
    let key = format!("storefront_{}", key);

    LocalStorage::get(key.clone()).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// a missing or unreadable entry falls back to the default, which is what every
// caller wants on first visit
pub fn try_local_storage<T>(key: &str) -> T
where
    T: for<'a> Deserialize<'a> + Default,
{
    get_local_storage(key).unwrap_or_default()
}
