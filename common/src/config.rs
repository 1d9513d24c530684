use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, Level};

use crate::query::DEFAULT_PER_PAGE;

// storefront configuration
//
// this is baked into the wasm bundle at build time, so anything here is
// public; it only covers presentation settings
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StorefrontConfig {
    pub shop_name: String,
    pub tagline: String,
    pub currency: String,
    pub contact_email: String,

    // choices offered in the page size select
    pub page_sizes: Vec<usize>,

    // how many matches the search overlay shows before "see all"
    pub search_preview_limit: usize,
}

impl StorefrontConfig {
    pub fn format_price(&self, price: Option<f64>) -> String {
        match price {
            Some(price) => format!("{}{price:.2}", self.currency),
            None => String::from("Price on request"),
        }
    }
}

// the config table sits under [storefront] so the file can grow other tables
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    storefront: StorefrontConfig,
}

#[instrument(level = Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<StorefrontConfig> {
    let file: TomlConfigFile = toml::from_str(doc)?;
    let config = file.storefront;

    if config.page_sizes.is_empty() {
        anyhow::bail!("page_sizes must not be empty");
    }

    if config.page_sizes.contains(&0) {
        anyhow::bail!("page_sizes must all be positive");
    }

    if !config.page_sizes.contains(&DEFAULT_PER_PAGE) {
        anyhow::bail!("page_sizes must include the default of {DEFAULT_PER_PAGE}");
    }

    debug!({ shop_name = %config.shop_name }, "parsed storefront config");

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        [storefront]
        shop_name = "Test Cues"
        tagline = "built to order"
        currency = "$"
        contact_email = "shop@example.com"
        page_sizes = [12, 24, 48]
        search_preview_limit = 5
    "#;

    #[test]
    fn reads_the_storefront_table() {
        let config = parse_config(DOC).unwrap();

        assert_eq!(config.shop_name, "Test Cues");
        assert_eq!(config.page_sizes, vec![12, 24, 48]);
        assert_eq!(config.format_price(Some(1250.0)), "$1250.00");
        assert_eq!(config.format_price(None), "Price on request");
    }

    #[test]
    fn rejects_page_sizes_without_the_default() {
        let doc = DOC.replace("[12, 24, 48]", "[24, 48]");

        assert!(parse_config(&doc).is_err());
    }

    #[test]
    fn rejects_zero_page_size() {
        let doc = DOC.replace("[12, 24, 48]", "[0, 12]");

        assert!(parse_config(&doc).is_err());
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(parse_config("[storefront]\nshop_name = \"x\"").is_err());
    }
}
