use std::{cmp::Ordering, fmt, str::FromStr};

use api::catalog::CatalogItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    AlphabetAZ,
    AlphabetZA,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        Self::Newest,
        Self::Oldest,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::AlphabetAZ,
        Self::AlphabetZA,
    ];

    pub fn param(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::AlphabetAZ => "alphabet-a-z",
            Self::AlphabetZA => "alphabet-z-a",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::PriceAsc => "Price: low to high",
            Self::PriceDesc => "Price: high to low",
            Self::AlphabetAZ => "Name: A to Z",
            Self::AlphabetZA => "Name: Z to A",
        }
    }

    pub fn compare(&self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            Self::Newest => missing_last(a.created_at(), b.created_at(), |a, b| b.cmp(&a)),
            Self::Oldest => missing_last(a.created_at(), b.created_at(), |a, b| a.cmp(&b)),
            Self::PriceAsc => missing_last(a.price(), b.price(), |a, b| a.total_cmp(&b)),
            Self::PriceDesc => missing_last(a.price(), b.price(), |a, b| b.total_cmp(&a)),
            Self::AlphabetAZ => compare_names(a.display_name(), b.display_name()),
            Self::AlphabetZA => compare_names(b.display_name(), a.display_name()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.param())
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.param() == s)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown sort key: {s}")))
    }
}

// records without the sorted-on value always go to the end, whichever
// direction is requested
fn missing_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(T, T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// case folded first so that "ebony" sits next to "Ebony", with the raw text
// as a tie-break to keep the order total
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// stable, so no sort key (or equal keys) keeps the incoming order
pub fn sort_items(items: &mut [&CatalogItem], key: Option<SortKey>) {
    if let Some(key) = key {
        items.sort_by(|a, b| key.compare(a, b));
    }
}
