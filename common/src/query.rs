use std::fmt;

use tracing::debug;
use url::form_urlencoded;

use crate::catalog::{filter::Filters, sort::SortKey};

pub const DEFAULT_PER_PAGE: usize = 12;

pub const SEARCH_PARAM: &str = "search";
pub const SORT_PARAM: &str = "sort";
pub const LIMIT_PARAM: &str = "limit";
pub const PAGE_PARAM: &str = "page";

// everything about a collection listing that lives in the address bar
//
// parameters equal to their default are left out of the query string, so a
// fresh listing has an empty query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub sort: Option<SortKey>,
    pub per_page: usize,
    pub page: usize,
    pub filters: Filters,
}

impl Default for QueryState {
    fn default() -> Self {
        QueryState {
            search: String::new(),
            sort: None,
            per_page: DEFAULT_PER_PAGE,
            page: 1,
            filters: Filters::default(),
        }
    }
}

impl QueryState {
    // never fails: anything malformed is dropped and falls back to its default
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = QueryState::default();

        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            match name.as_ref() {
                SEARCH_PARAM => state.search = value.into_owned(),
                SORT_PARAM => match value.parse::<SortKey>() {
                    Ok(sort) => state.sort = Some(sort),
                    Err(err) => debug!("ignoring sort parameter: {err}"),
                },
                LIMIT_PARAM => match positive(&value) {
                    Some(per_page) => state.per_page = per_page,
                    None => debug!({ value = %value }, "ignoring limit parameter"),
                },
                PAGE_PARAM => match positive(&value) {
                    Some(page) => state.page = page,
                    None => debug!({ value = %value }, "ignoring page parameter"),
                },
                name => {
                    state.filters.insert_param(name, &value);
                }
            }
        }

        state
    }

    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_PARAM, &self.search);
        }

        if let Some(sort) = self.sort {
            serializer.append_pair(SORT_PARAM, sort.param());
        }

        if self.per_page != DEFAULT_PER_PAGE {
            serializer.append_pair(LIMIT_PARAM, &self.per_page.to_string());
        }

        if self.page != 1 {
            serializer.append_pair(PAGE_PARAM, &self.page.to_string());
        }

        for (name, value) in self.filters.params() {
            serializer.append_pair(&name, &value);
        }

        serializer.finish()
    }
}

impl fmt::Display for QueryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

fn positive(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::{Availability, Bound, Feature, Flag};
    use api::catalog::MaterialType;

    #[test]
    fn defaults_serialize_to_nothing() {
        assert_eq!(QueryState::default().to_query(), "");
        assert_eq!(QueryState::parse(""), QueryState::default());
        assert_eq!(QueryState::parse("?"), QueryState::default());
    }

    #[test]
    fn every_slice_is_read() {
        let state = QueryState::parse(
            "?search=jump+cue&sort=price-desc&limit=24&page=3&price_min=100&available=true&no_inlays=true",
        );

        assert_eq!(state.search, "jump cue");
        assert_eq!(state.sort, Some(SortKey::PriceDesc));
        assert_eq!(state.per_page, 24);
        assert_eq!(state.page, 3);
        assert_eq!(state.filters.bound(Bound::Min), Some(100));
        assert!(state.filters.has_flag(&Flag::Availability(Availability::Available)));
        assert!(state.filters.has_flag(&Flag::Feature {
            feature: Feature::Inlays,
            present: false
        }));
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let state = QueryState::parse("limit=lots&page=0&sort=random&price_max=ten&sold=yes");

        assert_eq!(state, QueryState::default());
    }

    #[test]
    fn state_round_trips_through_the_query_string() {
        let mut filters = Filters::default();
        filters.set_bound(Bound::Max, Some(2500));
        filters.set_flag(Flag::MaterialType(MaterialType::Crystal), true);
        filters.set_flag(Flag::Tier("Tier 2".into()), true);
        filters.set_flag(Flag::Color("deep blue".into()), true);

        let state = QueryState {
            search: String::from("rose & quartz"),
            sort: Some(SortKey::AlphabetZA),
            per_page: 48,
            page: 2,
            filters,
        };

        assert_eq!(QueryState::parse(&state.to_query()), state);
    }

    #[test]
    fn serialization_is_stable() {
        let state = QueryState::parse("sold=true&search=oak&available=true&page=2");

        assert_eq!(state.to_query(), "search=oak&page=2&available=true&sold=true");
    }
}
