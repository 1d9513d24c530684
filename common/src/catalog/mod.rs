use api::catalog::CatalogItem;

pub mod filter;
pub mod page;
pub mod sort;

use filter::Filters;
use sort::{sort_items, SortKey};

// case-insensitive substring match against the display name, which for
// materials is whichever of the two names is populated
pub fn matches_search(item: &CatalogItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    item.display_name()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

// the catalog engine
//
// search, filter and sort are applied in that order.  this is pure and cheap
// enough (a few hundred records at most) to simply be recomputed on every
// render, and the result borrows from the loaded records
pub fn refine<'a>(
    items: &'a [CatalogItem],
    search: &str,
    filters: &Filters,
    sort: Option<SortKey>,
) -> Vec<&'a CatalogItem> {
    let mut refined: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| matches_search(item, search))
        .filter(|item| filters.matches(item))
        .collect();

    sort_items(&mut refined, sort);

    refined
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};

    use api::catalog::{Accessory, CatalogItem, Cue, Material, Status};

    pub fn cue(name: &str, price: Option<f64>, status: Option<Status>) -> CatalogItem {
        CatalogItem::Cue(Cue {
            id: format!("cue-{name}"),
            name: name.to_owned(),
            price,
            status,
            ..Default::default()
        })
    }

    pub fn accessory(name: &str, price: Option<f64>) -> CatalogItem {
        CatalogItem::Accessory(Accessory {
            id: format!("accessory-{name}"),
            name: name.to_owned(),
            price,
            ..Default::default()
        })
    }

    pub fn wood(name: &str, tier: &str, colors: &[&str]) -> CatalogItem {
        CatalogItem::Material(Material {
            id: format!("wood-{name}"),
            common_name: Some(name.to_owned()),
            tier: Some(tier.to_owned()),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        })
    }

    pub fn crystal(name: &str, tier: &str, colors: &[&str]) -> CatalogItem {
        CatalogItem::Material(Material {
            id: format!("crystal-{name}"),
            crystal_name: Some(name.to_owned()),
            tier: Some(tier.to_owned()),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        })
    }

    // stamp a record with a creation time `day` days into 2024
    pub fn dated(mut item: CatalogItem, day: u32) -> CatalogItem {
        let at = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).single();

        match &mut item {
            CatalogItem::Cue(cue) => cue.created_at = at,
            CatalogItem::Accessory(accessory) => accessory.created_at = at,
            CatalogItem::Material(material) => material.created_at = at,
        }

        item
    }
}

#[cfg(test)]
mod tests {
    use super::{
        filter::{Availability, Flag},
        fixtures::*,
        *,
    };
    use api::catalog::Status;

    fn names(items: &[&CatalogItem]) -> Vec<String> {
        items.iter().map(|i| i.display_name().to_owned()).collect()
    }

    #[test]
    fn empty_inputs_return_the_list_unchanged() {
        let items = vec![
            cue("Zeta", Some(5.0), None),
            accessory("Chalk", None),
            wood("Oak", "Tier 1", &["Tan"]),
        ];

        let refined = refine(&items, "", &Filters::default(), None);

        assert_eq!(refined, items.iter().collect::<Vec<_>>());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let items = vec![crystal("Quartz", "Tier 2", &[]), wood("Oak", "Tier 1", &[])];

        assert_eq!(names(&refine(&items, "qu", &Filters::default(), None)), vec!["Quartz"]);
        assert_eq!(names(&refine(&items, "OA", &Filters::default(), None)), vec!["Oak"]);
        assert!(refine(&items, "pine", &Filters::default(), None).is_empty());
    }

    #[test]
    fn search_filter_and_sort_compose() {
        let items = vec![
            cue("Sneaky Pete", Some(400.0), Some(Status::Available)),
            cue("Break Cue", Some(900.0), Some(Status::Sold)),
            cue("Jump Cue", Some(300.0), Some(Status::Available)),
            cue("Playing Cue", Some(1200.0), Some(Status::Available)),
        ];
        let mut filters = Filters::default();
        filters.set_flag(Flag::Availability(Availability::Available), true);

        let refined = refine(&items, "cue", &filters, Some(SortKey::PriceDesc));

        assert_eq!(names(&refined), vec!["Playing Cue", "Jump Cue"]);
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let items = vec![cue("B", Some(2.0), None), cue("A", Some(1.0), None)];
        let filters = Filters::default();

        assert_eq!(
            refine(&items, "", &filters, Some(SortKey::AlphabetAZ)),
            refine(&items, "", &filters, Some(SortKey::AlphabetAZ))
        );
    }
}
