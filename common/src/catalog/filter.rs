use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use api::catalog::{CatalogItem, CollectionKind, CueFeatures, Material, MaterialType, Status};

// numeric filters are the only ones whose value is not "true"
pub const PRICE_PREFIX: &str = "price_";
const TIER_PREFIX: &str = "tier_";
const COLOR_PREFIX: &str = "color_";
const NEGATED_PREFIX: &str = "no_";

// price range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    pub fn param(&self) -> &'static str {
        match self {
            Self::Min => "price_min",
            Self::Max => "price_max",
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "price_min" => Some(Self::Min),
            "price_max" => Some(Self::Max),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Min => "Min",
            Self::Max => "Max",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Availability {
    Available,
    Upcoming,
    Sold,
}

impl Availability {
    pub const ALL: [Availability; 3] = [Self::Available, Self::Upcoming, Self::Sold];

    pub fn param(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Upcoming => "upcoming",
            Self::Sold => "sold",
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Available => Status::Available,
            Self::Upcoming => Status::ComingSoon,
            Self::Sold => Status::Sold,
        }
    }
}

// cue build options that can be filtered on, each in a with/without pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Inlays,
    Wrap,
    FullSplice,
    Rings,
}

impl Feature {
    pub const ALL: [Feature; 4] = [Self::Inlays, Self::Wrap, Self::FullSplice, Self::Rings];

    pub fn param(&self) -> &'static str {
        match self {
            Self::Inlays => "inlays",
            Self::Wrap => "wrap",
            Self::FullSplice => "full_splice",
            Self::Rings => "rings",
        }
    }

    fn from_param(param: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.param() == param)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Inlays => "Inlays",
            Self::Wrap => "Wrap",
            Self::FullSplice => "Full splice",
            Self::Rings => "Rings",
        }
    }

    pub fn present_in(&self, features: &CueFeatures) -> bool {
        match self {
            Self::Inlays => features.has_inlays,
            Self::Wrap => features.has_wrap,
            Self::FullSplice => features.is_full_splice,
            Self::Rings => features.has_rings,
        }
    }
}

// a checkbox-style filter
//
// these are either on (present in the Filters) or off (absent), there is no
// stored "false"
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    Availability(Availability),
    Feature { feature: Feature, present: bool },
    MaterialType(MaterialType),
    Tier(String),
    Color(String),
}

impl Flag {
    pub fn param(&self) -> String {
        match self {
            Self::Availability(availability) => availability.param().to_owned(),
            Self::Feature {
                feature,
                present: true,
            } => feature.param().to_owned(),
            Self::Feature {
                feature,
                present: false,
            } => format!("{NEGATED_PREFIX}{}", feature.param()),
            Self::MaterialType(MaterialType::Wood) => String::from("wood"),
            Self::MaterialType(MaterialType::Crystal) => String::from("crystal"),
            Self::Tier(tier) => format!("{TIER_PREFIX}{tier}"),
            Self::Color(color) => format!("{COLOR_PREFIX}{color}"),
        }
    }

    pub fn from_param(param: &str) -> Option<Self> {
        if let Some(availability) = Availability::ALL.into_iter().find(|a| a.param() == param) {
            return Some(Self::Availability(availability));
        }

        if let Some(feature) = Feature::from_param(param) {
            return Some(Self::Feature {
                feature,
                present: true,
            });
        }

        if let Some(feature) = param.strip_prefix(NEGATED_PREFIX).and_then(Feature::from_param) {
            return Some(Self::Feature {
                feature,
                present: false,
            });
        }

        match param {
            "wood" => return Some(Self::MaterialType(MaterialType::Wood)),
            "crystal" => return Some(Self::MaterialType(MaterialType::Crystal)),
            _ => {}
        }

        if let Some(tier) = param.strip_prefix(TIER_PREFIX).filter(|t| !t.is_empty()) {
            return Some(Self::Tier(tier.to_owned()));
        }

        // colors are offered lowercased, so a hand-written token has to match
        param
            .strip_prefix(COLOR_PREFIX)
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .map(Self::Color)
    }

    pub fn label(&self) -> String {
        match self {
            Self::Availability(availability) => availability.status().label().to_owned(),
            Self::Feature {
                feature,
                present: true,
            } => feature.label().to_owned(),
            Self::Feature {
                feature,
                present: false,
            } => format!("No {}", feature.label().to_lowercase()),
            Self::MaterialType(material_type) => material_type.label().to_owned(),
            Self::Tier(tier) => tier.clone(),
            Self::Color(color) => color.clone(),
        }
    }

    // the other half of a with/without pair
    pub fn opposite(&self) -> Option<Flag> {
        match self {
            Self::Feature { feature, present } => Some(Self::Feature {
                feature: *feature,
                present: !present,
            }),
            _ => None,
        }
    }
}

// names one active filter, used when removing a single filter "bubble"
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    Bound(Bound),
    Flag(Flag),
}

impl FilterKey {
    pub fn param(&self) -> String {
        match self {
            Self::Bound(bound) => bound.param().to_owned(),
            Self::Flag(flag) => flag.param(),
        }
    }
}

// the active filter set for a collection
//
// absence of a key means "not filtering on this dimension"
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filters {
    flags: BTreeSet<Flag>,
    bounds: BTreeMap<Bound, i64>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty() && self.bounds.is_empty()
    }

    pub fn has_flag(&self, flag: &Flag) -> bool {
        self.flags.contains(flag)
    }

    pub fn bound(&self, bound: Bound) -> Option<i64> {
        self.bounds.get(&bound).copied()
    }

    // returns whether anything changed, so that callers know to reset paging
    pub fn set_flag(&mut self, flag: Flag, on: bool) -> bool {
        if on {
            self.flags.insert(flag)
        } else {
            self.flags.remove(&flag)
        }
    }

    pub fn set_bound(&mut self, bound: Bound, value: Option<i64>) -> bool {
        match value {
            Some(value) => self.bounds.insert(bound, value) != Some(value),
            None => self.bounds.remove(&bound).is_some(),
        }
    }

    pub fn remove(&mut self, key: &FilterKey) -> bool {
        match key {
            FilterKey::Bound(bound) => self.set_bound(*bound, None),
            FilterKey::Flag(flag) => self.flags.remove(flag),
        }
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();

        self.flags.clear();
        self.bounds.clear();

        changed
    }

    // bounds first, then flags in their natural order
    pub fn keys(&self) -> Vec<FilterKey> {
        self.bounds
            .keys()
            .map(|b| FilterKey::Bound(*b))
            .chain(self.flags.iter().cloned().map(FilterKey::Flag))
            .collect()
    }

    pub fn label(&self, key: &FilterKey) -> String {
        match key {
            FilterKey::Bound(bound) => match self.bound(*bound) {
                Some(value) => format!("{} ${value}", bound.label()),
                None => bound.label().to_owned(),
            },
            FilterKey::Flag(flag) => flag.label(),
        }
    }

    // apply a single query parameter
    //
    // price_* parameters must parse as integers and everything else is a
    // flag that is only switched on by the literal "true".  anything that
    // does not fit is skipped, and the return value says whether the
    // parameter was understood
    pub fn insert_param(&mut self, name: &str, value: &str) -> bool {
        if name.starts_with(PRICE_PREFIX) {
            let Some(bound) = Bound::from_param(name) else {
                debug!({ name = name }, "ignoring unknown price parameter");
                return false;
            };

            return match value.trim().parse::<i64>() {
                Ok(amount) => {
                    self.set_bound(bound, Some(amount));
                    true
                }
                Err(_) => {
                    debug!({ name = name, value = value }, "ignoring malformed price bound");
                    false
                }
            };
        }

        match Flag::from_param(name) {
            Some(flag) => {
                if value == "true" {
                    self.flags.insert(flag);
                }
                true
            }
            None => {
                debug!({ name = name }, "ignoring unknown filter parameter");
                false
            }
        }
    }

    pub fn params(&self) -> Vec<(String, String)> {
        self.bounds
            .iter()
            .map(|(bound, value)| (bound.param().to_owned(), value.to_string()))
            .chain(self.flags.iter().map(|f| (f.param(), String::from("true"))))
            .collect()
    }

    // a record is kept only if it passes every active predicate; predicates
    // for dimensions that a kind of record does not have are skipped
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if self.is_empty() {
            return true;
        }

        match item {
            CatalogItem::Cue(cue) => {
                self.matches_price(cue.price)
                    && self.matches_availability(cue.status)
                    && self.matches_features(&cue.features)
            }
            CatalogItem::Accessory(accessory) => self.matches_price(accessory.price),
            CatalogItem::Material(material) => self.matches_material(material),
        }
    }

    fn active<'a, T>(&'a self, pick: impl Fn(&'a Flag) -> Option<T>) -> Vec<T> {
        self.flags.iter().filter_map(pick).collect()
    }

    fn matches_price(&self, price: Option<f64>) -> bool {
        let min = self.bound(Bound::Min);
        let max = self.bound(Bound::Max);

        if min.is_none() && max.is_none() {
            return true;
        }

        let Some(price) = price else {
            return false;
        };

        min.is_none_or(|min| price >= min as f64) && max.is_none_or(|max| price <= max as f64)
    }

    fn matches_availability(&self, status: Option<Status>) -> bool {
        let wanted = self.active(|f| match f {
            Flag::Availability(a) => Some(a.status()),
            _ => None,
        });

        if wanted.is_empty() {
            return true;
        }

        status.is_some_and(|s| wanted.contains(&s))
    }

    // if both halves of a pair are set the record fails one of them, which
    // is the right answer for a contradictory request
    fn matches_features(&self, features: &CueFeatures) -> bool {
        self.flags.iter().all(|flag| match flag {
            Flag::Feature { feature, present } => feature.present_in(features) == *present,
            _ => true,
        })
    }

    fn matches_material(&self, material: &Material) -> bool {
        let types = self.active(|f| match f {
            Flag::MaterialType(t) => Some(*t),
            _ => None,
        });
        let tiers = self.active(|f| match f {
            Flag::Tier(t) => Some(t.as_str()),
            _ => None,
        });
        let colors = self.active(|f| match f {
            Flag::Color(c) => Some(c.to_lowercase()),
            _ => None,
        });

        let type_ok = types.is_empty()
            || material
                .material_type()
                .is_some_and(|t| types.contains(&t));

        let tier_ok = tiers.is_empty()
            || material
                .tier
                .as_deref()
                .is_some_and(|t| tiers.contains(&t));

        let color_ok = colors.is_empty()
            || material.colors.iter().any(|color| {
                let color = color.to_lowercase();
                colors.iter().any(|token| color.contains(token.as_str()))
            });

        type_ok && tier_ok && color_ok
    }
}

// sidebar options
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub flag: Flag,
    pub label: String,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterGroup {
    pub title: &'static str,
    pub options: Vec<FilterOption>,
}

pub fn has_price_range(kind: CollectionKind) -> bool {
    matches!(kind, CollectionKind::Cues | CollectionKind::Accessories)
}

// build the checkbox groups shown for a collection
//
// for feature pairs, once one half is active the other half is hidden so that
// the ui cannot ask for both; tiers and colors come from the loaded records
pub fn filter_groups(kind: CollectionKind, items: &[CatalogItem], filters: &Filters) -> Vec<FilterGroup> {
    let option = |flag: Flag| FilterOption {
        label: flag.label(),
        active: filters.has_flag(&flag),
        flag,
    };

    match kind {
        CollectionKind::Cues => {
            let availability = Availability::ALL
                .into_iter()
                .map(|a| option(Flag::Availability(a)))
                .collect();

            let features = Feature::ALL
                .into_iter()
                .flat_map(|feature| [true, false].map(|present| Flag::Feature { feature, present }))
                .filter(|flag| match flag.opposite() {
                    Some(opposite) => !filters.has_flag(&opposite),
                    None => true,
                })
                .map(option)
                .collect();

            vec![
                FilterGroup {
                    title: "Availability",
                    options: availability,
                },
                FilterGroup {
                    title: "Features",
                    options: features,
                },
            ]
        }
        CollectionKind::Accessories => Vec::new(),
        CollectionKind::Materials => {
            let materials = || {
                items.iter().filter_map(|item| match item {
                    CatalogItem::Material(material) => Some(material),
                    _ => None,
                })
            };

            let tiers: BTreeSet<String> = materials().filter_map(|m| m.tier.clone()).collect();

            let colors: BTreeSet<String> = materials()
                .flat_map(|m| m.colors.iter())
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect();

            vec![
                FilterGroup {
                    title: "Type",
                    options: [MaterialType::Wood, MaterialType::Crystal]
                        .into_iter()
                        .map(|t| option(Flag::MaterialType(t)))
                        .collect(),
                },
                FilterGroup {
                    title: "Tier",
                    options: tiers.into_iter().map(|t| option(Flag::Tier(t))).collect(),
                },
                FilterGroup {
                    title: "Color",
                    options: colors.into_iter().map(|c| option(Flag::Color(c))).collect(),
                },
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::*;

    fn kept<'a>(items: &'a [CatalogItem], filters: &Filters) -> Vec<&'a str> {
        items
            .iter()
            .filter(|i| filters.matches(i))
            .map(|i| i.display_name())
            .collect()
    }

    #[test]
    fn availability_keeps_matching_status() {
        let items = vec![
            cue("Alpha", Some(100.0), Some(Status::Available)),
            cue("Beta", Some(200.0), Some(Status::Sold)),
        ];
        let mut filters = Filters::default();
        filters.set_flag(Flag::Availability(Availability::Available), true);

        assert_eq!(kept(&items, &filters), vec!["Alpha"]);
    }

    #[test]
    fn availability_options_are_or_combined_and_exclude_missing_status() {
        let items = vec![
            cue("Alpha", None, Some(Status::Available)),
            cue("Beta", None, Some(Status::ComingSoon)),
            cue("Gamma", None, Some(Status::Sold)),
            cue("Delta", None, None),
        ];
        let mut filters = Filters::default();
        filters.set_flag(Flag::Availability(Availability::Upcoming), true);
        filters.set_flag(Flag::Availability(Availability::Sold), true);

        assert_eq!(kept(&items, &filters), vec!["Beta", "Gamma"]);
    }

    #[test]
    fn price_min_excludes_cheaper_records() {
        let items = vec![
            cue("Alpha", Some(100.0), Some(Status::Available)),
            cue("Beta", Some(200.0), Some(Status::Sold)),
        ];
        let mut filters = Filters::default();
        filters.set_bound(Bound::Min, Some(150));

        assert_eq!(kept(&items, &filters), vec!["Beta"]);
    }

    #[test]
    fn price_range_is_inclusive_and_drops_unpriced_records() {
        let items = vec![
            accessory("Chalk", Some(5.0)),
            accessory("Case", Some(150.0)),
            accessory("Glove", Some(20.0)),
            accessory("Custom tip", None),
        ];
        let mut filters = Filters::default();
        filters.set_bound(Bound::Min, Some(5));
        filters.set_bound(Bound::Max, Some(20));

        assert_eq!(kept(&items, &filters), vec!["Chalk", "Glove"]);
    }

    #[test]
    fn feature_pair_halves_filter_opposite_ways() {
        let mut inlaid = cue("Inlaid", None, None);
        if let CatalogItem::Cue(c) = &mut inlaid {
            c.features.has_inlays = true;
        }
        let items = vec![inlaid, cue("Plain", None, None)];

        let with = Flag::Feature {
            feature: Feature::Inlays,
            present: true,
        };
        let without = with.opposite().unwrap();

        let mut filters = Filters::default();
        filters.set_flag(with.clone(), true);
        assert_eq!(kept(&items, &filters), vec!["Inlaid"]);

        filters.set_flag(with, false);
        filters.set_flag(without.clone(), true);
        assert_eq!(kept(&items, &filters), vec!["Plain"]);

        // both at once is contradictory and keeps nothing
        filters.set_flag(without.opposite().unwrap(), true);
        assert!(kept(&items, &filters).is_empty());
    }

    #[test]
    fn wood_filter_keeps_common_named_materials() {
        let items = vec![wood("Oak", "Tier 1", &[]), crystal("Quartz", "Tier 2", &[])];
        let mut filters = Filters::default();
        filters.set_flag(Flag::MaterialType(MaterialType::Wood), true);

        assert_eq!(kept(&items, &filters), vec!["Oak"]);
    }

    #[test]
    fn tier_is_exact_and_color_is_substring() {
        let items = vec![
            wood("Padauk", "Tier 1", &["Dark Red"]),
            wood("Maple", "Tier 10", &["White"]),
            crystal("Amethyst", "Tier 1", &["Purple"]),
        ];

        let mut filters = Filters::default();
        filters.set_flag(Flag::Tier("Tier 1".into()), true);
        assert_eq!(kept(&items, &filters), vec!["Padauk", "Amethyst"]);

        filters.set_flag(Flag::Color("red".into()), true);
        assert_eq!(kept(&items, &filters), vec!["Padauk"]);
    }

    #[test]
    fn predicates_for_other_kinds_are_skipped() {
        let items = vec![accessory("Chalk", Some(5.0)), wood("Oak", "Tier 1", &[])];
        let mut filters = Filters::default();
        filters.set_flag(Flag::Availability(Availability::Sold), true);
        filters.set_bound(Bound::Max, Some(10));

        assert_eq!(kept(&items, &filters), vec!["Chalk", "Oak"]);
    }

    #[test]
    fn removing_and_restoring_a_filter_restores_the_result() {
        let items = vec![
            cue("Alpha", Some(100.0), Some(Status::Available)),
            cue("Beta", Some(200.0), Some(Status::Sold)),
            cue("Gamma", Some(300.0), Some(Status::Available)),
        ];
        let mut filters = Filters::default();
        filters.set_flag(Flag::Availability(Availability::Available), true);
        filters.set_bound(Bound::Max, Some(250));
        let before = kept(&items, &filters);

        for key in filters.keys() {
            let mut toggled = filters.clone();
            toggled.remove(&key);
            match &key {
                FilterKey::Bound(bound) => toggled.set_bound(*bound, filters.bound(*bound)),
                FilterKey::Flag(flag) => toggled.set_flag(flag.clone(), true),
            };

            assert_eq!(toggled, filters);
            assert_eq!(kept(&items, &toggled), before);
        }
    }

    #[test]
    fn unchecking_removes_the_key() {
        let mut filters = Filters::default();
        let flag = Flag::Availability(Availability::Sold);

        assert!(filters.set_flag(flag.clone(), true));
        assert!(!filters.set_flag(flag.clone(), true));
        assert!(filters.set_flag(flag, false));
        assert!(filters.is_empty());

        assert!(filters.set_bound(Bound::Min, Some(10)));
        assert!(!filters.set_bound(Bound::Min, Some(10)));
        assert!(filters.set_bound(Bound::Min, None));
        assert!(filters.is_empty());
    }

    #[test]
    fn params_are_parsed_by_prefix() {
        let mut filters = Filters::default();

        assert!(filters.insert_param("price_min", "150"));
        assert!(!filters.insert_param("price_max", "cheap"));
        assert!(!filters.insert_param("price_avg", "10"));
        assert!(filters.insert_param("no_wrap", "true"));
        assert!(filters.insert_param("sold", "false"));
        assert!(filters.insert_param("tier_Tier 3", "true"));
        assert!(!filters.insert_param("sparkly", "true"));

        assert_eq!(filters.bound(Bound::Min), Some(150));
        assert_eq!(filters.bound(Bound::Max), None);
        assert!(filters.has_flag(&Flag::Feature {
            feature: Feature::Wrap,
            present: false
        }));
        assert!(!filters.has_flag(&Flag::Availability(Availability::Sold)));
        assert!(filters.has_flag(&Flag::Tier("Tier 3".into())));
    }

    #[test]
    fn every_flag_round_trips_through_its_param() {
        let flags = Availability::ALL
            .into_iter()
            .map(Flag::Availability)
            .chain(Feature::ALL.into_iter().flat_map(|feature| {
                [true, false].map(|present| Flag::Feature { feature, present })
            }))
            .chain([
                Flag::MaterialType(MaterialType::Wood),
                Flag::MaterialType(MaterialType::Crystal),
                Flag::Tier("Tier 1".into()),
                Flag::Color("blue".into()),
            ]);

        for flag in flags {
            assert_eq!(Flag::from_param(&flag.param()), Some(flag));
        }
    }

    #[test]
    fn active_feature_hides_its_opposite_option() {
        let mut filters = Filters::default();
        filters.set_flag(
            Flag::Feature {
                feature: Feature::Rings,
                present: false,
            },
            true,
        );

        let groups = filter_groups(CollectionKind::Cues, &[], &filters);
        let features = &groups[1].options;

        assert_eq!(features.len(), Feature::ALL.len() * 2 - 1);
        assert!(!features.iter().any(|o| o.flag
            == Flag::Feature {
                feature: Feature::Rings,
                present: true
            }));
        assert!(features.iter().any(|o| o.active && o.label == "No rings"));
    }

    #[test]
    fn url_color_marks_its_sidebar_option() {
        let items = vec![wood("Walnut", "Tier 1", &["Brown"])];

        let mut filters = Filters::default();
        assert!(filters.insert_param("color_Brown", "true"));
        assert!(filters.has_flag(&Flag::Color("brown".into())));

        let groups = filter_groups(CollectionKind::Materials, &items, &filters);
        let colors: Vec<(String, bool)> = groups[2]
            .options
            .iter()
            .map(|o| (o.label.clone(), o.active))
            .collect();
        assert_eq!(colors, vec![(String::from("brown"), true)]);

        // checking the sidebar option does not add a second filter
        assert!(!filters.set_flag(Flag::Color("brown".into()), true));
        assert_eq!(filters.keys().len(), 1);
        assert_eq!(Flag::from_param("color_ "), None);
    }

    #[test]
    fn material_options_come_from_records() {
        let items = vec![
            wood("Oak", "Tier 2", &["Brown", "tan"]),
            wood("Ebony", "Tier 1", &["Black"]),
            crystal("Quartz", "Tier 2", &["brown "]),
        ];

        let groups = filter_groups(CollectionKind::Materials, &items, &Filters::default());
        let labels = |i: usize| -> Vec<String> { groups[i].options.iter().map(|o| o.label.clone()).collect() };

        assert_eq!(labels(0), vec!["Wood", "Crystal"]);
        assert_eq!(labels(1), vec!["Tier 1", "Tier 2"]);
        assert_eq!(labels(2), vec!["black", "brown", "tan"]);
    }
}
