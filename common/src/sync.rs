use tracing::debug;

use api::catalog::CollectionKind;

use crate::{
    catalog::{
        filter::{Bound, FilterKey, Flag},
        page::total_pages,
        sort::SortKey,
    },
    query::QueryState,
};

// user interaction on a collection listing
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Search(String),
    Sort(Option<SortKey>),
    SetFlag(Flag, bool),
    SetBound(Bound, Option<i64>),
    RemoveFilter(FilterKey),
    ClearFilters,
    Page(usize),
    PerPage(usize),
}

// what observe() made of a route change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observed {
    // the query is the one we last wrote (or means the same thing)
    Unchanged,
    // a different collection, so state was reset and rehydrated
    Navigated,
    // back/forward or a pasted link within the same collection
    Reparsed,
}

// a query string that should replace the current history entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingWrite {
    generation: u64,
    pub query: String,
}

// UrlSync
//
// keeps the listing state and the address bar in step.  reads (mount, route
// changes) and writes (after user interaction) must never both fire for the
// same change, which is handled by two things:
//
//  - last_written holds the canonical form of whatever the address bar says,
//    so an echo of our own write (or any url that means the same thing) is
//    ignored by observe(), and pending_write() only reports real differences
//
//  - generation is bumped on every collection change; a write computed before
//    the change no longer matches and is refused by commit()
#[derive(Clone, Debug, PartialEq)]
pub struct UrlSync {
    kind: CollectionKind,
    state: QueryState,
    last_written: String,
    generation: u64,
}

impl UrlSync {
    // initial mount: parse the query string once
    pub fn hydrate(kind: CollectionKind, query: &str) -> Self {
        let state = QueryState::parse(query);
        let last_written = state.to_query();

        debug!({ kind = %kind, query = %last_written }, "hydrated listing state");

        UrlSync {
            kind,
            state,
            last_written,
            generation: 0,
        }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    // called with the route whenever it changes
    pub fn observe(&mut self, kind: CollectionKind, query: &str) -> Observed {
        let state = QueryState::parse(query);
        let canonical = state.to_query();

        if kind != self.kind {
            debug!({ from = %self.kind, to = %kind }, "collection changed, resetting listing state");

            self.kind = kind;
            self.state = state;
            self.last_written = canonical;
            self.generation += 1;

            return Observed::Navigated;
        }

        if canonical == self.last_written {
            return Observed::Unchanged;
        }

        debug!({ query = %canonical }, "external url change, reparsing");

        self.state = state;
        self.last_written = canonical;

        Observed::Reparsed
    }

    // returns whether the state changed
    //
    // any change to search, sort or filters sends the listing back to the
    // first page; changing the page (or page size) does not
    pub fn apply(&mut self, action: Action) -> bool {
        let state = &mut self.state;

        let (changed, reset_page) = match action {
            Action::Search(search) => {
                let changed = state.search != search;
                state.search = search;
                (changed, true)
            }
            Action::Sort(sort) => {
                let changed = state.sort != sort;
                state.sort = sort;
                (changed, true)
            }
            Action::SetFlag(flag, on) => (state.filters.set_flag(flag, on), true),
            Action::SetBound(bound, value) => (state.filters.set_bound(bound, value), true),
            Action::RemoveFilter(key) => (state.filters.remove(&key), true),
            Action::ClearFilters => (state.filters.clear(), true),
            Action::Page(page) => {
                let page = page.max(1);
                let changed = state.page != page;
                state.page = page;
                (changed, false)
            }
            Action::PerPage(per_page) => {
                let per_page = per_page.max(1);
                let changed = state.per_page != per_page;
                state.per_page = per_page;
                (changed, false)
            }
        };

        if changed && reset_page {
            state.page = 1;
        }

        changed
    }

    // keep the current page within the result set once it is known
    pub fn clamp_page(&mut self, total_items: usize) -> bool {
        let last = total_pages(total_items, self.state.per_page);

        if self.state.page > last {
            debug!({ page = self.state.page, last = last }, "clamping page");
            self.state.page = last;
            return true;
        }

        false
    }

    // clamp against records fetched for `loaded`; until the current
    // collection's own records arrive the page is left as the url gave it
    pub fn clamp_loaded(&mut self, loaded: CollectionKind, total_items: usize) -> bool {
        if loaded != self.kind {
            debug!({ loaded = %loaded, current = %self.kind }, "records are for another collection, not clamping");
            return false;
        }

        self.clamp_page(total_items)
    }

    // the query string to write back, if it differs from the address bar
    pub fn pending_write(&self) -> Option<PendingWrite> {
        let query = self.state.to_query();

        if query == self.last_written {
            return None;
        }

        Some(PendingWrite {
            generation: self.generation,
            query,
        })
    }

    // record that a write is about to happen; false means the write is stale
    // and must not be performed
    pub fn commit(&mut self, write: &PendingWrite) -> bool {
        if write.generation != self.generation {
            debug!({ stale = write.generation, current = self.generation }, "dropping stale url write");
            return false;
        }

        self.last_written = write.query.clone();

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::Availability;
    use assert_matches::assert_matches;

    const SOLD: Flag = Flag::Availability(Availability::Sold);

    #[test]
    fn mount_reads_the_url_without_writing_it_back() {
        let sync = UrlSync::hydrate(CollectionKind::Cues, "?search=jump&page=3");

        assert_eq!(sync.state().search, "jump");
        assert_eq!(sync.state().page, 3);
        assert_eq!(sync.pending_write(), None);
    }

    #[test]
    fn deep_linked_page_survives_until_the_user_filters() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "page=4");

        assert!(!sync.clamp_page(100));
        assert_eq!(sync.state().page, 4);

        sync.apply(Action::SetFlag(SOLD, true));
        assert_eq!(sync.state().page, 1);
    }

    #[test]
    fn filter_search_and_sort_changes_reset_the_page() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "");

        for action in [
            Action::Search(String::from("break")),
            Action::Sort(Some(SortKey::Newest)),
            Action::SetBound(Bound::Min, Some(10)),
            Action::RemoveFilter(FilterKey::Bound(Bound::Min)),
            Action::SetFlag(SOLD, true),
            Action::ClearFilters,
        ] {
            sync.apply(Action::Page(5));
            assert!(sync.apply(action));
            assert_eq!(sync.state().page, 1);
        }
    }

    #[test]
    fn no_op_actions_leave_the_page_alone() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "page=3");

        assert!(!sync.apply(Action::Search(String::new())));
        assert!(!sync.apply(Action::ClearFilters));
        assert_eq!(sync.state().page, 3);
    }

    #[test]
    fn page_size_changes_keep_the_page() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "page=2");

        assert!(sync.apply(Action::PerPage(24)));
        assert_eq!(sync.state().page, 2);
        assert_eq!(sync.state().per_page, 24);
    }

    #[test]
    fn writes_only_when_the_url_would_change() {
        let mut sync = UrlSync::hydrate(CollectionKind::Accessories, "");

        sync.apply(Action::Search(String::from("chalk")));

        let write = sync.pending_write().unwrap();
        assert_eq!(write.query, "search=chalk");
        assert!(sync.commit(&write));
        assert_eq!(sync.pending_write(), None);

        // the router echoes the write back to us
        assert_eq!(sync.observe(CollectionKind::Accessories, "?search=chalk"), Observed::Unchanged);
        assert_eq!(sync.pending_write(), None);
    }

    #[test]
    fn back_navigation_reparses_the_url() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "search=jump");

        sync.apply(Action::Search(String::from("break")));
        let write = sync.pending_write().unwrap();
        sync.commit(&write);

        assert_eq!(sync.observe(CollectionKind::Cues, "search=jump"), Observed::Reparsed);
        assert_eq!(sync.state().search, "jump");
        assert_eq!(sync.pending_write(), None);
    }

    #[test]
    fn equivalent_urls_are_not_reparsed() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "sold=true&available=true");

        assert_eq!(
            sync.observe(CollectionKind::Cues, "available=true&limit=12&sold=true&page=1"),
            Observed::Unchanged
        );
    }

    #[test]
    fn switching_collection_resets_then_rehydrates() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "sold=true&page=3&sort=newest");

        assert_matches!(
            sync.observe(CollectionKind::Materials, "wood=true"),
            Observed::Navigated
        );

        assert_eq!(sync.kind(), CollectionKind::Materials);
        assert_eq!(sync.state().page, 1);
        assert_eq!(sync.state().sort, None);
        assert!(!sync.state().filters.has_flag(&SOLD));
        assert_eq!(sync.state().filters.keys().len(), 1);
        assert_eq!(sync.pending_write(), None);
    }

    #[test]
    fn writes_from_before_a_collection_change_are_refused() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "");

        sync.apply(Action::SetFlag(SOLD, true));
        let stale = sync.pending_write().unwrap();

        sync.observe(CollectionKind::Accessories, "");

        assert!(!sync.commit(&stale));
        assert_eq!(sync.pending_write(), None);
    }

    #[test]
    fn records_from_the_previous_collection_do_not_clamp() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "");

        assert_eq!(sync.observe(CollectionKind::Materials, "page=3"), Observed::Navigated);

        // the cue records are still loaded while the materials are fetched
        assert!(!sync.clamp_loaded(CollectionKind::Cues, 5));
        assert_eq!(sync.state().page, 3);
        assert_eq!(sync.pending_write(), None);

        assert!(sync.clamp_loaded(CollectionKind::Materials, 5));
        assert_eq!(sync.state().page, 1);
        assert_matches!(sync.pending_write(), Some(PendingWrite { ref query, .. }) if query.is_empty());
    }

    #[test]
    fn page_is_clamped_to_the_last_page() {
        let mut sync = UrlSync::hydrate(CollectionKind::Cues, "page=9&limit=10");

        assert!(sync.clamp_page(25));
        assert_eq!(sync.state().page, 3);

        assert!(sync.clamp_page(0));
        assert_eq!(sync.state().page, 1);

        assert_matches!(sync.pending_write(), Some(PendingWrite { ref query, .. }) if query == "limit=10");
    }
}
