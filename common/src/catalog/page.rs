// pages are 1-based throughout, matching what is shown to the user and
// written to the url

// how many neighbours of the current page are shown on each side
const WINDOW: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

// an empty listing still has one (empty) page
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }

    total_items.div_ceil(per_page).max(1)
}

// pages past the end are empty rather than clamped
pub fn page_slice<T>(items: &[T], per_page: usize, page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);

    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(per_page).min(items.len());

    &items[start..end]
}

// the numbered buttons under a result grid
//
// first and last are always present, along with up to WINDOW pages either
// side of the current one.  a gap of exactly one page shows that page, and
// anything larger collapses into a single ellipsis
pub fn page_window(current: usize, total: usize) -> Vec<PageToken> {
    if total == 0 {
        return Vec::new();
    }

    let current = current.clamp(1, total);
    let low = current.saturating_sub(WINDOW).max(1);
    let high = (current + WINDOW).min(total);

    let mut pages: Vec<usize> = vec![1];
    pages.extend(low..=high);
    pages.push(total);
    pages.dedup();

    let mut tokens = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<usize> = None;

    for page in pages {
        if let Some(previous) = previous {
            match page - previous {
                0 => continue,
                1 => {}
                2 => tokens.push(PageToken::Page(previous + 1)),
                _ => tokens.push(PageToken::Ellipsis),
            }
        }

        tokens.push(PageToken::Page(page));
        previous = Some(page);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::*;

    #[test]
    fn second_page_of_one_per_page() {
        let items = ["A", "B", "C"];

        assert_eq!(page_slice(&items, 1, 2), &["B"]);
    }

    #[test]
    fn pages_partition_the_list() {
        let items: Vec<usize> = (0..23).collect();

        for per_page in [1, 5, 12, 23, 50] {
            let pages = total_pages(items.len(), per_page);
            let joined: Vec<usize> = (1..=pages)
                .flat_map(|p| page_slice(&items, per_page, p).iter().copied())
                .collect();

            assert_eq!(joined, items, "per_page = {per_page}");
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3];

        assert!(page_slice(&items, 2, 3).is_empty());
        assert!(page_slice(&items, 2, usize::MAX).is_empty());
        assert_eq!(page_slice(&items, 2, 0), &[1, 2]);
    }

    #[test]
    fn total_pages_rounds_up_with_a_floor_of_one() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn short_listings_show_every_page() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(page_window(2, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5)]);
    }

    #[test]
    fn long_listings_collapse_gaps() {
        assert_eq!(
            page_window(10, 20),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(1, 20),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(20, 20),
            vec![Page(1), Ellipsis, Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn single_page_gaps_are_filled_in() {
        assert_eq!(
            page_window(5, 9),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7), Page(8), Page(9)]
        );
    }
}
