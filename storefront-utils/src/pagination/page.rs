//! Pure pagination math and page slicing helpers.

/// Compute the number of pages for a paginated list.
///
/// Never returns zero: an empty list still has one (empty) page.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1)).max(1)
}

/// Clamp a requested page into a valid range.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Return start/end indices for a page window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}

/// Parse a one-based page argument.
///
/// Returns `Some(page)` when the value is valid (`>= 1`), otherwise `None`.
/// A missing argument means the first page.
pub fn parse_one_based_page(raw: Option<&str>) -> Option<usize> {
    match raw {
        Some(value) => value.trim().parse::<usize>().ok().filter(|page| *page >= 1),
        None => Some(1),
    }
}

/// One page worth of items plus the page count it was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub visible: &'a [T],
    pub total_pages: usize,
}

/// Slice `items` down to the given one-based page.
///
/// The page is not clamped; callers validate it first. A page past the end
/// yields an empty `visible` slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let (start, end) = page_window(items.len(), page_size, page);
    PageSlice {
        visible: &items[start..end],
        total_pages: total_pages(items.len(), page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 12, 1)]
    #[case(1, 12, 1)]
    #[case(12, 12, 1)]
    #[case(13, 12, 2)]
    #[case(25, 12, 3)]
    #[case(5, 0, 5)]
    fn counts_pages(#[case] items: usize, #[case] per_page: usize, #[case] expected: usize) {
        assert_eq!(total_pages(items, per_page), expected);
    }

    #[rstest]
    #[case(0, 3, 1)]
    #[case(2, 3, 2)]
    #[case(9, 3, 3)]
    #[case(4, 0, 1)]
    fn clamps(#[case] page: usize, #[case] total: usize, #[case] expected: usize) {
        assert_eq!(clamp_page(page, total), expected);
    }

    #[rstest]
    #[case(None, Some(1))]
    #[case(Some("4"), Some(4))]
    #[case(Some(" 2 "), Some(2))]
    #[case(Some("0"), None)]
    #[case(Some("-1"), None)]
    #[case(Some("two"), None)]
    fn parses_pages(#[case] raw: Option<&str>, #[case] expected: Option<usize>) {
        assert_eq!(parse_one_based_page(raw), expected);
    }

    #[rstest]
    fn twenty_five_items_in_pages_of_twelve() {
        let items: Vec<usize> = (0..25).collect();

        let first = paginate(&items, 1, 12);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.visible, &items[0..12]);

        let last = paginate(&items, 3, 12);
        assert_eq!(last.visible, &items[24..25]);
    }

    #[rstest]
    fn empty_list_has_one_empty_page() {
        let items: Vec<u8> = Vec::new();
        let slice = paginate(&items, 1, 12);
        assert_eq!(slice.total_pages, 1);
        assert!(slice.visible.is_empty());
    }

    proptest! {
        #[test]
        fn visible_length_formula(len in 0usize..200, page in 1usize..30, size in 1usize..20) {
            let items: Vec<usize> = (0..len).collect();
            let slice = paginate(&items, page, size);
            let expected = size.min(len.saturating_sub((page - 1) * size));
            prop_assert_eq!(slice.visible.len(), expected);
            if let Some(first) = slice.visible.first() {
                prop_assert_eq!(*first, (page - 1) * size);
            }
        }
    }
}
