use shared_config::AppConfig;

use crate::models::PageView;

/// Stateless page windowing over any ordered slice.
///
/// Short lists pass through whole: pagination only activates above the
/// threshold. Out-of-range page numbers clamp to the nearest valid page, so
/// a stale "page 9" request after the list shrank still renders something.
/// The pager holds no cursor; when the underlying filter changes, the caller
/// must ask for page 1 again itself.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    items_per_page: usize,
    activation_threshold: usize,
}

impl Pager {
    pub fn new(items_per_page: usize, activation_threshold: usize) -> Self {
        Self {
            items_per_page: items_per_page.max(1),
            activation_threshold,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.items_per_page, config.pagination_threshold)
    }

    pub fn should_paginate(&self, total_items: usize) -> bool {
        total_items > self.activation_threshold
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        if !self.should_paginate(total_items) {
            return 1;
        }
        (total_items + self.items_per_page - 1) / self.items_per_page
    }

    /// The 1-based `page` of `items`.
    pub fn page<'a, T>(&self, items: &'a [T], page: usize) -> PageView<'a, T> {
        let total_items = items.len();

        if !self.should_paginate(total_items) {
            return PageView {
                items,
                page: 1,
                total_pages: 1,
                total_items,
                paginated: false,
            };
        }

        let total_pages = self.total_pages(total_items);
        let page = page.clamp(1, total_pages);
        let from = (page - 1) * self.items_per_page;
        let to = (from + self.items_per_page).min(total_items);

        PageView {
            items: &items[from..to],
            page,
            total_pages,
            total_items,
            paginated: true,
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn short_lists_pass_through_unpaginated() {
        let pager = Pager::default();
        let list = items(25);

        let view = pager.page(&list, 1);
        assert!(!view.paginated);
        assert_eq!(view.items.len(), 25);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.label(), "Page 1 of 1");
    }

    #[test]
    fn threshold_is_exclusive() {
        let pager = Pager::default();
        assert!(!pager.should_paginate(50));
        assert!(pager.should_paginate(51));
    }

    #[test]
    fn sixty_items_make_three_pages() {
        let pager = Pager::default();
        let list = items(60);

        let first = pager.page(&list, 1);
        assert!(first.paginated);
        assert_eq!(first.items, &list[0..20]);
        assert_eq!(first.total_pages, 3);
        assert!(first.is_first());

        let last = pager.page(&list, 3);
        assert_eq!(last.items, &list[40..60]);
        assert!(last.is_last());
        assert_eq!(last.label(), "Page 3 of 3");
    }

    #[test]
    fn ragged_final_page_is_short() {
        let pager = Pager::default();
        let list = items(55);

        let last = pager.page(&list, 3);
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.items, &list[40..55]);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let pager = Pager::default();
        let list = items(60);

        assert_eq!(pager.page(&list, 0).page, 1);
        assert_eq!(pager.page(&list, 99).page, 3);
        assert_eq!(pager.page(&list, 99).items, &list[40..60]);
    }

    #[test]
    fn empty_lists_stay_valid() {
        let pager = Pager::default();
        let list: Vec<usize> = Vec::new();

        let view = pager.page(&list, 1);
        assert_eq!(view.page, 1);
        assert_eq!(view.total_pages, 1);
        assert!(view.items.is_empty());
        assert!(!view.paginated);
    }

    #[test]
    fn zero_page_size_is_corrected() {
        let pager = Pager::new(0, 0);
        let list = items(3);

        // One item per page rather than a division by zero.
        let view = pager.page(&list, 2);
        assert_eq!(view.items, &list[1..2]);
        assert_eq!(view.total_pages, 3);
    }
}
