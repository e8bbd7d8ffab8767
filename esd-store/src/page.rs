//! Fixed-size pagination over the current rows.

use crate::SensorDataStore;
use esd_readings::SensorReading;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// Rows per table page.
pub const PAGE_SIZE: usize = 50;

/// Index range of page `page_index`, clamped to `total`. Pages past the end
/// yield an empty range.
pub fn page_bounds(page_index: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page_index.saturating_mul(page_size).min(total);
    let end = page_index
        .saturating_add(1)
        .saturating_mul(page_size)
        .min(total);
    start..end
}

/// Number of pages needed for `total` rows; zero rows need zero pages.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// An entry in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// Zero-based page index.
    Page(usize),
    /// Skipped run of pages, drawn as "…".
    Gap,
}

/// Page buttons to draw: the first and last page, the current page and its
/// immediate neighbours, with a gap wherever pages are skipped.
pub fn page_items(current: usize, count: usize) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut last_shown: Option<usize> = None;
    for index in 0..count {
        let shown = index == 0 || index + 1 == count || index.abs_diff(current) <= 1;
        if !shown {
            continue;
        }
        if let Some(prev) = last_shown {
            if index > prev + 1 {
                items.push(PageItem::Gap);
            }
        }
        items.push(PageItem::Page(index));
        last_shown = Some(index);
    }
    items
}

/// The 1-based "X-Y of Z" range shown under the table.
///
/// `start` is `page_index * page_size + 1` even when the page is empty, so an
/// empty collection reads "1-0 of 0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayRange {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl DisplayRange {
    pub fn new(page_index: usize, page_size: usize, total: usize) -> Self {
        Self {
            start: page_index.saturating_mul(page_size).saturating_add(1),
            end: page_index
                .saturating_add(1)
                .saturating_mul(page_size)
                .min(total),
            total,
        }
    }
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} of {}", self.start, self.end, self.total)
    }
}

/// One window of rows plus what a pagination bar needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub rows: Vec<SensorReading>,
    pub page_index: usize,
    pub page_count: usize,
    pub range: DisplayRange,
}

impl Page {
    pub fn of(rows: &[SensorReading], page_index: usize) -> Self {
        let total = rows.len();
        Self {
            rows: rows[page_bounds(page_index, PAGE_SIZE, total)].to_vec(),
            page_index,
            page_count: page_count(total, PAGE_SIZE),
            range: DisplayRange::new(page_index, PAGE_SIZE, total),
        }
    }

    pub fn total(&self) -> usize {
        self.range.total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.page_count
    }
}

impl SensorDataStore {
    /// Move to page `page_index` and return it. Out-of-range pages are empty.
    pub fn paginate(&mut self, page_index: usize) -> Page {
        self.page_index = page_index;
        self.page()
    }

    /// The current page, without changing anything.
    pub fn page(&self) -> Page {
        Page::of(&self.current_rows(), self.page_index)
    }

    /// Row count after filtering or searching.
    pub fn total(&self) -> usize {
        self.current_rows().len()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total(), PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn boxes(page: &Page) -> Vec<String> {
        page.rows.iter().map(|r| r.box_id.clone()).collect()
    }

    #[test]
    fn pages_of_one_hundred_twenty() {
        let mut store = SensorDataStore::new();
        store.initialize(numbered(120));

        let first = store.paginate(0);
        assert_eq!(first.rows.len(), 50);
        assert_eq!(first.rows[0].box_id, "Box-0");
        assert_eq!(first.rows[49].box_id, "Box-49");
        assert_eq!(first.range.to_string(), "1-50 of 120");

        let third = store.paginate(2);
        assert_eq!(third.rows.len(), 20);
        assert_eq!(third.rows[0].box_id, "Box-100");
        assert_eq!(third.rows[19].box_id, "Box-119");
        assert_eq!(third.range.to_string(), "101-120 of 120");
        assert_eq!(third.page_count, 3);
        assert!(!third.has_next());

        let fourth = store.paginate(3);
        assert!(fourth.is_empty());
    }

    #[test]
    fn pages_past_the_end_are_empty() {
        let mut store = SensorDataStore::new();
        store.initialize(numbered(101));
        let last = page_count(101, PAGE_SIZE);
        assert_eq!(last, 3);
        for index in last..last + 5 {
            assert!(store.paginate(index).is_empty());
        }
        assert!(store.paginate(usize::MAX).is_empty());
    }

    #[test]
    fn last_possible_index_has_no_next_page() {
        let mut store = SensorDataStore::new();
        store.initialize(numbered(3));
        let page = store.paginate(usize::MAX);
        assert!(!page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.range.end, 3);
    }

    #[test]
    fn page_lengths_sum_to_total() {
        for n in [0, 1, 49, 50, 51, 100, 149, 150, 151] {
            let mut store = SensorDataStore::new();
            store.initialize(numbered(n));
            let sum: usize = (0..store.page_count())
                .map(|i| store.paginate(i).rows.len())
                .sum();
            assert_eq!(sum, n, "total {}", n);
            assert_eq!(store.total(), n);
        }
    }

    #[test]
    fn pages_follow_filter_and_search() {
        let mut store = SensorDataStore::new();
        let mut readings = numbered(60);
        readings.extend(vec![carbon_monoxide(); 5]);
        store.initialize(readings);

        store.filter_by("CO");
        let page = store.page();
        assert_eq!(page.range.to_string(), "1-5 of 5");
        assert_eq!(page.page_count, 1);

        store.filter_by("");
        store.search("monoxide");
        assert_eq!(store.total(), 5);
        store.search("");
        assert_eq!(store.total(), 65);
    }

    #[test]
    fn pages_follow_sort_order() {
        let mut store = SensorDataStore::new();
        store.initialize(vec![carbon_monoxide(), ozone()]);
        store.sort_by("time");
        assert_eq!(boxes(&store.paginate(0)).len(), 2);
        assert_eq!(store.page().rows[0].sensor_type, "O3");
    }

    #[test]
    fn empty_collection_range() {
        let store = SensorDataStore::new();
        let page = store.page();
        assert!(page.is_empty());
        assert_eq!(page.page_count, 0);
        assert_eq!(page.range.to_string(), "1-0 of 0");
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn page_bounds_arithmetic() {
        assert_eq!(page_bounds(0, 50, 120), 0..50);
        assert_eq!(page_bounds(2, 50, 120), 100..120);
        assert_eq!(page_bounds(3, 50, 120), 120..120);
        assert_eq!(page_bounds(usize::MAX, 50, 10), 10..10);
        assert_eq!(page_count(0, 50), 0);
        assert_eq!(page_count(50, 50), 1);
        assert_eq!(page_count(51, 50), 2);
        assert_eq!(page_count(10, 0), 0);
    }

    #[test]
    fn page_items_collapse_distant_pages() {
        use PageItem::{Gap, Page as P};
        assert!(page_items(0, 0).is_empty());
        assert_eq!(page_items(0, 3), vec![P(0), P(1), P(2)]);
        assert_eq!(page_items(0, 10), vec![P(0), P(1), Gap, P(9)]);
        assert_eq!(
            page_items(5, 10),
            vec![P(0), Gap, P(4), P(5), P(6), Gap, P(9)]
        );
        assert_eq!(page_items(9, 10), vec![P(0), Gap, P(8), P(9)]);
        assert_eq!(page_items(2, 10), vec![P(0), P(1), P(2), P(3), Gap, P(9)]);
    }

    #[test]
    fn sort_keeps_page_index() {
        let mut store = SensorDataStore::new();
        store.initialize(numbered(120));
        store.paginate(1);
        store.sort_by("time");
        assert_eq!(store.page_index(), 1);
        store.append_sensor(ozone());
        assert_eq!(store.page_index(), 1);
    }
}
