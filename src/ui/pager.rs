use std::fmt;

use crate::pagination::Pagination;

/// Pages shown on either side of the current one.
const WINDOW: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(i64),
    Gap,
}

/// The page numbers a pagination control shows: the first and last page,
/// `current ± 2`, and a gap marker wherever numbers are skipped. A gap that
/// would hide exactly one page shows that page instead.
pub fn visible_pages(current: i64, total: i64) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut previous: Option<i64> = None;

    for page in 1..=total {
        let in_window =
            page >= current.saturating_sub(WINDOW) && page <= current.saturating_add(WINDOW);
        if page != 1 && page != total && !in_window {
            continue;
        }
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Gap),
            }
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }
    items
}

/// View model of the pagination control under the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub current: i64,
    pub items: Vec<PageItem>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub total_items: i64,
}

impl PagerView {
    /// `None` when everything fits on one page.
    pub fn new(pagination: &Pagination) -> Option<Self> {
        if pagination.total <= 1 {
            return None;
        }
        Some(Self {
            current: pagination.current,
            items: visible_pages(pagination.current, pagination.total),
            previous_enabled: pagination.current != 1,
            next_enabled: pagination.current != pagination.total,
            total_items: pagination.total_items,
        })
    }

    pub fn previous_page(&self) -> Option<i64> {
        self.previous_enabled
            .then(|| self.current.checked_sub(1))
            .flatten()
    }

    pub fn next_page(&self) -> Option<i64> {
        self.next_enabled
            .then(|| self.current.checked_add(1))
            .flatten()
    }

    pub fn summary(&self) -> String {
        format!("{} total items", self.total_items)
    }
}

impl fmt::Display for PagerView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", if self.previous_enabled { "< Previous" } else { "  Previous" })?;
        for item in &self.items {
            match item {
                PageItem::Page(page) if *page == self.current => write!(f, " [{}]", page)?,
                PageItem::Page(page) => write!(f, " {}", page)?,
                PageItem::Gap => write!(f, " ...")?,
            }
        }
        write!(f, " {}", if self.next_enabled { "Next >" } else { "Next  " })?;
        write!(f, "  {}", self.summary())
    }
}
