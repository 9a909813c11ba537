use std::fmt::Display;

/// The maximum number of page markers displayed before the window collapses into ellipses.
pub const MAX_DISPLAYED_PAGES: u32 = 5;

/// The number of repositories fetched per page.
pub const REPOSITORIES_PER_PAGE: u32 = 4;

/// A marker displayed in the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A selectable page.
    Page {
        /// The page number, starting at 1.
        number: u32,
        /// Whether this is the page currently displayed.
        is_current: bool,
    },

    /// A placeholder for omitted pages, not selectable.
    Ellipsis,
}

impl PageMarker {
    fn page(number: u32, current_page: u32) -> Self {
        Self::Page {
            number,
            is_current: number == current_page,
        }
    }
}

impl Display for PageMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageMarker::Page {
                number,
                is_current: true,
            } => write!(f, "[{number}]"),
            PageMarker::Page { number, .. } => write!(f, "{number}"),
            PageMarker::Ellipsis => write!(f, "..."),
        }
    }
}

/// Computes the page markers to display for the given page.
///
/// When every page fits, all pages are listed. Otherwise the first and last pages are
/// always shown, around a window centered on the current page, with ellipses standing in
/// for the pages left out on either side.
pub fn page_window(current_page: u32, total_pages: u32, max_displayed: u32) -> Vec<PageMarker> {
    if total_pages <= max_displayed {
        return (1..=total_pages)
            .map(|number| PageMarker::page(number, current_page))
            .collect();
    }

    let left_offset = max_displayed / 2;
    let right_offset = max_displayed.div_ceil(2).saturating_sub(1);
    let mut markers = vec![PageMarker::page(1, current_page)];
    if current_page > left_offset + 2 {
        markers.push(PageMarker::Ellipsis);
    }
    let window_start = current_page.saturating_sub(left_offset).max(2);
    let window_end = current_page
        .saturating_add(right_offset)
        .min(total_pages - 1);
    markers.extend((window_start..=window_end).map(|number| PageMarker::page(number, current_page)));
    if current_page.saturating_add(right_offset) < total_pages - 1 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::page(total_pages, current_page));

    markers
}

/// The pagination of the repositories of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl PaginationState {
    /// Creates a new `PaginationState`, with at least one page.
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            total_pages: total_pages.max(1),
        }
    }

    /// Creates the pagination on the first page for a user owning `public_repo_count` repositories.
    pub fn for_public_repos(public_repo_count: u64, per_page: u32) -> Self {
        Self::new(1, Self::total_pages_for(public_repo_count, per_page))
    }

    /// Computes the number of pages needed to list `public_repo_count` repositories.
    pub fn total_pages_for(public_repo_count: u64, per_page: u32) -> u32 {
        let total_pages = public_repo_count.div_ceil(u64::from(per_page.max(1)));

        u32::try_from(total_pages).unwrap_or(u32::MAX).max(1)
    }

    /// Retrieves the current page.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Retrieves the total number of pages.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Checks whether `page` can be selected.
    pub fn accepts(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    /// Checks whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Checks whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Moves to `page`.
    pub fn set_current_page(&mut self, page: u32) {
        self.current_page = page.max(1);
    }

    /// Replaces the total number of pages, moving back to the last page if the current one
    /// no longer exists.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.current_page = self.current_page.min(self.total_pages);
    }

    /// Computes the page markers to display.
    pub fn markers(&self) -> Vec<PageMarker> {
        page_window(self.current_page, self.total_pages, MAX_DISPLAYED_PAGES)
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Display for PaginationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Page: {}/{}", self.current_page, self.total_pages)
    }
}
