use serde::Serialize;

use crate::pagination::ListPage;
use crate::tmdb::MediaKind;
use super::urls::similar_path;

/// Element id of the anchor scrolled to on page change.
pub const LIST_ANCHOR: &str = "list-top";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    Auto,
    Instant,
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlignment {
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollAlignment,
    pub inline: ScrollAlignment,
}

impl ScrollOptions {
    /// Jump, without animation, so the anchor sits in the viewport center.
    pub const PAGE_CHANGE: ScrollOptions = ScrollOptions {
        behavior: ScrollBehavior::Instant,
        block: ScrollAlignment::Center,
        inline: ScrollAlignment::Nearest,
    };
}

/// Side effects a list view needs from whatever hosts it.
pub trait ViewHost {
    fn scroll_into_view(&mut self, anchor: &str, options: ScrollOptions);
    fn navigate(&mut self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Navigating { page: i64 },
}

/// What the list component is handed to draw.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModel<'a, T> {
    pub list_name: &'a str,
    pub items: &'a [T],
    pub current_page: u32,
    pub total_pages: u32,
    pub show_pagination: bool,
}

/// Paginated "similar titles" list for one resource.
pub struct SimilarListView<T> {
    kind: MediaKind,
    resource_id: String,
    list_name: String,
    page: ListPage<T>,
    state: ViewState,
}

impl<T> SimilarListView<T> {
    pub fn new(kind: MediaKind, resource_id: impl Into<String>, page: ListPage<T>) -> Self {
        let list_name = match kind {
            MediaKind::Movie => "Similar Movies",
            MediaKind::Tv => "Similar Tv-Shows",
        };
        Self {
            kind,
            resource_id: resource_id.into(),
            list_name: list_name.to_string(),
            page,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// `None` when there is nothing to list.
    pub fn render(&self) -> Option<ListModel<'_, T>> {
        if self.page.is_empty() {
            return None;
        }
        Some(ListModel {
            list_name: &self.list_name,
            items: &self.page.items,
            current_page: self.page.page,
            total_pages: self.page.total_pages,
            show_pagination: true,
        })
    }

    /// Scrolls the anchor into view and navigates to `new_page`. The page is
    /// passed through as is; the loader normalizes it on the next request.
    pub fn on_page_change<H: ViewHost + ?Sized>(&mut self, host: &mut H, new_page: i64) {
        host.scroll_into_view(LIST_ANCHOR, ScrollOptions::PAGE_CHANGE);
        host.navigate(&similar_path(self.kind, &self.resource_id, Some(new_page)));
        self.state = ViewState::Navigating { page: new_page };
    }

    /// Installs a freshly loaded page.
    pub fn on_loaded(&mut self, page: ListPage<T>) {
        self.page = page;
        self.state = ViewState::Idle;
    }
}
