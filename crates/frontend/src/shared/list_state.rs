//! Reactive state shared by the list pages: rows, search box and pager.

use leptos::prelude::*;

use super::list_utils::{visible_page, PageWindow, Searchable, DEFAULT_PAGE_SIZE};

pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub search: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T> ListState<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        let state = Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            search: RwSignal::new(String::new()),
            page: RwSignal::new(1),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
        };

        // A new query starts from the first page.
        Effect::new(move |_| {
            state.search.track();
            state.page.set(1);
        });

        state
    }

    /// Current page rows; `keep` adds page-specific filters (status etc.)
    pub fn visible(&self, keep: impl Fn(&T) -> bool) -> (Vec<T>, PageWindow) {
        let query = self.search.get();
        let page = self.page.get();
        let page_size = self.page_size.get();
        self.items
            .with(|items| visible_page(items, &query, keep, page, page_size))
    }

    pub fn set_page_size(&self, size: usize) {
        self.page_size.set(size);
        self.page.set(1);
    }

    pub fn replace(&self, rows: Vec<T>) {
        self.items.set(rows);
        self.error.set(None);
    }

    pub fn fail(&self, message: String) {
        self.error.set(Some(message));
    }
}

impl<T> Default for ListState<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
