use crate::page::Page;
use crate::sort::SortState;
use crate::SensorDataStore;
use serde::Serialize;
use std::rc::Rc;

/// Everything the table and its controls render from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub page: Page,
    pub sort: SortState,
    pub filter_value: String,
    pub query: String,
}

/// Inputs a cached [`View`] was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewKey {
    collection_rev: u64,
    view_rev: u64,
    query: String,
    page_index: usize,
}

impl SensorDataStore {
    fn view_key(&self) -> ViewKey {
        ViewKey {
            collection_rev: self.collection_rev,
            view_rev: self.view_rev,
            query: self.query.clone(),
            page_index: self.page_index,
        }
    }

    /// The derived view, recomputed only when the collection, sort, filter,
    /// search query or page index changed since the last call.
    pub fn view(&self) -> Rc<View> {
        let key = self.view_key();
        if let Some((cached_key, view)) = self.view_cache.borrow().as_ref() {
            if *cached_key == key {
                return Rc::clone(view);
            }
        }
        let view = Rc::new(View {
            page: self.page(),
            sort: self.sort,
            filter_value: self.filter_value.clone(),
            query: self.query.clone(),
        });
        *self.view_cache.borrow_mut() = Some((key, Rc::clone(&view)));
        view
    }
}
