//! Typed view state for list screens
//!
//! A list view is described by its page, page size, free-text search and
//! field filters. The query-string form (`page=2&search=ao&category=3`) is
//! only a serialization of this state, used to persist or share a view.

use std::collections::BTreeMap;

/// Fields a list view can be narrowed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterField {
    Category,
    Size,
    Color,
    Product,
    Order,
    PurchaseOrder,
    Date,
}

impl FilterField {
    pub const ALL: &'static [FilterField] = &[
        FilterField::Category,
        FilterField::Size,
        FilterField::Color,
        FilterField::Product,
        FilterField::Order,
        FilterField::PurchaseOrder,
        FilterField::Date,
    ];

    /// Query-string key for this field
    pub fn key(&self) -> &'static str {
        match self {
            FilterField::Category => "category",
            FilterField::Size => "size",
            FilterField::Color => "color",
            FilterField::Product => "product",
            FilterField::Order => "order",
            FilterField::PurchaseOrder => "purchase_order",
            FilterField::Date => "date",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Page, search and filter state of one list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    pub filters: BTreeMap<FilterField, String>,
}

impl ViewState {
    /// Unfiltered first page
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search: None,
            filters: BTreeMap::new(),
        }
    }

    /// True when a search or any field filter is active
    pub fn is_filtered(&self) -> bool {
        self.search.is_some() || !self.filters.is_empty()
    }

    pub fn filter(&self, field: FilterField) -> Option<&str> {
        self.filters.get(&field).map(String::as_str)
    }

    /// Enter search mode on page 1. Blank text leaves search mode.
    pub fn set_search(&mut self, text: &str) {
        let text = text.trim();
        self.search = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self.page = 1;
    }

    /// Set or remove (blank value) a field filter, returning to page 1
    pub fn set_filter(&mut self, field: FilterField, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(&field);
        } else {
            self.filters.insert(field, value.to_string());
        }
        self.page = 1;
    }

    /// Drop search and filters and go back to page 1
    pub fn clear_filters(&mut self) {
        self.search = None;
        self.filters.clear();
        self.page = 1;
    }

    /// Serialize to a query string (without the leading `?`)
    ///
    /// Page 1 is implied and omitted, matching an unfiltered view's empty
    /// query string.
    pub fn to_query(&self) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        if self.page > 1 {
            ser.append_pair("page", &self.page.to_string());
        }
        if let Some(search) = &self.search {
            ser.append_pair("search", search);
        }
        for (field, value) in &self.filters {
            ser.append_pair(field.key(), value);
        }
        ser.finish()
    }

    /// Parse a query string produced by [`ViewState::to_query`]
    ///
    /// Unknown keys are ignored and an invalid page falls back to 1.
    pub fn from_query(query: &str, page_size: u32) -> Self {
        let mut state = Self::new(page_size);
        let query = query.trim().trim_start_matches('?');

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => {
                    state.page = value.parse::<u32>().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                "search" => {
                    let text = value.trim();
                    if !text.is_empty() {
                        state.search = Some(text.to_string());
                    }
                }
                other => {
                    if let Some(field) = FilterField::from_key(other) {
                        let value = value.trim();
                        if !value.is_empty() {
                            state.filters.insert(field, value.to_string());
                        }
                    }
                }
            }
        }

        state
    }
}
