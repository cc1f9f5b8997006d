//! Shared list arguments and their mapping onto a [`ViewState`]

use miette::Result;

use crate::core::{FilterField, ViewState};

/// Paging arguments every list command accepts
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, short = 'p')]
    pub page: Option<u32>,

    /// Start from a saved view (the `view:` line printed under a list)
    #[arg(long)]
    pub view: Option<String>,
}

impl PageArgs {
    /// Build the view state: saved view first, then explicit search,
    /// filters and page on top
    pub fn to_state(
        &self,
        page_size: u32,
        search: Option<&str>,
        filters: &[(FilterField, Option<&str>)],
    ) -> Result<ViewState> {
        let mut state = match &self.view {
            Some(query) => ViewState::from_query(query, page_size),
            None => ViewState::new(page_size),
        };

        if let Some(text) = search {
            state.set_search(text);
        }
        for (field, value) in filters {
            if let Some(value) = value {
                state.set_filter(*field, value);
            }
        }

        if let Some(page) = self.page {
            if page == 0 {
                return Err(miette::miette!("Page numbers start at 1"));
            }
            state.page = page;
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_first_page() {
        let state = PageArgs::default().to_state(5, None, &[]).unwrap();
        assert_eq!(state, ViewState::new(5));
    }

    #[test]
    fn test_explicit_page_applied_after_filters() {
        let args = PageArgs {
            page: Some(3),
            view: None,
        };
        let state = args
            .to_state(10, None, &[(FilterField::Size, Some("2")), (FilterField::Color, None)])
            .unwrap();
        assert_eq!(state.page, 3);
        assert_eq!(state.filter(FilterField::Size), Some("2"));
        assert!(state.filter(FilterField::Color).is_none());
    }

    #[test]
    fn test_view_then_overrides() {
        let args = PageArgs {
            page: None,
            view: Some("page=4&category=1".to_string()),
        };
        let state = args.to_state(5, None, &[]).unwrap();
        assert_eq!(state.page, 4);

        let state = args.to_state(5, Some("áo"), &[]).unwrap();
        assert_eq!(state.page, 1);
        assert_eq!(state.search.as_deref(), Some("áo"));
    }

    #[test]
    fn test_page_zero_rejected() {
        let args = PageArgs {
            page: Some(0),
            view: None,
        };
        assert!(args.to_state(5, None, &[]).is_err());
    }
}
