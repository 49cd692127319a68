// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Per-user navigation state
//!
//! A session owns the current page and the selected query example. Each
//! navigator run creates its own session; nothing is shared between them.

use crate::content::ImplementationTab;
use crate::error::{FoodGraphError, Result};
use crate::page::Page;
use crate::showcase::{QueryExample, QueryShowcase};
use log::debug;

#[derive(Debug, Clone)]
pub struct Session {
    page: Page,
    selected_query: usize,
    tab: ImplementationTab,
    showcase: QueryShowcase,
}

impl Session {
    pub fn new(showcase: QueryShowcase) -> Self {
        Self {
            page: Page::default(),
            selected_query: 0,
            tab: ImplementationTab::default(),
            showcase,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn select_page(&mut self, page: Page) {
        debug!("session page {} -> {}", self.page.title(), page.title());
        self.page = page;
    }

    pub fn showcase(&self) -> &QueryShowcase {
        &self.showcase
    }

    /// 0-based index of the selected query example
    pub fn selected_index(&self) -> usize {
        self.selected_query
    }

    /// Select a query example by 0-based index
    pub fn select_query(&mut self, index: usize) -> Result<&QueryExample> {
        if index >= self.showcase.len() {
            return Err(FoodGraphError::QueryNotFound {
                number: index + 1,
                available: self.showcase.len(),
            });
        }
        self.selected_query = index;
        self.showcase.require(index)
    }

    /// The selected example, or `None` when the showcase is empty
    pub fn selected_query(&self) -> Option<&QueryExample> {
        self.showcase.get(self.selected_query)
    }

    pub fn tab(&self) -> ImplementationTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: ImplementationTab) {
        self.tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new(QueryShowcase::food_delivery());
        assert_eq!(session.page(), Page::Overview);
        assert_eq!(session.selected_index(), 0);
        assert_eq!(
            session.selected_query().unwrap().title,
            "Find all orders by a customer"
        );
        assert_eq!(session.tab(), ImplementationTab::Setup);
    }

    #[test]
    fn test_select_query() {
        let mut session = Session::new(QueryShowcase::food_delivery());
        let title = session.select_query(3).unwrap().title.clone();
        assert_eq!(title, "Find highly rated restaurants");
        assert_eq!(session.selected_index(), 3);
    }

    #[test]
    fn test_out_of_range_selection_keeps_previous() {
        let mut session = Session::new(QueryShowcase::food_delivery());
        session.select_query(2).unwrap();
        let err = session.select_query(6).unwrap_err();
        assert_eq!(err.to_string(), "Query 7 not found (6 examples available)");
        assert_eq!(session.selected_index(), 2);
    }

    #[test]
    fn test_empty_showcase_has_no_selection() {
        let session = Session::new(QueryShowcase::new(vec![]));
        assert!(session.selected_query().is_none());
    }
}
