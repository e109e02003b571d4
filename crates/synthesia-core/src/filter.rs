//! Client-side list filtering shared by the list pages.
//!
//! Text matching is a case-insensitive substring test over the item name or
//! description. An optional category narrows the result further; both
//! conditions must hold.

use crate::entities::{Agent, Project, Workflow};

/// Anything a [`ListFilter`] can be applied to.
pub trait Filterable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;

    /// Category used by category filters. Items without one never match a
    /// category filter.
    fn category(&self) -> Option<&str> {
        None
    }
}

impl Filterable for Project {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Filterable for Agent {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Filterable for Workflow {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

/// Search text plus optional category; page-local, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub query: String,
    /// `None` means all categories
    pub category: Option<String>,
}

impl ListFilter {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            category: None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category.is_some()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
    }

    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        self.matches_text(item) && self.matches_category(item)
    }

    fn matches_text<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        item.name().to_lowercase().contains(&needle)
            || item.description().to_lowercase().contains(&needle)
    }

    fn matches_category<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        match &self.category {
            None => true,
            Some(wanted) => item.category() == Some(wanted.as_str()),
        }
    }

    /// Filter `items`, preserving source order.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> FilteredList<'a, T> {
        FilteredList {
            items: items.iter().filter(|item| self.matches(*item)).collect(),
            source_len: items.len(),
        }
    }
}

/// Why a list rendered nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The source collection itself is empty
    NoData,
    /// Items exist but none pass the filter
    NoResults,
}

impl EmptyState {
    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoData => "Create your first one to get started",
            EmptyState::NoResults => "Try adjusting your search",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilteredList<'a, T> {
    pub items: Vec<&'a T>,
    pub source_len: usize,
}

impl<'a, T> FilteredList<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index).copied()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.items.is_empty() {
            None
        } else if self.source_len == 0 {
            Some(EmptyState::NoData)
        } else {
            Some(EmptyState::NoResults)
        }
    }
}
