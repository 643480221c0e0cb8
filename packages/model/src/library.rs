//! # Template Library
//!
//! Merges the static catalog with the user's custom templates. Built-ins
//! always come first; custom templates follow in the order they were added.
//! Custom ids carry the `custom-` prefix, so a lookup can never resolve a
//! custom template to a built-in one or the other way round.

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::catalog::builtin_templates;
use crate::ids::TemplateId;
use crate::template::{BlockTemplate, TemplateCategory};

/// Category selector for the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(TemplateCategory),
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            TemplateCategory::from_str(&s.to_ascii_lowercase()).map(CategoryFilter::Only)
        }
    }
}

/// Sidebar search state
#[derive(Debug, Clone, Default)]
pub struct TemplateFilter {
    pub category: CategoryFilter,
    /// Case-insensitive substring of the template name
    pub search: String,
}

impl TemplateFilter {
    pub fn matches(&self, template: &BlockTemplate) -> bool {
        let category_ok = match self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => template.category == category,
        };
        let search = self.search.trim().to_lowercase();
        category_ok && (search.is_empty() || template.name.to_lowercase().contains(&search))
    }
}

#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    custom: Vec<BlockTemplate>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the custom set (after fetching it from the store)
    pub fn set_custom(&mut self, templates: Vec<BlockTemplate>) {
        self.custom = templates
            .into_iter()
            .filter(|t| t.id.is_custom())
            .collect();
    }

    pub fn custom(&self) -> &[BlockTemplate] {
        &self.custom
    }

    /// Built-ins followed by custom templates
    pub fn iter(&self) -> impl Iterator<Item = &BlockTemplate> {
        builtin_templates().iter().chain(self.custom.iter())
    }

    pub fn get(&self, id: &TemplateId) -> Option<&BlockTemplate> {
        if id.is_custom() {
            self.custom.iter().find(|t| &t.id == id)
        } else {
            builtin_templates().iter().find(|t| &t.id == id)
        }
    }

    pub fn filter<'a>(
        &'a self,
        filter: &'a TemplateFilter,
    ) -> impl Iterator<Item = &'a BlockTemplate> + 'a {
        self.iter().filter(move |t| filter.matches(t))
    }

    /// Categories offered in the sidebar. `custom` only appears once the user
    /// has custom templates.
    pub fn categories(&self) -> Vec<TemplateCategory> {
        TemplateCategory::iter()
            .filter(|c| *c != TemplateCategory::Custom || !self.custom.is_empty())
            .collect()
    }
}
