//! Expense categories
//!
//! Categories form a fixed, ordered, closed set defined in settings. Users pick
//! one either by its 1-based position in the list or by its exact name.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// A category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How the user referred to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector<'a> {
    /// A 1-based position in the category list
    ByIndex(usize),
    /// An exact, case-sensitive category name
    ByName(&'a str),
}

impl<'a> CategorySelector<'a> {
    /// Classify raw selector text
    ///
    /// Text made up entirely of ASCII digits is an index; anything else
    /// (including the empty string) is a name. Digit strings too large for
    /// `usize` saturate, which always lands out of range.
    pub fn parse(raw: &'a str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Self::ByIndex(raw.parse().unwrap_or(usize::MAX))
        } else {
            Self::ByName(raw)
        }
    }
}

/// The ordered set of categories offered to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<Category>,
}

impl CategorySet {
    /// Categories used when settings don't name any
    pub const DEFAULT_NAMES: [&'static str; 5] = [
        "Food",
        "Transportation",
        "Entertainment",
        "Bills",
        "Miscellaneous",
    ];

    /// Build a category set, rejecting empty lists, blank names and duplicates
    pub fn new<I, S>(names: I) -> ExpenseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();

        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(ExpenseError::Config("Category names cannot be blank".into()));
            }
            if !seen.insert(name.clone()) {
                return Err(ExpenseError::Config(format!(
                    "Duplicate category name: '{}'",
                    name
                )));
            }
            categories.push(Category(name));
        }

        if categories.is_empty() {
            return Err(ExpenseError::Config(
                "At least one category must be configured".into(),
            ));
        }

        Ok(Self { categories })
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.as_str() == name)
    }

    /// Resolve a selector to a member of the set
    pub fn resolve(&self, selector: CategorySelector<'_>) -> ExpenseResult<Category> {
        match selector {
            CategorySelector::ByIndex(index) => index
                .checked_sub(1)
                .and_then(|i| self.categories.get(i))
                .cloned()
                .ok_or_else(|| ExpenseError::InvalidCategoryIndex {
                    index,
                    count: self.categories.len(),
                }),
            CategorySelector::ByName(name) => self
                .categories
                .iter()
                .find(|c| c.as_str() == name)
                .cloned()
                .ok_or_else(|| ExpenseError::InvalidCategoryName(name.to_string())),
        }
    }

    /// Parse and resolve raw selector text in one step
    pub fn resolve_str(&self, raw: &str) -> ExpenseResult<Category> {
        self.resolve(CategorySelector::parse(raw))
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            categories: Self::DEFAULT_NAMES.iter().map(|n| Category::new(*n)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
