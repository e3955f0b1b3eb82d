//! Expense categories
//!
//! The tracker works with a fixed set of twelve categories. Each one has a
//! display emoji and a stable 1-based menu position used by the entry prompt.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// A fixed expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Home,
    Utilities,
    Groceries,
    Entertainment,
    Health,
    Education,
    Shopping,
    Work,
    Travel,
    Miscellaneous,
}

impl Category {
    /// All categories in menu order
    pub const ALL: [Category; 12] = [
        Category::Food,
        Category::Transport,
        Category::Home,
        Category::Utilities,
        Category::Groceries,
        Category::Entertainment,
        Category::Health,
        Category::Education,
        Category::Shopping,
        Category::Work,
        Category::Travel,
        Category::Miscellaneous,
    ];

    /// The category name as written to ledger files
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Home => "Home",
            Self::Utilities => "Utilities",
            Self::Groceries => "Groceries",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Work => "Work",
            Self::Travel => "Travel",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Food => "🍔",
            Self::Transport => "🚌",
            Self::Home => "🏠",
            Self::Utilities => "💡",
            Self::Groceries => "🛒",
            Self::Entertainment => "🎮",
            Self::Health => "💊",
            Self::Education => "📚",
            Self::Shopping => "🛍️",
            Self::Work => "💼",
            Self::Travel => "✈️",
            Self::Miscellaneous => "📦",
        }
    }

    /// Look up a category by its 1-based menu position
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// 1-based menu position of this category
    pub fn menu_index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a category name (case-insensitive) or its menu number
impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(index) = s.parse::<usize>() {
            return Self::from_menu_index(index).ok_or_else(|| ExpenseError::invalid_category(s));
        }

        Self::ALL
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ExpenseError::invalid_category(s))
    }
}
