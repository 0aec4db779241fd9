//! Budget model
//!
//! A budget is a non-empty mapping from one of the four known categories to an
//! amount. The total is always derived from the mapping.

use std::collections::BTreeMap;
use std::fmt;

use super::money::Money;

/// The closed set of budget categories a dossier reports on
///
/// Declaration order is the order categories appear in the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BudgetCategory {
    Artistic,
    Technical,
    Equipment,
    ProductionLogistics,
}

impl BudgetCategory {
    /// All categories, in display order
    pub const ALL: [BudgetCategory; 4] = [
        BudgetCategory::Artistic,
        BudgetCategory::Technical,
        BudgetCategory::Equipment,
        BudgetCategory::ProductionLogistics,
    ];

    /// Label as it appears in spreadsheets and in the rendered document
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Artistic => "Área Artística",
            Self::Technical => "Área Técnica",
            Self::Equipment => "Equipamiento",
            Self::ProductionLogistics => "Producción y Logística",
        }
    }

    /// Amount used when no spreadsheet value is available
    pub const fn default_amount(&self) -> Money {
        match self {
            Self::Artistic => Money::from_units(7140),
            Self::Technical => Money::from_units(4500),
            Self::Equipment => Money::from_units(5190),
            Self::ProductionLogistics => Money::from_units(3550),
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category amounts for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    amounts: BTreeMap<BudgetCategory, Money>,
}

impl Budget {
    /// The built-in budget with every category at its default amount
    pub fn defaults() -> Self {
        Self {
            amounts: BudgetCategory::ALL
                .iter()
                .map(|c| (*c, c.default_amount()))
                .collect(),
        }
    }

    /// Build a budget from extracted amounts; `None` if nothing was extracted
    pub fn from_amounts(amounts: BTreeMap<BudgetCategory, Money>) -> Option<Self> {
        if amounts.is_empty() {
            None
        } else {
            Some(Self { amounts })
        }
    }

    /// Amount for a category, if present
    pub fn get(&self, category: BudgetCategory) -> Option<Money> {
        self.amounts.get(&category).copied()
    }

    /// Iterate categories and amounts in display order
    pub fn iter(&self) -> impl Iterator<Item = (BudgetCategory, Money)> + '_ {
        self.amounts.iter().map(|(c, m)| (*c, *m))
    }

    /// Number of categories present
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Never true for budgets built through the public constructors
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.amounts.values().copied().sum()
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::defaults()
    }
}
