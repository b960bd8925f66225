//! Positional field roles within a registration record.
//!
//! A record is a fixed positional layout. Each position is bound to one
//! semantic role, and each checked role has exactly one format rule.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Semantic role of a field, bound to its position in the record.
///
/// Layout: `Code;Description;PurchaseDate;Category;Amount;Email`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    /// Item code, e.g. `A-123`.
    Code,
    /// Free-text description.
    Description,
    /// Purchase date in `YYYY-MM-DD` form.
    PurchaseDate,
    /// Category column. Present in the layout but never checked.
    Category,
    /// Monetary amount with optional comma decimals, e.g. `1234,56`.
    Amount,
    /// Contact email address.
    Email,
}

impl FieldRole {
    /// All roles in layout order.
    pub const ALL: [FieldRole; 6] = [
        FieldRole::Code,
        FieldRole::Description,
        FieldRole::PurchaseDate,
        FieldRole::Category,
        FieldRole::Amount,
        FieldRole::Email,
    ];

    /// Zero-based position of this role within a record.
    pub fn index(&self) -> usize {
        match self {
            FieldRole::Code => 0,
            FieldRole::Description => 1,
            FieldRole::PurchaseDate => 2,
            FieldRole::Category => 3,
            FieldRole::Amount => 4,
            FieldRole::Email => 5,
        }
    }

    /// Human-readable label used in verdict lines.
    pub fn label(&self) -> &'static str {
        match self {
            FieldRole::Code => "Code",
            FieldRole::Description => "Description",
            FieldRole::PurchaseDate => "Purchase Date",
            FieldRole::Category => "Category",
            FieldRole::Amount => "Amount",
            FieldRole::Email => "Email",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FieldRole {
    type Err = ModelError;

    /// Accepts the label ("Purchase Date") or the machine name in snake or
    /// kebab case, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "code" => Ok(FieldRole::Code),
            "description" => Ok(FieldRole::Description),
            "purchasedate" => Ok(FieldRole::PurchaseDate),
            "category" => Ok(FieldRole::Category),
            "amount" => Ok(FieldRole::Amount),
            "email" => Ok(FieldRole::Email),
            _ => Err(ModelError::UnknownFieldRole(s.to_string())),
        }
    }
}
