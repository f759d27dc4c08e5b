use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Wallet;

/// Wallet filter. Clauses are ANDed; an unset clause always passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against label or address.
    #[serde(default)]
    pub search: String,
    /// Minimum total USD (native + tokens), inclusive.
    #[serde(default)]
    pub min_usd: Option<Decimal>,
    /// Maximum total USD, inclusive.
    #[serde(default)]
    pub max_usd: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Total USD value (native + tokens).
    Usd,
    /// Native coin balance.
    Coin,
    Chain,
    Label,
    Address,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortCriteria {
    /// Highest total USD first.
    fn default() -> Self {
        Self {
            field: SortField::Usd,
            direction: SortDirection::Desc,
        }
    }
}

/// Filter plus sort — the full display-view specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewCriteria {
    pub filter: FilterCriteria,
    pub sort: SortCriteria,
}

impl FilterCriteria {
    pub fn matches(&self, wallet: &Wallet) -> bool {
        let usd = wallet.total_usd();
        if let Some(min) = self.min_usd {
            if usd < min {
                return false;
            }
        }
        if let Some(max) = self.max_usd {
            if usd > max {
                return false;
            }
        }

        let query = self.search.trim().to_lowercase();
        if !query.is_empty() {
            let label = wallet.label.to_lowercase();
            let address = wallet.address.to_lowercase();
            if !label.contains(&query) && !address.contains(&query) {
                return false;
            }
        }
        true
    }
}

/// Derive the filtered, ordered display view of a snapshot.
///
/// The input is never mutated. Sorting is stable, so ties preserve the
/// snapshot's relative order regardless of direction.
pub fn apply_view(snapshot: &[Wallet], criteria: &ViewCriteria) -> Vec<Wallet> {
    let mut view: Vec<Wallet> = snapshot
        .iter()
        .filter(|w| criteria.filter.matches(w))
        .cloned()
        .collect();

    let SortCriteria { field, direction } = criteria.sort;
    view.sort_by(|a, b| {
        let ord = compare_field(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    view
}

fn compare_field(a: &Wallet, b: &Wallet, field: SortField) -> Ordering {
    match field {
        SortField::Usd => a.total_usd().cmp(&b.total_usd()),
        SortField::Coin => a.native_coin().cmp(&b.native_coin()),
        SortField::Chain => cmp_ci(&a.chain, &b.chain),
        SortField::Label => cmp_ci(&a.label, &b.label),
        SortField::Address => cmp_ci(&a.address, &b.address),
    }
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
