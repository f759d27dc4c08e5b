pub mod deposits;
pub mod totals;
pub mod view;

pub use deposits::{detect_changes, ChangeReport, DepositEvent};
pub use totals::{aggregate_totals, ChainTotals, PortfolioTotals};
pub use view::{apply_view, FilterCriteria, SortCriteria, SortDirection, SortField, ViewCriteria};
