pub mod dashboard;
pub mod notifier;
pub mod scheduler;

pub use dashboard::Dashboard;
pub use scheduler::{clamp_interval, RefreshScheduler, SchedulerState};
