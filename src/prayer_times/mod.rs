pub mod estimator;
pub mod scheduler;

pub use estimator::{compute_prayer_times, next_prayer};
pub use scheduler::{CountdownScheduler, NextPrayer};
