pub mod chapter;
pub mod core;
pub mod dedupe;
pub mod error;
pub mod range;
pub mod sweep;

pub use chapter::run_chapter_sweep;
pub use dedupe::SeenTitles;
pub use sweep::{ItemOutcome, SweepStats, run_short_sweep};
