//! Reports over expense snapshots

pub mod summary;

pub use summary::{CategoryTotal, SpendingSummary};
