pub mod breaks;
pub mod classifier;
pub mod streak;
pub mod weekly;
