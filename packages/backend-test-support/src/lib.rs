//! Backend test support utilities
//!
//! Provides unified logging initialization for tests and assertion helpers
//! for the stable Problem Details error contract.

pub mod problem_details;
pub mod test_logging;
