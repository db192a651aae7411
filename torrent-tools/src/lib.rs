pub mod diff;
pub mod error;
pub mod prompt;
pub mod scan;
