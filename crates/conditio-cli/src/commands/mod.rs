pub mod engines;
pub mod eval;
pub mod synthesize;
