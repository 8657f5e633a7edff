//! Configuration loader and schema types.
//!
//! Everything here is optional: with no file and no environment overrides the
//! defaults describe the stock behavior of the tool.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
