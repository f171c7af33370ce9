//! Inserts image markup after anchor lines in markdown posts, driven by a
//! JSON plan of per-document rule tables.

pub mod logging;
pub mod plan;
pub mod report;
pub mod runner;
pub mod tools;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;
