//! Library entry for diploma-teams exposing core logic for the binary and integration tests.

pub mod config;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod util;
pub mod workers;

#[cfg(test)]
mod test_utils;
