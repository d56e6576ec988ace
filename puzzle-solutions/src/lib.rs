//! Puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions organized by year. Each
//! solution submits a `SolverPlugin` via `inventory::submit!`, so linking
//! this crate is enough for
//! [`RegistryBuilder::register_all_plugins`](puzzle_solver::RegistryBuilder)
//! to pick everything up. Fixture files for the catalogue live under
//! `testdata/year_<year>/day_<day>.txt`.

#[cfg(feature = "solutions")]
pub mod solutions;
