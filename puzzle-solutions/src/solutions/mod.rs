//! Solver catalogue, one module per year

pub mod year_2015;
pub mod year_2016;
pub mod year_2017;
