//! Allocation module - share of asset value per category.

mod allocation_calculator;

pub use allocation_calculator::allocation;
