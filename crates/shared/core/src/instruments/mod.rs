//! Tradable goods
//!
//! The venue lists a closed set of products. Each one is known at
//! configuration time; strategies never dispatch on free-form names.

mod product;

pub use product::{ParseProductError, Product};
