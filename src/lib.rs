//! Till
//!
//! Till is a point-of-sale checkout engine: scan products from a catalog and
//! price the basket with a configurable set of pricing rules.

pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod rules;
