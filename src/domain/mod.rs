//! Domain aggregates exposed by the catalog service layer.

pub mod product_index;
pub mod types;
