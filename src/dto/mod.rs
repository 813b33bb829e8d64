//! DTO modules that bridge HTTP requests with services.

pub mod products;
