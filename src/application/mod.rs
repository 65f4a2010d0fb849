//! Application layer containing the request fragments.
//!
//! Each fragment accumulates fields through chained setters and compiles them
//! into a [`crate::domain::ports::DocumentSink`]. `Billing` and `Customer` share
//! their name, address and telephone handling through the `Addressable` trait.

pub mod addressable;
pub mod billing;
pub mod customer;
pub mod fragment;
