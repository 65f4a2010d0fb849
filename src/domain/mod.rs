//! Domain layer: the typed field groups, value coercions and the document port.
//!
//! Nothing in here performs I/O. Fragments in the application layer build on
//! these types and compile into any [`ports::DocumentSink`].

pub mod expiry;
pub mod fields;
pub mod markup;
pub mod money;
pub mod ports;
pub mod record;
