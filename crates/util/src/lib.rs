//! link-forest-util - seeded randomness for link-forest tests
//!
//! [`Fuzzer`] wraps a reproducible PRNG; [`script`] turns it into random
//! operation sequences for the tree and the list, to be replayed against a
//! model collection.

pub mod fuzzer;
pub mod script;

pub use fuzzer::Fuzzer;
pub use script::{ListOp, TreeOp};
