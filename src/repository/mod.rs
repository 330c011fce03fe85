//! Typed query/mutation operations over the record-store collections.
//!
//! Every operation is a read-full-collection, mutate-in-memory,
//! write-full-collection cycle against [`crate::store::JsonStore`].
//! Cross-entity checks (e.g. an order's user must exist) belong to the
//! service layer, not here.

pub mod food;
pub mod orders;
pub mod users;
