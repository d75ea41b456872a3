//! Functional core for bookshelf.
//!
//! Pure domain types, key encoding, pagination and the traits that the
//! service crate implements. Nothing in here performs I/O.

pub mod book;
pub mod cache;
pub mod events;
pub mod service;
pub mod storage;
