//! Book service orchestration.
//!
//! [`CachedBookService`] is the only place that touches store, cache and
//! event queue together. Its policy, in short:
//!
//! - point reads come from the cache only
//! - listing windows over cached keys, or falls back to store paging when
//!   the cache holds no book keys at all
//! - writes hit the store first, then the cache, then the event queue

mod book;

pub use book::CachedBookService;
