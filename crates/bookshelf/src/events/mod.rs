//! Event transport.
//!
//! [`EventEmitter`] is what the service holds: a non-blocking handle onto a
//! bounded queue. A background worker drains that queue into an
//! `EventPublisher`, either the in-process broadcast or Redis `PUBLISH`.

mod emitter;
#[cfg_attr(feature = "redis", allow(dead_code))]
mod memory;

#[cfg(feature = "redis")]
mod redis_impl;

pub use emitter::EventEmitter;
#[cfg_attr(feature = "redis", allow(unused_imports))]
pub use memory::BroadcastPublisher;

#[cfg(feature = "redis")]
pub use redis_impl::RedisPublisher;
