//! Interactive admin console for a job-scheduling master
//!
//! `jobctl` keeps one persistent TCP connection to the master's admin port
//! and runs two concurrent units over it for the whole session:
//!
//! - the **session loop** reads operator lines, resolves them through the
//!   command registry, and owns the write direction;
//! - the **response listener** is a background task that owns the read
//!   direction and prints every response as it arrives.
//!
//! The two never call each other's socket operations, so the split halves
//! need no lock; only console output interleaves, best-effort.
//!
//! Replies are not correlated to the requests that produced them. Every
//! request carries a monotonically increasing id, but responses are matched
//! to the operator purely by arrival order on the single shared stream.

pub mod commands;
pub mod connection;
pub mod listener;
pub mod session;
