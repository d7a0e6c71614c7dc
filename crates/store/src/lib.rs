// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory snapshot provider and mutation boundary.
//!
//! Durable persistence is an external collaborator: this crate keeps its
//! interface (point-in-time gig snapshots, directory resolution, the
//! band-leadership membership query, and serialized per-gig mutations)
//! backed by process memory.
//!
//! ## Transaction boundary
//!
//! Each gig is guarded by its own lock. A mutation fetches the current
//! document, runs the core transition, and commits the result inside one
//! lock hold, so a capacity check can never race against another writer on
//! the same gig. Readers clone a snapshot and never coordinate.
//!
//! ## Audit trail
//!
//! Every committed transition appends its audit event, serialized to
//! JSON, to an append-only log.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf
)]

mod error;
mod memory;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use memory::{GigSnapshot, MemoryStore};
