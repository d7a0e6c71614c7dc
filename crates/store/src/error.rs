// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use encore::CoreError;
use encore_domain::DomainError;
use thiserror::Error;

/// Errors that can occur at the store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested gig does not exist.
    #[error("Gig not found: {0}")]
    GigNotFound(String),

    /// The requested band does not exist.
    #[error("Band not found: {0}")]
    BandNotFound(String),

    /// A gig with this identifier already exists.
    #[error("Gig already exists: {0}")]
    DuplicateGig(String),

    /// The gig document failed field validation on insert.
    #[error("Invalid gig document: {0}")]
    InvalidGig(#[from] DomainError),

    /// The core transition rejected the mutation.
    #[error("Transition rejected: {0}")]
    Transition(#[from] CoreError),

    /// An audit event could not be serialized.
    #[error("Audit serialization failed: {0}")]
    Serialization(String),

    /// A lock was poisoned by a panicking writer; the store is unreliable.
    #[error("Store lock poisoned")]
    LockPoisoned,
}
