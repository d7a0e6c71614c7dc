// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod band_application;
mod categorize;
mod derive;
mod error;
mod gig;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use band_application::{BandApplication, BandApplicationStatus};
pub use categorize::{
    CategorizedGigs, DerivedGig, GigBucket, TabCounts, bucket_for, categorize, filter_by_query,
    is_band_role_application, is_full_band_application,
};
pub use derive::{derive_band_status, derive_status};
pub use error::DomainError;
pub use gig::{BookingHistoryEntry, Gig, HistoryStatus, Role, RoleRef, ShortlistEntry};
pub use status::CanonicalStatus;
pub use types::{Band, BandId, GigId, UserId, UserProfile};
pub use validation::{validate_gig_fields, validate_role_capacity, validate_role_index};
