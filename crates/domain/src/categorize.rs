// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Categorization and search over a user's derived gig set.
//!
//! Buckets partition the non-`None` derived statuses: every gig with a
//! record lands in exactly one bucket, and `all` is their union. Search is
//! applied after categorization so tab counts always reflect the
//! unfiltered bucket sizes.

use crate::derive::derive_status;
use crate::gig::Gig;
use crate::status::CanonicalStatus;
use crate::types::{GigId, UserId};
use serde::{Deserialize, Serialize};
use time::Date;

/// The mutually exclusive tab buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GigBucket {
    /// Passive interest in a solo gig.
    Interested,
    /// A live application (band-role or full-band, viewed or not).
    Applied,
    /// Shortlisted by the poster.
    Shortlisted,
    /// Booked, gig still upcoming.
    Booked,
    /// Rejected by the poster.
    Rejected,
    /// Completed or closed: past booked gigs and cancelled applications.
    History,
}

/// A gig summary joined with the actor's derived status.
///
/// This is the unit the categorization and search layers operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedGig {
    /// The gig identifier.
    pub gig_id: GigId,
    /// The gig's title.
    pub title: String,
    /// The gig's location.
    pub location: String,
    /// The date the gig takes place.
    pub date: Date,
    /// The names of the gig's roles, for search.
    pub role_names: Vec<String>,
    /// The actor's derived status on the gig.
    pub status: CanonicalStatus,
}

impl DerivedGig {
    /// Builds a `DerivedGig` by running derivation for the given actor.
    #[must_use]
    pub fn from_gig(gig: &Gig, actor: &UserId) -> Self {
        Self {
            gig_id: gig.gig_id.clone(),
            title: gig.title.clone(),
            location: gig.location.clone(),
            date: gig.date,
            role_names: gig.role_names(),
            status: derive_status(gig, actor),
        }
    }

    /// Returns whether this entry matches a search query.
    ///
    /// The match is a case-insensitive substring test over title,
    /// location, role names, and the status label.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
            || self
                .role_names
                .iter()
                .any(|name| name.to_lowercase().contains(&needle))
            || self.status.label().contains(&needle)
    }
}

/// Returns whether a derived status is a band-role application.
#[must_use]
pub const fn is_band_role_application(status: &CanonicalStatus) -> bool {
    matches!(status, CanonicalStatus::Applied { .. })
}

/// Returns whether a derived status is a full-band application.
#[must_use]
pub const fn is_full_band_application(status: &CanonicalStatus) -> bool {
    matches!(status, CanonicalStatus::AppliedFullBand { .. })
}

/// Assigns a derived status to its tab bucket.
///
/// Returns `None` only for [`CanonicalStatus::None`]; every other status
/// maps to exactly one bucket:
/// - a viewed application is still a live application, so `Viewed`
///   buckets as `Applied`;
/// - a booked gig moves from `Booked` to `History` once its date passes;
/// - a cancelled full-band application is closed, so it buckets as
///   `History`.
#[must_use]
pub const fn bucket_for(status: &CanonicalStatus, date: Date, today: Date) -> Option<GigBucket> {
    match status {
        CanonicalStatus::None => None,
        CanonicalStatus::Interested => Some(GigBucket::Interested),
        CanonicalStatus::Applied { .. }
        | CanonicalStatus::AppliedFullBand { .. }
        | CanonicalStatus::Viewed => Some(GigBucket::Applied),
        CanonicalStatus::Shortlisted { .. } => Some(GigBucket::Shortlisted),
        CanonicalStatus::Booked { .. } => {
            if date.to_julian_day() >= today.to_julian_day() {
                Some(GigBucket::Booked)
            } else {
                Some(GigBucket::History)
            }
        }
        CanonicalStatus::Rejected { .. } => Some(GigBucket::Rejected),
        CanonicalStatus::Cancelled => Some(GigBucket::History),
    }
}

/// A user's gig set partitioned into tab buckets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorizedGigs {
    /// Union of all buckets below.
    pub all: Vec<DerivedGig>,
    /// Passive interest.
    pub interested: Vec<DerivedGig>,
    /// Live applications (band-role and full-band).
    pub applied: Vec<DerivedGig>,
    /// Shortlisted applications.
    pub shortlisted: Vec<DerivedGig>,
    /// Upcoming booked gigs.
    pub booked: Vec<DerivedGig>,
    /// Rejected applications.
    pub rejected: Vec<DerivedGig>,
    /// Completed and closed gigs.
    pub history: Vec<DerivedGig>,
}

impl CategorizedGigs {
    /// Computes tab counts from the partition.
    ///
    /// Counts are recomputed from the same entries used for display, so
    /// they can never diverge from the rendered lists.
    #[must_use]
    pub fn counts(&self) -> TabCounts {
        TabCounts {
            all: self.all.len(),
            interested: self.interested.len(),
            applied: self.applied.len(),
            applied_band_role: self
                .applied
                .iter()
                .filter(|entry| is_band_role_application(&entry.status))
                .count(),
            applied_full_band: self
                .applied
                .iter()
                .filter(|entry| is_full_band_application(&entry.status))
                .count(),
            shortlisted: self.shortlisted.len(),
            booked: self.booked.len(),
            rejected: self.rejected.len(),
            history: self.history.len(),
        }
    }
}

/// Aggregate counts shown on tab headers.
///
/// Always computed from the unfiltered buckets: search narrows the list
/// contents, never the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCounts {
    /// Total gigs with any record.
    pub all: usize,
    /// Interested count.
    pub interested: usize,
    /// Applied count (band-role + full-band + viewed).
    pub applied: usize,
    /// Applied count restricted to band-role applications.
    pub applied_band_role: usize,
    /// Applied count restricted to full-band applications.
    pub applied_full_band: usize,
    /// Shortlisted count.
    pub shortlisted: usize,
    /// Booked count.
    pub booked: usize,
    /// Rejected count.
    pub rejected: usize,
    /// History count.
    pub history: usize,
}

/// Partitions a user's derived gig set into tab buckets.
///
/// Entries with status `None` are dropped; every other entry lands in
/// exactly one bucket and in `all`.
///
/// # Arguments
///
/// * `entries` - The user's derived (gig, status) pairs
/// * `today` - The date used to split upcoming booked gigs from history
#[must_use]
pub fn categorize(entries: Vec<DerivedGig>, today: Date) -> CategorizedGigs {
    let mut categorized = CategorizedGigs::default();

    for entry in entries {
        let Some(bucket) = bucket_for(&entry.status, entry.date, today) else {
            continue;
        };
        match bucket {
            GigBucket::Interested => categorized.interested.push(entry.clone()),
            GigBucket::Applied => categorized.applied.push(entry.clone()),
            GigBucket::Shortlisted => categorized.shortlisted.push(entry.clone()),
            GigBucket::Booked => categorized.booked.push(entry.clone()),
            GigBucket::Rejected => categorized.rejected.push(entry.clone()),
            GigBucket::History => categorized.history.push(entry.clone()),
        }
        categorized.all.push(entry);
    }

    categorized
}

/// Filters a bucket's entries by a search query.
///
/// Applied after categorization, never before: tab counts come from the
/// unfiltered buckets and only the visible list narrows.
#[must_use]
pub fn filter_by_query(entries: &[DerivedGig], query: &str) -> Vec<DerivedGig> {
    entries
        .iter()
        .filter(|entry| entry.matches_query(query))
        .cloned()
        .collect()
}
