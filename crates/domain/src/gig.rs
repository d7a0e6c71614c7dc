// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::band_application::{BandApplication, BandApplicationStatus};
use crate::error::DomainError;
use crate::types::{BandId, GigId, UserId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, OffsetDateTime};

/// Status of a booking history entry.
///
/// Booking history is the authoritative append-only decision log: later
/// entries for the same user override earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryStatus {
    /// The poster viewed the application; not a decision.
    Viewed,
    /// The applicant was booked.
    Booked,
    /// The applicant was rejected.
    Rejected,
}

impl HistoryStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Viewed => "viewed",
            Self::Booked => "booked",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "viewed" => Ok(Self::Viewed),
            "booked" => Ok(Self::Booked),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidHistoryStatus {
                status: s.to_string(),
            }),
        }
    }
}

impl FromStr for HistoryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An entry in a gig's booking history.
///
/// Entries are appended by the poster/band-leader side and never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingHistoryEntry {
    /// The user this entry concerns.
    pub user_id: UserId,
    /// The recorded decision.
    pub status: HistoryStatus,
    /// When the entry was recorded.
    pub timestamp: OffsetDateTime,
    /// Optional free-text notes.
    pub notes: Option<String>,
}

impl BookingHistoryEntry {
    /// Creates a new `BookingHistoryEntry`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user this entry concerns
    /// * `status` - The recorded decision
    /// * `timestamp` - When the entry was recorded
    /// * `notes` - Optional free-text notes
    #[must_use]
    pub const fn new(
        user_id: UserId,
        status: HistoryStatus,
        timestamp: OffsetDateTime,
        notes: Option<String>,
    ) -> Self {
        Self {
            user_id,
            status,
            timestamp,
            notes,
        }
    }
}

/// A reference to a role within a gig's role list.
///
/// Carried as metadata on derived statuses and shortlist entries so the
/// role context survives the derivation fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    /// The role's display name.
    pub name: String,
    /// The role's index within the gig's role list.
    pub index: usize,
}

impl RoleRef {
    /// Creates a new `RoleRef`.
    ///
    /// # Arguments
    ///
    /// * `name` - The role's display name
    /// * `index` - The role's index within the gig's role list
    #[must_use]
    pub const fn new(name: String, index: usize) -> Self {
        Self { name, index }
    }
}

/// An entry in a gig's shortlist.
///
/// A shortlist entry is an intermediate, non-terminal positive signal from
/// the poster toward an applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistEntry {
    /// The shortlisted user.
    pub user_id: UserId,
    /// When the user was shortlisted.
    pub shortlisted_at: OffsetDateTime,
    /// Optional free-text notes.
    pub notes: Option<String>,
    /// The role the shortlist concerns, when the applicant applied to one.
    pub role: Option<RoleRef>,
}

impl ShortlistEntry {
    /// Creates a new `ShortlistEntry`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The shortlisted user
    /// * `shortlisted_at` - When the user was shortlisted
    /// * `notes` - Optional free-text notes
    /// * `role` - The role the shortlist concerns, if any
    #[must_use]
    pub const fn new(
        user_id: UserId,
        shortlisted_at: OffsetDateTime,
        notes: Option<String>,
        role: Option<RoleRef>,
    ) -> Self {
        Self {
            user_id,
            shortlisted_at,
            notes,
            role,
        }
    }
}

/// A named slot within a role-structured gig.
///
/// A role carries two independent ceilings: `max_applicants` bounds how
/// many may apply before the role closes to new applicants, and
/// `max_slots` bounds how many may ultimately be booked.
/// Invariant: `max_slots <= max_applicants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// The role's display name (e.g., "Vocalist").
    pub name: String,
    /// Booking capacity: how many performers may be booked into this role.
    pub max_slots: u32,
    /// Application capacity: how many may apply before the role closes.
    pub max_applicants: u32,
    /// The fee offered for this role.
    pub price: u32,
    /// Users currently applied to this role. Capacity-bearing: members may
    /// be removed by withdraw.
    pub applicants: Vec<UserId>,
    /// Users currently booked into this role. Capacity-bearing: members may
    /// be removed by unbook. The booking history remains the decision log.
    pub booked: Vec<UserId>,
}

impl Role {
    /// Creates a new `Role` with no applicants.
    ///
    /// # Arguments
    ///
    /// * `name` - The role's display name
    /// * `max_slots` - Booking capacity
    /// * `max_applicants` - Application capacity
    /// * `price` - The fee offered for this role
    #[must_use]
    pub const fn new(name: String, max_slots: u32, max_applicants: u32, price: u32) -> Self {
        Self {
            name,
            max_slots,
            max_applicants,
            price,
            applicants: Vec::new(),
            booked: Vec::new(),
        }
    }

    /// Returns whether the given user has applied to this role.
    #[must_use]
    pub fn has_applicant(&self, user: &UserId) -> bool {
        self.applicants.contains(user)
    }

    /// Returns whether the given user is booked into this role.
    #[must_use]
    pub fn has_booked(&self, user: &UserId) -> bool {
        self.booked.contains(user)
    }

    /// Returns whether the role has reached its application ceiling.
    #[must_use]
    pub fn applicants_full(&self) -> bool {
        self.applicants.len() >= self.max_applicants as usize
    }

    /// Returns whether the role has reached its booking ceiling.
    #[must_use]
    pub fn slots_full(&self) -> bool {
        self.booked.len() >= self.max_slots as usize
    }
}

/// A gig posting.
///
/// The field set of this document is the wire/storage contract: the
/// interest set, role applicant sets, band applications, shortlist, and
/// booking history are independently-appended records, and the canonical
/// per-actor status is derived from them, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gig {
    /// The gig identifier.
    pub gig_id: GigId,
    /// The gig's title.
    pub title: String,
    /// The date the gig takes place.
    pub date: Date,
    /// The gig's location.
    pub location: String,
    /// The overall fee offered for the gig.
    pub price: u32,
    /// The user who posted the gig.
    pub posted_by: UserId,
    /// The band whose leaders co-manage this posting, when a band posted it.
    pub posting_band: Option<BandId>,
    /// Whether this gig is structured around band roles.
    pub is_client_band: bool,
    /// The ordered role list for role-structured gigs.
    pub band_category: Vec<Role>,
    /// Users who expressed interest (solo gigs only).
    pub interested_users: Vec<UserId>,
    /// Full-band applications against this gig.
    pub band_applications: Vec<BandApplication>,
    /// Applicants the poster has shortlisted.
    pub shortlisted_users: Vec<ShortlistEntry>,
    /// The append-only decision log.
    pub booking_history: Vec<BookingHistoryEntry>,
    /// Terminal booking for non-role gigs.
    pub booked_by: Option<UserId>,
}

impl Gig {
    /// Creates a new solo (non-role-structured) gig.
    ///
    /// # Arguments
    ///
    /// * `gig_id` - The gig identifier
    /// * `title` - The gig's title
    /// * `date` - The date the gig takes place
    /// * `location` - The gig's location
    /// * `price` - The overall fee offered
    /// * `posted_by` - The user posting the gig
    #[must_use]
    pub const fn new(
        gig_id: GigId,
        title: String,
        date: Date,
        location: String,
        price: u32,
        posted_by: UserId,
    ) -> Self {
        Self {
            gig_id,
            title,
            date,
            location,
            price,
            posted_by,
            posting_band: None,
            is_client_band: false,
            band_category: Vec::new(),
            interested_users: Vec::new(),
            band_applications: Vec::new(),
            shortlisted_users: Vec::new(),
            booking_history: Vec::new(),
            booked_by: None,
        }
    }

    /// Creates a new role-structured gig.
    ///
    /// # Arguments
    ///
    /// * `gig_id` - The gig identifier
    /// * `title` - The gig's title
    /// * `date` - The date the gig takes place
    /// * `location` - The gig's location
    /// * `price` - The overall fee offered
    /// * `posted_by` - The user posting the gig
    /// * `posting_band` - The band whose leaders co-manage the posting
    /// * `band_category` - The ordered role list
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new_role_structured(
        gig_id: GigId,
        title: String,
        date: Date,
        location: String,
        price: u32,
        posted_by: UserId,
        posting_band: Option<BandId>,
        band_category: Vec<Role>,
    ) -> Self {
        Self {
            gig_id,
            title,
            date,
            location,
            price,
            posted_by,
            posting_band,
            is_client_band: true,
            band_category,
            interested_users: Vec::new(),
            band_applications: Vec::new(),
            shortlisted_users: Vec::new(),
            booking_history: Vec::new(),
            booked_by: None,
        }
    }

    /// Returns the role at the given index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoleIndexOutOfRange` if the index does not
    /// name a role on this gig.
    pub fn role(&self, index: usize) -> Result<&Role, DomainError> {
        self.band_category
            .get(index)
            .ok_or_else(|| DomainError::RoleIndexOutOfRange {
                gig: self.gig_id.value().to_owned(),
                index,
                role_count: self.band_category.len(),
            })
    }

    /// Returns the first role the given user has applied to, as a `RoleRef`.
    #[must_use]
    pub fn applied_role(&self, user: &UserId) -> Option<RoleRef> {
        self.band_category
            .iter()
            .enumerate()
            .find(|(_, role)| role.has_applicant(user))
            .map(|(index, role)| RoleRef::new(role.name.clone(), index))
    }

    /// Returns the band application submitted on behalf of the given band,
    /// if one exists. The newest application for the band wins.
    #[must_use]
    pub fn band_application(&self, band_id: &BandId) -> Option<&BandApplication> {
        self.band_applications
            .iter()
            .rev()
            .find(|app| &app.band_id == band_id)
    }

    /// Returns the band application submitted by the given user, if one
    /// exists. The newest application wins.
    #[must_use]
    pub fn band_application_by(&self, user: &UserId) -> Option<&BandApplication> {
        self.band_applications
            .iter()
            .rev()
            .find(|app| &app.applied_by == user)
    }

    /// Returns the most recent shortlist entry for the given user.
    #[must_use]
    pub fn shortlist_entry(&self, user: &UserId) -> Option<&ShortlistEntry> {
        self.shortlisted_users
            .iter()
            .rev()
            .find(|entry| &entry.user_id == user)
    }

    /// Returns whether the given user currently occupies a booked slot on
    /// this gig: a role's booked set, the terminal `booked_by` marker, or a
    /// booked full-band application.
    ///
    /// The booking history is deliberately not consulted: a trailing
    /// `booked` history entry with no occupied slot is a stale record left
    /// behind by unbook.
    #[must_use]
    pub fn occupies_slot(&self, user: &UserId) -> bool {
        if self.booked_by.as_ref() == Some(user) {
            return true;
        }
        if self.band_category.iter().any(|role| role.has_booked(user)) {
            return true;
        }
        self.band_applications
            .iter()
            .any(|app| &app.applied_by == user && app.status == BandApplicationStatus::Booked)
    }

    /// Returns the role the given user is currently booked into.
    #[must_use]
    pub fn booked_role(&self, user: &UserId) -> Option<RoleRef> {
        self.band_category
            .iter()
            .enumerate()
            .find(|(_, role)| role.has_booked(user))
            .map(|(index, role)| RoleRef::new(role.name.clone(), index))
    }

    /// Returns the names of all roles on this gig.
    #[must_use]
    pub fn role_names(&self) -> Vec<String> {
        self.band_category
            .iter()
            .map(|role| role.name.clone())
            .collect()
    }
}
