// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Full-band application records and status transition logic.
//!
//! A band application represents one band applying to a gig as a whole,
//! keyed by band identity. Status transitions are poster- or
//! leader-initiated only; the system never advances status on its own.

use crate::error::DomainError;
use crate::types::{BandId, UserId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Status states for a full-band application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandApplicationStatus {
    /// The band has applied; no poster response yet.
    Applied,
    /// The poster has marked the application as under review.
    PendingReview,
    /// The poster has shortlisted the band.
    Shortlisted,
    /// The poster has booked the band.
    Booked,
    /// The poster has rejected the band.
    Rejected,
    /// The band withdrew before booking.
    Cancelled,
}

impl BandApplicationStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::PendingReview => "pending_review",
            Self::Shortlisted => "shortlisted",
            Self::Booked => "booked",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "applied" => Ok(Self::Applied),
            "pending_review" => Ok(Self::PendingReview),
            "shortlisted" => Ok(Self::Shortlisted),
            "booked" => Ok(Self::Booked),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidApplicationStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition further).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Booked | Self::Rejected | Self::Cancelled)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// Valid transitions are:
    /// - `Applied` → `PendingReview`, `Shortlisted`, `Booked`, `Rejected`,
    ///   `Cancelled`
    /// - `PendingReview` → `Shortlisted`, `Booked`, `Rejected`, `Cancelled`
    /// - `Shortlisted` → `Booked`, `Rejected`, `Cancelled`
    ///
    /// `Booked`, `Rejected`, and `Cancelled` are terminal: in particular a
    /// band cannot withdraw after booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Applied => matches!(
                new_status,
                Self::PendingReview
                    | Self::Shortlisted
                    | Self::Booked
                    | Self::Rejected
                    | Self::Cancelled
            ),
            Self::PendingReview => matches!(
                new_status,
                Self::Shortlisted | Self::Booked | Self::Rejected | Self::Cancelled
            ),
            Self::Shortlisted => {
                matches!(new_status, Self::Booked | Self::Rejected | Self::Cancelled)
            }
            Self::Booked | Self::Rejected | Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by application lifecycle rules".to_string(),
            })
        }
    }
}

impl FromStr for BandApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BandApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A full-band application against a gig.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandApplication {
    /// The band applying.
    pub band_id: BandId,
    /// The leader who submitted the application on the band's behalf.
    pub applied_by: UserId,
    /// The application's current status.
    pub status: BandApplicationStatus,
    /// When the application was submitted.
    pub applied_at: OffsetDateTime,
    /// When the application was shortlisted, if it was.
    pub shortlisted_at: Option<OffsetDateTime>,
    /// When the application was booked, if it was.
    pub booked_at: Option<OffsetDateTime>,
    /// The fee the band proposed.
    pub proposed_fee: Option<u32>,
    /// The fee agreed at booking.
    pub agreed_fee: Option<u32>,
    /// Free-text notes, updated as the poster responds.
    pub notes: Option<String>,
}

impl BandApplication {
    /// Creates a new `BandApplication` in the `Applied` state.
    ///
    /// # Arguments
    ///
    /// * `band_id` - The band applying
    /// * `applied_by` - The leader submitting on the band's behalf
    /// * `proposed_fee` - The fee the band proposes
    /// * `notes` - Optional free-text notes
    /// * `applied_at` - When the application was submitted
    #[must_use]
    pub const fn new(
        band_id: BandId,
        applied_by: UserId,
        proposed_fee: Option<u32>,
        notes: Option<String>,
        applied_at: OffsetDateTime,
    ) -> Self {
        Self {
            band_id,
            applied_by,
            status: BandApplicationStatus::Applied,
            applied_at,
            shortlisted_at: None,
            booked_at: None,
            proposed_fee,
            agreed_fee: None,
            notes,
        }
    }

    /// Returns whether the application is still live (not terminal).
    #[must_use]
    pub const fn is_live(&self) -> bool {
        !self.status.is_terminal()
    }
}
