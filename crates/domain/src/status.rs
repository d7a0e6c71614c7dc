// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::gig::RoleRef;
use crate::types::BandId;
use serde::{Deserialize, Serialize};

/// The canonical application status of one actor on one gig.
///
/// This is a closed union: every consumer must handle every variant.
/// Status is derived from the gig document by [`crate::derive_status`],
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CanonicalStatus {
    /// The actor has no record on the gig. Callers filter this out.
    None,
    /// The actor expressed interest in a solo gig.
    Interested,
    /// The actor applied to a specific band role.
    Applied {
        /// The role applied to.
        role: RoleRef,
    },
    /// The actor applied on behalf of a whole band.
    AppliedFullBand {
        /// The applying band.
        band_id: BandId,
        /// The fee the band proposed.
        proposed_fee: Option<u32>,
        /// Free-text notes from the application.
        notes: Option<String>,
    },
    /// The poster shortlisted the actor.
    Shortlisted {
        /// The role the shortlist concerns, if the actor applied to one.
        role: Option<RoleRef>,
        /// Notes attached to the shortlist entry.
        notes: Option<String>,
    },
    /// The actor is booked.
    Booked {
        /// The role booked into, for role-structured gigs.
        role: Option<RoleRef>,
    },
    /// The poster rejected the actor.
    Rejected {
        /// Notes attached to the rejection.
        notes: Option<String>,
    },
    /// The poster viewed the application; not a decision.
    Viewed,
    /// The actor's full-band application was withdrawn.
    Cancelled,
}

impl CanonicalStatus {
    /// Returns the user-facing status label.
    ///
    /// Both application variants share the "applied" label; the band-role
    /// versus full-band distinction is a display filter, not a status.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Interested => "interested",
            Self::Applied { .. } | Self::AppliedFullBand { .. } => "applied",
            Self::Shortlisted { .. } => "shortlisted",
            Self::Booked { .. } => "booked",
            Self::Rejected { .. } => "rejected",
            Self::Viewed => "viewed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether this is the empty status.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the role metadata carried by this status, if any.
    #[must_use]
    pub const fn role(&self) -> Option<&RoleRef> {
        match self {
            Self::Applied { role } => Some(role),
            Self::Shortlisted { role, .. } | Self::Booked { role } => role.as_ref(),
            Self::None
            | Self::Interested
            | Self::AppliedFullBand { .. }
            | Self::Rejected { .. }
            | Self::Viewed
            | Self::Cancelled => None,
        }
    }
}

impl std::fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
