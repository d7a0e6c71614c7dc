// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use encore_domain::{BandApplicationStatus, BandId, UserId};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request changes to a gig's booking state.
/// Authorization is checked at the API boundary before a command is built;
/// capacity and lifecycle rules are checked when it is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Express passive interest in a solo gig.
    ExpressInterest {
        /// The interested user.
        user: UserId,
    },
    /// Retract previously expressed interest.
    RetractInterest {
        /// The user retracting interest.
        user: UserId,
    },
    /// Apply to a specific band role.
    ApplyToRole {
        /// The role's index within the gig's role list.
        role_index: usize,
        /// The applying user.
        applicant: UserId,
    },
    /// Withdraw from a role entirely, booked or not.
    WithdrawFromRole {
        /// The role's index within the gig's role list.
        role_index: usize,
        /// The withdrawing user.
        applicant: UserId,
    },
    /// Book an applicant into a role, consuming one slot.
    BookForRole {
        /// The role's index within the gig's role list.
        role_index: usize,
        /// The applicant to book.
        applicant: UserId,
        /// Notes recorded on the booking history entry.
        notes: Option<String>,
    },
    /// Reverse a role booking, freeing one slot.
    UnbookFromRole {
        /// The role's index within the gig's role list.
        role_index: usize,
        /// The applicant to unbook.
        applicant: UserId,
    },
    /// Book a user directly on a solo gig, setting the terminal marker.
    BookSolo {
        /// The user to book.
        user: UserId,
        /// Notes recorded on the booking history entry.
        notes: Option<String>,
    },
    /// Clear the terminal booking marker on a solo gig.
    UnbookSolo {
        /// The user to unbook.
        user: UserId,
    },
    /// Shortlist an applicant, optionally against a role.
    ShortlistApplicant {
        /// The user to shortlist.
        user: UserId,
        /// The role the shortlist concerns, if any.
        role_index: Option<usize>,
        /// Notes recorded on the shortlist entry.
        notes: Option<String>,
    },
    /// Reject an applicant, appending a rejection to the history.
    RejectApplicant {
        /// The user to reject.
        user: UserId,
        /// Notes recorded on the history entry.
        notes: Option<String>,
    },
    /// Record that the poster viewed an application.
    MarkViewed {
        /// The user whose application was viewed.
        user: UserId,
    },
    /// Apply to a solo gig on behalf of a whole band.
    ApplyAsFullBand {
        /// The applying band.
        band_id: BandId,
        /// The leader submitting on the band's behalf.
        applied_by: UserId,
        /// The fee the band proposes.
        proposed_fee: Option<u32>,
        /// Free-text notes.
        notes: Option<String>,
    },
    /// Withdraw a band's application before booking.
    WithdrawFullBand {
        /// The withdrawing band.
        band_id: BandId,
    },
    /// Respond to a band's application as the poster.
    RespondToFullBand {
        /// The band whose application is being responded to.
        band_id: BandId,
        /// The response status (`PendingReview`, `Shortlisted`, `Booked`,
        /// or `Rejected`).
        status: BandApplicationStatus,
        /// Notes recorded on the application.
        notes: Option<String>,
        /// The fee agreed at booking.
        agreed_fee: Option<u32>,
    },
}
