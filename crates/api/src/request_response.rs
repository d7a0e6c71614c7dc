// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use encore_domain::{CanonicalStatus, DerivedGig, TabCounts};
use time::Date;

/// Status metadata flattened for API consumers.
///
/// Derived from [`CanonicalStatus`]; the `status` field carries the
/// user-facing label and the remaining fields carry whatever metadata the
/// variant had.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusInfo {
    /// The status label ("none", "interested", "applied", ...).
    pub status: String,
    /// Role name, for role-scoped statuses.
    pub role_name: Option<String>,
    /// Role index, for role-scoped statuses.
    pub role_index: Option<usize>,
    /// Applying band, for full-band applications.
    pub band_id: Option<String>,
    /// Proposed fee, for full-band applications.
    pub proposed_fee: Option<u32>,
    /// Notes carried by the status.
    pub notes: Option<String>,
}

impl StatusInfo {
    /// Flattens a canonical status into its API shape.
    #[must_use]
    pub fn from_canonical(status: &CanonicalStatus) -> Self {
        let (band_id, proposed_fee, notes) = match status {
            CanonicalStatus::AppliedFullBand {
                band_id,
                proposed_fee,
                notes,
            } => (
                Some(band_id.value().to_owned()),
                *proposed_fee,
                notes.clone(),
            ),
            CanonicalStatus::Shortlisted { notes, .. }
            | CanonicalStatus::Rejected { notes } => (None, None, notes.clone()),
            CanonicalStatus::None
            | CanonicalStatus::Interested
            | CanonicalStatus::Applied { .. }
            | CanonicalStatus::Booked { .. }
            | CanonicalStatus::Viewed
            | CanonicalStatus::Cancelled => (None, None, None),
        };
        Self {
            status: status.label().to_owned(),
            role_name: status.role().map(|role| role.name.clone()),
            role_index: status.role().map(|role| role.index),
            band_id,
            proposed_fee,
            notes,
        }
    }
}

/// A gig summary row for list views.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GigSummary {
    /// The gig identifier.
    pub gig_id: String,
    /// The gig's title.
    pub title: String,
    /// The gig's location.
    pub location: String,
    /// The date the gig takes place.
    pub date: Date,
    /// The names of the gig's roles.
    pub role_names: Vec<String>,
    /// The actor's status on the gig.
    pub status: StatusInfo,
}

impl GigSummary {
    /// Builds a summary row from a derived entry.
    #[must_use]
    pub fn from_derived(entry: &DerivedGig) -> Self {
        Self {
            gig_id: entry.gig_id.value().to_owned(),
            title: entry.title.clone(),
            location: entry.location.clone(),
            date: entry.date,
            role_names: entry.role_names.clone(),
            status: StatusInfo::from_canonical(&entry.status),
        }
    }
}

/// API request to express interest in a solo gig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressInterestRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The interested user.
    pub user_id: String,
}

/// API response for a successful interest expression.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExpressInterestResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The interested user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to retract interest in a solo gig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetractInterestRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The retracting user.
    pub user_id: String,
}

/// API response for a successful interest retraction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RetractInterestResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The retracting user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to apply to a band role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyToRoleRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The role's index within the gig's role list.
    pub role_index: usize,
    /// The applying user.
    pub user_id: String,
}

/// API response for a successful role application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApplyToRoleResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The role's index.
    pub role_index: usize,
    /// The role's name.
    pub role_name: String,
    /// The applying user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to withdraw from a band role.
///
/// `authorizer_id` is the acting user: the applicant themself for a
/// self-withdraw, or gig management for a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawFromRoleRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The role's index within the gig's role list.
    pub role_index: usize,
    /// The user being withdrawn.
    pub user_id: String,
    /// The acting user.
    pub authorizer_id: String,
    /// The reason for the withdrawal, recorded on the audit trail.
    pub reason: Option<String>,
}

/// API response for a successful withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WithdrawFromRoleResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The role's index.
    pub role_index: usize,
    /// The withdrawn user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to book an applicant into a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookForRoleRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The role's index within the gig's role list.
    pub role_index: usize,
    /// The applicant to book.
    pub user_id: String,
    /// The acting user; must manage the gig.
    pub authorizer_id: String,
    /// The reason for the booking, recorded on the history entry.
    pub reason: Option<String>,
}

/// API response for a successful role booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookForRoleResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The role's index.
    pub role_index: usize,
    /// The role's name.
    pub role_name: String,
    /// The booked user.
    pub user_id: String,
    /// The role's booked count after the operation.
    pub booked_count: usize,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to unbook an applicant from a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbookFromRoleRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The role's index within the gig's role list.
    pub role_index: usize,
    /// The applicant to unbook.
    pub user_id: String,
    /// The acting user; must manage the gig.
    pub authorizer_id: String,
    /// The reason for the unbooking, recorded on the audit trail.
    pub reason: Option<String>,
}

/// API response for a successful role unbooking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnbookFromRoleResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The role's index.
    pub role_index: usize,
    /// The unbooked user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to book a user directly on a solo gig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSoloRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The user to book.
    pub user_id: String,
    /// The acting user; must manage the gig.
    pub authorizer_id: String,
    /// Notes recorded on the history entry.
    pub notes: Option<String>,
}

/// API response for a successful solo booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookSoloResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The booked user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to clear a solo gig's booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbookSoloRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The user to unbook.
    pub user_id: String,
    /// The acting user; must manage the gig.
    pub authorizer_id: String,
    /// The reason for the unbooking, recorded on the audit trail.
    pub reason: Option<String>,
}

/// API response for a successful solo unbooking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnbookSoloResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The unbooked user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to shortlist an applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortlistApplicantRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The user to shortlist.
    pub user_id: String,
    /// The role the shortlist concerns, if any.
    pub role_index: Option<usize>,
    /// The acting user; must manage the gig.
    pub authorizer_id: String,
    /// Notes recorded on the shortlist entry.
    pub notes: Option<String>,
}

/// API response for a successful shortlist.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShortlistApplicantResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The shortlisted user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to reject an applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectApplicantRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The user to reject.
    pub user_id: String,
    /// The acting user; must manage the gig.
    pub authorizer_id: String,
    /// Notes recorded on the history entry.
    pub notes: Option<String>,
}

/// API response for a successful rejection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RejectApplicantResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The rejected user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to record that an application was viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkViewedRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The user whose application was viewed.
    pub user_id: String,
    /// The acting user; must manage the gig.
    pub authorizer_id: String,
}

/// API response for a recorded view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MarkViewedResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The viewed user.
    pub user_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to apply to a gig on behalf of a whole band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyAsFullBandRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The applying band.
    pub band_id: String,
    /// The leader submitting on the band's behalf.
    pub leader_id: String,
    /// The fee the band proposes.
    pub proposed_fee: Option<u32>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// API response for a successful full-band application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApplyAsFullBandResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The applying band.
    pub band_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request to withdraw a band's application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawFullBandRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The withdrawing band.
    pub band_id: String,
    /// The leader acting on the band's behalf.
    pub leader_id: String,
    /// The reason for the withdrawal, recorded on the audit trail.
    pub reason: Option<String>,
}

/// API response for a successful full-band withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WithdrawFullBandResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The withdrawing band.
    pub band_id: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request for a poster response to a band application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespondToFullBandRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The band whose application is responded to.
    pub band_id: String,
    /// The acting user; must manage the gig.
    pub authorizer_id: String,
    /// The response status ("pending_review", "shortlisted", "booked",
    /// or "rejected").
    pub status: String,
    /// Notes recorded on the application.
    pub notes: Option<String>,
    /// The fee agreed at booking.
    pub agreed_fee: Option<u32>,
}

/// API response for a successful band application response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RespondToFullBandResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The band whose application was responded to.
    pub band_id: String,
    /// The application's status after the response.
    pub status: String,
    /// Whether the gig document changed.
    pub changed: bool,
    /// A success message.
    pub message: String,
}

/// API request for one actor's canonical status on one gig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GigStatusRequest {
    /// The gig identifier.
    pub gig_id: String,
    /// The actor whose status is derived.
    pub user_id: String,
}

/// API response carrying a derived status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GigStatusResponse {
    /// The gig identifier.
    pub gig_id: String,
    /// The actor whose status was derived.
    pub user_id: String,
    /// The derived status.
    pub status: StatusInfo,
}

/// API request for a user's categorized gig list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGigsRequest {
    /// The user whose gigs are listed.
    pub user_id: String,
    /// The date used to split upcoming booked gigs from history.
    pub today: Date,
    /// Optional search query, applied to lists but never to counts.
    pub query: Option<String>,
}

/// API response carrying the categorized gig list with tab counts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListGigsResponse {
    /// Tab counts, always computed from the unfiltered buckets.
    pub counts: TabCounts,
    /// Union of all buckets.
    pub all: Vec<GigSummary>,
    /// The interested bucket.
    pub interested: Vec<GigSummary>,
    /// The applied bucket restricted to band-role applications.
    pub applied_band_role: Vec<GigSummary>,
    /// The applied bucket restricted to full-band applications.
    pub applied_full_band: Vec<GigSummary>,
    /// The full applied bucket (band-role, full-band, and viewed).
    pub applied: Vec<GigSummary>,
    /// The shortlisted bucket.
    pub shortlisted: Vec<GigSummary>,
    /// The booked bucket.
    pub booked: Vec<GigSummary>,
    /// The rejected bucket.
    pub rejected: Vec<GigSummary>,
    /// The history bucket.
    pub history: Vec<GigSummary>,
}
