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
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthError, AuthorizationService};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_store_error};
pub use handlers::{
    apply_as_full_band, apply_to_role, book_for_role, book_solo, express_interest, get_gig_status,
    invite_to_role, list_gigs_for_user, mark_viewed, reject_applicant, respond_to_full_band,
    retract_interest, shortlist_applicant, unbook_from_role, unbook_solo, withdraw_from_role,
    withdraw_full_band,
};
pub use request_response::{
    ApplyAsFullBandRequest, ApplyAsFullBandResponse, ApplyToRoleRequest, ApplyToRoleResponse,
    BookForRoleRequest, BookForRoleResponse, BookSoloRequest, BookSoloResponse,
    ExpressInterestRequest, ExpressInterestResponse, GigStatusRequest, GigStatusResponse,
    GigSummary, ListGigsRequest, ListGigsResponse, MarkViewedRequest, MarkViewedResponse,
    RejectApplicantRequest, RejectApplicantResponse, RespondToFullBandRequest,
    RespondToFullBandResponse, RetractInterestRequest, RetractInterestResponse,
    ShortlistApplicantRequest, ShortlistApplicantResponse, StatusInfo, UnbookFromRoleRequest,
    UnbookFromRoleResponse, UnbookSoloRequest, UnbookSoloResponse, WithdrawFromRoleRequest,
    WithdrawFromRoleResponse, WithdrawFullBandRequest, WithdrawFullBandResponse,
};
