// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every mutation handler follows the same shape: resolve the actor's
//! relationships, authorize through [`AuthorizationService`], build a core
//! command, and run it through the store's per-gig serialization boundary.
//! After a write the response is built from the committed document, never
//! from an optimistic local copy, since a concurrent writer may have been
//! rejected in between.

use std::str::FromStr;

use encore::{Command, TransitionResult, apply};
use encore_audit::{Actor, Cause};
use encore_domain::{
    Band, BandApplicationStatus, BandId, DerivedGig, Gig, GigId, UserId, categorize,
    derive_status, filter_by_query, is_band_role_application, is_full_band_application,
};
use encore_store::MemoryStore;
use time::OffsetDateTime;

use crate::auth::AuthorizationService;
use crate::error::{ApiError, translate_domain_error, translate_store_error};
use crate::request_response::{
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

/// Builds the audit cause for a request.
fn request_cause(action: &str, gig_id: &str, reason: Option<String>) -> Cause {
    Cause::new(
        format!("{action}:{gig_id}"),
        reason.unwrap_or_else(|| String::from("User request")),
    )
}

/// Builds the audit actor for a musician acting on their own behalf.
fn musician_actor(user_id: &str) -> Actor {
    Actor::new(user_id.to_owned(), String::from("musician"))
}

/// Builds the audit actor for a band leader acting for their band.
fn band_leader_actor(user_id: &str) -> Actor {
    Actor::new(user_id.to_owned(), String::from("band_leader"))
}

/// Builds the audit actor for a gig manager: the poster, or a leader of
/// the posting band.
fn management_actor(gig: &Gig, authorizer: &UserId) -> Actor {
    let actor_type: String = if &gig.posted_by == authorizer {
        String::from("poster")
    } else {
        String::from("band_leader")
    };
    Actor::new(authorizer.value().to_owned(), actor_type)
}

/// Resolves the bands an actor leads, translating store failures.
fn led_bands(store: &MemoryStore, actor: &UserId) -> Result<Vec<Band>, ApiError> {
    store.bands_led_by(actor).map_err(translate_store_error)
}

/// Fetches the current gig document, translating store failures.
fn fetch_gig(store: &MemoryStore, gig_id: &GigId) -> Result<Gig, ApiError> {
    store.gig(gig_id).map_err(translate_store_error)
}

/// Expresses interest in a solo gig.
///
/// Interest is self-service; no authorization beyond the actor's own
/// identity is involved. Re-expressing interest is an idempotent no-op.
///
/// # Errors
///
/// Returns an error if the gig does not exist or is role-structured.
pub fn express_interest(
    store: &MemoryStore,
    request: ExpressInterestRequest,
    now: OffsetDateTime,
) -> Result<ExpressInterestResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let user: UserId = UserId::new(&request.user_id);
    let actor: Actor = musician_actor(&request.user_id);
    let cause: Cause = request_cause("express_interest", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::ExpressInterest { user: user.clone() },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(ExpressInterestResponse {
        gig_id: request.gig_id,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Interest recorded"),
    })
}

/// Retracts interest in a solo gig.
///
/// Retracting absent interest is an idempotent no-op.
///
/// # Errors
///
/// Returns an error if the gig does not exist.
pub fn retract_interest(
    store: &MemoryStore,
    request: RetractInterestRequest,
    now: OffsetDateTime,
) -> Result<RetractInterestResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let user: UserId = UserId::new(&request.user_id);
    let actor: Actor = musician_actor(&request.user_id);
    let cause: Cause = request_cause("retract_interest", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::RetractInterest { user: user.clone() },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(RetractInterestResponse {
        gig_id: request.gig_id,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Interest retracted"),
    })
}

/// Applies to a band role.
///
/// Applying is self-service. The application ceiling is checked inside the
/// gig's transaction boundary; a duplicate application is an idempotent
/// no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig or role does not exist
/// - The role has reached its application ceiling
pub fn apply_to_role(
    store: &MemoryStore,
    request: ApplyToRoleRequest,
    now: OffsetDateTime,
) -> Result<ApplyToRoleResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let applicant: UserId = UserId::new(&request.user_id);
    let actor: Actor = musician_actor(&request.user_id);
    let cause: Cause = request_cause("apply_to_role", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::ApplyToRole {
                    role_index: request.role_index,
                    applicant: applicant.clone(),
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    let role_name: String = transition
        .new_gig
        .role(request.role_index)
        .map(|role| role.name.clone())
        .map_err(translate_domain_error)?;

    Ok(ApplyToRoleResponse {
        gig_id: request.gig_id,
        role_index: request.role_index,
        role_name,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Application recorded"),
    })
}

/// Withdraws an applicant from a role entirely.
///
/// Authorized for the applicant themself (self-withdraw) or gig
/// management (removal). Withdrawing an absent applicant is an idempotent
/// no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig or role does not exist
/// - The acting user is neither the applicant nor gig management
pub fn withdraw_from_role(
    store: &MemoryStore,
    request: WithdrawFromRoleRequest,
    now: OffsetDateTime,
) -> Result<WithdrawFromRoleResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let applicant: UserId = UserId::new(&request.user_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_self_or_management(
        &gig,
        &authorizer,
        &applicant,
        &bands,
        "withdraw_from_role",
    )?;

    let actor: Actor = if authorizer == applicant {
        musician_actor(&request.authorizer_id)
    } else {
        management_actor(&gig, &authorizer)
    };
    let cause: Cause = request_cause("withdraw_from_role", &request.gig_id, request.reason);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::WithdrawFromRole {
                    role_index: request.role_index,
                    applicant: applicant.clone(),
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(WithdrawFromRoleResponse {
        gig_id: request.gig_id,
        role_index: request.role_index,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Withdrawal recorded"),
    })
}

/// Books an applicant into a role, consuming one slot.
///
/// Authorized for gig management only. The slot ceiling is checked inside
/// the gig's transaction boundary, so two racing bookings for the last
/// slot cannot both succeed. Booking an already-booked applicant is an
/// idempotent no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig or role does not exist
/// - The acting user does not manage the gig
/// - The user has not applied to the role
/// - The role has no open slots
pub fn book_for_role(
    store: &MemoryStore,
    request: BookForRoleRequest,
    now: OffsetDateTime,
) -> Result<BookForRoleResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let applicant: UserId = UserId::new(&request.user_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_gig_management(&gig, &authorizer, &bands, "book_for_role")?;

    let actor: Actor = management_actor(&gig, &authorizer);
    let cause: Cause = request_cause("book_for_role", &request.gig_id, request.reason.clone());

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::BookForRole {
                    role_index: request.role_index,
                    applicant: applicant.clone(),
                    notes: request.reason,
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    let role = transition
        .new_gig
        .role(request.role_index)
        .map_err(translate_domain_error)?;

    Ok(BookForRoleResponse {
        gig_id: request.gig_id,
        role_index: request.role_index,
        role_name: role.name.clone(),
        user_id: request.user_id,
        booked_count: role.booked.len(),
        changed: transition.changed,
        message: String::from("Booking confirmed"),
    })
}

/// Reverses a role booking, freeing one slot.
///
/// Authorized for gig management only. Unbooking a user who is not booked
/// is an idempotent no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig or role does not exist
/// - The acting user does not manage the gig
pub fn unbook_from_role(
    store: &MemoryStore,
    request: UnbookFromRoleRequest,
    now: OffsetDateTime,
) -> Result<UnbookFromRoleResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let applicant: UserId = UserId::new(&request.user_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_gig_management(&gig, &authorizer, &bands, "unbook_from_role")?;

    let actor: Actor = management_actor(&gig, &authorizer);
    let cause: Cause = request_cause("unbook_from_role", &request.gig_id, request.reason);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::UnbookFromRole {
                    role_index: request.role_index,
                    applicant: applicant.clone(),
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(UnbookFromRoleResponse {
        gig_id: request.gig_id,
        role_index: request.role_index,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Booking reversed"),
    })
}

/// Books a user directly on a solo gig, setting the terminal marker.
///
/// Authorized for gig management only.
///
/// # Errors
///
/// Returns an error if:
/// - The gig does not exist or is role-structured
/// - The acting user does not manage the gig
/// - Another user already holds the booking
pub fn book_solo(
    store: &MemoryStore,
    request: BookSoloRequest,
    now: OffsetDateTime,
) -> Result<BookSoloResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let user: UserId = UserId::new(&request.user_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_gig_management(&gig, &authorizer, &bands, "book_solo")?;

    let actor: Actor = management_actor(&gig, &authorizer);
    let cause: Cause = request_cause("book_solo", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::BookSolo {
                    user: user.clone(),
                    notes: request.notes,
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(BookSoloResponse {
        gig_id: request.gig_id,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Booking confirmed"),
    })
}

/// Clears the terminal booking marker on a solo gig.
///
/// Authorized for gig management only. Unbooking a user who does not hold
/// the booking is an idempotent no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig does not exist
/// - The acting user does not manage the gig
pub fn unbook_solo(
    store: &MemoryStore,
    request: UnbookSoloRequest,
    now: OffsetDateTime,
) -> Result<UnbookSoloResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let user: UserId = UserId::new(&request.user_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_gig_management(&gig, &authorizer, &bands, "unbook_solo")?;

    let actor: Actor = management_actor(&gig, &authorizer);
    let cause: Cause = request_cause("unbook_solo", &request.gig_id, request.reason);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(gig, Command::UnbookSolo { user: user.clone() }, actor, cause, now)
        })
        .map_err(translate_store_error)?;

    Ok(UnbookSoloResponse {
        gig_id: request.gig_id,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Booking cleared"),
    })
}

/// Shortlists an applicant, optionally against a role.
///
/// Authorized for gig management only. Shortlisting an already-shortlisted
/// applicant is an idempotent no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig or role does not exist
/// - The acting user does not manage the gig
pub fn shortlist_applicant(
    store: &MemoryStore,
    request: ShortlistApplicantRequest,
    now: OffsetDateTime,
) -> Result<ShortlistApplicantResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let user: UserId = UserId::new(&request.user_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_gig_management(
        &gig,
        &authorizer,
        &bands,
        "shortlist_applicant",
    )?;

    let actor: Actor = management_actor(&gig, &authorizer);
    let cause: Cause = request_cause("shortlist_applicant", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::ShortlistApplicant {
                    user: user.clone(),
                    role_index: request.role_index,
                    notes: request.notes,
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(ShortlistApplicantResponse {
        gig_id: request.gig_id,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Shortlist recorded"),
    })
}

/// Rejects an applicant, appending a rejection to the booking history.
///
/// Authorized for gig management only. Re-rejecting is an idempotent
/// no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig does not exist
/// - The acting user does not manage the gig
pub fn reject_applicant(
    store: &MemoryStore,
    request: RejectApplicantRequest,
    now: OffsetDateTime,
) -> Result<RejectApplicantResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let user: UserId = UserId::new(&request.user_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_gig_management(&gig, &authorizer, &bands, "reject_applicant")?;

    let actor: Actor = management_actor(&gig, &authorizer);
    let cause: Cause = request_cause("reject_applicant", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::RejectApplicant {
                    user: user.clone(),
                    notes: request.notes,
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(RejectApplicantResponse {
        gig_id: request.gig_id,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("Rejection recorded"),
    })
}

/// Records that the poster viewed an application.
///
/// Authorized for gig management only. A repeated view is an idempotent
/// no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig does not exist
/// - The acting user does not manage the gig
pub fn mark_viewed(
    store: &MemoryStore,
    request: MarkViewedRequest,
    now: OffsetDateTime,
) -> Result<MarkViewedResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let user: UserId = UserId::new(&request.user_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_gig_management(&gig, &authorizer, &bands, "mark_viewed")?;

    let actor: Actor = management_actor(&gig, &authorizer);
    let cause: Cause = request_cause("mark_viewed", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(gig, Command::MarkViewed { user: user.clone() }, actor, cause, now)
        })
        .map_err(translate_store_error)?;

    Ok(MarkViewedResponse {
        gig_id: request.gig_id,
        user_id: request.user_id,
        changed: transition.changed,
        message: String::from("View recorded"),
    })
}

/// Applies to a gig on behalf of a whole band.
///
/// Authorized for leaders of the referenced band, resolved through the
/// membership query, never a client-supplied flag. A duplicate live
/// application is an idempotent no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig or band does not exist
/// - The acting user leads no band with this identifier
/// - The gig is role-structured
pub fn apply_as_full_band(
    store: &MemoryStore,
    request: ApplyAsFullBandRequest,
    now: OffsetDateTime,
) -> Result<ApplyAsFullBandResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let band_id: BandId = BandId::new(&request.band_id);
    let leader: UserId = UserId::new(&request.leader_id);

    // The band must exist before leadership can mean anything
    store.band(&band_id).map_err(translate_store_error)?;
    let bands: Vec<Band> = led_bands(store, &leader)?;
    AuthorizationService::authorize_band_action(&band_id, &leader, &bands, "apply_as_full_band")?;

    let actor: Actor = band_leader_actor(&request.leader_id);
    let cause: Cause = request_cause("apply_as_full_band", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::ApplyAsFullBand {
                    band_id: band_id.clone(),
                    applied_by: leader.clone(),
                    proposed_fee: request.proposed_fee,
                    notes: request.notes,
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(ApplyAsFullBandResponse {
        gig_id: request.gig_id,
        band_id: request.band_id,
        changed: transition.changed,
        message: String::from("Band application recorded"),
    })
}

/// Withdraws a band's application before booking.
///
/// Authorized for leaders of the referenced band. Withdrawing an
/// already-cancelled application is an idempotent no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig does not exist
/// - No application from the band exists
/// - The acting user leads no band with this identifier
/// - The application is already booked
pub fn withdraw_full_band(
    store: &MemoryStore,
    request: WithdrawFullBandRequest,
    now: OffsetDateTime,
) -> Result<WithdrawFullBandResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let band_id: BandId = BandId::new(&request.band_id);
    let leader: UserId = UserId::new(&request.leader_id);

    let bands: Vec<Band> = led_bands(store, &leader)?;
    AuthorizationService::authorize_band_action(&band_id, &leader, &bands, "withdraw_full_band")?;

    let actor: Actor = band_leader_actor(&request.leader_id);
    let cause: Cause = request_cause("withdraw_full_band", &request.gig_id, request.reason);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::WithdrawFullBand {
                    band_id: band_id.clone(),
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(WithdrawFullBandResponse {
        gig_id: request.gig_id,
        band_id: request.band_id,
        changed: transition.changed,
        message: String::from("Band application withdrawn"),
    })
}

/// Responds to a band's application as the poster.
///
/// Authorized for gig management only. Responding with the application's
/// current status is an idempotent no-op.
///
/// # Errors
///
/// Returns an error if:
/// - The gig does not exist
/// - No application from the band exists
/// - The acting user does not manage the gig
/// - The status string is not a valid poster response
/// - The requested transition is not permitted
/// - Booking would conflict with an existing terminal booking
pub fn respond_to_full_band(
    store: &MemoryStore,
    request: RespondToFullBandRequest,
    now: OffsetDateTime,
) -> Result<RespondToFullBandResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let band_id: BandId = BandId::new(&request.band_id);
    let authorizer: UserId = UserId::new(&request.authorizer_id);

    let status: BandApplicationStatus =
        BandApplicationStatus::from_str(&request.status).map_err(translate_domain_error)?;

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let bands: Vec<Band> = led_bands(store, &authorizer)?;
    AuthorizationService::authorize_gig_management(
        &gig,
        &authorizer,
        &bands,
        "respond_to_full_band",
    )?;

    let actor: Actor = management_actor(&gig, &authorizer);
    let cause: Cause = request_cause("respond_to_full_band", &request.gig_id, None);

    let transition: TransitionResult = store
        .mutate_gig(&gig_id, |gig| {
            apply(
                gig,
                Command::RespondToFullBand {
                    band_id: band_id.clone(),
                    status,
                    notes: request.notes,
                    agreed_fee: request.agreed_fee,
                },
                actor,
                cause,
                now,
            )
        })
        .map_err(translate_store_error)?;

    Ok(RespondToFullBandResponse {
        gig_id: request.gig_id,
        band_id: request.band_id,
        status: status.as_str().to_owned(),
        changed: transition.changed,
        message: String::from("Response recorded"),
    })
}

/// Invites a musician to a role directly.
///
/// The invitation flow is not built; it fails with an explicit error
/// instead of silently doing nothing.
///
/// # Errors
///
/// Always returns [`ApiError::NotImplemented`].
pub fn invite_to_role(_store: &MemoryStore, gig_id: &str, _user_id: &str) -> Result<(), ApiError> {
    tracing::warn!(gig = %gig_id, "Role invitation requested but not implemented");
    Err(ApiError::NotImplemented {
        feature: String::from("role invitations"),
    })
}

/// Derives one actor's canonical status on one gig.
///
/// Read-only: runs the derivation fold over a point-in-time snapshot.
///
/// # Errors
///
/// Returns an error if the gig does not exist.
pub fn get_gig_status(
    store: &MemoryStore,
    request: GigStatusRequest,
) -> Result<GigStatusResponse, ApiError> {
    let gig_id: GigId = GigId::new(&request.gig_id);
    let user: UserId = UserId::new(&request.user_id);

    let gig: Gig = fetch_gig(store, &gig_id)?;
    let status = derive_status(&gig, &user);

    Ok(GigStatusResponse {
        gig_id: request.gig_id,
        user_id: request.user_id,
        status: StatusInfo::from_canonical(&status),
    })
}

/// Lists a user's gigs, categorized into tab buckets with counts.
///
/// Read-only: derives a status per gig, partitions into buckets, and
/// applies the search query to the lists. Counts always reflect the
/// unfiltered buckets.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_gigs_for_user(
    store: &MemoryStore,
    request: ListGigsRequest,
) -> Result<ListGigsResponse, ApiError> {
    let user: UserId = UserId::new(&request.user_id);
    let gigs: Vec<Gig> = store.all_gigs().map_err(translate_store_error)?;

    let entries: Vec<DerivedGig> = gigs
        .iter()
        .map(|gig| DerivedGig::from_gig(gig, &user))
        .collect();
    let categorized = categorize(entries, request.today);
    let counts = categorized.counts();

    let query: String = request.query.unwrap_or_default();
    let summaries = |entries: &[DerivedGig]| -> Vec<GigSummary> {
        filter_by_query(entries, &query)
            .iter()
            .map(GigSummary::from_derived)
            .collect()
    };

    let band_role: Vec<DerivedGig> = categorized
        .applied
        .iter()
        .filter(|entry| is_band_role_application(&entry.status))
        .cloned()
        .collect();
    let full_band: Vec<DerivedGig> = categorized
        .applied
        .iter()
        .filter(|entry| is_full_band_application(&entry.status))
        .cloned()
        .collect();

    Ok(ListGigsResponse {
        counts,
        all: summaries(&categorized.all),
        interested: summaries(&categorized.interested),
        applied_band_role: summaries(&band_role),
        applied_full_band: summaries(&full_band),
        applied: summaries(&categorized.applied),
        shortlisted: summaries(&categorized.shortlisted),
        booked: summaries(&categorized.booked),
        rejected: summaries(&categorized.rejected),
        history: summaries(&categorized.history),
    })
}
