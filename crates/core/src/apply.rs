// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{TransitionResult, gig_snapshot};
use encore_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use encore_domain::{
    BandApplication, BandApplicationStatus, BookingHistoryEntry, DomainError, Gig, HistoryStatus,
    RoleRef, ShortlistEntry, UserId,
};
use time::OffsetDateTime;

/// Builds the transition result for an arm that has already produced the
/// new gig value.
fn transition(
    gig: &Gig,
    new_gig: Gig,
    actor: Actor,
    cause: Cause,
    name: &str,
    details: Option<String>,
    changed: bool,
) -> TransitionResult {
    let before: StateSnapshot = gig_snapshot(gig);
    let after: StateSnapshot = gig_snapshot(&new_gig);
    let action: Action = Action::new(name.to_string(), details);
    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        before,
        after,
        gig.gig_id.value().to_owned(),
    );
    TransitionResult {
        new_gig,
        audit_event,
        changed,
    }
}

/// Returns the most recent history status recorded for a user.
fn last_history_status(gig: &Gig, user: &UserId) -> Option<HistoryStatus> {
    gig.booking_history
        .iter()
        .filter(|entry| &entry.user_id == user)
        .next_back()
        .map(|entry| entry.status)
}

/// Applies a command to a gig, producing the new gig and an audit event.
///
/// This is the only place booking state changes are computed. The function
/// is pure: the capacity check and the state change are evaluated against
/// the same gig value, and the caller must run it inside the gig's
/// serialization boundary so that two racing bookings for the last slot
/// cannot both succeed.
///
/// Idempotent re-submissions (re-applying, re-booking an already-booked
/// performer, withdrawing an absent applicant) succeed with
/// `changed == false` rather than erroring.
///
/// # Arguments
///
/// * `gig` - The current gig document (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The timestamp recorded on any appended entries
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new gig and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The command violates a capacity ceiling
/// - The command targets a role or application that does not exist
/// - The command requests an impossible status transition
#[allow(clippy::too_many_lines)]
pub fn apply(
    gig: &Gig,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::ExpressInterest { user } => {
            // Passive interest only exists on solo gigs
            if gig.is_client_band {
                return Err(CoreError::DomainViolation(DomainError::InterestOnRoleGig {
                    gig: gig.gig_id.value().to_owned(),
                }));
            }

            if gig.interested_users.contains(&user) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "ExpressInterest",
                    Some(format!("User '{user}' already interested; no change")),
                    false,
                ));
            }

            let mut new_gig: Gig = gig.clone();
            new_gig.interested_users.push(user.clone());

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "ExpressInterest",
                Some(format!("User '{user}' expressed interest")),
                true,
            ))
        }
        Command::RetractInterest { user } => {
            if !gig.interested_users.contains(&user) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "RetractInterest",
                    Some(format!("User '{user}' was not interested; no change")),
                    false,
                ));
            }

            let mut new_gig: Gig = gig.clone();
            new_gig.interested_users.retain(|u| u != &user);

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "RetractInterest",
                Some(format!("User '{user}' retracted interest")),
                true,
            ))
        }
        Command::ApplyToRole {
            role_index,
            applicant,
        } => {
            let role = gig.role(role_index).map_err(CoreError::DomainViolation)?;

            // Re-applying is a safe no-op, checked before the ceiling so a
            // duplicate submission against a full role still succeeds
            if role.has_applicant(&applicant) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "ApplyToRole",
                    Some(format!(
                        "User '{applicant}' already applied to '{}'; no change",
                        role.name
                    )),
                    false,
                ));
            }

            if role.applicants_full() {
                return Err(CoreError::DomainViolation(DomainError::RoleApplicantsFull {
                    role: role.name.clone(),
                    max_applicants: role.max_applicants,
                }));
            }

            let role_name: String = role.name.clone();
            let mut new_gig: Gig = gig.clone();
            new_gig.band_category[role_index]
                .applicants
                .push(applicant.clone());

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "ApplyToRole",
                Some(format!("User '{applicant}' applied to '{role_name}'")),
                true,
            ))
        }
        Command::WithdrawFromRole {
            role_index,
            applicant,
        } => {
            let role = gig.role(role_index).map_err(CoreError::DomainViolation)?;

            if !role.has_applicant(&applicant) && !role.has_booked(&applicant) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "WithdrawFromRole",
                    Some(format!(
                        "User '{applicant}' not on role '{}'; no change",
                        role.name
                    )),
                    false,
                ));
            }

            let role_name: String = role.name.clone();
            let mut new_gig: Gig = gig.clone();
            // Withdraw removes the applicant entirely: their application
            // and, if booked, their slot
            new_gig.band_category[role_index]
                .applicants
                .retain(|u| u != &applicant);
            new_gig.band_category[role_index]
                .booked
                .retain(|u| u != &applicant);

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "WithdrawFromRole",
                Some(format!("User '{applicant}' withdrew from '{role_name}'")),
                true,
            ))
        }
        Command::BookForRole {
            role_index,
            applicant,
            notes,
        } => {
            let role = gig.role(role_index).map_err(CoreError::DomainViolation)?;

            if role.has_booked(&applicant) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "BookForRole",
                    Some(format!(
                        "User '{applicant}' already booked for '{}'; no change",
                        role.name
                    )),
                    false,
                ));
            }

            if !role.has_applicant(&applicant) {
                return Err(CoreError::DomainViolation(DomainError::NotAnApplicant {
                    role: role.name.clone(),
                    user: applicant.value().to_owned(),
                }));
            }

            if role.slots_full() {
                return Err(CoreError::DomainViolation(DomainError::RoleSlotsFull {
                    role: role.name.clone(),
                    max_slots: role.max_slots,
                }));
            }

            let role_name: String = role.name.clone();
            let mut new_gig: Gig = gig.clone();
            new_gig.band_category[role_index]
                .booked
                .push(applicant.clone());
            new_gig.booking_history.push(BookingHistoryEntry::new(
                applicant.clone(),
                HistoryStatus::Booked,
                now,
                notes,
            ));

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "BookForRole",
                Some(format!("User '{applicant}' booked for '{role_name}'")),
                true,
            ))
        }
        Command::UnbookFromRole {
            role_index,
            applicant,
        } => {
            let role = gig.role(role_index).map_err(CoreError::DomainViolation)?;

            if !role.has_booked(&applicant) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "UnbookFromRole",
                    Some(format!(
                        "User '{applicant}' not booked for '{}'; no change",
                        role.name
                    )),
                    false,
                ));
            }

            let role_name: String = role.name.clone();
            let mut new_gig: Gig = gig.clone();
            // Frees the slot; the booked history entry stays behind and is
            // treated as stale by derivation
            new_gig.band_category[role_index]
                .booked
                .retain(|u| u != &applicant);

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "UnbookFromRole",
                Some(format!("User '{applicant}' unbooked from '{role_name}'")),
                true,
            ))
        }
        Command::BookSolo { user, notes } => {
            if gig.is_client_band {
                return Err(CoreError::DomainViolation(
                    DomainError::SoloBookingOnRoleGig {
                        gig: gig.gig_id.value().to_owned(),
                    },
                ));
            }

            if gig.booked_by.as_ref() == Some(&user) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "BookSolo",
                    Some(format!("User '{user}' already booked; no change")),
                    false,
                ));
            }

            if let Some(holder) = &gig.booked_by {
                return Err(CoreError::DomainViolation(DomainError::GigAlreadyBooked {
                    gig: gig.gig_id.value().to_owned(),
                    booked_by: holder.value().to_owned(),
                }));
            }

            let mut new_gig: Gig = gig.clone();
            new_gig.booked_by = Some(user.clone());
            new_gig.booking_history.push(BookingHistoryEntry::new(
                user.clone(),
                HistoryStatus::Booked,
                now,
                notes,
            ));

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "BookSolo",
                Some(format!("User '{user}' booked for the gig")),
                true,
            ))
        }
        Command::UnbookSolo { user } => {
            if gig.booked_by.as_ref() != Some(&user) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "UnbookSolo",
                    Some(format!("User '{user}' does not hold the booking; no change")),
                    false,
                ));
            }

            let mut new_gig: Gig = gig.clone();
            new_gig.booked_by = None;

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "UnbookSolo",
                Some(format!("User '{user}' unbooked from the gig")),
                true,
            ))
        }
        Command::ShortlistApplicant {
            user,
            role_index,
            notes,
        } => {
            let role: Option<RoleRef> = match role_index {
                Some(index) => {
                    let role = gig.role(index).map_err(CoreError::DomainViolation)?;
                    Some(RoleRef::new(role.name.clone(), index))
                }
                None => None,
            };

            if gig.shortlist_entry(&user).is_some() {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "ShortlistApplicant",
                    Some(format!("User '{user}' already shortlisted; no change")),
                    false,
                ));
            }

            let mut new_gig: Gig = gig.clone();
            new_gig
                .shortlisted_users
                .push(ShortlistEntry::new(user.clone(), now, notes, role));

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "ShortlistApplicant",
                Some(format!("User '{user}' shortlisted")),
                true,
            ))
        }
        Command::RejectApplicant { user, notes } => {
            if last_history_status(gig, &user) == Some(HistoryStatus::Rejected) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "RejectApplicant",
                    Some(format!("User '{user}' already rejected; no change")),
                    false,
                ));
            }

            let mut new_gig: Gig = gig.clone();
            new_gig.booking_history.push(BookingHistoryEntry::new(
                user.clone(),
                HistoryStatus::Rejected,
                now,
                notes,
            ));

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "RejectApplicant",
                Some(format!("User '{user}' rejected")),
                true,
            ))
        }
        Command::MarkViewed { user } => {
            if last_history_status(gig, &user) == Some(HistoryStatus::Viewed) {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "MarkViewed",
                    Some(format!("User '{user}' already marked viewed; no change")),
                    false,
                ));
            }

            let mut new_gig: Gig = gig.clone();
            new_gig.booking_history.push(BookingHistoryEntry::new(
                user.clone(),
                HistoryStatus::Viewed,
                now,
                None,
            ));

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "MarkViewed",
                Some(format!("Application from '{user}' viewed")),
                true,
            ))
        }
        Command::ApplyAsFullBand {
            band_id,
            applied_by,
            proposed_fee,
            notes,
        } => {
            // Full-band applications target solo gigs; role-structured
            // gigs take per-role applications
            if gig.is_client_band {
                return Err(CoreError::DomainViolation(
                    DomainError::BandApplicationOnRoleGig {
                        gig: gig.gig_id.value().to_owned(),
                    },
                ));
            }

            if let Some(existing) = gig.band_application(&band_id)
                && existing.is_live()
            {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "ApplyAsFullBand",
                    Some(format!(
                        "Band '{band_id}' already has a live application; no change"
                    )),
                    false,
                ));
            }

            let mut new_gig: Gig = gig.clone();
            new_gig.band_applications.push(BandApplication::new(
                band_id.clone(),
                applied_by,
                proposed_fee,
                notes,
                now,
            ));

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "ApplyAsFullBand",
                Some(format!("Band '{band_id}' applied")),
                true,
            ))
        }
        Command::WithdrawFullBand { band_id } => {
            let Some(index) = gig
                .band_applications
                .iter()
                .rposition(|app| app.band_id == band_id)
            else {
                return Err(CoreError::DomainViolation(
                    DomainError::BandApplicationNotFound {
                        gig: gig.gig_id.value().to_owned(),
                        band: band_id.value().to_owned(),
                    },
                ));
            };

            if gig.band_applications[index].status == BandApplicationStatus::Cancelled {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "WithdrawFullBand",
                    Some(format!(
                        "Application from band '{band_id}' already cancelled; no change"
                    )),
                    false,
                ));
            }

            // A booked band cannot withdraw; the lifecycle rules reject it
            gig.band_applications[index]
                .status
                .validate_transition(BandApplicationStatus::Cancelled)
                .map_err(CoreError::DomainViolation)?;

            let mut new_gig: Gig = gig.clone();
            new_gig.band_applications[index].status = BandApplicationStatus::Cancelled;

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "WithdrawFullBand",
                Some(format!("Band '{band_id}' withdrew its application")),
                true,
            ))
        }
        Command::RespondToFullBand {
            band_id,
            status,
            notes,
            agreed_fee,
        } => {
            let Some(index) = gig
                .band_applications
                .iter()
                .rposition(|app| app.band_id == band_id)
            else {
                return Err(CoreError::DomainViolation(
                    DomainError::BandApplicationNotFound {
                        gig: gig.gig_id.value().to_owned(),
                        band: band_id.value().to_owned(),
                    },
                ));
            };
            let application: &BandApplication = &gig.band_applications[index];

            // Cancellation belongs to the band's own withdraw flow, and
            // an application cannot be reset to its initial state
            if matches!(
                status,
                BandApplicationStatus::Applied | BandApplicationStatus::Cancelled
            ) {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidStatusTransition {
                        from: application.status.as_str().to_string(),
                        to: status.as_str().to_string(),
                        reason: "not a poster response".to_string(),
                    },
                ));
            }

            if application.status == status {
                return Ok(transition(
                    gig,
                    gig.clone(),
                    actor,
                    cause,
                    "RespondToFullBand",
                    Some(format!(
                        "Application from band '{band_id}' already {status}; no change"
                    )),
                    false,
                ));
            }

            application
                .status
                .validate_transition(status)
                .map_err(CoreError::DomainViolation)?;

            // Booking a band consumes the gig's terminal booking marker
            if status == BandApplicationStatus::Booked
                && let Some(holder) = &gig.booked_by
                && holder != &application.applied_by
            {
                return Err(CoreError::DomainViolation(DomainError::GigAlreadyBooked {
                    gig: gig.gig_id.value().to_owned(),
                    booked_by: holder.value().to_owned(),
                }));
            }

            let applied_by: UserId = application.applied_by.clone();
            let mut new_gig: Gig = gig.clone();
            {
                let app: &mut BandApplication = &mut new_gig.band_applications[index];
                app.status = status;
                if notes.is_some() {
                    app.notes = notes;
                }
                match status {
                    BandApplicationStatus::Shortlisted => app.shortlisted_at = Some(now),
                    BandApplicationStatus::Booked => {
                        app.booked_at = Some(now);
                        if agreed_fee.is_some() {
                            app.agreed_fee = agreed_fee;
                        }
                    }
                    BandApplicationStatus::Applied
                    | BandApplicationStatus::PendingReview
                    | BandApplicationStatus::Rejected
                    | BandApplicationStatus::Cancelled => {}
                }
            }
            if status == BandApplicationStatus::Booked {
                new_gig.booked_by = Some(applied_by.clone());
                new_gig.booking_history.push(BookingHistoryEntry::new(
                    applied_by,
                    HistoryStatus::Booked,
                    now,
                    None,
                ));
            }

            Ok(transition(
                gig,
                new_gig,
                actor,
                cause,
                "RespondToFullBand",
                Some(format!("Application from band '{band_id}' moved to {status}")),
                true,
            ))
        }
    }
}
