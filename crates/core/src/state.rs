// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use encore_audit::{AuditEvent, StateSnapshot};
use encore_domain::Gig;

/// Converts a gig's booking state to a snapshot for audit purposes.
///
/// The snapshot summarizes the capacity-bearing sets and logs; it is a
/// diff aid, not a replayable record.
#[must_use]
pub fn gig_snapshot(gig: &Gig) -> StateSnapshot {
    let applicant_count: usize = gig
        .band_category
        .iter()
        .map(|role| role.applicants.len())
        .sum();
    let booked_count: usize = gig
        .band_category
        .iter()
        .map(|role| role.booked.len())
        .sum();
    StateSnapshot::new(format!(
        "gig={},interested={},applicants={},booked={},band_applications={},shortlisted={},history={},booked_by={}",
        gig.gig_id.value(),
        gig.interested_users.len(),
        applicant_count,
        booked_count,
        gig.band_applications.len(),
        gig.shortlisted_users.len(),
        gig.booking_history.len(),
        gig.booked_by
            .as_ref()
            .map_or("none", encore_domain::UserId::value),
    ))
}

/// The result of a successful state transition on a gig.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. Idempotent re-submissions succeed with `changed == false`
/// and leave the gig untouched, so retries and duplicate user actions
/// never surface as failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The gig after the transition.
    pub new_gig: Gig,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// Whether the transition changed the gig document.
    pub changed: bool,
}
