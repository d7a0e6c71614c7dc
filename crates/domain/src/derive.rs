// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonical status derivation.
//!
//! A gig document is effectively several independently-appended logs
//! (interest, role applicants, band applications, shortlist, booking
//! history). Derivation is a fold over those logs that imposes one
//! consistent reading per actor. It is **computed, not stored**: a pure
//! function of the snapshot with no side effects and no failure modes.

use crate::band_application::{BandApplication, BandApplicationStatus};
use crate::gig::{Gig, HistoryStatus};
use crate::status::CanonicalStatus;
use crate::types::{BandId, UserId};

/// Derives the canonical status of one actor on one gig.
///
/// The precedence order encodes "most recent explicit human decision
/// wins": plain set membership is the least authoritative signal, the
/// shortlist is an intermediate signal, and the booking history and the
/// terminal `booked_by` marker are the human decision layer.
///
/// An actor with no matching record yields [`CanonicalStatus::None`];
/// this function never fails.
#[must_use]
pub fn derive_status(gig: &Gig, actor: &UserId) -> CanonicalStatus {
    let mut status = CanonicalStatus::None;

    // 1. Passive interest, solo gigs only.
    if !gig.is_client_band && gig.interested_users.contains(actor) {
        status = CanonicalStatus::Interested;
    }

    // 2. Band-role application.
    if let Some(role) = gig.applied_role(actor) {
        status = CanonicalStatus::Applied { role };
    }

    // 3. Full-band application submitted by this actor. The application
    //    record carries the poster's explicit responses for the full-band
    //    flow, so its own status maps straight into the canonical union.
    if let Some(app) = gig.band_application_by(actor) {
        status = status_from_band_application(app);
    }

    // 4. Shortlist. An override only: it upgrades a live application
    //    signal and is skipped when the actor has nothing live, which is
    //    what lets a withdrawn applicant fall back to `None` while the
    //    shortlist log stays append-only.
    if !status.is_none()
        && let Some(entry) = gig.shortlist_entry(actor)
    {
        status = CanonicalStatus::Shortlisted {
            role: entry.role.clone().or_else(|| status.role().cloned()),
            notes: entry.notes.clone(),
        };
    }

    // 5. Booking history: the last matching entry wins. A `booked` entry
    //    is skipped as stale when the actor no longer occupies a slot,
    //    which is how unbook takes effect against an append-only log.
    let occupies_slot = gig.occupies_slot(actor);
    let last_decision = gig
        .booking_history
        .iter()
        .filter(|entry| &entry.user_id == actor)
        .filter(|entry| entry.status != HistoryStatus::Booked || occupies_slot)
        .next_back();
    if let Some(entry) = last_decision {
        status = match entry.status {
            HistoryStatus::Viewed => CanonicalStatus::Viewed,
            HistoryStatus::Booked => CanonicalStatus::Booked {
                role: gig.booked_role(actor).or_else(|| status.role().cloned()),
            },
            HistoryStatus::Rejected => CanonicalStatus::Rejected {
                notes: entry.notes.clone(),
            },
        };
    }

    // 6. Terminal booking marker for non-role gigs.
    if gig.booked_by.as_ref() == Some(actor) {
        status = CanonicalStatus::Booked {
            role: gig.booked_role(actor),
        };
    }

    status
}

/// Derives the canonical status of a band on a gig, from the band's own
/// full-band application if one exists.
#[must_use]
pub fn derive_band_status(gig: &Gig, band_id: &BandId) -> CanonicalStatus {
    gig.band_application(band_id)
        .map_or(CanonicalStatus::None, status_from_band_application)
}

/// Maps a band application's stored status into the canonical union.
fn status_from_band_application(app: &BandApplication) -> CanonicalStatus {
    match app.status {
        BandApplicationStatus::Applied | BandApplicationStatus::PendingReview => {
            CanonicalStatus::AppliedFullBand {
                band_id: app.band_id.clone(),
                proposed_fee: app.proposed_fee,
                notes: app.notes.clone(),
            }
        }
        BandApplicationStatus::Shortlisted => CanonicalStatus::Shortlisted {
            role: None,
            notes: app.notes.clone(),
        },
        BandApplicationStatus::Booked => CanonicalStatus::Booked { role: None },
        BandApplicationStatus::Rejected => CanonicalStatus::Rejected {
            notes: app.notes.clone(),
        },
        BandApplicationStatus::Cancelled => CanonicalStatus::Cancelled,
    }
}
