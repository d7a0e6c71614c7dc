// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_role_gig, create_solo_gig, test_time, vocalist_role};
use crate::{
    BandApplication, BandApplicationStatus, BandId, BookingHistoryEntry, CanonicalStatus, Gig,
    HistoryStatus, RoleRef, ShortlistEntry, UserId, derive_band_status, derive_status,
};

#[test]
fn test_unknown_actor_derives_none() {
    let gig: Gig = create_solo_gig("gig-1");
    let actor: UserId = UserId::new("stranger");

    assert_eq!(derive_status(&gig, &actor), CanonicalStatus::None);
}

#[test]
fn test_interest_on_solo_gig() {
    let mut gig: Gig = create_solo_gig("gig-1");
    let actor: UserId = UserId::new("musician-a");
    gig.interested_users.push(actor.clone());

    assert_eq!(derive_status(&gig, &actor), CanonicalStatus::Interested);
}

#[test]
fn test_interest_ignored_on_role_gig() {
    let mut gig: Gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    // Stray interest entries on role-structured gigs carry no meaning.
    gig.interested_users.push(actor.clone());

    assert_eq!(derive_status(&gig, &actor), CanonicalStatus::None);
}

#[test]
fn test_role_application_carries_role_metadata() {
    let mut gig: Gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    gig.band_category[0].applicants.push(actor.clone());

    let status: CanonicalStatus = derive_status(&gig, &actor);
    assert_eq!(
        status,
        CanonicalStatus::Applied {
            role: RoleRef::new(String::from("Vocalist"), 0)
        }
    );
}

#[test]
fn test_full_band_application_derives_applied() {
    let mut gig: Gig = create_solo_gig("gig-1");
    let leader: UserId = UserId::new("leader-l");
    gig.band_applications.push(BandApplication::new(
        BandId::new("band-7"),
        leader.clone(),
        Some(800),
        Some(String::from("Full set, own PA")),
        test_time(),
    ));

    let status: CanonicalStatus = derive_status(&gig, &leader);
    assert_eq!(
        status,
        CanonicalStatus::AppliedFullBand {
            band_id: BandId::new("band-7"),
            proposed_fee: Some(800),
            notes: Some(String::from("Full set, own PA")),
        }
    );
}

#[test]
fn test_shortlist_overrides_application_and_carries_role() {
    let mut gig: Gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    gig.band_category[0].applicants.push(actor.clone());
    gig.shortlisted_users.push(ShortlistEntry::new(
        actor.clone(),
        test_time(),
        Some(String::from("great fit")),
        None,
    ));

    let status: CanonicalStatus = derive_status(&gig, &actor);
    assert_eq!(
        status,
        CanonicalStatus::Shortlisted {
            role: Some(RoleRef::new(String::from("Vocalist"), 0)),
            notes: Some(String::from("great fit")),
        }
    );
}

#[test]
fn test_shortlist_without_live_application_is_skipped() {
    let mut gig: Gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    // Shortlisted earlier, but the actor has since withdrawn from the
    // role: the stale shortlist entry must not resurrect a status.
    gig.shortlisted_users.push(ShortlistEntry::new(
        actor.clone(),
        test_time(),
        None,
        Some(RoleRef::new(String::from("Vocalist"), 0)),
    ));

    assert_eq!(derive_status(&gig, &actor), CanonicalStatus::None);
}

#[test]
fn test_last_history_entry_wins() {
    let mut gig: Gig = create_solo_gig("gig-1");
    let actor: UserId = UserId::new("musician-a");
    gig.interested_users.push(actor.clone());
    gig.booking_history.push(BookingHistoryEntry::new(
        actor.clone(),
        HistoryStatus::Viewed,
        test_time(),
        None,
    ));
    gig.booking_history.push(BookingHistoryEntry::new(
        actor.clone(),
        HistoryStatus::Rejected,
        test_time(),
        Some(String::from("went another direction")),
    ));

    let status: CanonicalStatus = derive_status(&gig, &actor);
    assert_eq!(
        status,
        CanonicalStatus::Rejected {
            notes: Some(String::from("went another direction")),
        }
    );
}

#[test]
fn test_precedence_rejection_beats_every_earlier_signal() {
    // An actor simultaneously interested, applied, and shortlisted whose
    // last history entry is a rejection derives as rejected: the booking
    // history is the most authoritative source.
    let mut gig: Gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    gig.interested_users.push(actor.clone());
    gig.band_category[0].applicants.push(actor.clone());
    gig.shortlisted_users
        .push(ShortlistEntry::new(actor.clone(), test_time(), None, None));
    gig.booking_history.push(BookingHistoryEntry::new(
        actor.clone(),
        HistoryStatus::Rejected,
        test_time(),
        None,
    ));

    let status: CanonicalStatus = derive_status(&gig, &actor);
    assert_eq!(status, CanonicalStatus::Rejected { notes: None });
}

#[test]
fn test_stale_booked_entry_is_skipped_after_unbook() {
    let mut gig: Gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    gig.band_category[0].applicants.push(actor.clone());
    // A booked history entry with no occupied slot is what an unbook
    // leaves behind; the actor falls back to their live application.
    gig.booking_history.push(BookingHistoryEntry::new(
        actor.clone(),
        HistoryStatus::Booked,
        test_time(),
        None,
    ));

    let status: CanonicalStatus = derive_status(&gig, &actor);
    assert_eq!(
        status,
        CanonicalStatus::Applied {
            role: RoleRef::new(String::from("Vocalist"), 0)
        }
    );
}

#[test]
fn test_booked_entry_with_occupied_slot_derives_booked() {
    let mut gig: Gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    gig.band_category[0].applicants.push(actor.clone());
    gig.band_category[0].booked.push(actor.clone());
    gig.booking_history.push(BookingHistoryEntry::new(
        actor.clone(),
        HistoryStatus::Booked,
        test_time(),
        None,
    ));

    let status: CanonicalStatus = derive_status(&gig, &actor);
    assert_eq!(
        status,
        CanonicalStatus::Booked {
            role: Some(RoleRef::new(String::from("Vocalist"), 0))
        }
    );
}

#[test]
fn test_booked_by_marker_is_final() {
    let mut gig: Gig = create_solo_gig("gig-1");
    let actor: UserId = UserId::new("musician-a");
    gig.interested_users.push(actor.clone());
    gig.booked_by = Some(actor.clone());

    let status: CanonicalStatus = derive_status(&gig, &actor);
    assert_eq!(status, CanonicalStatus::Booked { role: None });
}

#[test]
fn test_derivation_is_deterministic() {
    let mut gig: Gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    gig.band_category[0].applicants.push(actor.clone());
    gig.shortlisted_users
        .push(ShortlistEntry::new(actor.clone(), test_time(), None, None));

    let first: CanonicalStatus = derive_status(&gig, &actor);
    let second: CanonicalStatus = derive_status(&gig, &actor);
    assert_eq!(first, second);
}

#[test]
fn test_band_status_follows_application_status() {
    let mut gig: Gig = create_solo_gig("gig-1");
    let band: BandId = BandId::new("band-7");
    let mut app: BandApplication = BandApplication::new(
        band.clone(),
        UserId::new("leader-l"),
        Some(800),
        None,
        test_time(),
    );
    app.status = BandApplicationStatus::Shortlisted;
    gig.band_applications.push(app);

    let status: CanonicalStatus = derive_band_status(&gig, &band);
    assert_eq!(
        status,
        CanonicalStatus::Shortlisted {
            role: None,
            notes: None,
        }
    );
}

#[test]
fn test_band_status_none_without_application() {
    let gig: Gig = create_solo_gig("gig-1");

    assert_eq!(
        derive_band_status(&gig, &BandId::new("band-7")),
        CanonicalStatus::None
    );
}

#[test]
fn test_cancelled_application_derives_cancelled() {
    let mut gig: Gig = create_solo_gig("gig-1");
    let leader: UserId = UserId::new("leader-l");
    let mut app: BandApplication = BandApplication::new(
        BandId::new("band-7"),
        leader.clone(),
        None,
        None,
        test_time(),
    );
    app.status = BandApplicationStatus::Cancelled;
    gig.band_applications.push(app);

    assert_eq!(derive_status(&gig, &leader), CanonicalStatus::Cancelled);
}
