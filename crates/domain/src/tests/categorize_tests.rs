// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_role_gig, create_solo_gig, vocalist_role};
use crate::{
    BandId, CanonicalStatus, CategorizedGigs, DerivedGig, GigBucket, GigId, RoleRef, TabCounts,
    UserId, bucket_for, categorize, filter_by_query,
};
use time::Date;
use time::macros::date;

fn entry(gig_id: &str, title: &str, status: CanonicalStatus) -> DerivedGig {
    DerivedGig {
        gig_id: GigId::new(gig_id),
        title: title.to_string(),
        location: String::from("Camden, London"),
        date: date!(2026 - 09 - 12),
        role_names: vec![String::from("Vocalist")],
        status,
    }
}

const TODAY: Date = date!(2026 - 08 - 01);

#[test]
fn test_bucket_assignment_per_status() {
    let upcoming: Date = date!(2026 - 09 - 12);
    let past: Date = date!(2026 - 06 - 01);

    assert_eq!(
        bucket_for(&CanonicalStatus::Interested, upcoming, TODAY),
        Some(GigBucket::Interested)
    );
    assert_eq!(
        bucket_for(
            &CanonicalStatus::Applied {
                role: RoleRef::new(String::from("Vocalist"), 0)
            },
            upcoming,
            TODAY
        ),
        Some(GigBucket::Applied)
    );
    assert_eq!(
        bucket_for(&CanonicalStatus::Viewed, upcoming, TODAY),
        Some(GigBucket::Applied)
    );
    assert_eq!(
        bucket_for(
            &CanonicalStatus::Shortlisted {
                role: None,
                notes: None
            },
            upcoming,
            TODAY
        ),
        Some(GigBucket::Shortlisted)
    );
    assert_eq!(
        bucket_for(&CanonicalStatus::Booked { role: None }, upcoming, TODAY),
        Some(GigBucket::Booked)
    );
    assert_eq!(
        bucket_for(&CanonicalStatus::Booked { role: None }, past, TODAY),
        Some(GigBucket::History)
    );
    assert_eq!(
        bucket_for(&CanonicalStatus::Rejected { notes: None }, upcoming, TODAY),
        Some(GigBucket::Rejected)
    );
    assert_eq!(
        bucket_for(&CanonicalStatus::Cancelled, upcoming, TODAY),
        Some(GigBucket::History)
    );
    assert_eq!(bucket_for(&CanonicalStatus::None, upcoming, TODAY), None);
}

#[test]
fn test_categorize_drops_none_and_partitions_the_rest() {
    let entries: Vec<DerivedGig> = vec![
        entry("gig-1", "Acoustic evening", CanonicalStatus::Interested),
        entry(
            "gig-2",
            "Festival main stage",
            CanonicalStatus::Applied {
                role: RoleRef::new(String::from("Vocalist"), 0),
            },
        ),
        entry("gig-3", "Jazz brunch", CanonicalStatus::None),
        entry(
            "gig-4",
            "Wedding reception",
            CanonicalStatus::Rejected { notes: None },
        ),
    ];

    let categorized: CategorizedGigs = categorize(entries, TODAY);

    assert_eq!(categorized.all.len(), 3);
    assert_eq!(categorized.interested.len(), 1);
    assert_eq!(categorized.applied.len(), 1);
    assert_eq!(categorized.rejected.len(), 1);
    assert_eq!(categorized.shortlisted.len(), 0);
    assert_eq!(categorized.booked.len(), 0);
    assert_eq!(categorized.history.len(), 0);
}

#[test]
fn test_buckets_are_pairwise_disjoint_and_cover_all() {
    let entries: Vec<DerivedGig> = vec![
        entry("gig-1", "Acoustic evening", CanonicalStatus::Interested),
        entry(
            "gig-2",
            "Festival main stage",
            CanonicalStatus::Applied {
                role: RoleRef::new(String::from("Vocalist"), 0),
            },
        ),
        entry(
            "gig-3",
            "Jazz brunch",
            CanonicalStatus::Shortlisted {
                role: None,
                notes: None,
            },
        ),
        entry(
            "gig-4",
            "Wedding reception",
            CanonicalStatus::Booked { role: None },
        ),
        entry("gig-5", "Open mic", CanonicalStatus::Cancelled),
    ];

    let categorized: CategorizedGigs = categorize(entries, TODAY);

    let bucket_total: usize = categorized.interested.len()
        + categorized.applied.len()
        + categorized.shortlisted.len()
        + categorized.booked.len()
        + categorized.rejected.len()
        + categorized.history.len();
    assert_eq!(bucket_total, categorized.all.len());

    // No gig id may appear in more than one bucket.
    let mut seen: Vec<&str> = Vec::new();
    for bucket in [
        &categorized.interested,
        &categorized.applied,
        &categorized.shortlisted,
        &categorized.booked,
        &categorized.rejected,
        &categorized.history,
    ] {
        for item in bucket {
            assert!(!seen.contains(&item.gig_id.value()));
            seen.push(item.gig_id.value());
        }
    }
}

#[test]
fn test_counts_agree_with_lists() {
    let entries: Vec<DerivedGig> = vec![
        entry(
            "gig-1",
            "Festival main stage",
            CanonicalStatus::Applied {
                role: RoleRef::new(String::from("Vocalist"), 0),
            },
        ),
        entry(
            "gig-2",
            "Club night",
            CanonicalStatus::AppliedFullBand {
                band_id: BandId::new("band-7"),
                proposed_fee: Some(800),
                notes: None,
            },
        ),
        entry("gig-3", "Open mic", CanonicalStatus::Viewed),
    ];

    let categorized: CategorizedGigs = categorize(entries, TODAY);
    let counts: TabCounts = categorized.counts();

    assert_eq!(counts.all, categorized.all.len());
    assert_eq!(counts.applied, 3);
    assert_eq!(counts.applied_band_role, 1);
    assert_eq!(counts.applied_full_band, 1);
    assert_eq!(counts.interested, 0);
}

#[test]
fn test_search_filters_lists_but_not_counts() {
    let entries: Vec<DerivedGig> = vec![
        entry("gig-1", "Acoustic evening", CanonicalStatus::Interested),
        entry("gig-2", "Festival main stage", CanonicalStatus::Interested),
    ];

    let categorized: CategorizedGigs = categorize(entries, TODAY);
    let filtered: Vec<DerivedGig> = filter_by_query(&categorized.interested, "festival");

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].gig_id.value(), "gig-2");
    // Counts are taken before filtering.
    assert_eq!(categorized.counts().interested, 2);
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let entries: Vec<DerivedGig> = vec![
        entry("gig-1", "Acoustic evening", CanonicalStatus::Interested),
        entry(
            "gig-2",
            "Festival main stage",
            CanonicalStatus::Applied {
                role: RoleRef::new(String::from("Vocalist"), 0),
            },
        ),
    ];

    // Title, case-insensitive.
    assert_eq!(filter_by_query(&entries, "ACOUSTIC").len(), 1);
    // Location.
    assert_eq!(filter_by_query(&entries, "camden").len(), 2);
    // Role name.
    assert_eq!(filter_by_query(&entries, "vocal").len(), 2);
    // Status label.
    assert_eq!(filter_by_query(&entries, "applied").len(), 1);
    // Empty query matches everything.
    assert_eq!(filter_by_query(&entries, "").len(), 2);
    // No match.
    assert!(filter_by_query(&entries, "drummer").is_empty());
}

#[test]
fn test_derived_gig_from_gig_runs_derivation() {
    let mut gig = create_role_gig("gig-1", vec![vocalist_role()]);
    let actor: UserId = UserId::new("musician-a");
    gig.band_category[0].applicants.push(actor.clone());

    let derived: DerivedGig = DerivedGig::from_gig(&gig, &actor);
    assert_eq!(derived.status.label(), "applied");
    assert_eq!(derived.role_names, vec![String::from("Vocalist")]);

    let stranger: DerivedGig = DerivedGig::from_gig(&create_solo_gig("gig-2"), &actor);
    assert!(stranger.status.is_none());
}
