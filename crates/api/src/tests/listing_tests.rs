// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{ROLE_GIG, SOLO_GIG, setup_store, test_time, today};
use crate::{
    ApplyToRoleRequest, ExpressInterestRequest, ListGigsRequest, ListGigsResponse,
    RejectApplicantRequest, ShortlistApplicantRequest, apply_to_role, express_interest,
    list_gigs_for_user, reject_applicant, shortlist_applicant,
};
use encore_store::MemoryStore;

fn list(store: &MemoryStore, user: &str, query: Option<&str>) -> ListGigsResponse {
    list_gigs_for_user(
        store,
        ListGigsRequest {
            user_id: user.to_string(),
            today: today(),
            query: query.map(ToString::to_string),
        },
    )
    .unwrap()
}

#[test]
fn test_empty_listing_for_unknown_user() {
    let store: MemoryStore = setup_store();

    let response = list(&store, "stranger", None);
    assert_eq!(response.counts.all, 0);
    assert!(response.all.is_empty());
}

#[test]
fn test_buckets_track_the_lifecycle() {
    let store: MemoryStore = setup_store();

    express_interest(
        &store,
        ExpressInterestRequest {
            gig_id: SOLO_GIG.to_string(),
            user_id: String::from("musician-a"),
        },
        test_time(),
    )
    .unwrap();
    apply_to_role(
        &store,
        ApplyToRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
        },
        test_time(),
    )
    .unwrap();

    let response = list(&store, "musician-a", None);
    assert_eq!(response.counts.all, 2);
    assert_eq!(response.counts.interested, 1);
    assert_eq!(response.counts.applied, 1);
    assert_eq!(response.counts.applied_band_role, 1);
    assert_eq!(response.counts.applied_full_band, 0);
    assert_eq!(response.interested[0].gig_id, SOLO_GIG);
    assert_eq!(response.applied[0].gig_id, ROLE_GIG);
    assert_eq!(
        response.applied[0].status.role_name,
        Some(String::from("Vocalist"))
    );

    // Shortlisting moves the gig between buckets
    shortlist_applicant(
        &store,
        ShortlistApplicantRequest {
            gig_id: ROLE_GIG.to_string(),
            user_id: String::from("musician-a"),
            role_index: Some(0),
            authorizer_id: String::from("poster-1"),
            notes: None,
        },
        test_time(),
    )
    .unwrap();

    let response = list(&store, "musician-a", None);
    assert_eq!(response.counts.applied, 0);
    assert_eq!(response.counts.shortlisted, 1);
    assert_eq!(response.counts.all, 2);

    // Rejection moves it again
    reject_applicant(
        &store,
        RejectApplicantRequest {
            gig_id: ROLE_GIG.to_string(),
            user_id: String::from("musician-a"),
            authorizer_id: String::from("poster-1"),
            notes: None,
        },
        test_time(),
    )
    .unwrap();

    let response = list(&store, "musician-a", None);
    assert_eq!(response.counts.shortlisted, 0);
    assert_eq!(response.counts.rejected, 1);
    assert_eq!(response.counts.all, 2);
}

#[test]
fn test_search_narrows_lists_but_not_counts() {
    let store: MemoryStore = setup_store();
    express_interest(
        &store,
        ExpressInterestRequest {
            gig_id: SOLO_GIG.to_string(),
            user_id: String::from("musician-a"),
        },
        test_time(),
    )
    .unwrap();
    apply_to_role(
        &store,
        ApplyToRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
        },
        test_time(),
    )
    .unwrap();

    let response = list(&store, "musician-a", Some("festival"));
    // Lists are filtered
    assert_eq!(response.all.len(), 1);
    assert_eq!(response.all[0].gig_id, ROLE_GIG);
    assert!(response.interested.is_empty());
    // Counts are not
    assert_eq!(response.counts.all, 2);
    assert_eq!(response.counts.interested, 1);

    // Role names and status labels are searchable too
    let by_role = list(&store, "musician-a", Some("vocalist"));
    assert_eq!(by_role.all.len(), 1);
    let by_status = list(&store, "musician-a", Some("interested"));
    assert_eq!(by_status.all.len(), 1);
    assert_eq!(by_status.all[0].gig_id, SOLO_GIG);
}

#[test]
fn test_bucket_union_matches_all() {
    let store: MemoryStore = setup_store();
    express_interest(
        &store,
        ExpressInterestRequest {
            gig_id: SOLO_GIG.to_string(),
            user_id: String::from("musician-a"),
        },
        test_time(),
    )
    .unwrap();
    apply_to_role(
        &store,
        ApplyToRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
        },
        test_time(),
    )
    .unwrap();

    let response = list(&store, "musician-a", None);
    let bucket_total: usize = response.interested.len()
        + response.applied.len()
        + response.shortlisted.len()
        + response.booked.len()
        + response.rejected.len()
        + response.history.len();
    assert_eq!(bucket_total, response.all.len());
}
