// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Every mutation entry point funnels through the same relationship
//! checks; these tests pin the poster / posting-band-leader / self
//! boundaries.

use crate::tests::helpers::{BAND_POSTED_GIG, ROLE_GIG, setup_store, test_time};
use crate::{
    ApiError, ApplyToRoleRequest, BookForRoleRequest, ShortlistApplicantRequest,
    UnbookFromRoleRequest, WithdrawFromRoleRequest, apply_to_role, book_for_role,
    shortlist_applicant, unbook_from_role, withdraw_from_role,
};
use encore_store::MemoryStore;

fn seeded_store() -> MemoryStore {
    let store: MemoryStore = setup_store();
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
    store
}

#[test]
fn test_random_user_cannot_book() {
    let store: MemoryStore = seeded_store();

    let result = book_for_role(
        &store,
        BookForRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
            authorizer_id: String::from("musician-b"),
            reason: None,
        },
        test_time(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::NotAuthorized { .. }
    ));
}

#[test]
fn test_poster_can_book_and_unbook() {
    let store: MemoryStore = seeded_store();

    book_for_role(
        &store,
        BookForRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
            authorizer_id: String::from("poster-1"),
            reason: None,
        },
        test_time(),
    )
    .unwrap();

    let response = unbook_from_role(
        &store,
        UnbookFromRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
            authorizer_id: String::from("poster-1"),
            reason: Some(String::from("lineup change")),
        },
        test_time(),
    )
    .unwrap();
    assert!(response.changed);
}

#[test]
fn test_applicant_cannot_book_themself() {
    let store: MemoryStore = seeded_store();

    let result = book_for_role(
        &store,
        BookForRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
            authorizer_id: String::from("musician-a"),
            reason: None,
        },
        test_time(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::NotAuthorized { .. }
    ));
}

#[test]
fn test_other_musician_cannot_withdraw_someone_else() {
    let store: MemoryStore = seeded_store();

    let result = withdraw_from_role(
        &store,
        WithdrawFromRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
            authorizer_id: String::from("musician-b"),
            reason: None,
        },
        test_time(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::NotAuthorized { .. }
    ));
}

#[test]
fn test_poster_can_remove_an_applicant() {
    let store: MemoryStore = seeded_store();

    let response = withdraw_from_role(
        &store,
        WithdrawFromRoleRequest {
            gig_id: ROLE_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
            authorizer_id: String::from("poster-1"),
            reason: Some(String::from("no-show at soundcheck")),
        },
        test_time(),
    )
    .unwrap();
    assert!(response.changed);
}

#[test]
fn test_posting_band_leader_manages_the_gig() {
    let store: MemoryStore = setup_store();
    apply_to_role(
        &store,
        ApplyToRoleRequest {
            gig_id: BAND_POSTED_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
        },
        test_time(),
    )
    .unwrap();

    // leader-l is not the poster, but leads the posting band
    let response = book_for_role(
        &store,
        BookForRoleRequest {
            gig_id: BAND_POSTED_GIG.to_string(),
            role_index: 0,
            user_id: String::from("musician-a"),
            authorizer_id: String::from("leader-l"),
            reason: None,
        },
        test_time(),
    )
    .unwrap();
    assert!(response.changed);
}

#[test]
fn test_non_manager_cannot_shortlist() {
    let store: MemoryStore = seeded_store();

    let result = shortlist_applicant(
        &store,
        ShortlistApplicantRequest {
            gig_id: ROLE_GIG.to_string(),
            user_id: String::from("musician-a"),
            role_index: Some(0),
            authorizer_id: String::from("musician-b"),
            notes: None,
        },
        test_time(),
    );

    assert!(matches!(
        result.unwrap_err(),
        ApiError::NotAuthorized { .. }
    ));
}
