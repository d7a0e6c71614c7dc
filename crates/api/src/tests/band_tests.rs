// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{SOLO_GIG, setup_store, test_time};
use crate::{
    ApiError, ApplyAsFullBandRequest, GigStatusRequest, RespondToFullBandRequest,
    WithdrawFullBandRequest, apply_as_full_band, get_gig_status, respond_to_full_band,
    withdraw_full_band,
};
use encore_domain::{BandApplicationStatus, BandId, GigId};
use encore_store::MemoryStore;

fn band_apply_request() -> ApplyAsFullBandRequest {
    ApplyAsFullBandRequest {
        gig_id: SOLO_GIG.to_string(),
        band_id: String::from("band-7"),
        leader_id: String::from("leader-l"),
        proposed_fee: Some(800),
        notes: Some(String::from("Full set, own PA")),
    }
}

fn respond_request(status: &str, notes: Option<&str>) -> RespondToFullBandRequest {
    RespondToFullBandRequest {
        gig_id: SOLO_GIG.to_string(),
        band_id: String::from("band-7"),
        authorizer_id: String::from("poster-1"),
        status: status.to_string(),
        notes: notes.map(ToString::to_string),
        agreed_fee: None,
    }
}

#[test]
fn test_full_band_walk_applied_shortlisted_booked() {
    let store: MemoryStore = setup_store();

    let response = apply_as_full_band(&store, band_apply_request(), test_time()).unwrap();
    assert!(response.changed);

    let shortlisted =
        respond_to_full_band(&store, respond_request("shortlisted", Some("great fit")), test_time())
            .unwrap();
    assert!(shortlisted.changed);
    assert_eq!(shortlisted.status, "shortlisted");

    let booked = respond_to_full_band(&store, respond_request("booked", None), test_time()).unwrap();
    assert_eq!(booked.status, "booked");

    let gig = store.gig(&GigId::new(SOLO_GIG)).unwrap();
    let application = gig.band_application(&BandId::new("band-7")).unwrap();
    assert_eq!(application.status, BandApplicationStatus::Booked);
    assert_eq!(application.shortlisted_at, Some(test_time()));
    assert_eq!(application.booked_at, Some(test_time()));
    assert_eq!(application.notes, Some(String::from("great fit")));

    // The leader's own derived view follows the application
    let status = get_gig_status(
        &store,
        GigStatusRequest {
            gig_id: SOLO_GIG.to_string(),
            user_id: String::from("leader-l"),
        },
    )
    .unwrap();
    assert_eq!(status.status.status, "booked");
}

#[test]
fn test_non_leader_cannot_apply_for_the_band() {
    let store: MemoryStore = setup_store();

    let mut request = band_apply_request();
    request.leader_id = String::from("musician-a");

    let result = apply_as_full_band(&store, request, test_time());
    assert!(matches!(
        result.unwrap_err(),
        ApiError::NotAuthorized { .. }
    ));
}

#[test]
fn test_unknown_band_is_not_found() {
    let store: MemoryStore = setup_store();

    let mut request = band_apply_request();
    request.band_id = String::from("band-404");

    let result = apply_as_full_band(&store, request, test_time());
    assert!(matches!(
        result.unwrap_err(),
        ApiError::ResourceNotFound { .. }
    ));
}

#[test]
fn test_leader_withdrawal_cancels_the_application() {
    let store: MemoryStore = setup_store();
    apply_as_full_band(&store, band_apply_request(), test_time()).unwrap();

    let response = withdraw_full_band(
        &store,
        WithdrawFullBandRequest {
            gig_id: SOLO_GIG.to_string(),
            band_id: String::from("band-7"),
            leader_id: String::from("leader-l"),
            reason: Some(String::from("Date clash")),
        },
        test_time(),
    )
    .unwrap();
    assert!(response.changed);

    let gig = store.gig(&GigId::new(SOLO_GIG)).unwrap();
    assert_eq!(
        gig.band_application(&BandId::new("band-7")).unwrap().status,
        BandApplicationStatus::Cancelled
    );
}

#[test]
fn test_booked_band_cannot_withdraw() {
    let store: MemoryStore = setup_store();
    apply_as_full_band(&store, band_apply_request(), test_time()).unwrap();
    respond_to_full_band(&store, respond_request("booked", None), test_time()).unwrap();

    let result = withdraw_full_band(
        &store,
        WithdrawFullBandRequest {
            gig_id: SOLO_GIG.to_string(),
            band_id: String::from("band-7"),
            leader_id: String::from("leader-l"),
            reason: None,
        },
        test_time(),
    );
    assert!(matches!(result.unwrap_err(), ApiError::InvalidInput { .. }));
}

#[test]
fn test_same_status_response_is_an_idempotent_confirmation() {
    let store: MemoryStore = setup_store();
    apply_as_full_band(&store, band_apply_request(), test_time()).unwrap();
    respond_to_full_band(&store, respond_request("shortlisted", None), test_time()).unwrap();

    let retry =
        respond_to_full_band(&store, respond_request("shortlisted", None), test_time()).unwrap();
    assert!(!retry.changed);
}

#[test]
fn test_unknown_status_string_is_invalid_input() {
    let store: MemoryStore = setup_store();
    apply_as_full_band(&store, band_apply_request(), test_time()).unwrap();

    let result = respond_to_full_band(
        &store,
        respond_request("under_consideration", None),
        test_time(),
    );
    assert!(matches!(result.unwrap_err(), ApiError::InvalidInput { .. }));
}

#[test]
fn test_band_application_rejected_on_role_gig() {
    let store: MemoryStore = setup_store();

    let mut request = band_apply_request();
    request.gig_id = String::from("gig-role");

    let result = apply_as_full_band(&store, request, test_time());
    assert!(matches!(result.unwrap_err(), ApiError::InvalidInput { .. }));
}
