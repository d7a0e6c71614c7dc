// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use encore_audit::{Actor, Cause};
use encore_domain::{Gig, GigId, Role, UserId};
use time::OffsetDateTime;
use time::macros::{date, datetime};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("poster-1"), String::from("poster"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("User request"))
}

pub fn test_time() -> OffsetDateTime {
    datetime!(2026-08-01 12:00 UTC)
}

pub fn create_solo_gig() -> Gig {
    Gig::new(
        GigId::new("gig-1"),
        String::from("Acoustic evening"),
        date!(2026 - 09 - 12),
        String::from("The Old Vic, Bristol"),
        250,
        UserId::new("poster-1"),
    )
}

pub fn create_vocalist_gig(max_slots: u32, max_applicants: u32) -> Gig {
    Gig::new_role_structured(
        GigId::new("gig-1"),
        String::from("Festival main stage"),
        date!(2026 - 09 - 12),
        String::from("Victoria Park, London"),
        1200,
        UserId::new("poster-1"),
        None,
        vec![Role::new(
            String::from("Vocalist"),
            max_slots,
            max_applicants,
            300,
        )],
    )
}
