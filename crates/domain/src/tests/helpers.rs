// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Gig, GigId, Role, UserId};
use time::macros::{date, datetime};
use time::{Date, OffsetDateTime};

pub fn test_date() -> Date {
    date!(2026 - 09 - 12)
}

pub fn test_time() -> OffsetDateTime {
    datetime!(2026-08-01 12:00 UTC)
}

pub fn create_solo_gig(gig_id: &str) -> Gig {
    Gig::new(
        GigId::new(gig_id),
        String::from("Acoustic evening"),
        test_date(),
        String::from("The Old Vic, Bristol"),
        250,
        UserId::new("poster-1"),
    )
}

pub fn create_role_gig(gig_id: &str, roles: Vec<Role>) -> Gig {
    Gig::new_role_structured(
        GigId::new(gig_id),
        String::from("Festival main stage"),
        test_date(),
        String::from("Victoria Park, London"),
        1200,
        UserId::new("poster-1"),
        None,
        roles,
    )
}

pub fn vocalist_role() -> Role {
    Role::new(String::from("Vocalist"), 1, 2, 300)
}
