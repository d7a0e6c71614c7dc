// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use encore_domain::{Band, BandId, Gig, GigId, Role, UserId, UserProfile};
use encore_store::MemoryStore;
use time::{Date, OffsetDateTime};
use time::macros::{date, datetime};

pub const ROLE_GIG: &str = "gig-role";
pub const SOLO_GIG: &str = "gig-solo";
pub const BAND_POSTED_GIG: &str = "gig-band-posted";

pub fn test_time() -> OffsetDateTime {
    datetime!(2026-08-01 12:00 UTC)
}

pub fn today() -> Date {
    date!(2026 - 08 - 01)
}

/// A store with a poster, three musicians, a led band, a role-structured
/// gig, a solo gig, and a gig posted by the band itself.
pub fn setup_store() -> MemoryStore {
    let store: MemoryStore = MemoryStore::new();

    for (id, name) in [
        ("poster-1", "Casey"),
        ("musician-a", "Alex"),
        ("musician-b", "Billie"),
        ("musician-c", "Charlie"),
        ("leader-l", "Lou"),
    ] {
        store
            .insert_user(UserProfile::new(
                UserId::new(id),
                name.to_string(),
                Some(4),
                8,
                true,
            ))
            .unwrap();
    }

    store
        .insert_band(Band::new(
            BandId::new("band-7"),
            String::from("The Nightjars"),
            vec![UserId::new("leader-l")],
            None,
        ))
        .unwrap();

    store
        .insert_gig(Gig::new_role_structured(
            GigId::new(ROLE_GIG),
            String::from("Festival main stage"),
            date!(2026 - 09 - 12),
            String::from("Victoria Park, London"),
            1200,
            UserId::new("poster-1"),
            None,
            vec![Role::new(String::from("Vocalist"), 1, 2, 300)],
        ))
        .unwrap();

    store
        .insert_gig(Gig::new(
            GigId::new(SOLO_GIG),
            String::from("Acoustic evening"),
            date!(2026 - 09 - 20),
            String::from("The Old Vic, Bristol"),
            250,
            UserId::new("poster-1"),
        ))
        .unwrap();

    // The band posted this one; its leaders co-manage it
    store
        .insert_gig(Gig::new_role_structured(
            GigId::new(BAND_POSTED_GIG),
            String::from("Depping for the Nightjars"),
            date!(2026 - 10 - 03),
            String::from("Night & Day Cafe, Manchester"),
            400,
            UserId::new("poster-1"),
            Some(BandId::new("band-7")),
            vec![Role::new(String::from("Drummer"), 1, 3, 150)],
        ))
        .unwrap();

    store
}
