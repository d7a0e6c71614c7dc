// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Identifies a gig posting.
///
/// Gig identifiers are opaque strings assigned by the posting flow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GigId {
    /// The identifier value.
    value: String,
}

impl GigId {
    /// Creates a new `GigId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for GigId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifies a user (musician or client).
///
/// User identifiers are opaque and stable; all relationship checks
/// (poster, applicant, band leader) resolve against them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId {
    /// The identifier value.
    value: String,
}

impl UserId {
    /// Creates a new `UserId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Identifies a band.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BandId {
    /// The identifier value.
    value: String,
}

impl BandId {
    /// Creates a new `BandId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for BandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A band as resolved by the directory query.
///
/// Bands are external records: this subsystem never mutates them, it only
/// resolves leadership for authorization and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// The band identifier.
    pub band_id: BandId,
    /// The band's display name.
    pub name: String,
    /// Users empowered to act on the band's behalf.
    pub leaders: Vec<UserId>,
    /// Optional image URL for display.
    pub image_url: Option<String>,
}

impl Band {
    /// Creates a new `Band`.
    ///
    /// # Arguments
    ///
    /// * `band_id` - The band identifier
    /// * `name` - The band's display name
    /// * `leaders` - Users empowered to act on the band's behalf
    /// * `image_url` - Optional image URL
    #[must_use]
    pub const fn new(
        band_id: BandId,
        name: String,
        leaders: Vec<UserId>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            band_id,
            name,
            leaders,
            image_url,
        }
    }

    /// Returns whether the given user is a leader of this band.
    #[must_use]
    pub fn is_led_by(&self, user: &UserId) -> bool {
        self.leaders.contains(user)
    }
}

/// A user profile summary as resolved by the directory query.
///
/// Profile summaries decorate applicant lists; nothing in the booking
/// lifecycle depends on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user identifier.
    pub user_id: UserId,
    /// The user's display name.
    pub name: String,
    /// Aggregate rating in whole stars (1-5), if any ratings exist.
    pub rating: Option<u8>,
    /// Number of gigs the user has completed.
    pub completed_gigs: u32,
    /// Whether the user's identity has been verified.
    pub verified: bool,
}

impl UserProfile {
    /// Creates a new `UserProfile`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user identifier
    /// * `name` - The user's display name
    /// * `rating` - Aggregate rating in whole stars, if any
    /// * `completed_gigs` - Number of completed gigs
    /// * `verified` - Whether the user is verified
    #[must_use]
    pub const fn new(
        user_id: UserId,
        name: String,
        rating: Option<u8>,
        completed_gigs: u32,
        verified: bool,
    ) -> Self {
        Self {
            user_id,
            name,
            rating,
            completed_gigs,
            verified,
        }
    }
}
