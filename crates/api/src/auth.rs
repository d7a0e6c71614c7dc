// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authorization checks for every mutation entry point.
//!
//! Authorization resolves actor *relationships* (gig poster, posting-band
//! leader, applicant themself, applying-band leader) rather than global
//! roles, and it lives in exactly one place: every handler calls into
//! this service, never re-implements a check inline. Band leadership is
//! always resolved through the membership query, never taken from a
//! client-supplied flag.

use encore_domain::{Band, BandId, Gig, UserId};

/// Authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The actor lacks the relationship required for the action.
    NotAuthorized {
        /// The action that was attempted.
        action: String,
        /// The missing relationship.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthorized { action, reason } => {
                write!(f, "Not authorized for '{action}': {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Relationship-based authorization for gig mutations.
///
/// All checks are pure: the handler resolves the actor's band memberships
/// up front and passes them in, so the same facts feed every decision.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks whether an actor manages a gig.
    ///
    /// The gig's poster manages it; when a band posted the gig, each of
    /// that band's leaders manages it too.
    #[must_use]
    pub fn manages_gig(gig: &Gig, actor: &UserId, led_bands: &[Band]) -> bool {
        if &gig.posted_by == actor {
            return true;
        }
        gig.posting_band.as_ref().is_some_and(|band_id| {
            led_bands.iter().any(|band| &band.band_id == band_id)
        })
    }

    /// Authorizes a management action on a gig (book, unbook, shortlist,
    /// reject, view, respond).
    ///
    /// # Arguments
    ///
    /// * `gig` - The gig being mutated
    /// * `actor` - The acting user
    /// * `led_bands` - The bands the actor leads, per the membership query
    /// * `action` - The action name, for the error message
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is neither the poster nor a leader of
    /// the posting band.
    pub fn authorize_gig_management(
        gig: &Gig,
        actor: &UserId,
        led_bands: &[Band],
        action: &str,
    ) -> Result<(), AuthError> {
        if Self::manages_gig(gig, actor, led_bands) {
            return Ok(());
        }
        Err(AuthError::NotAuthorized {
            action: action.to_string(),
            reason: format!(
                "user '{actor}' is not the poster of gig '{}' and leads no posting band",
                gig.gig_id
            ),
        })
    }

    /// Authorizes an action an actor takes on their own application
    /// (withdraw, retract interest), also granted to gig management for
    /// removals.
    ///
    /// # Arguments
    ///
    /// * `gig` - The gig being mutated
    /// * `actor` - The acting user
    /// * `target` - The user whose application is affected
    /// * `led_bands` - The bands the actor leads
    /// * `action` - The action name, for the error message
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is neither the target themself nor
    /// gig management.
    pub fn authorize_self_or_management(
        gig: &Gig,
        actor: &UserId,
        target: &UserId,
        led_bands: &[Band],
        action: &str,
    ) -> Result<(), AuthError> {
        if actor == target || Self::manages_gig(gig, actor, led_bands) {
            return Ok(());
        }
        Err(AuthError::NotAuthorized {
            action: action.to_string(),
            reason: format!("user '{actor}' may not act on '{target}'s application"),
        })
    }

    /// Authorizes an action taken on a band's behalf (apply, withdraw).
    ///
    /// # Arguments
    ///
    /// * `band_id` - The band being acted for
    /// * `actor` - The acting user
    /// * `led_bands` - The bands the actor leads, per the membership query
    /// * `action` - The action name, for the error message
    ///
    /// # Errors
    ///
    /// Returns an error if the actor leads no band with this identifier.
    pub fn authorize_band_action(
        band_id: &BandId,
        actor: &UserId,
        led_bands: &[Band],
        action: &str,
    ) -> Result<(), AuthError> {
        if led_bands.iter().any(|band| &band.band_id == band_id) {
            return Ok(());
        }
        Err(AuthError::NotAuthorized {
            action: action.to_string(),
            reason: format!("user '{actor}' is not a leader of band '{band_id}'"),
        })
    }
}
