// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::gig::{Gig, Role};

/// Validates that a gig's basic field constraints are met.
///
/// This function checks that required fields are not empty and that every
/// role's capacity configuration is valid. It does NOT check booking
/// state (that requires the transition context).
///
/// # Arguments
///
/// * `gig` - The gig to validate
///
/// # Returns
///
/// * `Ok(())` if the gig's fields are valid
/// * `Err(DomainError)` if any field is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The title is empty
/// - The location is empty
/// - Any role fails [`validate_role_capacity`]
pub fn validate_gig_fields(gig: &Gig) -> Result<(), DomainError> {
    // Rule: title must not be empty
    if gig.title.trim().is_empty() {
        return Err(DomainError::InvalidTitle(String::from(
            "Title cannot be empty",
        )));
    }

    // Rule: location must not be empty
    if gig.location.trim().is_empty() {
        return Err(DomainError::InvalidLocation(String::from(
            "Location cannot be empty",
        )));
    }

    for role in &gig.band_category {
        validate_role_capacity(role)?;
    }

    Ok(())
}

/// Validates a role's capacity configuration.
///
/// The two ceilings are distinct: `max_applicants` bounds applications,
/// `max_slots` bounds bookings, and bookings can never exceed
/// applications.
///
/// # Arguments
///
/// * `role` - The role to validate
///
/// # Returns
///
/// * `Ok(())` if the configuration is valid
/// * `Err(DomainError)` if it is not
///
/// # Errors
///
/// Returns an error if:
/// - The role name is empty
/// - `max_slots` is zero
/// - `max_slots` exceeds `max_applicants`
pub fn validate_role_capacity(role: &Role) -> Result<(), DomainError> {
    if role.name.trim().is_empty() {
        return Err(DomainError::InvalidRoleName(String::from(
            "Role name cannot be empty",
        )));
    }

    if role.max_slots == 0 || role.max_slots > role.max_applicants {
        return Err(DomainError::InvalidRoleCapacity {
            role: role.name.clone(),
            max_slots: role.max_slots,
            max_applicants: role.max_applicants,
        });
    }

    Ok(())
}

/// Validates that a role index names a role on the gig.
///
/// # Arguments
///
/// * `gig` - The gig to check against
/// * `index` - The role index to validate
///
/// # Returns
///
/// * `Ok(())` if the index names a role
/// * `Err(DomainError::RoleIndexOutOfRange)` otherwise
///
/// # Errors
///
/// Returns an error if the index is out of range for the gig's role list.
pub fn validate_role_index(gig: &Gig, index: usize) -> Result<(), DomainError> {
    gig.role(index).map(|_| ())
}
