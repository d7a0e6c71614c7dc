// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::auth::AuthError;
use encore::CoreError;
use encore_domain::DomainError;
use encore_store::StoreError;

/// API-level errors.
///
/// These are the public error taxonomy of the operation contracts. They
/// are distinct from domain/core/store errors, which are translated
/// explicitly and never leaked. Hard rejections here are not transient:
/// callers surface them to the human actor and do not retry
/// automatically. Idempotent re-submissions are *not* errors; they
/// succeed with `changed == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The actor lacks the required relationship (not the poster, not the
    /// band leader, not the applicant themself).
    NotAuthorized {
        /// The action that was attempted.
        action: String,
        /// The missing relationship.
        reason: String,
    },
    /// A role or band-slot ceiling was reached.
    CapacityExceeded {
        /// The ceiling that was hit.
        rule: String,
        /// A human-readable description.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// The requested surface exists but is not built yet. Explicit by
    /// design: unbuilt features fail loudly instead of silently no-oping.
    NotImplemented {
        /// The unbuilt feature.
        feature: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthorized { action, reason } => {
                write!(f, "Not authorized for '{action}': {reason}")
            }
            Self::CapacityExceeded { rule, message } => {
                write!(f, "Capacity exceeded ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::NotImplemented { feature } => {
                write!(f, "Not implemented: {feature}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::NotAuthorized { action, reason } => Self::NotAuthorized { action, reason },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTitle(msg) => ApiError::InvalidInput {
            field: String::from("title"),
            message: msg,
        },
        DomainError::InvalidLocation(msg) => ApiError::InvalidInput {
            field: String::from("location"),
            message: msg,
        },
        DomainError::InvalidRoleName(msg) => ApiError::InvalidInput {
            field: String::from("role_name"),
            message: msg,
        },
        DomainError::InvalidRoleCapacity {
            role,
            max_slots,
            max_applicants,
        } => ApiError::InvalidInput {
            field: String::from("role_capacity"),
            message: format!(
                "Role '{role}' has invalid capacity: max_slots={max_slots}, max_applicants={max_applicants}"
            ),
        },
        DomainError::RoleIndexOutOfRange {
            gig,
            index,
            role_count,
        } => ApiError::ResourceNotFound {
            resource_type: String::from("Role"),
            message: format!("Role index {index} out of range for gig '{gig}' with {role_count} roles"),
        },
        DomainError::RoleApplicantsFull {
            role,
            max_applicants,
        } => ApiError::CapacityExceeded {
            rule: String::from("role_applicants"),
            message: format!("Role '{role}' is closed to new applicants (limit {max_applicants})"),
        },
        DomainError::RoleSlotsFull { role, max_slots } => ApiError::CapacityExceeded {
            rule: String::from("role_slots"),
            message: format!("Role '{role}' has no open slots (limit {max_slots})"),
        },
        DomainError::NotAnApplicant { role, user } => ApiError::ResourceNotFound {
            resource_type: String::from("Applicant"),
            message: format!("User '{user}' has not applied to role '{role}'"),
        },
        DomainError::InterestOnRoleGig { gig } => ApiError::InvalidInput {
            field: String::from("gig_id"),
            message: format!("Gig '{gig}' is role-structured; apply to a role instead"),
        },
        DomainError::BandApplicationOnRoleGig { gig } => ApiError::InvalidInput {
            field: String::from("gig_id"),
            message: format!("Gig '{gig}' is role-structured; band members apply per role"),
        },
        DomainError::SoloBookingOnRoleGig { gig } => ApiError::InvalidInput {
            field: String::from("gig_id"),
            message: format!("Gig '{gig}' is role-structured; book performers into roles"),
        },
        DomainError::GigAlreadyBooked { gig, booked_by } => ApiError::CapacityExceeded {
            rule: String::from("gig_booking"),
            message: format!("Gig '{gig}' is already booked by '{booked_by}'"),
        },
        DomainError::BandApplicationNotFound { gig, band } => ApiError::ResourceNotFound {
            resource_type: String::from("Band application"),
            message: format!("No application from band '{band}' on gig '{gig}'"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Cannot transition application from '{from}' to '{to}': {reason}"),
        },
        DomainError::InvalidApplicationStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid band application status: {status}"),
        },
        DomainError::InvalidHistoryStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Invalid booking history status: {status}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a store error into an API error.
///
/// This translation is explicit and ensures store errors are not leaked
/// directly.
#[must_use]
pub fn translate_store_error(err: StoreError) -> ApiError {
    match err {
        StoreError::GigNotFound(gig) => ApiError::ResourceNotFound {
            resource_type: String::from("Gig"),
            message: format!("Gig '{gig}' does not exist"),
        },
        StoreError::BandNotFound(band) => ApiError::ResourceNotFound {
            resource_type: String::from("Band"),
            message: format!("Band '{band}' does not exist"),
        },
        StoreError::DuplicateGig(gig) => ApiError::InvalidInput {
            field: String::from("gig_id"),
            message: format!("Gig '{gig}' already exists"),
        },
        StoreError::InvalidGig(domain_err) => translate_domain_error(domain_err),
        StoreError::Transition(core_err) => translate_core_error(core_err),
        StoreError::Serialization(msg) => ApiError::Internal {
            message: format!("Audit serialization failed: {msg}"),
        },
        StoreError::LockPoisoned => ApiError::Internal {
            message: String::from("Store lock poisoned"),
        },
    }
}
