// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Gig title is empty or invalid.
    InvalidTitle(String),
    /// Gig location is empty or invalid.
    InvalidLocation(String),
    /// Role name is empty or invalid.
    InvalidRoleName(String),
    /// Role capacity configuration violates `max_slots <= max_applicants`
    /// or names zero slots.
    InvalidRoleCapacity {
        /// The role name.
        role: String,
        /// The configured booking capacity.
        max_slots: u32,
        /// The configured application capacity.
        max_applicants: u32,
    },
    /// Role index does not name a role on the gig.
    RoleIndexOutOfRange {
        /// The gig identifier.
        gig: String,
        /// The requested index.
        index: usize,
        /// The number of roles on the gig.
        role_count: usize,
    },
    /// Role has reached its application ceiling.
    RoleApplicantsFull {
        /// The role name.
        role: String,
        /// The application ceiling.
        max_applicants: u32,
    },
    /// Role has reached its booking ceiling.
    RoleSlotsFull {
        /// The role name.
        role: String,
        /// The booking ceiling.
        max_slots: u32,
    },
    /// Booking requires the user to be an applicant first.
    NotAnApplicant {
        /// The role name.
        role: String,
        /// The user identifier.
        user: String,
    },
    /// Passive interest is only accepted on solo gigs.
    InterestOnRoleGig {
        /// The gig identifier.
        gig: String,
    },
    /// Full-band applications are only accepted on solo gigs.
    BandApplicationOnRoleGig {
        /// The gig identifier.
        gig: String,
    },
    /// Direct booking applies to solo gigs; role gigs book per role.
    SoloBookingOnRoleGig {
        /// The gig identifier.
        gig: String,
    },
    /// The gig already carries a terminal booking for another actor.
    GigAlreadyBooked {
        /// The gig identifier.
        gig: String,
        /// The actor holding the booking.
        booked_by: String,
    },
    /// No application from the given band exists on the gig.
    BandApplicationNotFound {
        /// The gig identifier.
        gig: String,
        /// The band identifier.
        band: String,
    },
    /// A band application status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// A band application status string is not recognized.
    InvalidApplicationStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// A booking history status string is not recognized.
    InvalidHistoryStatus {
        /// The unrecognized status string.
        status: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle(msg) => write!(f, "Invalid title: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "Invalid location: {msg}"),
            Self::InvalidRoleName(msg) => write!(f, "Invalid role name: {msg}"),
            Self::InvalidRoleCapacity {
                role,
                max_slots,
                max_applicants,
            } => {
                write!(
                    f,
                    "Role '{role}' has invalid capacity: max_slots={max_slots}, max_applicants={max_applicants}"
                )
            }
            Self::RoleIndexOutOfRange {
                gig,
                index,
                role_count,
            } => {
                write!(
                    f,
                    "Role index {index} out of range for gig '{gig}' with {role_count} roles"
                )
            }
            Self::RoleApplicantsFull {
                role,
                max_applicants,
            } => {
                write!(
                    f,
                    "Role '{role}' is closed to new applicants (limit {max_applicants})"
                )
            }
            Self::RoleSlotsFull { role, max_slots } => {
                write!(f, "Role '{role}' has no open slots (limit {max_slots})")
            }
            Self::NotAnApplicant { role, user } => {
                write!(f, "User '{user}' has not applied to role '{role}'")
            }
            Self::InterestOnRoleGig { gig } => {
                write!(
                    f,
                    "Gig '{gig}' is role-structured; apply to a role instead of expressing interest"
                )
            }
            Self::BandApplicationOnRoleGig { gig } => {
                write!(
                    f,
                    "Gig '{gig}' is role-structured; band members apply per role"
                )
            }
            Self::SoloBookingOnRoleGig { gig } => {
                write!(
                    f,
                    "Gig '{gig}' is role-structured; book performers into roles"
                )
            }
            Self::GigAlreadyBooked { gig, booked_by } => {
                write!(f, "Gig '{gig}' is already booked by '{booked_by}'")
            }
            Self::BandApplicationNotFound { gig, band } => {
                write!(f, "No application from band '{band}' on gig '{gig}'")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition application from '{from}' to '{to}': {reason}")
            }
            Self::InvalidApplicationStatus { status } => {
                write!(f, "Invalid band application status: {status}")
            }
            Self::InvalidHistoryStatus { status } => {
                write!(f, "Invalid booking history status: {status}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
