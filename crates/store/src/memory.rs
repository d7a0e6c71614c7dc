// Copyright (C) 2026 Encore Live
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use encore::{CoreError, TransitionResult};
use encore_audit::AuditEvent;
use encore_domain::{Band, BandId, Gig, GigId, UserId, UserProfile, validate_gig_fields};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

/// Appends an identifier if it is not already present.
fn push_unique<T: Clone + PartialEq>(ids: &mut Vec<T>, id: &T) {
    if !ids.contains(id) {
        ids.push(id.clone());
    }
}

/// A point-in-time view of a gig with resolved directory records.
///
/// Snapshots are clones: once returned they never change, and derivation
/// or categorization over them needs no coordination with writers.
#[derive(Debug, Clone)]
pub struct GigSnapshot {
    /// The gig document.
    pub gig: Gig,
    /// Profiles for every user referenced by the document.
    pub profiles: Vec<UserProfile>,
    /// Band records for every band referenced by the document.
    pub bands: Vec<Band>,
}

/// The in-memory gig store.
///
/// Gigs are individually locked so mutations on the same gig serialize
/// while mutations on different gigs proceed in parallel. The band and
/// user directories are read-mostly reference data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    gigs: RwLock<HashMap<String, Arc<Mutex<Gig>>>>,
    bands: RwLock<HashMap<String, Band>>,
    users: RwLock<HashMap<String, UserProfile>>,
    audit_log: Mutex<Vec<String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new gig document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The gig fails field validation
    /// - A gig with the same identifier already exists
    /// - A lock is poisoned
    pub fn insert_gig(&self, gig: Gig) -> Result<(), StoreError> {
        validate_gig_fields(&gig)?;

        let mut gigs = self.gigs.write().map_err(|_| StoreError::LockPoisoned)?;
        let key: String = gig.gig_id.value().to_owned();
        if gigs.contains_key(&key) {
            return Err(StoreError::DuplicateGig(key));
        }
        tracing::info!(gig = %key, "Inserted gig");
        gigs.insert(key, Arc::new(Mutex::new(gig)));
        Ok(())
    }

    /// Inserts or replaces a band directory record.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned.
    pub fn insert_band(&self, band: Band) -> Result<(), StoreError> {
        let mut bands = self.bands.write().map_err(|_| StoreError::LockPoisoned)?;
        bands.insert(band.band_id.value().to_owned(), band);
        Ok(())
    }

    /// Inserts or replaces a user directory record.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned.
    pub fn insert_user(&self, profile: UserProfile) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::LockPoisoned)?;
        users.insert(profile.user_id.value().to_owned(), profile);
        Ok(())
    }

    /// Returns a clone of the gig document.
    ///
    /// # Errors
    ///
    /// Returns an error if the gig does not exist or a lock is poisoned.
    pub fn gig(&self, gig_id: &GigId) -> Result<Gig, StoreError> {
        let handle: Arc<Mutex<Gig>> = self.gig_handle(gig_id)?;
        let guard = handle.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(guard.clone())
    }

    /// Returns clones of every gig document.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned.
    pub fn all_gigs(&self) -> Result<Vec<Gig>, StoreError> {
        let gigs = self.gigs.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut result: Vec<Gig> = Vec::with_capacity(gigs.len());
        for handle in gigs.values() {
            let guard = handle.lock().map_err(|_| StoreError::LockPoisoned)?;
            result.push(guard.clone());
        }
        Ok(result)
    }

    /// Returns a point-in-time snapshot of a gig with resolved directory
    /// records for every referenced user and band.
    ///
    /// # Errors
    ///
    /// Returns an error if the gig does not exist or a lock is poisoned.
    pub fn gig_snapshot(&self, gig_id: &GigId) -> Result<GigSnapshot, StoreError> {
        let gig: Gig = self.gig(gig_id)?;

        let mut user_ids: Vec<UserId> = Vec::new();
        for user in &gig.interested_users {
            push_unique(&mut user_ids, user);
        }
        for role in &gig.band_category {
            for user in role.applicants.iter().chain(role.booked.iter()) {
                push_unique(&mut user_ids, user);
            }
        }
        for entry in &gig.shortlisted_users {
            push_unique(&mut user_ids, &entry.user_id);
        }
        for entry in &gig.booking_history {
            push_unique(&mut user_ids, &entry.user_id);
        }
        for app in &gig.band_applications {
            push_unique(&mut user_ids, &app.applied_by);
        }
        if let Some(user) = &gig.booked_by {
            push_unique(&mut user_ids, user);
        }

        let mut band_ids: Vec<BandId> = Vec::new();
        for app in &gig.band_applications {
            push_unique(&mut band_ids, &app.band_id);
        }
        if let Some(band) = &gig.posting_band {
            push_unique(&mut band_ids, band);
        }

        let profiles: Vec<UserProfile> = self.resolve_users(&user_ids)?;
        let bands: Vec<Band> = self.resolve_bands(&band_ids)?;

        Ok(GigSnapshot {
            gig,
            profiles,
            bands,
        })
    }

    /// Resolves a set of user identifiers to profile summaries.
    ///
    /// Unknown identifiers are skipped: the directory is tolerant of
    /// records that have not replicated yet.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned.
    pub fn resolve_users(&self, ids: &[UserId]) -> Result<Vec<UserProfile>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(ids
            .iter()
            .filter_map(|id| users.get(id.value()).cloned())
            .collect())
    }

    /// Resolves a set of band identifiers to band records.
    ///
    /// Unknown identifiers are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned.
    pub fn resolve_bands(&self, ids: &[BandId]) -> Result<Vec<Band>, StoreError> {
        let bands = self.bands.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(ids
            .iter()
            .filter_map(|id| bands.get(id.value()).cloned())
            .collect())
    }

    /// Returns a band directory record.
    ///
    /// # Errors
    ///
    /// Returns an error if the band does not exist or a lock is poisoned.
    pub fn band(&self, band_id: &BandId) -> Result<Band, StoreError> {
        let bands = self.bands.read().map_err(|_| StoreError::LockPoisoned)?;
        bands
            .get(band_id.value())
            .cloned()
            .ok_or_else(|| StoreError::BandNotFound(band_id.value().to_owned()))
    }

    /// Returns the bands a user leads.
    ///
    /// This is the membership query behind full-band authorization: a
    /// leader relationship is always resolved here, never taken from a
    /// client-supplied flag.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned.
    pub fn bands_led_by(&self, user: &UserId) -> Result<Vec<Band>, StoreError> {
        let bands = self.bands.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(bands
            .values()
            .filter(|band| band.is_led_by(user))
            .cloned()
            .collect())
    }

    /// Runs a transition against a gig inside its serialization boundary.
    ///
    /// The closure receives the current document and returns the core
    /// transition result; the capacity check and the commit happen under
    /// one lock hold, so two racing bookings for the last open slot cannot
    /// both succeed. On success the audit event is appended to the log and
    /// the new document committed; on failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The gig does not exist
    /// - The transition is rejected
    /// - The audit event cannot be serialized
    /// - A lock is poisoned
    pub fn mutate_gig<F>(&self, gig_id: &GigId, f: F) -> Result<TransitionResult, StoreError>
    where
        F: FnOnce(&Gig) -> Result<TransitionResult, CoreError>,
    {
        let handle: Arc<Mutex<Gig>> = self.gig_handle(gig_id)?;
        let mut guard = handle.lock().map_err(|_| StoreError::LockPoisoned)?;

        let transition: TransitionResult = match f(&guard) {
            Ok(transition) => transition,
            Err(err) => {
                tracing::warn!(gig = %gig_id, error = %err, "Transition rejected");
                return Err(StoreError::Transition(err));
            }
        };

        let serialized: String = serde_json::to_string(&transition.audit_event)
            .map_err(|err| StoreError::Serialization(err.to_string()))?;
        let mut audit_log = self
            .audit_log
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;

        *guard = transition.new_gig.clone();
        audit_log.push(serialized);
        tracing::info!(
            gig = %gig_id,
            action = %transition.audit_event.action.name,
            changed = transition.changed,
            "Committed transition"
        );

        Ok(transition)
    }

    /// Returns the audit log, deserialized.
    ///
    /// # Errors
    ///
    /// Returns an error if a lock is poisoned or an entry fails to
    /// deserialize.
    pub fn audit_events(&self) -> Result<Vec<AuditEvent>, StoreError> {
        let audit_log = self
            .audit_log
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?;
        audit_log
            .iter()
            .map(|entry| {
                serde_json::from_str(entry).map_err(|err| StoreError::Serialization(err.to_string()))
            })
            .collect()
    }

    /// Looks up the lock handle for a gig.
    fn gig_handle(&self, gig_id: &GigId) -> Result<Arc<Mutex<Gig>>, StoreError> {
        let gigs = self.gigs.read().map_err(|_| StoreError::LockPoisoned)?;
        gigs.get(gig_id.value())
            .cloned()
            .ok_or_else(|| StoreError::GigNotFound(gig_id.value().to_owned()))
    }
}
