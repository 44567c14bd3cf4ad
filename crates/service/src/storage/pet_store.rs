use std::collections::BTreeMap;

use models::Pet;
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::filter::FilterTokens;
use crate::errors::ServiceError;

/// Identifier handed to the first record inserted without an id.
pub const DEFAULT_FIRST_ID: i64 = 1;

struct Inner {
    records: BTreeMap<i64, Pet>,
    /// Next candidate for assignment; `None` once the counter has passed `i64::MAX`.
    next_id: Option<i64>,
}

impl Inner {
    /// Take the next free counter value, stepping over keys already taken by explicit ids.
    fn assign_id(&mut self) -> Result<i64, ServiceError> {
        let mut candidate = self.next_id.ok_or(ServiceError::IdSpaceExhausted)?;
        while self.records.contains_key(&candidate) {
            candidate = candidate.checked_add(1).ok_or(ServiceError::IdSpaceExhausted)?;
        }
        self.next_id = candidate.checked_add(1);
        Ok(candidate)
    }

    /// Store `pet`, assigning an id when unset. Must run under the write lock.
    fn upsert(&mut self, mut pet: Pet) -> Result<Pet, ServiceError> {
        if !pet.has_id() {
            pet.id = self.assign_id()?;
        }
        self.records.insert(pet.id, pet.clone());
        Ok(pet)
    }

    fn scan<F>(&self, keep: F) -> Vec<Pet>
    where
        F: Fn(&Pet) -> bool,
    {
        self.records.values().filter(|p| keep(p)).cloned().collect()
    }
}

/// Thread-safe, process-lifetime custodian of the pet catalog.
///
/// A single `RwLock` guards both the records and the id counter, so every
/// operation is atomic with respect to every other one: readers share the
/// lock, writers (including id assignment) hold it exclusively. Results are
/// returned in ascending id order.
///
/// Absence is a normal outcome: lookups return `Option`, deletes return `bool`.
pub struct PetStore {
    inner: RwLock<Inner>,
}

impl Default for PetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PetStore {
    /// Empty store whose first assigned id is [`DEFAULT_FIRST_ID`].
    pub fn new() -> Self {
        Self::with_first_id(DEFAULT_FIRST_ID)
    }

    /// Empty store whose first assigned id is `first_id` (values below 1 are raised to 1).
    pub fn with_first_id(first_id: i64) -> Self {
        Self {
            inner: RwLock::new(Inner { records: BTreeMap::new(), next_id: Some(first_id.max(1)) }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact-key lookup.
    pub fn get_by_id(&self, id: i64) -> Option<Pet> {
        let pet = self.inner.read().records.get(&id).cloned();
        debug!(op = "get_by_id", id, found = pet.is_some());
        pet
    }

    /// Insert or replace a record.
    ///
    /// An unset id (0) takes the next counter value, skipping any key already
    /// held by an explicitly inserted record. An explicit id replaces whatever
    /// is stored under it and leaves the counter alone. Counter values are
    /// never handed out twice; once the positive id space is used up, unset
    /// ids fail with [`ServiceError::IdSpaceExhausted`].
    pub fn add(&self, pet: Pet) -> Result<Pet, ServiceError> {
        let stored = self.inner.write().upsert(pet).map_err(|e| {
            warn!(op = "add", error = %e, "id assignment failed");
            e
        })?;
        debug!(op = "add", id = stored.id, status = ?stored.status);
        Ok(stored)
    }

    /// Remove the record under `id`; returns whether one was removed.
    pub fn delete(&self, id: i64) -> bool {
        let removed = self.inner.write().records.remove(&id).is_some();
        debug!(op = "delete", id, removed);
        removed
    }

    /// Every record whose status equals any token of the comma-separated `filter`.
    pub fn find_by_status(&self, filter: &str) -> Vec<Pet> {
        let tokens = FilterTokens::parse(filter);
        if tokens.is_empty() {
            return Vec::new();
        }
        let pets = self
            .inner
            .read()
            .scan(|p| p.status.as_deref().is_some_and(|s| tokens.matches(s)));
        debug!(op = "find_by_status", filter, count = pets.len());
        pets
    }

    /// Every record carrying at least one tag equal to a token of `filter`.
    pub fn find_by_tags(&self, filter: &str) -> Vec<Pet> {
        let tokens = FilterTokens::parse(filter);
        if tokens.is_empty() {
            return Vec::new();
        }
        let pets = self.inner.read().scan(|p| tokens.matches_any(&p.tags));
        debug!(op = "find_by_tags", filter, count = pets.len());
        pets
    }

    /// Merge non-empty `name`/`status` into the record under `id`.
    ///
    /// Lookup, merge and write-back happen under one write lock. Returns `None`
    /// without touching the store when `id` is absent.
    pub fn update_fields(&self, id: i64, name: Option<&str>, status: Option<&str>) -> Option<Pet> {
        let mut inner = self.inner.write();
        let Some(pet) = inner.records.get_mut(&id) else {
            debug!(op = "update_fields", id, found = false);
            return None;
        };
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            pet.name = Some(name.to_string());
        }
        if let Some(status) = status.filter(|s| !s.is_empty()) {
            pet.status = Some(status.to_string());
        }
        let stored = pet.clone();
        debug!(op = "update_fields", id, found = true);
        Some(stored)
    }
}
