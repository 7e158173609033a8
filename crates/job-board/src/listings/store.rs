use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use super::domain::{Application, Company, GeneratedId, Job, User};
use super::repository::RepositoryError;

/// Source of creation timestamps so tests can control ordering.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Record kinds held by an [`EntityStore`].
pub trait Entity: Clone {
    type Id: GeneratedId;
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;
}

impl Entity for User {
    type Id = super::domain::UserId;
    const KIND: &'static str = "user";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Company {
    type Id = super::domain::CompanyId;
    const KIND: &'static str = "company";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Job {
    type Id = super::domain::JobId;
    const KIND: &'static str = "job";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Application {
    type Id = super::domain::ApplicationId;
    const KIND: &'static str = "application";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Keyed collection for one entity kind.
///
/// Records are kept in insertion order and never removed, so `list` is stable across
/// calls. Writers are serialized by the lock; readers share it.
pub struct EntityStore<T: Entity> {
    inner: RwLock<StoreInner<T>>,
}

struct StoreInner<T: Entity> {
    records: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::new(),
                index: HashMap::new(),
            }),
        }
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreInner<T>>, RepositoryError> {
        self.inner.read().map_err(|_| poisoned::<T>())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreInner<T>>, RepositoryError> {
        self.inner.write().map_err(|_| poisoned::<T>())
    }

    pub fn get(&self, id: &T::Id) -> Result<Option<T>, RepositoryError> {
        let guard = self.read()?;
        Ok(guard
            .index
            .get(id)
            .map(|&position| guard.records[position].clone()))
    }

    pub fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.read()?.records.clone())
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.read()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    pub fn find<P>(&self, predicate: P) -> Result<Option<T>, RepositoryError>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.read()?.records.iter().find(|record| predicate(record)).cloned())
    }

    pub fn filter<P>(&self, predicate: P) -> Result<Vec<T>, RepositoryError>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self
            .read()?
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }

    /// Mints an id unused by this store, builds the record with it, and inserts it.
    ///
    /// Fails with [`RepositoryError::Conflict`] if `build` discards the minted id in favor of
    /// one already stored.
    pub fn create<F>(&self, build: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(T::Id) -> T,
    {
        self.create_unless(|_| None, build)
    }

    /// Same as [`EntityStore::create`], except `reject` first inspects the stored records
    /// and may veto the insert. The check and the insert share one write guard.
    pub fn create_unless<C, F>(&self, reject: C, build: F) -> Result<T, RepositoryError>
    where
        C: FnOnce(&[T]) -> Option<RepositoryError>,
        F: FnOnce(T::Id) -> T,
    {
        let mut guard = self.write()?;
        if let Some(err) = reject(guard.records.as_slice()) {
            return Err(err);
        }

        let mut id = T::Id::generate();
        while guard.index.contains_key(&id) {
            id = T::Id::generate();
        }

        let record = build(id);
        if guard.index.contains_key(record.id()) {
            return Err(RepositoryError::Conflict);
        }

        let position = guard.records.len();
        guard.index.insert(record.id().clone(), position);
        guard.records.push(record.clone());
        Ok(record)
    }

    /// Applies `patch` to the stored record. Unknown ids leave the store untouched.
    pub fn update<F>(&self, id: &T::Id, patch: F) -> Result<Option<T>, RepositoryError>
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self.write()?;
        let Some(&position) = guard.index.get(id) else {
            return Ok(None);
        };

        let record = &mut guard.records[position];
        patch(record);
        Ok(Some(record.clone()))
    }
}

fn poisoned<T: Entity>() -> RepositoryError {
    RepositoryError::Unavailable(format!("{} store lock poisoned", T::KIND))
}
