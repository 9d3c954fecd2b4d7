//! Embedded document store.
//!
//! Entities are persisted as JSON documents, one sqlite table per collection
//! with rows of `(id TEXT PRIMARY KEY, doc TEXT)`. The connection lives
//! behind a mutex, so every single-document read-modify-write is atomic;
//! multi-collection sequences (cascade deletes, back-reference updates) are
//! plain sequential writes and are **not** transactional across collections.
//!
//! Filters and patches are plain Rust closures evaluated over deserialized
//! documents. Collections at this scale are small enough that a full scan per
//! filtered query is acceptable.

use std::marker::PhantomData;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("document encoding error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store connection lock poisoned")]
    Poisoned,
}

/// A persistable entity. Documents carry their own id.
pub trait Document: Serialize + DeserializeOwned {
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;
}

/// Handle to the backing database. Cheap to clone; all clones share one
/// connection.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }
        Ok(Self::from_conn(Connection::open(path)?))
    }

    /// Volatile store, used by the test suite.
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self::from_conn(Connection::open_in_memory()?))
    }

    fn from_conn(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn collection<T: Document>(&self) -> Collection<T> {
        Collection {
            store: self.clone(),
            _doc: PhantomData,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}

/// Typed view over one collection.
pub struct Collection<T: Document> {
    store: Store,
    _doc: PhantomData<T>,
}

impl<T: Document> Collection<T> {
    fn ensure(conn: &Connection) -> Result<(), StoreError> {
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY, doc TEXT NOT NULL)",
                T::COLLECTION
            ),
            [],
        )?;
        Ok(())
    }

    fn scan(conn: &Connection) -> Result<Vec<T>, StoreError> {
        let mut stmt = conn.prepare(&format!("SELECT doc FROM {}", T::COLLECTION))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut docs = Vec::new();
        for body in rows {
            docs.push(serde_json::from_str(&body?)?);
        }
        Ok(docs)
    }

    pub fn insert(&self, doc: &T) -> Result<(), StoreError> {
        let conn = self.store.lock()?;
        Self::ensure(&conn)?;
        conn.execute(
            &format!("INSERT INTO {} (id, doc) VALUES (?1, ?2)", T::COLLECTION),
            params![doc.id().to_string(), serde_json::to_string(doc)?],
        )?;
        Ok(())
    }

    pub fn insert_many(&self, docs: &[T]) -> Result<(), StoreError> {
        let mut conn = self.store.lock()?;
        Self::ensure(&conn)?;
        let tx = conn.transaction()?;
        for doc in docs {
            tx.execute(
                &format!("INSERT INTO {} (id, doc) VALUES (?1, ?2)", T::COLLECTION),
                params![doc.id().to_string(), serde_json::to_string(doc)?],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let conn = self.store.lock()?;
        Self::ensure(&conn)?;
        let body = conn
            .query_row(
                &format!("SELECT doc FROM {} WHERE id = ?1", T::COLLECTION),
                params![id.to_string()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    pub fn find_one(&self, filter: impl Fn(&T) -> bool) -> Result<Option<T>, StoreError> {
        let conn = self.store.lock()?;
        Self::ensure(&conn)?;
        Ok(Self::scan(&conn)?.into_iter().find(|doc| filter(doc)))
    }

    pub fn find(&self, filter: impl Fn(&T) -> bool) -> Result<Vec<T>, StoreError> {
        let conn = self.store.lock()?;
        Self::ensure(&conn)?;
        Ok(Self::scan(&conn)?
            .into_iter()
            .filter(|doc| filter(doc))
            .collect())
    }

    /// Atomic read-modify-write of one document. Returns the updated
    /// document, or `None` when the id does not exist.
    pub fn update_by_id(
        &self,
        id: Uuid,
        apply: impl FnOnce(&mut T),
    ) -> Result<Option<T>, StoreError> {
        let conn = self.store.lock()?;
        Self::ensure(&conn)?;
        let body = conn
            .query_row(
                &format!("SELECT doc FROM {} WHERE id = ?1", T::COLLECTION),
                params![id.to_string()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        let Some(body) = body else {
            return Ok(None);
        };
        let mut doc: T = serde_json::from_str(&body)?;
        apply(&mut doc);
        conn.execute(
            &format!("UPDATE {} SET doc = ?2 WHERE id = ?1", T::COLLECTION),
            params![id.to_string(), serde_json::to_string(&doc)?],
        )?;
        Ok(Some(doc))
    }

    /// Overwrite the stored document matching `doc.id()`. Returns whether a
    /// row was written.
    pub fn replace(&self, doc: &T) -> Result<bool, StoreError> {
        let conn = self.store.lock()?;
        Self::ensure(&conn)?;
        let written = conn.execute(
            &format!("UPDATE {} SET doc = ?2 WHERE id = ?1", T::COLLECTION),
            params![doc.id().to_string(), serde_json::to_string(doc)?],
        )?;
        Ok(written > 0)
    }

    /// Apply a patch to every matching document. Succeeds vacuously when
    /// nothing matches; returns the number of documents modified.
    pub fn update_many(
        &self,
        filter: impl Fn(&T) -> bool,
        apply: impl Fn(&mut T),
    ) -> Result<u64, StoreError> {
        let mut conn = self.store.lock()?;
        Self::ensure(&conn)?;
        let docs = Self::scan(&conn)?;
        let tx = conn.transaction()?;
        let mut modified = 0u64;
        for mut doc in docs {
            if filter(&doc) {
                apply(&mut doc);
                tx.execute(
                    &format!("UPDATE {} SET doc = ?2 WHERE id = ?1", T::COLLECTION),
                    params![doc.id().to_string(), serde_json::to_string(&doc)?],
                )?;
                modified += 1;
            }
        }
        tx.commit()?;
        Ok(modified)
    }

    /// Delete one document, returning it when it existed.
    pub fn delete_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let conn = self.store.lock()?;
        Self::ensure(&conn)?;
        let body = conn
            .query_row(
                &format!("SELECT doc FROM {} WHERE id = ?1", T::COLLECTION),
                params![id.to_string()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        let Some(body) = body else {
            return Ok(None);
        };
        conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", T::COLLECTION),
            params![id.to_string()],
        )?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Delete every matching document; returns the number removed.
    pub fn delete_many(&self, filter: impl Fn(&T) -> bool) -> Result<u64, StoreError> {
        let mut conn = self.store.lock()?;
        Self::ensure(&conn)?;
        let doomed: Vec<Uuid> = Self::scan(&conn)?
            .into_iter()
            .filter(|doc| filter(doc))
            .map(|doc| doc.id())
            .collect();
        let tx = conn.transaction()?;
        for id in &doomed {
            tx.execute(
                &format!("DELETE FROM {} WHERE id = ?1", T::COLLECTION),
                params![id.to_string()],
            )?;
        }
        tx.commit()?;
        Ok(doomed.len() as u64)
    }
}
