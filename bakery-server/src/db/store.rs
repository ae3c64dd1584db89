//! redb-backed collection store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `collections` | collection name | JSON array | Whole collection, overwritten on every write |
//! | `id_sequence` | `"last"` | `i64` | Last issued record id |
//!
//! Every mutation is a read-modify-write of one collection inside a single
//! redb write transaction. redb serializes write transactions, so two
//! writers can never interleave on the same collection. A mutation that
//! fails before commit leaves the collection untouched.
//!
//! Records are handled as JSON objects keyed by their `id` field. Catalog
//! ids are numbers; order ids are `ORD<sequence>` strings.

use redb::{
    Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shared::util::now_millis;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// key = collection name, value = JSON-serialized array of records
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// key = SEQUENCE_KEY, value = last issued id
const SEQUENCE_TABLE: TableDefinition<&str, i64> = TableDefinition::new("id_sequence");

const SEQUENCE_KEY: &str = "last";

/// Fields a patch or an action can never change
const IMMUTABLE_FIELDS: [&str; 2] = ["id", "createdAt"];

/// Named collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Cakes,
    Orders,
    Addons,
    Categories,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Cakes,
        Collection::Orders,
        Collection::Addons,
        Collection::Categories,
    ];

    /// Storage key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Cakes => "cakes",
            Self::Orders => "orders",
            Self::Addons => "addons",
            Self::Categories => "categories",
        }
    }

    fn make_id(&self, seq: i64) -> Value {
        match self {
            Self::Orders => Value::String(format!("ORD{seq}")),
            _ => Value::from(seq),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Record in {0} is not a JSON object")]
    InvalidRecord(Collection),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Collection store backed by redb
#[derive(Clone)]
pub struct CollectionStore {
    db: Arc<Database>,
}

impl fmt::Debug for CollectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionStore").finish_non_exhaustive()
    }
}

impl CollectionStore {
    /// Open or create the database at the given path
    ///
    /// redb commits with `Durability::Immediate`: a write is persistent as
    /// soon as `commit()` returns and the file is never left half-written.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests and throwaway instances)
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StoreResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
            let mut seq_table = write_txn.open_table(SEQUENCE_TABLE)?;
            if seq_table.get(SEQUENCE_KEY)?.is_none() {
                seq_table.insert(SEQUENCE_KEY, 0i64)?;
            }
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Reads ==========

    /// All records of a collection; empty if the collection was never written
    pub fn get_all<T: DeserializeOwned>(&self, collection: Collection) -> StoreResult<Vec<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        let records = match table.get(collection.key())? {
            Some(guard) => serde_json::from_slice(guard.value())?,
            None => Vec::new(),
        };
        Ok(records)
    }

    /// Whether the collection has been written at least once
    pub fn is_initialized(&self, collection: Collection) -> StoreResult<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        Ok(table.get(collection.key())?.is_some())
    }

    /// Number of initialized collections
    pub fn initialized_count(&self) -> StoreResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        Ok(table.len()?)
    }

    pub fn find_by_id<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: impl Into<Value>,
    ) -> StoreResult<Option<T>> {
        let id = id.into();
        let records: Vec<Value> = self.get_all(collection)?;
        records
            .into_iter()
            .find(|r| has_id(r, &id))
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    pub fn find_where<T, P>(&self, collection: Collection, predicate: P) -> StoreResult<Vec<T>>
    where
        T: DeserializeOwned,
        P: Fn(&T) -> bool,
    {
        let records: Vec<T> = self.get_all(collection)?;
        Ok(records.into_iter().filter(|r| predicate(r)).collect())
    }

    // ========== Writes ==========

    /// Append a record under a freshly issued id and return the stored record
    ///
    /// Any `id` the draft carries is overwritten.
    pub fn add<T: DeserializeOwned>(
        &self,
        collection: Collection,
        draft: &impl Serialize,
    ) -> StoreResult<T> {
        self.add_guarded::<T, StoreError, _>(collection, draft, |_| Ok(()))
    }

    /// Like [`add`](Self::add), but `guard` first sees every existing record
    /// inside the same write transaction
    ///
    /// The first guard error aborts the insert and is returned as is.
    pub fn add_guarded<T, E, G>(
        &self,
        collection: Collection,
        draft: &impl Serialize,
        guard: G,
    ) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: From<StoreError>,
        G: Fn(&Value) -> Result<(), E>,
    {
        let mut record = to_object(collection, draft)?;

        let write_txn = self.db.begin_write().map_err(StoreError::from)?;
        {
            let mut table = write_txn
                .open_table(COLLECTIONS_TABLE)
                .map_err(StoreError::from)?;
            let mut records = load(&table, collection)?;
            records.iter().try_for_each(&guard)?;

            let mut seq_table = write_txn
                .open_table(SEQUENCE_TABLE)
                .map_err(StoreError::from)?;
            let last = seq_table
                .get(SEQUENCE_KEY)
                .map_err(StoreError::from)?
                .map(|guard| guard.value())
                .unwrap_or(0);
            let mut seq = now_millis().max(last + 1);
            while records.iter().any(|r| has_id(r, &collection.make_id(seq))) {
                seq += 1;
            }
            seq_table
                .insert(SEQUENCE_KEY, seq)
                .map_err(StoreError::from)?;

            record.insert("id".to_string(), collection.make_id(seq));
            records.push(Value::Object(record.clone()));
            save(&mut table, collection, &records)?;
        }
        write_txn.commit().map_err(StoreError::from)?;

        Ok(serde_json::from_value(Value::Object(record)).map_err(StoreError::from)?)
    }

    /// Shallow-merge the patch's fields into the record with `id`
    ///
    /// Returns `None` if no record has that id. `id` and `createdAt` are
    /// never overwritten.
    pub fn update<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: impl Into<Value>,
        patch: &impl Serialize,
    ) -> StoreResult<Option<T>> {
        self.update_guarded::<T, StoreError, _>(collection, id, patch, |_| Ok(()))
    }

    /// Like [`update`](Self::update), but `guard` first sees every other
    /// record inside the same write transaction
    pub fn update_guarded<T, E, G>(
        &self,
        collection: Collection,
        id: impl Into<Value>,
        patch: &impl Serialize,
        guard: G,
    ) -> Result<Option<T>, E>
    where
        T: DeserializeOwned,
        E: From<StoreError>,
        G: Fn(&Value) -> Result<(), E>,
    {
        let patch = to_object(collection, patch)?;
        let updated = self.mutate::<E, _, _>(collection, id.into(), guard, |record| {
            let Value::Object(fields) = record else {
                return Err(StoreError::InvalidRecord(collection).into());
            };
            fields.extend(patch);
            Ok(())
        })?;
        Ok(updated
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)?)
    }

    /// Apply `f` to a typed copy of the record and persist the result
    ///
    /// If `f` fails, nothing is written and the error is returned as is.
    pub fn modify<T, E, F>(
        &self,
        collection: Collection,
        id: impl Into<Value>,
        f: F,
    ) -> Result<Option<T>, E>
    where
        T: Serialize + DeserializeOwned,
        E: From<StoreError>,
        F: FnOnce(&mut T) -> Result<(), E>,
    {
        let updated = self.mutate::<E, _, _>(collection, id.into(), |_| Ok(()), |record| {
            let mut typed: T = serde_json::from_value(record.clone()).map_err(StoreError::from)?;
            f(&mut typed)?;
            *record = serde_json::to_value(&typed).map_err(StoreError::from)?;
            Ok(())
        })?;
        match updated {
            Some(value) => Ok(Some(
                serde_json::from_value(value).map_err(StoreError::from)?,
            )),
            None => Ok(None),
        }
    }

    /// Remove the record with `id`; returns whether one was removed
    pub fn remove(&self, collection: Collection, id: impl Into<Value>) -> StoreResult<bool> {
        let id = id.into();
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            let mut records = load(&table, collection)?;
            let before = records.len();
            records.retain(|r| !has_id(r, &id));
            let removed = records.len() != before;
            if removed {
                save(&mut table, collection, &records)?;
            }
            removed
        };
        write_txn.commit()?;
        Ok(removed)
    }

    /// Write `records` only if the collection was never written
    ///
    /// Returns whether the collection was populated.
    pub fn insert_if_absent<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> StoreResult<bool> {
        let write_txn = self.db.begin_write()?;
        let inserted = {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            if table.get(collection.key())?.is_some() {
                false
            } else {
                let records = records
                    .iter()
                    .map(serde_json::to_value)
                    .collect::<Result<Vec<_>, _>>()?;
                save(&mut table, collection, &records)?;
                true
            }
        };
        write_txn.commit()?;
        Ok(inserted)
    }

    /// Read-modify-write one record inside a single write transaction
    ///
    /// `guard` runs over every other record of the collection before `f`.
    fn mutate<E, G, F>(
        &self,
        collection: Collection,
        id: Value,
        guard: G,
        f: F,
    ) -> Result<Option<Value>, E>
    where
        E: From<StoreError>,
        G: Fn(&Value) -> Result<(), E>,
        F: FnOnce(&mut Value) -> Result<(), E>,
    {
        let write_txn = self.db.begin_write().map_err(StoreError::from)?;
        let updated = {
            let mut table = write_txn
                .open_table(COLLECTIONS_TABLE)
                .map_err(StoreError::from)?;
            let mut records = load(&table, collection)?;
            let Some(index) = records.iter().position(|r| has_id(r, &id)) else {
                return Ok(None);
            };
            records
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .try_for_each(|(_, other)| guard(other))?;
            let slot = &mut records[index];

            let mut record = slot.clone();
            f(&mut record)?;
            if let (Value::Object(original), Value::Object(changed)) = (&*slot, &mut record) {
                for field in IMMUTABLE_FIELDS {
                    match original.get(field) {
                        Some(v) => changed.insert(field.to_string(), v.clone()),
                        None => changed.remove(field),
                    };
                }
            }
            *slot = record.clone();
            save(&mut table, collection, &records)?;
            record
        };
        write_txn.commit().map_err(StoreError::from)?;
        Ok(Some(updated))
    }
}

fn has_id(record: &Value, id: &Value) -> bool {
    record.get("id") == Some(id)
}

fn to_object(collection: Collection, value: &impl Serialize) -> StoreResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::InvalidRecord(collection)),
    }
}

fn load(
    table: &impl ReadableTable<&'static str, &'static [u8]>,
    collection: Collection,
) -> StoreResult<Vec<Value>> {
    let records = match table.get(collection.key())? {
        Some(guard) => serde_json::from_slice(guard.value())?,
        None => Vec::new(),
    };
    Ok(records)
}

fn save(
    table: &mut redb::Table<'_, &'static str, &'static [u8]>,
    collection: Collection,
    records: &[Value],
) -> StoreResult<()> {
    let bytes = serde_json::to_vec(records)?;
    table.insert(collection.key(), bytes.as_slice())?;
    Ok(())
}
