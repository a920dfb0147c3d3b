//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use mockable::DefaultClock;
use quickmail::{
    messaging::{
        adapters::postgres::{PostgresMessagingStore, PostgresStoreConfig},
        domain::{CourseId, Message, NewMessage, OutputChannel, UserId},
    },
    persistent::services::RecordContext,
};
use rstest::fixture;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::Runtime;

/// SQL creating the message tables.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-16-000000_create_message_tables/up.sql");

static DATABASE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Record context backed by the `PostgreSQL` store.
pub type PgContext = RecordContext<PostgresMessagingStore, DefaultClock>;

/// Database created for a single test and dropped with it.
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
}

impl TemporaryDatabase {
    /// Creates a uniquely named database on `cluster`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created.
    pub fn create(cluster: PostgresCluster) -> Result<Self, BoxError> {
        let name = format!(
            "quickmail_test_{}_{}",
            std::process::id(),
            DATABASE_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        cluster.create_database(&name)?;
        Ok(Self { cluster, name })
    }

    /// Returns the connection URL of this database.
    #[must_use]
    pub fn url(&self) -> String {
        self.cluster.database_url(&self.name)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(&self.name));
    }
}

/// Applies the crate migrations to the database at `url`.
fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_SCHEMA_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok(())
}

/// Migrated database, record context and runtime for one test.
///
/// Fields drop in declaration order, so the pool closes before the
/// database is dropped.
pub struct PreparedStore {
    /// Runtime driving the async store calls.
    pub rt: Runtime,
    /// Record context over the temporary database.
    pub context: PgContext,
    /// Temporary database backing the context.
    pub temp_db: TemporaryDatabase,
}

/// Provides a prepared store, or `None` when no test server is configured.
///
/// # Errors
///
/// Returns an error if database creation, migration or pool setup fails.
#[fixture]
pub fn prepared_store(
    postgres_cluster: Option<PostgresCluster>,
) -> Result<Option<PreparedStore>, BoxError> {
    let Some(cluster) = postgres_cluster else {
        return Ok(None);
    };
    let temp_db = TemporaryDatabase::create(cluster)?;
    apply_migrations(&temp_db.url())?;
    let store = PostgresStoreConfig::new(temp_db.url())
        .with_pool_size(1)
        .connect()?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(Some(PreparedStore {
        rt,
        context: RecordContext::new(Arc::new(store), Arc::new(DefaultClock)),
        temp_db,
    }))
}

/// Creates an email message for course 1 by user 1.
///
/// # Errors
///
/// Returns an error if validation or the insert fails.
pub fn create_message(prepared: &PreparedStore) -> Result<Message, BoxError> {
    Ok(prepared.rt.block_on(Message::create(
        &prepared.context,
        NewMessage::new(CourseId::new(1), UserId::new(1), OutputChannel::Email),
    ))?)
}
