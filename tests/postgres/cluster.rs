//! Test server handle for `PostgreSQL` integration tests.

use diesel::prelude::*;
use rstest::fixture;
use std::sync::OnceLock;

/// Boxed error used by test helpers and bodies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Environment variable holding the URL of a database on the test server.
///
/// The connecting role must be allowed to create databases.
pub const TEST_DATABASE_URL_VAR: &str = "QUICKMAIL_TEST_DATABASE_URL";

static SHARED_CLUSTER: OnceLock<Option<ExternalCluster>> = OnceLock::new();

/// Shared `PostgreSQL` server handle for integration tests.
pub type PostgresCluster = &'static ExternalCluster;

/// `PostgreSQL` server supplied by the test environment.
#[derive(Debug, Clone)]
pub struct ExternalCluster {
    admin_url: String,
}

impl ExternalCluster {
    fn from_env() -> Option<Self> {
        std::env::var(TEST_DATABASE_URL_VAR)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|admin_url| Self { admin_url })
    }

    /// Builds the URL of `database` on the same server, keeping any query
    /// parameters of the configured URL.
    #[must_use]
    pub fn database_url(&self, database: &str) -> String {
        let (base, query) = self
            .admin_url
            .split_once('?')
            .map_or((self.admin_url.as_str(), None), |(base, query)| {
                (base, Some(query))
            });
        let (scheme, rest) = base.split_once("://").unwrap_or(("postgres", base));
        let authority = rest.split_once('/').map_or(rest, |(authority, _)| authority);
        let url = format!("{scheme}://{authority}/{database}");
        query.map_or_else(|| url.clone(), |params| format!("{url}?{params}"))
    }

    /// Creates an empty database, replacing any leftover with the same name.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects either statement.
    pub fn create_database(&self, db_name: &str) -> Result<(), BoxError> {
        self.drop_database(db_name)?;
        let sql = format!("CREATE DATABASE {}", quote_identifier(db_name));
        self.execute_admin_sql(&sql)
    }

    /// Drops a database if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the statement.
    pub fn drop_database(&self, db_name: &str) -> Result<(), BoxError> {
        let sql = format!("DROP DATABASE IF EXISTS {}", quote_identifier(db_name));
        self.execute_admin_sql(&sql)
    }

    fn execute_admin_sql(&self, sql: &str) -> Result<(), BoxError> {
        let mut conn =
            PgConnection::establish(&self.admin_url).map_err(|err| Box::new(err) as BoxError)?;
        diesel::sql_query(sql)
            .execute(&mut conn)
            .map_err(|err| Box::new(err) as BoxError)?;
        Ok(())
    }
}

/// Provides the shared test server, or `None` when none is configured.
#[fixture]
pub fn postgres_cluster() -> Option<PostgresCluster> {
    SHARED_CLUSTER.get_or_init(ExternalCluster::from_env).as_ref()
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
