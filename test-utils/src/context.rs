use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{session::Id, Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Test environment around one in-memory SQLite database.
///
/// The database, the session store on top of it and the default session are all
/// created on first access. Every session handed out shares the one store, so a test
/// can persist a session, keep its id, and reopen it later the way a returning
/// browser would.
pub struct TestContext {
    /// In-memory database, created on first use.
    pub db: Option<DatabaseConnection>,

    /// Default session, created on first use.
    pub session: Option<Session>,

    store: Option<Arc<SqliteStore>>,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            store: None,
        }
    }

    /// Gets or connects the in-memory database.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The database connection
    /// - `Err(TestError::Database)` - Failed to connect
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| uninitialized("database"))
    }

    /// Runs CREATE TABLE statements in order. Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the session store, migrating its table on first use.
    async fn store(&mut self) -> Result<Arc<SqliteStore>, TestError> {
        if let Some(store) = &self.store {
            return Ok(store.clone());
        }

        let pool = self.database().await?.get_sqlite_connection_pool().clone();
        let store = SqliteStore::new(pool);
        store
            .migrate()
            .await
            .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

        let store = Arc::new(store);
        self.store = Some(store.clone());

        Ok(store)
    }

    /// Gets or creates the default session, a fresh one with no id yet.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let session = self.open_session(None).await?;
            self.session = Some(session);
        }

        self.session
            .as_ref()
            .ok_or_else(|| uninitialized("session"))
    }

    /// Opens a session with the given id against the shared store.
    ///
    /// Nothing is loaded until the session is first read. A retired or unknown id
    /// reads as an empty session.
    pub async fn reopen_session(&mut self, id: Id) -> Result<Session, TestError> {
        self.open_session(Some(id)).await
    }

    async fn open_session(&mut self, id: Option<Id>) -> Result<Session, TestError> {
        let store = self.store().await?;

        Ok(Session::new(
            id,
            store,
            Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
        ))
    }

    /// Gets both the database and the default session in one borrow.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(uninitialized("test context")),
        }
    }
}

fn uninitialized(what: &str) -> TestError {
    TestError::Database(sea_orm::DbErr::Custom(format!("{} failed to initialize", what)))
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
