//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up a router over a seeded in-memory database
//! - Helper functions for creating test data

pub mod fixtures;

use std::sync::Arc;

use axum_test::TestServer;

use study_planner_backend::db::Database;
use study_planner_backend::{build_router, AppState};

/// Test context containing the database and a test server.
pub struct TestContext {
    pub db: Arc<Database>,
    pub server: TestServer,
}

impl TestContext {
    /// Create a new test context seeded with [`fixtures::seed`].
    pub fn new() -> Self {
        Self::with_database(Database::from_seed(fixtures::seed()))
    }

    /// Create a test context with an empty database.
    pub fn empty() -> Self {
        Self::with_database(Database::default())
    }

    fn with_database(db: Database) -> Self {
        let db = Arc::new(db);
        let state = AppState { db: db.clone() };
        let server = TestServer::new(build_router(state)).expect("Failed to start test server");
        Self { db, server }
    }
}
