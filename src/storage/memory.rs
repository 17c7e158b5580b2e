//! In-process `Store` that records writes instead of sending them
//!
//! Backs `projects new --dry-run` and the wizard tests. Writes are kept in
//! call order so the dependent sequence can be inspected afterwards.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use super::{
    models::{NewCompetitor, NewKeyword, NewProject, Project, ProjectSettings},
    store::{Store, Table},
};
use crate::{supabase::User, AutopilotError, ProjectId, Result};

/// One accepted call against the store
#[derive(Debug, Clone, PartialEq)]
pub enum Write {
    Project(NewProject),
    Settings(ProjectSettings),
    Keywords(Vec<NewKeyword>),
    Competitors(Vec<NewCompetitor>),
}

impl Write {
    pub fn table(&self) -> Table {
        match self {
            Write::Project(_) => Table::Projects,
            Write::Settings(_) => Table::ProjectSettings,
            Write::Keywords(_) => Table::Keywords,
            Write::Competitors(_) => Table::Competitors,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    user: Option<User>,
    fail_on: Mutex<Option<Table>>,
    writes: Mutex<Vec<Write>>,
    attempts: Mutex<Vec<Table>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryStore {
    /// Store acting as `user`.
    pub fn new(user: User) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    /// Store with nobody signed in; every submission stops at the user check.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Reject every write to `table` with a service-style error.
    pub fn failing_on(self, table: Table) -> Self {
        self.set_failure(Some(table));
        self
    }

    pub fn set_failure(&self, table: Option<Table>) {
        *lock(&self.fail_on) = table;
    }

    /// Accepted writes in call order.
    pub fn writes(&self) -> Vec<Write> {
        lock(&self.writes).clone()
    }

    /// Every table a write was attempted on, including rejected ones.
    pub fn attempts(&self) -> Vec<Table> {
        lock(&self.attempts).clone()
    }

    /// Number of project rows written so far.
    pub fn project_count(&self) -> usize {
        lock(&self.writes)
            .iter()
            .filter(|w| matches!(w, Write::Project(_)))
            .count()
    }

    fn record(&self, write: Write) -> Result<()> {
        let table = write.table();
        lock(&self.attempts).push(table);
        if *lock(&self.fail_on) == Some(table) {
            return Err(AutopilotError::Api {
                status: 400,
                message: format!("simulated failure writing {}", table.as_str()),
            });
        }
        lock(&self.writes).push(write);
        Ok(())
    }
}

impl Store for MemoryStore {
    async fn current_user(&self) -> Result<User> {
        self.user.clone().ok_or(AutopilotError::NotAuthenticated)
    }

    async fn insert_project(&self, project: &NewProject) -> Result<Project> {
        self.record(Write::Project(project.clone()))?;
        Ok(Project {
            id: ProjectId::new(Uuid::new_v4()),
            user_id: project.user_id,
            name: project.name.clone(),
            website_url: project.website_url.clone(),
            status: project.status.clone(),
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    async fn insert_settings(&self, settings: &ProjectSettings) -> Result<()> {
        self.record(Write::Settings(settings.clone()))
    }

    async fn insert_keywords(&self, keywords: &[NewKeyword]) -> Result<()> {
        self.record(Write::Keywords(keywords.to_vec()))
    }

    async fn insert_competitors(&self, competitors: &[NewCompetitor]) -> Result<()> {
        self.record(Write::Competitors(competitors.to_vec()))
    }
}
