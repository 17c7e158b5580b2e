//! The write boundary the project wizard goes through

use super::models::{Competitor, Keyword, NewCompetitor, NewKeyword, NewProject, Project, ProjectSettings, SerpChange};
use crate::{
    supabase::{Query, SupabaseClient, User},
    ProjectId, Result,
};

/// Collections read or written by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Projects,
    ProjectSettings,
    Keywords,
    Competitors,
    SerpChanges,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Projects => "projects",
            Table::ProjectSettings => "project_settings",
            Table::Keywords => "keywords",
            Table::Competitors => "competitors",
            Table::SerpChanges => "serp_changes",
        }
    }
}

/// Insert-one-row-into-collection contract used by the wizard.
///
/// Every call is independent: there is no transaction spanning calls.
#[allow(async_fn_in_trait)]
pub trait Store {
    /// The signed-in user new projects belong to.
    async fn current_user(&self) -> Result<User>;

    async fn insert_project(&self, project: &NewProject) -> Result<Project>;

    async fn insert_settings(&self, settings: &ProjectSettings) -> Result<()>;

    /// One request for all rows.
    async fn insert_keywords(&self, keywords: &[NewKeyword]) -> Result<()>;

    /// One request for all rows.
    async fn insert_competitors(&self, competitors: &[NewCompetitor]) -> Result<()>;
}

impl Store for SupabaseClient {
    async fn current_user(&self) -> Result<User> {
        self.get_user().await
    }

    async fn insert_project(&self, project: &NewProject) -> Result<Project> {
        self.insert_one(Table::Projects.as_str(), project).await
    }

    async fn insert_settings(&self, settings: &ProjectSettings) -> Result<()> {
        self.insert_many(Table::ProjectSettings.as_str(), std::slice::from_ref(settings))
            .await
    }

    async fn insert_keywords(&self, keywords: &[NewKeyword]) -> Result<()> {
        self.insert_many(Table::Keywords.as_str(), keywords).await
    }

    async fn insert_competitors(&self, competitors: &[NewCompetitor]) -> Result<()> {
        self.insert_many(Table::Competitors.as_str(), competitors).await
    }
}

/// Read-only dashboard queries
impl SupabaseClient {
    /// All projects visible to the user, newest first.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let query = Query::new().order_by("created_at", false);
        self.select(Table::Projects.as_str(), &query).await
    }

    pub async fn get_project(&self, id: ProjectId) -> Result<Project> {
        let query = Query::new().eq("id", id);
        self.select_single(Table::Projects.as_str(), &query).await
    }

    pub async fn project_keywords(&self, id: ProjectId) -> Result<Vec<Keyword>> {
        let query = Query::new().eq("project_id", id).order_by("created_at", false);
        self.select(Table::Keywords.as_str(), &query).await
    }

    pub async fn project_competitors(&self, id: ProjectId) -> Result<Vec<Competitor>> {
        let query = Query::new().eq("project_id", id).order_by("created_at", false);
        self.select(Table::Competitors.as_str(), &query).await
    }

    /// Latest rank changes, newest first.
    pub async fn recent_serp_changes(&self, id: ProjectId, limit: usize) -> Result<Vec<SerpChange>> {
        let query = Query::new()
            .eq("project_id", id)
            .order_by("detected_at", false)
            .limit(limit);
        self.select(Table::SerpChanges.as_str(), &query).await
    }

    /// Rows in `table` belonging to the project.
    pub async fn count_for_project(&self, table: Table, id: ProjectId) -> Result<u64> {
        let query = Query::new().select("id").eq("project_id", id);
        self.count(table.as_str(), &query).await
    }
}
