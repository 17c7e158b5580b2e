//! Dashboard views: project listing and project detail.

use serde::Serialize;

use crate::{
    storage::{Competitor, Keyword, Project, ProjectStats, SerpChange, Table},
    supabase::SupabaseClient,
    ProjectId, Result,
};

use super::CommandContext;

/// Rank changes shown on the project detail view
pub const RECENT_CHANGES_LIMIT: usize = 20;

pub const CHANGE_RANK_UP: &str = "rank_up";
pub const CHANGE_RANK_DOWN: &str = "rank_down";

/// One dashboard row: the project and its related row counts
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub stats: ProjectStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub project: Project,
    pub keywords: Vec<Keyword>,
    pub competitors: Vec<Competitor>,
    pub changes: Vec<SerpChange>,
    pub summary: ChangeSummary,
}

/// Rank movements among the loaded changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub improved: usize,
    pub dropped: usize,
}

impl ChangeSummary {
    pub fn from_changes(changes: &[SerpChange]) -> Self {
        let count = |kind: &str| changes.iter().filter(|c| c.change_type == kind).count();
        Self {
            improved: count(CHANGE_RANK_UP),
            dropped: count(CHANGE_RANK_DOWN),
        }
    }
}

/// Counts of keywords, competitors and rank changes for one project.
pub async fn load_project_stats(client: &SupabaseClient, id: ProjectId) -> Result<ProjectStats> {
    Ok(ProjectStats {
        keywords: client.count_for_project(Table::Keywords, id).await?,
        competitors: client.count_for_project(Table::Competitors, id).await?,
        changes: client.count_for_project(Table::SerpChanges, id).await?,
    })
}

/// Every project, newest first, with its counts.
///
/// A project whose counts cannot be loaded is still listed, with zero counts.
pub async fn load_dashboard(client: &SupabaseClient) -> Result<Vec<ProjectSummary>> {
    let projects = client.list_projects().await?;
    let mut summaries = Vec::with_capacity(projects.len());
    for project in projects {
        let stats = load_project_stats(client, project.id)
            .await
            .unwrap_or_else(|error| {
                tracing::warn!(project_id = %project.id, %error, "project counts unavailable");
                ProjectStats::default()
            });
        summaries.push(ProjectSummary { project, stats });
    }
    Ok(summaries)
}

pub async fn load_project_detail(client: &SupabaseClient, id: ProjectId) -> Result<ProjectDetail> {
    let project = client.get_project(id).await?;
    let keywords = client.project_keywords(id).await?;
    let competitors = client.project_competitors(id).await?;
    let changes = client.recent_serp_changes(id, RECENT_CHANGES_LIMIT).await?;

    Ok(ProjectDetail {
        project,
        keywords,
        competitors,
        summary: ChangeSummary::from_changes(&changes),
        changes,
    })
}

/// Handle `projects list`
pub async fn handle_list(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let client = ctx.user_client()?;
    let summaries = load_dashboard(&client).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No projects yet. Create one with `projects new`.");
        return Ok(());
    }

    for summary in &summaries {
        println!("{}", format_summary(summary));
    }
    Ok(())
}

/// Handle `projects show`
pub async fn handle_show(ctx: &CommandContext, id: ProjectId, as_json: bool) -> Result<()> {
    let client = ctx.user_client()?;
    let detail = load_project_detail(&client, id).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        print!("{}", format_detail(&detail));
    }
    Ok(())
}

pub fn format_summary(summary: &ProjectSummary) -> String {
    let p = &summary.project;
    format!(
        "{} {} ({}) [{}] keywords: {} competitors: {} changes: {} created {}",
        p.id,
        p.name,
        p.website_url,
        p.status,
        summary.stats.keywords,
        summary.stats.competitors,
        summary.stats.changes,
        p.created_at.format("%Y-%m-%d"),
    )
}

pub fn format_detail(detail: &ProjectDetail) -> String {
    let p = &detail.project;
    let mut out = format!("{} ({}) [{}]\n", p.name, p.website_url, p.status);

    out.push_str(&format!("Keywords ({})\n", detail.keywords.len()));
    for k in &detail.keywords {
        out.push_str(&format!(
            "  {} · {} · {}\n",
            k.keyword,
            k.location.as_deref().unwrap_or("-"),
            k.device
        ));
    }

    out.push_str(&format!("Competitors ({})\n", detail.competitors.len()));
    for c in &detail.competitors {
        out.push_str(&format!(
            "  {} {}\n",
            c.name.as_deref().unwrap_or("-"),
            c.url
        ));
    }

    if !detail.changes.is_empty() {
        out.push_str(&format!(
            "Rankings improved: {}  Rankings dropped: {}\n",
            detail.summary.improved, detail.summary.dropped
        ));
    }

    out.push_str(&format!("Recent rank changes ({})\n", detail.changes.len()));
    for change in &detail.changes {
        out.push_str(&format!(
            "  {} {} {} {} -> {} ({})\n",
            change.detected_at.format("%Y-%m-%d"),
            change.change_type,
            change.url,
            format_position(change.position_before),
            format_position(change.position_after),
            format_delta(change.position_change),
        ));
    }
    out
}

fn format_position(position: Option<i32>) -> String {
    position.map_or_else(|| "-".to_string(), |p| p.to_string())
}

/// Signed delta, e.g. `+3`, `-2`, or `-` when unknown.
fn format_delta(delta: Option<i32>) -> String {
    match delta {
        Some(d) if d > 0 => format!("+{}", d),
        Some(d) => d.to_string(),
        None => "-".to_string(),
    }
}
