//! Dependent write sequence run when the wizard creates a project

use tracing::{info, warn};

use super::WizardData;
use crate::{
    storage::{Project, Store},
    Result,
};

/// Write the project and its related rows, one awaited call at a time.
///
/// Order: current user, project, settings, keywords (skipped when none are
/// filled), competitors (skipped when none are filled). The first failure
/// ends the sequence and is returned; earlier writes are not undone.
pub async fn submit_project<S: Store>(store: &S, data: &WizardData) -> Result<Project> {
    let user = store.current_user().await.inspect_err(|error| {
        warn!(%error, "no authenticated user; nothing written");
    })?;

    let project = store
        .insert_project(&data.project_row(user.id))
        .await
        .inspect_err(|error| warn!(%error, "project insert failed"))?;
    info!(project_id = %project.id, name = %project.name, "project created");

    store
        .insert_settings(&data.settings_row(project.id))
        .await
        .inspect_err(|error| warn!(project_id = %project.id, %error, "settings insert failed"))?;
    info!(project_id = %project.id, frequency = %data.frequency, "settings saved");

    let keywords = data.keyword_rows(project.id);
    if !keywords.is_empty() {
        store
            .insert_keywords(&keywords)
            .await
            .inspect_err(|error| warn!(project_id = %project.id, %error, "keyword insert failed"))?;
        info!(project_id = %project.id, count = keywords.len(), "keywords saved");
    }

    let competitors = data
        .competitor_rows(project.id)
        .inspect_err(|error| warn!(project_id = %project.id, %error, "competitor rows invalid"))?;
    if !competitors.is_empty() {
        store
            .insert_competitors(&competitors)
            .await
            .inspect_err(|error| {
                warn!(project_id = %project.id, %error, "competitor insert failed")
            })?;
        info!(project_id = %project.id, count = competitors.len(), "competitors saved");
    }

    Ok(project)
}
