//! Project creation through the wizard.
//!
//! Flag values are typed into the wizard step by step, each step is checked
//! with "Next" exactly as the form would, and the review is printed before
//! anything is written.

use uuid::Uuid;

use crate::{
    cli::NewProjectArgs,
    storage::{MemoryStore, Write},
    supabase::User,
    wizard::{Step, Wizard, WizardError},
    Result, UserId,
};

use super::{projects::handle_list, CommandContext};

/// Fill the wizard from command-line values and advance it to the review step.
///
/// Fails with the first step whose required fields are missing, or when more
/// entries are given than the step has slots.
pub fn build_wizard(args: &NewProjectArgs) -> std::result::Result<Wizard, WizardError> {
    let mut wizard = Wizard::new();

    wizard.set_name(args.name.clone());
    wizard.set_website_url(args.website_url.clone());
    wizard.next()?;

    for (i, keyword) in args.keywords.iter().enumerate() {
        wizard.set_keyword(i, keyword.clone())?;
        if let Some(location) = &args.location {
            wizard.set_keyword_location(i, location.clone())?;
        }
        if let Some(device) = args.device {
            wizard.set_keyword_device(i, device)?;
        }
    }
    wizard.next()?;

    for (i, url) in args.competitors.iter().enumerate() {
        wizard.set_competitor_url(i, url.clone())?;
    }
    if args.competitor_names.len() > args.competitors.len() {
        return Err(WizardError::SlotOutOfRange {
            kind: "competitor name",
            index: args.competitors.len(),
            slots: args.competitors.len(),
        });
    }
    for (i, name) in args.competitor_names.iter().enumerate() {
        wizard.set_competitor_name(i, name.clone())?;
    }
    wizard.next()?;

    wizard.set_frequency(args.frequency);
    wizard.next()?;

    wizard.set_alert_threshold(args.alert_threshold);
    wizard.set_alert_on_competitor_changes(!args.no_competitor_alerts);
    wizard.set_alert_on_new_content_gaps(!args.no_content_gap_alerts);
    wizard.next()?;

    debug_assert_eq!(wizard.step(), Step::Review);
    Ok(wizard)
}

/// One line per write the submission would perform.
pub fn describe_writes(writes: &[Write]) -> Vec<String> {
    writes
        .iter()
        .map(|write| match write {
            Write::Project(p) => format!("projects: {} ({})", p.name, p.website_url),
            Write::Settings(s) => format!(
                "project_settings: {} / alert at {}+",
                s.monitoring_frequency, s.alert_rank_drop_threshold
            ),
            Write::Keywords(rows) => format!(
                "keywords: {}",
                rows.iter()
                    .map(|k| k.keyword.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Write::Competitors(rows) => format!(
                "competitors: {}",
                rows.iter()
                    .map(|c| format!("{} ({})", c.name, c.url))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
        .collect()
}

/// Handle `projects new`
pub async fn handle_new_project(ctx: &CommandContext, args: &NewProjectArgs) -> Result<()> {
    let mut wizard = build_wizard(args)?;

    if !args.json {
        println!("{}", wizard.step());
        print!("{}", wizard.review());
    }

    if args.dry_run {
        let user = ctx.session.as_ref().map(|s| s.user.clone()).unwrap_or(User {
            id: UserId::new(Uuid::nil()),
            email: None,
        });
        let store = MemoryStore::new(user);
        wizard.create(&store).await?;

        println!("Dry run, nothing written. Would write:");
        for line in describe_writes(&store.writes()) {
            println!("  {}", line);
        }
        return Ok(());
    }

    let client = ctx.user_client()?;
    tracing::info!(name = %args.name, "creating project");

    let project = match wizard.create(&client).await {
        Ok(project) => project,
        Err(error) => {
            if let Some(message) = wizard.error() {
                eprintln!("✗ {}", message);
            }
            return Err(error.into());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&project)?);
        return Ok(());
    }

    println!("✓ Project created: {} ({})", project.name, project.id);
    // The project exists now; a failed listing must not read as a failed create.
    if let Err(error) = handle_list(ctx, false).await {
        tracing::warn!(%error, "could not list projects after creation");
    }
    Ok(())
}
