//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{Device, MonitoringFrequency, ProjectId};

/// Service connection flags shared by every command
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Service URL (or set `SUPABASE_URL` env var).
    #[clap(long, global = true)]
    pub url: Option<String>,

    /// Public anon key (or set `SUPABASE_ANON_KEY` env var).
    #[clap(long, global = true)]
    pub anon_key: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AuthCmd {
    /// Sign in with email and password and remember the session.
    Login {
        #[clap(long, short)]
        email: String,

        #[clap(long, short)]
        password: String,

        /// Create the account instead of signing in to an existing one.
        #[clap(long)]
        sign_up: bool,
    },

    /// Sign out and forget the stored session.
    Logout,

    /// Show who is signed in.
    Status,
}

/// Values for the project creation wizard, one flag per form field
#[derive(Debug, Args)]
pub struct NewProjectArgs {
    /// Project name.
    #[clap(long, short)]
    pub name: String,

    /// Website URL to monitor.
    #[clap(long = "website", short = 'w')]
    pub website_url: String,

    /// Keyword to track (repeatable, up to 3): `-k "seo tools" -k "rank tracker"`.
    #[clap(long = "keyword", short = 'k')]
    pub keywords: Vec<String>,

    /// Search location applied to every keyword.
    #[clap(long)]
    pub location: Option<String>,

    /// Device applied to every keyword.
    #[clap(long)]
    pub device: Option<Device>,

    /// Competitor URL (repeatable, up to 3).
    #[clap(long = "competitor", short = 'c')]
    pub competitors: Vec<String>,

    /// Competitor display name, matched to `--competitor` by position.
    /// Blank or missing names default to the URL's hostname.
    #[clap(long = "competitor-name")]
    pub competitor_names: Vec<String>,

    /// How often monitoring runs.
    #[clap(long, short, default_value_t = MonitoringFrequency::Weekly, value_enum)]
    pub frequency: MonitoringFrequency,

    /// Alert when a keyword drops by at least this many positions (1-10).
    #[clap(long, short = 't', default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub alert_threshold: u8,

    /// Do not alert on competitor page changes.
    #[clap(long)]
    pub no_competitor_alerts: bool,

    /// Do not alert when new content gaps are found.
    #[clap(long)]
    pub no_content_gap_alerts: bool,

    /// Walk the wizard and show what would be written without writing it.
    #[clap(long)]
    pub dry_run: bool,

    /// Output the created project as JSON.
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ProjectsCmd {
    /// List projects with keyword, competitor and rank-change counts.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show one project with its keywords, competitors and latest rank changes.
    Show {
        id: ProjectId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Create a project through the six-step wizard.
    New(NewProjectArgs),
}

#[derive(Debug, Parser)]
#[clap(name = "seo-autopilot", about = "SEO Autopilot project dashboard CLI")]
pub struct Autopilot {
    #[clap(flatten)]
    pub service: ServiceArgs,

    /// Show debug logs.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    /// Only show errors.
    #[clap(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage the signed-in session
    Auth {
        #[clap(subcommand)]
        cmd: AuthCmd,
    },

    /// Create and inspect monitored projects
    Projects {
        #[clap(subcommand)]
        cmd: ProjectsCmd,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_new_project() {
        let app = Autopilot::try_parse_from([
            "seo-autopilot",
            "projects",
            "new",
            "--name",
            "Acme",
            "--website",
            "https://acme.com",
            "-k",
            "seo tools",
            "-c",
            "https://x.com",
            "--frequency",
            "daily",
            "--alert-threshold",
            "5",
        ])
        .unwrap();

        match app.command {
            Commands::Projects {
                cmd: ProjectsCmd::New(args),
            } => {
                assert_eq!(args.name, "Acme");
                assert_eq!(args.keywords, vec!["seo tools"]);
                assert_eq!(args.competitors, vec!["https://x.com"]);
                assert_eq!(args.frequency, MonitoringFrequency::Daily);
                assert_eq!(args.alert_threshold, 5);
                assert!(!args.dry_run);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let result = Autopilot::try_parse_from([
            "seo-autopilot",
            "projects",
            "new",
            "-n",
            "Acme",
            "-w",
            "https://acme.com",
            "-t",
            "11",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_show_requires_uuid() {
        assert!(Autopilot::try_parse_from(["seo-autopilot", "projects", "show", "42"]).is_err());

        let app = Autopilot::try_parse_from([
            "seo-autopilot",
            "projects",
            "show",
            "6f1c1f4e-8d4e-4a8e-9a43-0d3b8e2f6c11",
            "--json",
        ])
        .unwrap();
        assert!(matches!(
            app.command,
            Commands::Projects {
                cmd: ProjectsCmd::Show { json: true, .. }
            }
        ));
    }

    #[test]
    fn test_global_service_flags() {
        let app = Autopilot::try_parse_from([
            "seo-autopilot",
            "auth",
            "status",
            "--url",
            "https://abc.supabase.co",
            "-v",
        ])
        .unwrap();
        assert_eq!(app.service.url.as_deref(), Some("https://abc.supabase.co"));
        assert!(app.verbose);
    }
}
