use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gh-insights", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find accounts a user follows that do not follow back.
    Analyze {
        /// GitHub username to analyze.
        username: String,
    },
    /// Show follower statistics for a profile.
    Profile {
        /// GitHub username to look up.
        username: String,
    },
    /// Compare two profiles metric by metric.
    Compare {
        /// First GitHub username.
        first: String,
        /// Second GitHub username.
        second: String,
    },
    /// Generate a profile README.md.
    Readme(ReadmeArgs),
}

#[derive(Args, Debug)]
pub struct ReadmeArgs {
    /// Your display name.
    #[arg(long)]
    pub name: Option<String>,

    /// Headline shown under the name.
    #[arg(long)]
    pub title: Option<String>,

    /// Short introduction paragraph.
    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// GitHub handle; enables the stats, widget and visitor sections.
    #[arg(long)]
    pub github: Option<String>,

    #[arg(long)]
    pub linkedin: Option<String>,

    #[arg(long)]
    pub twitter: Option<String>,

    /// Skill to show as an icon; may be repeated.
    #[arg(long = "skill")]
    pub skills: Vec<String>,

    /// Leave out the GitHub stats cards.
    #[arg(long)]
    pub no_stats: bool,

    /// Leave out the trophy and contribution-graph widgets.
    #[arg(long)]
    pub no_widgets: bool,

    /// Where to write the README; stdout when omitted.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
