use std::env;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::Parser;

use gh_insights::analysis;
use gh_insights::client::{GithubClient, Relation};
use gh_insights::compare::{self, Winner};
use gh_insights::readme::{catalog_skill, ReadmeProfile, SKILL_CATALOG};
use gh_insights::session::AnalysisSession;

use crate::cli::{Cli, Command, ReadmeArgs};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env variables
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let token: Option<String> = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
    let client = GithubClient::new(token.as_deref()).context("Failed to build HTTP client")?;

    match cli.command {
        Command::Analyze { username } => run_analyze(&client, username.trim()).await,
        Command::Profile { username } => run_profile(&client, username.trim()).await,
        Command::Compare { first, second } => {
            run_compare(&client, first.trim(), second.trim()).await
        }
        Command::Readme(args) => run_readme(args),
    }
}

async fn run_analyze(client: &GithubClient, username: &str) -> Result<()> {
    if username.is_empty() {
        bail!("Please enter a username");
    }

    let mut session = AnalysisSession::default();
    let id = session.begin();

    // Both relations are independent; fetch them in parallel. A failed
    // relation fails the whole analysis, partial pages are never shown.
    let fetched = tokio::try_join!(
        client.fetch_relation(username, Relation::Following),
        client.fetch_relation(username, Relation::Followers),
    );

    let (following, followers) = match fetched {
        Ok(lists) => lists,
        Err(e) => {
            session.fail(id, e.to_string());
            return Err(e).context("Failed to fetch GitHub data");
        }
    };

    session.complete(id, analysis::analyze(&following, &followers));
    let report = session
        .report()
        .context("Analysis produced no report")?;

    println!("@{username}");
    println!("  following:          {}", report.following);
    println!("  followers:          {}", report.followers);
    println!("  not following back: {}", report.not_following_back);

    if report.not_following_back == 0 {
        println!("\nEveryone @{username} follows, follows back.");
        return Ok(());
    }

    println!("\nNot following back:");
    for account in &report.unreciprocated {
        println!(
            "  {:<20} {} ({})",
            account.login,
            account.display_name(),
            account.html_url
        );
    }
    println!(
        "\nshowing {} of {}",
        report.unreciprocated.len(),
        report.not_following_back
    );
    Ok(())
}

async fn run_profile(client: &GithubClient, username: &str) -> Result<()> {
    if username.is_empty() {
        bail!("Please enter a username");
    }

    let profile = client
        .fetch_user(username)
        .await
        .context("Failed to fetch GitHub data")?;

    println!("{} (@{})", profile.display_name(), profile.login);
    if let Some(bio) = &profile.bio {
        println!("  {bio}");
    }
    if let Some(location) = &profile.location {
        println!("  location: {location}");
    }
    if let Some(blog) = profile.blog.as_deref().filter(|b| !b.is_empty()) {
        println!("  website:  {blog}");
    }
    println!("  joined:   {}", profile.created_at.format("%B %e, %Y"));
    println!();
    println!("  followers:    {}", profile.followers);
    println!("  following:    {}", profile.following);
    println!("  public repos: {}", profile.public_repos);
    println!("  ratio:        {:.2}", profile.follower_ratio());
    println!(
        "  account age:  {} days",
        compare::account_age_days(&profile, Utc::now())
    );
    Ok(())
}

async fn run_compare(client: &GithubClient, first: &str, second: &str) -> Result<()> {
    if first.is_empty() || second.is_empty() {
        bail!("Please enter both GitHub usernames");
    }
    if first == second {
        bail!("Please enter different usernames to compare");
    }

    let (a, b) = tokio::try_join!(client.fetch_user(first), client.fetch_user(second))
        .context("Failed to fetch GitHub data")?;

    let result = compare::compare(&a, &b, Utc::now());

    println!("{:<24} {:>12} {:>12}", "", a.login, b.login);
    for row in &result.rows {
        let marker = match row.winner {
            Winner::First => "<",
            Winner::Second => ">",
            Winner::Tie => "=",
        };
        println!(
            "{:<24} {:>12} {:>12}   {marker}",
            row.metric.to_string(),
            row.first,
            row.second
        );
    }
    println!(
        "{:<24} {:>9}/100 {:>9}/100",
        "Overall score", result.first_score, result.second_score
    );

    if result.first_score > result.second_score {
        println!(
            "\n{} wins, {} points ahead",
            a.display_name(),
            result.first_score - result.second_score
        );
    } else if result.second_score > result.first_score {
        println!(
            "\n{} wins, {} points ahead",
            b.display_name(),
            result.second_score - result.first_score
        );
    } else {
        println!("\nIt's a tie!");
    }
    Ok(())
}

fn run_readme(args: ReadmeArgs) -> Result<()> {
    let mut profile = ReadmeProfile {
        name: args.name.unwrap_or_default(),
        title: args.title.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        location: args.location.unwrap_or_default(),
        website: args.website.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        github: args.github.unwrap_or_default(),
        linkedin: args.linkedin.unwrap_or_default(),
        twitter: args.twitter.unwrap_or_default(),
        include_stats: !args.no_stats,
        include_widgets: !args.no_widgets,
        ..Default::default()
    };

    for name in &args.skills {
        let Some(skill) = catalog_skill(name) else {
            let known: Vec<&str> = SKILL_CATALOG.iter().map(|(n, _)| *n).collect();
            bail!(
                "Unknown skill \"{name}\"; known skills: {}",
                known.join(", ")
            );
        };
        if !profile.add_skill(skill) {
            bail!("Skill \"{name}\" is already added");
        }
    }

    let content = profile.render();
    match args.output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
