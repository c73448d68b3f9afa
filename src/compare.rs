use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::Profile;

/// Which side of a comparison won a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Followers,
    Following,
    PublicRepos,
    AccountAgeDays,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Metric::Followers => "Followers",
            Metric::Following => "Following",
            Metric::PublicRepos => "Public repositories",
            Metric::AccountAgeDays => "Account age (days)",
        };
        f.write_str(label)
    }
}

/// One metric row of a profile comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRow {
    pub metric: Metric,
    pub first: i64,
    pub second: i64,
    pub winner: Winner,
}

/// Side-by-side comparison of two profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub rows: Vec<MetricRow>,
    pub first_score: u32,
    pub second_score: u32,
}

/// Overall profile score out of 100.
///
/// Followers contribute up to 50 points (one per ten followers), public
/// repositories up to 30 (two per repo), and the follower/following
/// ratio up to 20 (five per unit of ratio).
pub fn overall_score(profile: &Profile) -> u32 {
    let follower_score = (profile.followers as f64 / 10.0).min(50.0);
    let repo_score = (profile.public_repos as f64 * 2.0).min(30.0);
    let ratio_score = (profile.follower_ratio() * 5.0).min(20.0);
    (follower_score + repo_score + ratio_score).round() as u32
}

/// Whole days the account has existed at `now`.
pub fn account_age_days(profile: &Profile, now: DateTime<Utc>) -> i64 {
    (now - profile.created_at).num_days()
}

/// Compares two profiles metric by metric.
pub fn compare(first: &Profile, second: &Profile, now: DateTime<Utc>) -> Comparison {
    let rows = vec![
        row(Metric::Followers, first.followers as i64, second.followers as i64),
        row(Metric::Following, first.following as i64, second.following as i64),
        row(
            Metric::PublicRepos,
            first.public_repos as i64,
            second.public_repos as i64,
        ),
        row(
            Metric::AccountAgeDays,
            account_age_days(first, now),
            account_age_days(second, now),
        ),
    ];
    Comparison {
        rows,
        first_score: overall_score(first),
        second_score: overall_score(second),
    }
}

fn row(metric: Metric, first: i64, second: i64) -> MetricRow {
    let winner = match first.cmp(&second) {
        std::cmp::Ordering::Greater => Winner::First,
        std::cmp::Ordering::Less => Winner::Second,
        std::cmp::Ordering::Equal => Winner::Tie,
    };
    MetricRow {
        metric,
        first,
        second,
        winner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn profile(followers: u64, following: u64, public_repos: u64, created_at: &str) -> Profile {
        Profile {
            login: "someone".to_string(),
            name: None,
            bio: None,
            location: None,
            blog: None,
            avatar_url: String::new(),
            html_url: String::new(),
            followers,
            following,
            public_repos,
            created_at: created_at.parse().unwrap(),
        }
    }

    #[test]
    fn score_components_are_capped() {
        // 10_000 followers, 500 repos, huge ratio: every component maxed.
        let p = profile(10_000, 1, 500, "2010-01-01T00:00:00Z");
        assert_eq!(overall_score(&p), 100);
    }

    #[test]
    fn score_of_empty_profile_is_zero() {
        let p = profile(0, 0, 0, "2020-01-01T00:00:00Z");
        assert_eq!(overall_score(&p), 0);
    }

    #[test]
    fn ratio_is_zero_when_following_nobody() {
        // 100 followers give 10 points, 5 repos give 10; no ratio points.
        let p = profile(100, 0, 5, "2020-01-01T00:00:00Z");
        assert_eq!(overall_score(&p), 20);
    }

    #[test]
    fn score_is_rounded() {
        // 17 followers -> 1.7, 1 repo -> 2.0, ratio 1.7 -> 8.5; sum 12.2.
        let p = profile(17, 10, 1, "2020-01-01T00:00:00Z");
        assert_eq!(overall_score(&p), 12);
    }

    #[test]
    fn account_age_in_whole_days() {
        let p = profile(0, 0, 0, "2024-01-01T00:00:00Z");
        let now = Utc.with_ymd_and_hms(2024, 1, 11, 12, 0, 0).unwrap();
        assert_eq!(account_age_days(&p, now), 10);
    }

    #[test]
    fn winners_are_resolved_per_metric() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let a = profile(200, 10, 8, "2015-06-01T00:00:00Z");
        let b = profile(50, 10, 40, "2019-06-01T00:00:00Z");
        let cmp = compare(&a, &b, now);
        assert_eq!(cmp.rows[0].winner, Winner::First); // followers
        assert_eq!(cmp.rows[1].winner, Winner::Tie); // following
        assert_eq!(cmp.rows[2].winner, Winner::Second); // repos
        assert_eq!(cmp.rows[3].winner, Winner::First); // older account
    }
}
