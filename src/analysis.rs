use std::collections::HashSet;

use log::info;

use crate::models::Account;

/// Maximum number of unreciprocated accounts kept in a report; bounds
/// rendering cost for accounts following thousands of people.
pub const DISPLAY_CAP: usize = 30;

/// Result of one reciprocity analysis. Derived, read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Total accounts the subject follows.
    pub following: usize,
    /// Total accounts following the subject.
    pub followers: usize,
    /// How many followed accounts do not follow back, before truncation.
    pub not_following_back: usize,
    /// The unreciprocated accounts, in following order, capped at
    /// [`DISPLAY_CAP`] entries.
    pub unreciprocated: Vec<Account>,
}

impl AnalysisReport {
    /// True when the report list was cut short by the display cap.
    pub fn truncated(&self) -> bool {
        self.unreciprocated.len() < self.not_following_back
    }
}

/// Computes which followed accounts do not follow the subject back.
///
/// Membership is tested by login. The output preserves the relative
/// order of the `following` collection and never mutates either input.
pub fn analyze(following: &[Account], followers: &[Account]) -> AnalysisReport {
    let follower_logins: HashSet<&str> = followers.iter().map(|a| a.login.as_str()).collect();

    let mut unreciprocated: Vec<Account> = following
        .iter()
        .filter(|a| !follower_logins.contains(a.login.as_str()))
        .cloned()
        .collect();

    let not_following_back = unreciprocated.len();
    unreciprocated.truncate(DISPLAY_CAP);

    info!(
        "analysis: following={} followers={} not_following_back={}",
        following.len(),
        followers.len(),
        not_following_back
    );

    AnalysisReport {
        following: following.len(),
        followers: followers.len(),
        not_following_back,
        unreciprocated,
    }
}
