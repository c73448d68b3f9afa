use crate::analysis::AnalysisReport;

/// Monotonic identifier for one analysis request.
pub type RequestId = u64;

/// Lifecycle of the current analysis.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading {
        id: RequestId,
    },
    Ready {
        id: RequestId,
        report: AnalysisReport,
    },
    Failed {
        id: RequestId,
        message: String,
    },
}

/// State container guarding against interleaved analyses.
///
/// Re-triggering an analysis does not cancel the in-flight one; instead
/// every request gets a fresh id and only the latest id may publish a
/// result, so a slow superseded request can never overwrite the newest
/// subject's outcome.
#[derive(Debug, Default)]
pub struct AnalysisSession {
    latest: RequestId,
    state: SessionState,
}

impl AnalysisSession {
    /// Starts a new request, superseding any in-flight one.
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.state = SessionState::Loading { id: self.latest };
        self.latest
    }

    /// Publishes a result. Returns false and changes nothing when the
    /// request has been superseded.
    pub fn complete(&mut self, id: RequestId, report: AnalysisReport) -> bool {
        if id != self.latest {
            return false;
        }
        self.state = SessionState::Ready { id, report };
        true
    }

    /// Records a failure for the given request, unless superseded.
    pub fn fail(&mut self, id: RequestId, message: impl Into<String>) -> bool {
        if id != self.latest {
            return false;
        }
        self.state = SessionState::Failed {
            id,
            message: message.into(),
        };
        true
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.state {
            SessionState::Ready { report, .. } => Some(report),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(following: usize) -> AnalysisReport {
        AnalysisReport {
            following,
            followers: 0,
            not_following_back: 0,
            unreciprocated: Vec::new(),
        }
    }

    #[test]
    fn completes_latest_request() {
        let mut session = AnalysisSession::default();
        let id = session.begin();
        assert_eq!(session.state(), &SessionState::Loading { id });
        assert!(session.complete(id, report(3)));
        assert_eq!(session.report(), Some(&report(3)));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut session = AnalysisSession::default();
        let first = session.begin();
        let second = session.begin();
        // The slower, superseded request finishes after the newer one.
        assert!(session.complete(second, report(2)));
        assert!(!session.complete(first, report(1)));
        assert_eq!(session.report(), Some(&report(2)));
    }

    #[test]
    fn stale_failure_does_not_clobber_result() {
        let mut session = AnalysisSession::default();
        let first = session.begin();
        let second = session.begin();
        assert!(session.complete(second, report(2)));
        assert!(!session.fail(first, "network error"));
        assert_eq!(session.report(), Some(&report(2)));
    }

    #[test]
    fn failure_of_latest_request_is_recorded() {
        let mut session = AnalysisSession::default();
        let id = session.begin();
        assert!(session.fail(id, "user \"ghost\" not found"));
        assert!(matches!(session.state(), SessionState::Failed { .. }));
        assert_eq!(session.report(), None);
    }
}
