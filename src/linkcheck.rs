//! Best-effort reachability check for resource links.
//!
//! Runs after a Document is built and only produces warnings; the
//! Document and its rendering never depend on the outcome.

use crate::links;
use crate::model::ResourceLink;
use rayon::prelude::*;
use std::time::Duration;
use tracing::{debug, warn};

/// Outcome of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    Reachable,
    /// The server answered with an error status.
    Unreachable { status: u16 },
    /// No answer: timeout, DNS, TLS, connection refused, ...
    Unknown { reason: String },
}

/// Something that can tell whether a URL answers.
pub trait LinkProbe: Sync {
    fn probe(&self, url: &str) -> LinkStatus;
}

/// HTTP probe with a per-request timeout.
pub struct HttpProbe {
    agent: ureq::Agent,
}

impl HttpProbe {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }

    fn status_of(result: Result<ureq::Response, ureq::Error>) -> LinkStatus {
        match result {
            Ok(_) => LinkStatus::Reachable,
            Err(ureq::Error::Status(status, _)) => LinkStatus::Unreachable { status },
            Err(ureq::Error::Transport(t)) => LinkStatus::Unknown {
                reason: t.to_string(),
            },
        }
    }
}

impl LinkProbe for HttpProbe {
    fn probe(&self, url: &str) -> LinkStatus {
        match Self::status_of(self.agent.head(url).call()) {
            // some servers refuse HEAD
            LinkStatus::Unreachable { status: 405 } => Self::status_of(self.agent.get(url).call()),
            other => other,
        }
    }
}

/// Result for a single resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    pub url: String,
    pub status: LinkStatus,
}

/// Probe every absolute URL in `resources`, logging a warning per
/// unreachable or unknown link. Malformed and relative links are skipped.
pub fn check_links(document: &str, resources: &[ResourceLink], probe: &dyn LinkProbe) -> Vec<LinkReport> {
    let reports: Vec<LinkReport> = resources
        .par_iter()
        .filter_map(|link| link.url.as_deref())
        .filter(|url| links::is_absolute_url(url))
        .map(|url| LinkReport {
            url: url.to_string(),
            status: probe.probe(url),
        })
        .collect();

    for report in &reports {
        match &report.status {
            LinkStatus::Reachable => debug!(document, url = %report.url, "link reachable"),
            LinkStatus::Unreachable { status } => {
                warn!(document, url = %report.url, status, "link unreachable")
            }
            LinkStatus::Unknown { reason } => {
                warn!(document, url = %report.url, %reason, "link could not be checked")
            }
        }
    }

    reports
}
