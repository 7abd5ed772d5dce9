//! Per-run context.
//!
//! A [`RunContext`] is built once from the CLI arguments and passed
//! immutably through verification and installation. Counters and results
//! live in the reports, never in process-wide state.

use std::fmt;

use crate::manifest::Profile;

/// Immutable context for one invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Profile selected for this run.
    pub profile: Profile,

    /// Optional secrets for the gated security-agent installers.
    pub secrets: Secrets,
}

impl RunContext {
    /// Create a context with no secrets.
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            secrets: Secrets::default(),
        }
    }

    /// Attach secrets to the context.
    pub fn with_secrets(mut self, secrets: Secrets) -> Self {
        self.secrets = secrets;
        self
    }
}

/// Secrets and options for the commercial security-agent installers.
///
/// Supplied on the command line or via environment variables only; never
/// persisted.
#[derive(Clone, Default)]
pub struct Secrets {
    /// Automox access key. Without it the Automox install is skipped.
    pub automox_key: Option<String>,

    /// SentinelOne registration token. Without it the SentinelOne install
    /// is skipped.
    pub sentinelone_token: Option<String>,

    /// Override for the SentinelOne package download URL.
    pub sentinelone_link: Option<String>,

    /// Override for the downloaded SentinelOne package filename.
    pub sentinelone_pkg_name: Option<String>,
}

impl Secrets {
    /// Whether any secret value is present.
    pub fn any_present(&self) -> bool {
        self.automox_key.is_some() || self.sentinelone_token.is_some()
    }
}

// Secret values must never reach logs, so Debug masks them.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(value: &Option<String>) -> &'static str {
            if value.is_some() {
                "***"
            } else {
                "<none>"
            }
        }
        f.debug_struct("Secrets")
            .field("automox_key", &mask(&self.automox_key))
            .field("sentinelone_token", &mask(&self.sentinelone_token))
            .field("sentinelone_link", &self.sentinelone_link)
            .field("sentinelone_pkg_name", &self.sentinelone_pkg_name)
            .finish()
    }
}
