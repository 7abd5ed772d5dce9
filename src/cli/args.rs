//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::context::Secrets;
use crate::manifest::Profile;

/// Loadout - laptop toolkit certification and provisioning.
#[derive(Debug, Parser)]
#[command(name = "loadout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Profile to scope the tool manifest to
    #[arg(long, global = true, value_enum, default_value_t = Profile::Other)]
    pub profile: Profile,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that every in-scope tool is installed (default)
    Certify(CertifyArgs),

    /// Install missing in-scope tools
    Install(InstallArgs),

    /// List the tools in scope for the selected profile
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `certify` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CertifyArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install` command.
#[derive(Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Automox access key; without it the Automox agent is skipped
    #[arg(long, env = "AUTOMOX_ACCESS_KEY", hide_env_values = true)]
    pub automox_key: Option<String>,

    /// SentinelOne registration token; without it SentinelOne is skipped
    #[arg(long, env = "SENTINELONE_TOKEN", hide_env_values = true)]
    pub sentinelone_token: Option<String>,

    /// Override the SentinelOne package download URL
    #[arg(long)]
    pub sentinelone_link: Option<String>,

    /// Override the downloaded SentinelOne package filename
    #[arg(long)]
    pub sentinelone_pkg_name: Option<String>,
}

impl InstallArgs {
    /// Bundle the secret arguments for the run context.
    pub fn secrets(&self) -> Secrets {
        Secrets {
            automox_key: self.automox_key.clone(),
            sentinelone_token: self.sentinelone_token.clone(),
            sentinelone_link: self.sentinelone_link.clone(),
            sentinelone_pkg_name: self.sentinelone_pkg_name.clone(),
        }
    }
}

// Secret values must never reach logs; debug-print the bundled Secrets,
// which masks them.
impl std::fmt::Debug for InstallArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallArgs")
            .field("secrets", &self.secrets())
            .finish()
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_default_profile() {
        let cli = Cli::try_parse_from(["loadout", "certify"]).unwrap();
        assert_eq!(cli.profile, Profile::Other);
    }

    #[test]
    fn cli_parses_profile_flag() {
        let cli = Cli::try_parse_from(["loadout", "--profile", "engineering", "certify"]).unwrap();
        assert_eq!(cli.profile, Profile::Engineering);
    }

    #[test]
    fn cli_rejects_unknown_profile() {
        let result = Cli::try_parse_from(["loadout", "--profile", "marketing", "certify"]);
        assert!(result.is_err());
    }

    #[test]
    fn install_args_collect_secrets() {
        let cli = Cli::try_parse_from([
            "loadout",
            "install",
            "--automox-key",
            "abc",
            "--sentinelone-token",
            "tok",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Install(args)) => {
                let secrets = args.secrets();
                assert_eq!(secrets.automox_key.as_deref(), Some("abc"));
                assert_eq!(secrets.sentinelone_token.as_deref(), Some("tok"));
                assert!(secrets.sentinelone_link.is_none());
            }
            other => panic!("expected install command, got {:?}", other),
        }
    }

    #[test]
    fn install_args_debug_masks_secret_values() {
        let args = InstallArgs {
            automox_key: Some("super-secret".into()),
            sentinelone_token: Some("token-value".into()),
            ..Default::default()
        };
        let printed = format!("{:?}", args);
        assert!(!printed.contains("super-secret"));
        assert!(!printed.contains("token-value"));
    }

    #[test]
    fn no_subcommand_is_accepted() {
        let cli = Cli::try_parse_from(["loadout"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }
}
