pub mod commands;
pub mod config_cmd;

use clap::{Args, ValueEnum};
use sanepath_config::ComparerChoice;
use sanepath_core::{PathFlavor, SanitizePolicy};

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliFlavor {
    Windows,
    Posix,
}

impl From<CliFlavor> for PathFlavor {
    fn from(f: CliFlavor) -> Self {
        match f {
            CliFlavor::Windows => PathFlavor::Windows,
            CliFlavor::Posix => PathFlavor::Posix,
        }
    }
}

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliComparer {
    Natural,
    NaturalIgnoreCase,
    Ordinal,
    OrdinalIgnoreCase,
}

impl From<CliComparer> for ComparerChoice {
    fn from(c: CliComparer) -> Self {
        match c {
            CliComparer::Natural => ComparerChoice::Natural,
            CliComparer::NaturalIgnoreCase => ComparerChoice::NaturalIgnoreCase,
            CliComparer::Ordinal => ComparerChoice::Ordinal,
            CliComparer::OrdinalIgnoreCase => ComparerChoice::OrdinalIgnoreCase,
        }
    }
}

/// How `sanitize` prints each result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Value,
    Parts,
    Json,
}

/// Sanitization overrides. Anything left unset comes from the saved settings.
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    #[arg(long, help = "Replacement for characters that can't appear in a segment")]
    pub escape_char: Option<char>,
    #[arg(long, help = "Escape a leading drive letter like any other segment")]
    pub no_drive_letter: bool,
    #[arg(long, help = "Drop '.' segments")]
    pub no_current_dir: bool,
    #[arg(long, help = "Drop '..' segments")]
    pub no_parent_dir: bool,
    #[arg(long, help = "Emit the \\\\?\\ prefix for inactivated paths")]
    pub inactivation: bool,
    #[arg(long, help = "Never emit a UNC prefix")]
    pub no_unc: bool,
    #[arg(long, value_enum)]
    pub flavor: Option<CliFlavor>,
}

impl PolicyArgs {
    pub fn apply(&self, base: SanitizePolicy) -> SanitizePolicy {
        let mut policy = base;
        if let Some(c) = self.escape_char {
            policy.escape_char = c;
        }
        if let Some(flavor) = self.flavor {
            policy.flavor = flavor.into();
        }
        if self.no_drive_letter {
            policy.allow_drive_letter = false;
        }
        if self.no_current_dir {
            policy.allow_current_directory = false;
        }
        if self.no_parent_dir {
            policy.allow_parent_directory = false;
        }
        if self.inactivation {
            policy.allow_inactivation = true;
        }
        if self.no_unc {
            policy.allow_unc = false;
        }
        policy
    }
}
