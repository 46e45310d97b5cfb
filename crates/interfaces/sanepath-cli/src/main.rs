use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use sanepath_cli::{commands, config_cmd, CliComparer, CliFlavor, OutputFormat, PolicyArgs};
use sanepath_config::{validate_escape_char, ComparerChoice, SettingsStore};
use sanepath_core::{PathFlavor, SanitizePolicy};
use sanepath_infra::ListOptions;
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, env = "SANEPATH_CONFIG_DIR", help = "Read settings from this directory")]
    config_dir: Option<Utf8PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite paths into legal ones
    Sanitize {
        #[command(flatten)]
        policy: PolicyArgs,
        #[arg(long, conflicts_with = "json", help = "Print the segments tab separated")]
        parts: bool,
        #[arg(long)]
        json: bool,
        paths: Vec<String>,
    },
    /// Print paths in file-browser order
    Sort {
        #[arg(long, value_enum)]
        comparer: Option<CliComparer>,
        #[arg(long, value_enum)]
        flavor: Option<CliFlavor>,
        paths: Vec<String>,
    },
    /// List a directory in file-browser order
    Ls {
        path: Utf8PathBuf,
        #[arg(short, long)]
        recursive: bool,
        #[arg(long, requires = "recursive")]
        max_depth: Option<usize>,
        #[arg(short, long, help = "Include dot files")]
        all: bool,
        #[arg(short, long)]
        long: bool,
        #[arg(long, value_enum)]
        comparer: Option<CliComparer>,
    },
    /// Show where untrusted paths land under a root directory
    Resolve {
        root: Utf8PathBuf,
        #[arg(long)]
        escape_char: Option<char>,
        #[arg(long, value_enum)]
        flavor: Option<CliFlavor>,
        paths: Vec<String>,
    },
    /// Manage saved defaults
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    Show,
    Path,
    Set { key: String, value: String },
    Reset,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to install logger")?;

    let store = match &cli.config_dir {
        Some(dir) => SettingsStore::at(dir.as_std_path()),
        None => SettingsStore::new()?,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sanitize {
            policy,
            parts,
            json,
            paths,
        } => {
            let settings = store.load().context("Failed to load settings")?;
            let policy = policy.apply(settings.policy());
            validate_escape_char(policy.escape_char, policy.flavor)?;

            let format = if json {
                OutputFormat::Json
            } else if parts {
                OutputFormat::Parts
            } else {
                OutputFormat::Value
            };
            let inputs = commands::read_inputs(paths, io::stdin().lock())?;
            commands::cmd_sanitize(&mut out, &inputs, policy, format)?;
        }
        Commands::Sort {
            comparer,
            flavor,
            paths,
        } => {
            let settings = store.load().context("Failed to load settings")?;
            let comparer = comparer.map(ComparerChoice::from).unwrap_or(settings.comparer);
            let flavor = flavor.map(PathFlavor::from).unwrap_or(settings.policy.flavor);
            let inputs = commands::read_inputs(paths, io::stdin().lock())?;
            commands::cmd_sort(&mut out, &inputs, comparer, flavor)?;
        }
        Commands::Ls {
            path,
            recursive,
            max_depth,
            all,
            long,
            comparer,
        } => {
            let settings = store.load().context("Failed to load settings")?;
            let options = ListOptions {
                recursive,
                max_depth,
                include_hidden: all || settings.include_hidden,
            };
            let comparer = comparer.map(ComparerChoice::from).unwrap_or(settings.comparer);
            commands::cmd_ls(&mut out, &path, &options, comparer, long)?;
        }
        Commands::Resolve {
            root,
            escape_char,
            flavor,
            paths,
        } => {
            let settings = store.load().context("Failed to load settings")?;
            let mut policy: SanitizePolicy = settings.policy();
            if let Some(c) = escape_char {
                policy.escape_char = c;
            }
            if let Some(f) = flavor {
                policy.flavor = f.into();
            }
            validate_escape_char(policy.escape_char, policy.flavor)?;
            let inputs = commands::read_inputs(paths, io::stdin().lock())?;
            commands::cmd_resolve(&mut out, &root, &inputs, policy)?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_cmd::handle_show(&mut out, &store)?,
            ConfigCommands::Path => config_cmd::handle_path(&mut out, &store)?,
            ConfigCommands::Set { key, value } => {
                config_cmd::handle_set(&store, &key, &value)?;
                writeln!(out, ":: Set {} = {}", key, value)?;
            }
            ConfigCommands::Reset => {
                config_cmd::handle_reset(&store)?;
                writeln!(out, ":: Settings reset to defaults")?;
            }
        },
    }

    Ok(())
}
