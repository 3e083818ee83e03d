//! noc-rbac - inspect and check the NOC dashboard permission catalog
//!
//! # Usage
//!
//! ```bash
//! # May a NOC engineer add clients? (exit code 0 = allowed, 1 = denied)
//! noc-rbac check --role NOC CLIENT_ADD
//!
//! # Role by action table
//! noc-rbac matrix
//!
//! # Effective catalog after config overrides
//! noc-rbac --config config/noc-rbac.yaml catalog --format yaml
//!
//! # Fail when actions used by the UI have no catalog entry
//! noc-rbac validate --reference CLIENT_ADD --reference VLAN_EDIT_DELETE
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use noc_rbac::config::CONFIG_PATH_ENV;
use noc_rbac::utils::logging::init_logging;
use noc_rbac::{Action, Config, RbacSystem, Role, build_info};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "noc-rbac")]
#[command(version)]
#[command(about = "Check and inspect NOC dashboard role permissions")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML configuration file
    #[arg(long, short, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide one role / action pair
    Check {
        /// Role of the caller; omit for a signed-out caller
        #[arg(long, short)]
        role: Option<String>,

        /// Action key, e.g. CLIENT_ADD
        action: String,
    },

    /// Print the decision for every role and action
    Matrix,

    /// Print the effective permission catalog
    Catalog,

    /// Validate configuration and catalog coverage
    Validate {
        /// Action referenced by the UI; repeatable. Defaults to every known action
        #[arg(long = "reference", short = 'r')]
        references: Vec<String>,
    },

    /// Print build information
    Info,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_ref()).await?;
    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Warning: {}", e);
    }

    let rbac =
        RbacSystem::from_config(config.rbac()).context("Failed to build permission catalog")?;

    match cli.command {
        Commands::Check { role, action } => check(&rbac, role.as_deref(), &action, cli.format),
        Commands::Matrix => {
            print_matrix(&rbac, cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Catalog => {
            print_catalog(&rbac, cli.format)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { references } => validate(&rbac, &references),
        Commands::Info => {
            let info = build_info();
            println!("noc-rbac {}", info.version);
            println!("git:   {}", info.git_hash);
            println!("built: {}", info.build_time);
            println!("rustc: {}", info.rust_version);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// File config (when given) with environment overrides on top
async fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let base = match path {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default(),
    };

    base.with_env()
        .context("Invalid environment configuration")
}

fn check(
    rbac: &RbacSystem,
    role: Option<&str>,
    action: &str,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let resolved = Role::resolve(role);
    let granted = rbac.has_access_str(role, action);

    match format {
        OutputFormat::Text => {
            println!(
                "{} {} {}",
                role.unwrap_or("<none>"),
                if granted { "may" } else { "may not" },
                action
            );
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            // Unknown action keys still get an answer, just without detail
            let value = match action.parse::<Action>() {
                Ok(action) => {
                    serde_json::to_value(rbac.check_permission_detailed(resolved, action))?
                }
                Err(_) => serde_json::json!({ "action": action, "granted": granted }),
            };
            print_value(&value, format)?;
        }
    }

    Ok(if granted {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn print_matrix(rbac: &RbacSystem, format: OutputFormat) -> anyhow::Result<()> {
    let matrix = rbac.access_matrix();

    if format != OutputFormat::Text {
        return print_value(&serde_json::to_value(&matrix)?, format);
    }

    let width = Action::ALL
        .iter()
        .map(|a| a.as_str().len())
        .max()
        .unwrap_or(0);

    print!("{:width$}", "", width = width);
    for role in &matrix.roles {
        print!("  {:>9}", role.as_str());
    }
    println!();

    for (action, row) in &matrix.rows {
        print!("{:width$}", action.as_str(), width = width);
        for granted in row {
            print!("  {:>9}", if *granted { "yes" } else { "-" });
        }
        println!();
    }

    Ok(())
}

fn print_catalog(rbac: &RbacSystem, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = rbac.catalog();

    if format != OutputFormat::Text {
        return print_value(&serde_json::to_value(catalog)?, format);
    }

    for (action, roles) in catalog.iter() {
        let names: Vec<&str> = roles.iter().map(|r| r.as_str()).collect();
        println!(
            "{:<20} {:<40} {}",
            action.as_str(),
            names.join(", "),
            action.description()
        );
    }

    Ok(())
}

fn validate(rbac: &RbacSystem, references: &[String]) -> anyhow::Result<ExitCode> {
    let referenced = if references.is_empty() {
        Action::ALL.to_vec()
    } else {
        references
            .iter()
            .map(|raw| raw.parse::<Action>())
            .collect::<Result<Vec<_>, _>>()
            .context("Invalid --reference")?
    };

    debug!("Checking {} referenced action(s)", referenced.len());
    let missing = rbac.catalog().missing_entries(referenced);

    if missing.is_empty() {
        println!("OK: every referenced action has a catalog entry");
        return Ok(ExitCode::SUCCESS);
    }

    for action in &missing {
        println!("MISSING: {} (denied to every role but SUPER_DEV)", action);
    }
    Ok(ExitCode::from(1))
}

fn print_value(value: &serde_json::Value, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        _ => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
