//! ram-policy - RAM policy documents from the command line
//!
//! Assembles and decodes RAM policy documents, and checks role trust
//! policies against the live RAM API.

use alicloud_ram::config::{Config, LoggingConfig};
use alicloud_ram::utils::logging::init_logging;
use alicloud_ram::{
    DEFAULT_POLICY_VERSION, DocumentKind, PolicyError, RamClient, Result, TrustValidator,
    assemble_policy_document, assemble_role_policy_document, parse_policy_document,
    parse_role_policy_document, statements_from_values,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ram-policy", version, about = "Assemble, decode and validate RAM policy documents")]
struct Cli {
    /// YAML configuration file (credentials, trust and logging settings)
    #[arg(long, short, global = true, env = "RAM_POLICY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level or filter directives; RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a trust policy allowing principals to assume a role
    RolePolicy {
        /// RAM account or role identifier (repeatable)
        #[arg(long = "ram")]
        ram: Vec<String>,
        /// Service identifier, e.g. ecs.aliyuncs.com (repeatable)
        #[arg(long = "service")]
        service: Vec<String>,
        #[arg(long, default_value = DEFAULT_POLICY_VERSION)]
        policy_version: String,
    },
    /// Assemble an access policy from a JSON array of statement descriptors
    Policy {
        /// File holding `[{"effect": .., "action": [..], "resource": [..]}, ..]`
        #[arg(long)]
        file: PathBuf,
        #[arg(long, default_value = DEFAULT_POLICY_VERSION)]
        policy_version: String,
    },
    /// Decode a trust policy document and print it
    ParseRole { file: PathBuf },
    /// Decode an access policy document and print it
    ParsePolicy { file: PathBuf },
    /// Check that a role's trust policy names the required service
    JudgeRole { role_name: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps the embedded document readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Some(Config::from_file(path).await?),
        None => None,
    };

    let mut logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_else(LoggingConfig::default);
    if let Some(level) = cli.log_level {
        logging.level = level;
    }
    logging.json |= cli.log_json;
    init_logging(&logging)?;

    match cli.command {
        Command::RolePolicy {
            ram,
            service,
            policy_version,
        } => {
            println!(
                "{}",
                assemble_role_policy_document(ram, service, &policy_version)?
            );
        }
        Command::Policy {
            file,
            policy_version,
        } => {
            let content = read_file(&file).await?;
            let values: Vec<serde_json::Value> = serde_json::from_str(&content)
                .map_err(|e| PolicyError::decode(DocumentKind::Policy, e))?;
            let statements = statements_from_values(&values)?;
            println!("{}", assemble_policy_document(&statements, &policy_version)?);
        }
        Command::ParseRole { file } => {
            let policy = parse_role_policy_document(&read_file(&file).await?)?;
            print_pretty(DocumentKind::RolePolicy, &policy)?;
        }
        Command::ParsePolicy { file } => {
            let policy = parse_policy_document(&read_file(&file).await?)?;
            print_pretty(DocumentKind::Policy, &policy)?;
        }
        Command::JudgeRole { role_name } => {
            let config = match config {
                Some(config) => config,
                None => Config::from_env()?,
            };
            let client = RamClient::new(&config.ram)
                .map_err(|e| PolicyError::config(e.to_string()))?;
            let validator = TrustValidator::new(client)
                .with_required_service(config.trust.required_service.clone());

            validator.judge_role_policy_principal(&role_name).await?;
            info!(
                "Role {} trusts {}",
                role_name,
                validator.required_service()
            );
            println!("ok");
        }
    }

    Ok(())
}

async fn read_file(path: &Path) -> Result<String> {
    Ok(tokio::fs::read_to_string(path).await?)
}

fn print_pretty<T: Serialize>(kind: DocumentKind, document: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(document).map_err(|e| PolicyError::encode(kind, e))?;
    println!("{}", json);
    Ok(())
}
