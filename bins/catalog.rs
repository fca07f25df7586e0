use std::process::ExitCode;

use configs::AppConfig;
use dotenvy::dotenv;
use service::seed::{BundledSeed, FileSeed, SeedSource};
use service::storage::JsonSettingsStore;
use service::{LicenseCatalogService, SeedOutcome};
use tracing::{error, info, warn};

const USAGE: &str = "usage: license-catalog <command>
  list                              print all identifiers
  show <id>                         print one license
  add <id> <name> <status>          add a license
  update <id> <name> <status>       change name and status
  delete <id>                       remove a license";

enum Command {
    List,
    Show(String),
    Add { id: String, name: String, status: String },
    Update { id: String, name: String, status: String },
    Delete(String),
}

fn parse_args(args: &[String]) -> Option<Command> {
    let cmd = match args {
        [] => Command::List,
        [c] if c == "list" => Command::List,
        [c, id] if c == "show" => Command::Show(id.clone()),
        [c, id] if c == "delete" => Command::Delete(id.clone()),
        [c, id, name, status] if c == "add" => {
            Command::Add { id: id.clone(), name: name.clone(), status: status.clone() }
        }
        [c, id, name, status] if c == "update" => {
            Command::Update { id: id.clone(), name: name.clone(), status: status.clone() }
        }
        _ => return None,
    };
    Some(cmd)
}

/// Config file is optional; defaults plus env overrides apply when it is absent.
fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) if e.downcast_ref::<std::io::Error>().is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound) => {
            let mut cfg = AppConfig::default();
            cfg.normalize_and_validate()?;
            Ok(cfg)
        }
        Err(e) => Err(e),
    }
}

fn run(cfg: &AppConfig, command: Command) -> anyhow::Result<bool> {
    let catalog = &cfg.catalog;
    service::runtime::ensure_env(&catalog.data_dir(), catalog.seed_file.as_deref())?;

    let store = JsonSettingsStore::open(&catalog.settings_file)?;
    let seed: Box<dyn SeedSource> = match &catalog.seed_file {
        Some(path) => Box::new(FileSeed::new(path)),
        None => Box::new(BundledSeed),
    };
    let svc = LicenseCatalogService::new(store, catalog.license_key.as_str(), seed.as_ref())?;

    match svc.seed_outcome() {
        SeedOutcome::AlreadyPresent => {}
        SeedOutcome::Seeded { entries } => {
            info!(event = "seeded", seed = seed.name(), entries, "catalog initialised from seed list");
        }
        SeedOutcome::Unavailable { reason } => {
            warn!(event = "seed_unavailable", seed = seed.name(), %reason, "catalog left unseeded");
        }
    }

    let applied = match command {
        Command::List => {
            println!("{}", svc.list_identifiers()?);
            true
        }
        Command::Show(id) => match svc.find(&id)? {
            Some(l) => {
                println!("{}\t{}\t{}", l.identifier, l.name, l.status);
                true
            }
            None => false,
        },
        Command::Add { id, name, status } => svc.add_license(&name, &id, &status)?,
        Command::Update { id, name, status } => svc.update_license(&id, &name, &status)?,
        Command::Delete(id) => svc.delete_license(&id)?,
    };
    Ok(applied)
}

fn main() -> ExitCode {
    dotenv().ok();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let cfg = load_config();
    let format = cfg.as_ref().map(|c| c.logging.format.as_str()).unwrap_or("compact");
    common::utils::logging::init_logging(format);

    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        event = "start",
        settings_file = %cfg.catalog.settings_file,
        key = %cfg.catalog.license_key,
        version = env!("CARGO_PKG_VERSION"),
        "license catalog starting"
    );

    match run(&cfg, command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            warn!(event = "not_applied", "operation did not apply (unknown or duplicate identifier)");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(event = "run_failed", error = %e, "license catalog command failed");
            ExitCode::FAILURE
        }
    }
}
