use anyhow::Result;
use colored::Colorize;
use ped::backup_manager::BackupManager;
use ped::cli::{self, Args};
use ped::config;
use ped::error::{ErrorKind, PedError};
use ped::file_processor::{FileProcessor, Source};
use ped::logger;
use ped::pipeline::Pipeline;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = config::load_config();
    let args = cli::parse_args(&config);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (kind, message) = match err.downcast_ref::<PedError>() {
                Some(ped_err) => (ped_err.kind, ped_err.message.clone()),
                None => {
                    let other = PedError::other(err.as_ref());
                    (other.kind, other.message)
                }
            };
            report(kind, &message);
            ExitCode::from(u8::try_from(kind.exit_code()).unwrap_or(1))
        }
    }
}

fn report(kind: ErrorKind, message: &str) {
    eprintln!("{} {}: {}", "ped:".bold(), kind.label().red().bold(), message);
}

fn run(args: Args) -> Result<()> {
    if args.init_config {
        return init_config();
    }

    if let Some(log_path) = logger::init_debug_logging(args.debug)? {
        tracing::info!(path = %log_path.display(), "debug logging enabled");
    }

    // Every command is parsed before any input is read
    let pipeline = Pipeline::parse(&args.commands, args.match_options)?;
    tracing::debug!(commands = pipeline.commands().len(), "pipeline ready");
    let processor = FileProcessor::new(pipeline, args.render.clone());

    match (&args.source, args.in_place) {
        (Source::File(path), true) => {
            let backups = args
                .backup_dir
                .as_ref()
                .map(|dir| BackupManager::with_directory(dir))
                .transpose()?;
            if let Some(backup) = processor.apply_in_place(path, backups.as_ref())? {
                tracing::info!(backup = %backup.display(), "original saved");
            }
        }
        (source, _) => {
            let output = processor.process_source(source)?;
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| PedError::io(format!("Failed to write output: {}", e)))?;
        }
    }

    Ok(())
}

fn init_config() -> Result<()> {
    let path = config::config_file_path()
        .ok_or_else(|| anyhow::anyhow!("Cannot determine config file location"))?;
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }
    config::save_default_config(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}
