//! padcompat CLI
//!
//! Command-line interface for detecting gamepad support in a game library.

mod cli_types;
mod commands;
mod error;

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use padcompat_lib::settings::{self, Settings};

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

/// Settings and data file locations for one invocation.
pub(crate) struct AppContext {
    pub settings: Settings,
    pub db_path: PathBuf,
    pub overrides_path: PathBuf,
    pub quiet: bool,
}

impl AppContext {
    /// Resolve paths: command-line flag, then settings file, then default.
    fn new(cli: &Cli) -> Self {
        let settings = settings::load_settings(&settings::settings_path());
        for problem in settings.verify() {
            log::warn!("Settings: {}", problem);
        }
        let db_path = cli.db.clone().unwrap_or_else(|| settings.database_path());
        let overrides_path = cli
            .overrides
            .clone()
            .unwrap_or_else(|| settings.overrides_path());
        Self {
            settings,
            db_path,
            overrides_path,
            quiet: cli.quiet,
        }
    }
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Writes everything to stdout and an ANSI-stripped copy to the log file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let level = if cli.quiet {
        LevelFilter::Warn
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    let verbose = cli.verbose;
    builder.format(move |buf, record| {
        if verbose {
            writeln!(
                buf,
                "[{} {:<5}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        } else if record.level() <= log::Level::Warn {
            writeln!(buf, "{}: {}", record.level(), record.args())
        } else {
            writeln!(buf, "{}", record.args())
        }
    });

    match &cli.logfile {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::config(format!("could not start logging: {e}")))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = AppContext::new(&cli);

    match cli.command {
        Commands::Classify {
            catalog,
            game,
            explain,
        } => commands::classify::run_classify(&catalog, game.as_deref(), explain),
        Commands::Detect {
            catalog,
            force,
            workers,
        } => commands::detect::run_detect(&ctx, &catalog, force, workers),
        Commands::Show { catalog, game } => commands::show::run_show(&ctx, &catalog, &game),
        Commands::Set {
            catalog,
            game,
            level,
        } => commands::set::run_set(&ctx, &catalog, &game, level),
        Commands::List { level, source } => {
            commands::list::run_list(&ctx, level, source);
            Ok(())
        }
        Commands::Stats => {
            commands::stats::run_stats(&ctx);
            Ok(())
        }
        Commands::Export { output } => commands::export::run_export(&ctx, &output),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&ctx);
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Init => commands::config::run_config_init(),
        },
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
