use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use padcompat_lib::settings::{self, Settings};

use crate::AppContext;
use crate::error::CliError;

fn describe_path(label: &str, path: &std::path::Path) {
    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  {:<14}{} {}",
        label,
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status
    );
}

/// Show the effective settings and data file locations.
pub(crate) fn run_config_show(ctx: &AppContext) {
    log::info!("{}", "padcompat Configuration".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    describe_path("Settings:", &settings::settings_path());
    describe_path("Database:", &ctx.db_path);
    describe_path("Overrides:", &ctx.overrides_path);
    crate::log_blank();

    let s = &ctx.settings;
    log::info!("  auto_detect:  {}", s.auto_detect);
    log::info!("  workers:      {}", s.workers);
    if s.ignored_games.is_empty() {
        log::info!("  ignored:      {}", "none".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        log::info!("  ignored:      {}", s.ignored_games.join(", "));
    }

    let problems = s.verify();
    if !problems.is_empty() {
        crate::log_blank();
        for problem in problems {
            log::warn!("{}", problem);
        }
    }
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Write a default settings file, leaving an existing one alone.
pub(crate) fn run_config_init() -> Result<(), CliError> {
    let path = settings::settings_path();
    if path.exists() {
        log::info!(
            "Settings file already exists: {}",
            path.display().if_supports_color(Stdout, |t| t.cyan())
        );
        return Ok(());
    }
    settings::save_settings(&path, &Settings::default())?;
    log::info!(
        "Wrote default settings to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan())
    );
    Ok(())
}
