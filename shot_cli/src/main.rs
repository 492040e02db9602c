//! `shot`: espresso shot feedback from the command line.

mod cli;
mod error_fmt;
mod render;

use clap::Parser;
use cli::{Cli, Commands, JSON_MODE, ShotArgs};
use eyre::{Result, WrapErr};
use shot_config::Config;
use shot_core::{
    AdvancedMetrics, Feedback, FeedbackOptions, Positive, RoastLevel, ShotSummary, TargetRatio,
    shot_feedback,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(err) = run(cli) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            println!("{}", error_fmt::format_error_json(&err));
        } else {
            eprintln!("{}", error_fmt::humanize(&err));
        }
        std::process::exit(error_fmt::exit_code_for_error(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    color_eyre::install()?;
    let cfg = load_config(&cli.config)?;
    // Dropped when run returns so the file writer flushes before exit.
    let _log_guard = init_tracing(&cli, &cfg.logging)?;
    tracing::debug!(config = %cli.config.display(), "config loaded");

    if matches!(cli.cmd, Commands::ConfigCheck) {
        tracing::info!("config ok");
        if cli.json {
            println!("{}", serde_json::json!({ "config": "ok" }));
        } else {
            println!("Config OK: {}", cli.config.display());
        }
        return Ok(());
    }

    if !cfg.feedback.show_shot_feedback {
        tracing::info!("shot feedback disabled by config");
        if cli.json {
            println!("{}", serde_json::json!({ "disabled": true }));
        } else {
            println!("{}", render::DISABLED);
        }
        return Ok(());
    }

    match cli.cmd {
        Commands::Check { shot, roast_tips } => {
            let opts = options(&cfg, roast_tips);
            let (summary, advanced) = from_args(&shot)?;
            let fb = shot_feedback(&summary, advanced.as_ref(), Some(&opts));
            emit(cli.json, None, fb.as_ref());
        }
        Commands::File { path, roast_tips } => {
            let opts = options(&cfg, roast_tips);
            let file = shot_config::load_shot_file(&path)?;
            file.validate()
                .wrap_err_with(|| format!("invalid shot file {}", path.display()))?;
            let (summary, advanced) = shot_core::conversions::from_shot_file(&file)?;
            let fb = shot_feedback(&summary, advanced.as_ref(), Some(&opts));
            emit(cli.json, None, fb.as_ref());
        }
        Commands::History { path, roast_tips } => {
            let opts = options(&cfg, roast_tips);
            let records = shot_config::load_history_csv(&path)?;
            tracing::info!(rows = records.len(), path = %path.display(), "history loaded");
            for (i, record) in records.iter().enumerate() {
                let summary = ShotSummary::try_from(record)
                    .wrap_err_with(|| format!("history row {}", record.id))?;
                let fb = shot_feedback(&summary, None, Some(&opts));
                if !cli.json && i > 0 {
                    println!();
                }
                emit(cli.json, Some(&record.id), fb.as_ref());
            }
        }
        Commands::ConfigCheck => {}
    }
    Ok(())
}

/// Missing config file means defaults; anything unreadable or invalid is an error.
fn load_config(path: &std::path::Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let cfg = shot_config::load_config(path)?;
    cfg.validate()
        .wrap_err_with(|| format!("invalid configuration in {}", path.display()))?;
    Ok(cfg)
}

fn options(cfg: &Config, roast_tips: bool) -> FeedbackOptions {
    FeedbackOptions {
        roast_type_tips: roast_tips || cfg.feedback.roast_type_tips,
    }
}

fn from_args(a: &ShotArgs) -> Result<(ShotSummary, Option<AdvancedMetrics>)> {
    let roast_level = a
        .roast
        .as_deref()
        .map(str::parse::<RoastLevel>)
        .transpose()?;
    let summary = ShotSummary {
        dose_g: a.dose.and_then(Positive::new),
        target_yield_g: a.target_yield.and_then(Positive::new),
        actual_yield_g: a.actual_yield.and_then(Positive::new),
        target_time_s: a.target_time.and_then(Positive::new),
        actual_time_s: a.actual_time.and_then(Positive::new),
        target_ratio: TargetRatio::from_reading(a.target_ratio),
        has_scale: !a.no_scale,
        roast_level,
    };
    let advanced = (a.peak_pressure.is_some() || a.first_drip.is_some() || a.channeling).then(|| {
        AdvancedMetrics {
            peak_pressure_bar: a.peak_pressure.and_then(Positive::new),
            time_to_first_drip_s: a.first_drip.and_then(Positive::new),
            suspected_channeling: a.channeling.then_some(true),
        }
    });
    Ok((summary, advanced))
}

fn emit(json: bool, id: Option<&str>, fb: Option<&Feedback>) {
    match fb {
        Some(f) => tracing::info!(severity = %f.severity, id, "feedback"),
        None => tracing::info!(id, "no feedback"),
    }
    if json {
        let mut value = render::feedback_json(fb);
        if let (Some(id), Some(obj)) = (id, value.as_object_mut()) {
            obj.insert("id".into(), serde_json::Value::from(id));
        }
        println!("{value}");
    } else {
        if let Some(id) = id {
            println!("#{id}");
        }
        println!("{}", render::render_card(fb));
    }
}

fn init_tracing(
    cli: &Cli,
    logging: &shot_config::Logging,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let console_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    let console = if cli.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_filter(console_filter)
            .boxed()
    };

    let mut guard = None;
    let file_layer = match logging.file.as_deref() {
        Some(file) => {
            let path = std::path::Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| eyre::eyre!("logging.file has no file name: {file}"))?;
            let rotation = match logging.rotation.as_deref().map(str::to_ascii_lowercase) {
                Some(r) if r == "daily" => tracing_appender::rolling::Rotation::DAILY,
                Some(r) if r == "hourly" => tracing_appender::rolling::Rotation::HOURLY,
                _ => tracing_appender::rolling::Rotation::NEVER,
            };
            let appender = tracing_appender::rolling::RollingFileAppender::new(rotation, dir, name);
            let (writer, file_guard) = tracing_appender::non_blocking(appender);
            guard = Some(file_guard);
            let level = logging.level.as_deref().unwrap_or("info");
            Some(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_filter(EnvFilter::try_new(level)?),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()?;
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_without_telemetry_have_no_advanced_metrics() {
        let args = ShotArgs {
            dose: Some(18.0),
            actual_yield: Some(36.0),
            ..ShotArgs::default()
        };
        let (summary, advanced) = from_args(&args).unwrap();
        assert!(summary.has_scale);
        assert!(advanced.is_none());
    }

    #[test]
    fn args_roast_is_parsed() {
        let args = ShotArgs {
            roast: Some("DARK".into()),
            channeling: true,
            ..ShotArgs::default()
        };
        let (summary, advanced) = from_args(&args).unwrap();
        assert_eq!(summary.roast_level, Some(shot_core::RoastLevel::Dark));
        assert_eq!(advanced.unwrap().suspected_channeling, Some(true));
    }

    #[test]
    fn args_unknown_roast_is_typed() {
        let args = ShotArgs {
            roast: Some("cinnamon".into()),
            ..ShotArgs::default()
        };
        let err = from_args(&args).unwrap_err();
        assert_eq!(error_fmt::exit_code_for_error(&err), error_fmt::EXIT_UNKNOWN_ROAST);
    }
}
