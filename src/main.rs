mod cli;

use agriweather::config::{canonical_crop, Config};
use agriweather::export::{self, ExportFormat};
use agriweather::logic::schedule::{validate_efficiency, validate_forecast};
use agriweather::logic::{
    compute_schedule_with, crop_profile, current_requirement, get_analytics_summary,
    try_compute_schedule, try_lookup_coefficient, DepletionTrigger, FixedCadence, PolicyKind,
    SchedulePolicy,
};
use agriweather::models::{
    AnalyticsSummary, CropType, Forecast, ScheduleEntry, ScheduleTotals, Service, Timeframe,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{AnalyticsArgs, Cli, Commands, CropArgs, OutputArgs, RequirementArgs, ScheduleArgs};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Init) => {
            Config::setup_interactive()?;
            Ok(())
        }
        Some(Commands::Check { forecast }) => run_check(&cli, forecast.as_deref()),
        Some(Commands::Crops) => {
            print_crops();
            Ok(())
        }
        Some(Commands::Schedule(args)) => run_schedule(&cli, args),
        Some(Commands::Requirement(args)) => run_requirement(&cli, args),
        Some(Commands::Analytics(args)) => run_analytics(&cli, args),
        None => run_dashboard(&cli),
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("agriweather=debug"),
        _ => EnvFilter::new("agriweather=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load config, falling back to the built-in demo config when none is installed
fn load_config(cli: &Cli) -> Result<Config> {
    if cli.config.is_none() && !Config::exists(None) {
        tracing::warn!("No config.yaml found - using defaults. Run `agriweather init` to create one.");
        return Ok(Config::default());
    }
    let config = Config::load(cli.config.clone())?;
    Ok(config)
}

fn resolve_forecast(config: &Config, arg: Option<&Path>) -> Result<Forecast> {
    let path = arg
        .map(Path::to_path_buf)
        .or_else(|| config.forecast.path.clone())
        .context("No forecast file given. Pass --forecast or set forecast.path in config.yaml")?;
    let forecast = Forecast::load(&path)
        .with_context(|| format!("Failed to load forecast {}", path.display()))?;
    Ok(forecast)
}

struct Selection {
    crop: String,
    stage: String,
    efficiency_percent: f64,
}

fn resolve_selection(config: &Config, args: &CropArgs) -> Selection {
    Selection {
        crop: match args.crop {
            Some(ref crop) => canonical_crop(crop),
            None => config.crop_label(),
        },
        stage: args
            .stage
            .clone()
            .unwrap_or_else(|| config.farm.growth_stage.clone()),
        efficiency_percent: args
            .efficiency
            .unwrap_or_else(|| config.efficiency_percent()),
    }
}

fn build_policy(kind: &str, config: &Config) -> Result<Box<dyn SchedulePolicy>> {
    let kind = PolicyKind::from_str(kind)
        .with_context(|| format!("Unknown policy '{}'; use cadence or balance", kind))?;
    Ok(match kind {
        PolicyKind::Cadence => Box::new(FixedCadence::default()),
        PolicyKind::Balance => Box::new(DepletionTrigger::new(&config.soil_profile())),
    })
}

fn run_check(cli: &Cli, forecast: Option<&Path>) -> Result<()> {
    let config = Config::load(cli.config.clone())?;
    config.validate()?;
    println!("Config: OK");
    println!(
        "  Field: {} ({} / {})",
        config.farm.name, config.farm.crop, config.farm.growth_stage
    );
    println!(
        "  Soil: {} at {:.0}% efficiency",
        config.soil_type(),
        config.efficiency_percent()
    );

    if forecast.is_none() && config.forecast.path.is_none() {
        println!("Forecast: not configured");
        return Ok(());
    }

    let forecast = resolve_forecast(&config, forecast)?;
    validate_forecast(&forecast.days)?;
    println!("Forecast: OK ({} days)", forecast.days.len());
    Ok(())
}

fn print_crops() {
    for crop in CropType::all() {
        let profile = crop_profile(*crop);
        println!(
            "{} ({} day season)",
            crop,
            profile.season_length_days()
        );
        for stage in &profile.stages {
            println!(
                "  {:<30} Kc {:<10} {:>4} days",
                stage.label,
                stage.kc.to_string(),
                stage.duration_days
            );
        }
        println!();
    }
}

fn run_schedule(cli: &Cli, args: &ScheduleArgs) -> Result<()> {
    let config = load_config(cli)?;
    let selection = resolve_selection(&config, &args.crop);
    let forecast = resolve_forecast(&config, args.forecast.as_deref())?;
    let mut policy = build_policy(&args.policy, &config)?;

    let entries = if args.permissive {
        compute_schedule_with(
            policy.as_mut(),
            &selection.crop,
            &selection.stage,
            selection.efficiency_percent,
            &forecast.days,
        )
    } else {
        try_compute_schedule(
            policy.as_mut(),
            &selection.crop,
            &selection.stage,
            selection.efficiency_percent,
            &forecast.days,
        )?
    };

    match output_format(&args.output, &config)? {
        None => {
            println!(
                "{} - {} at {:.0}% efficiency ({})",
                selection.crop,
                selection.stage,
                selection.efficiency_percent,
                policy.name()
            );
            print_schedule_table(&entries);
            Ok(())
        }
        Some(format) => {
            let content = export::export_schedule(&entries, format)?;
            emit(&content, &args.output, &config, cli, "schedule", format)
        }
    }
}

fn run_requirement(cli: &Cli, args: &RequirementArgs) -> Result<()> {
    let config = load_config(cli)?;
    let selection = resolve_selection(&config, &args.crop);

    let eto = match args.eto {
        Some(eto) => eto,
        None => {
            let forecast = resolve_forecast(&config, args.forecast.as_deref())?;
            match forecast.first() {
                Some(today) => today.eto,
                None => bail!("Forecast has no days; pass --eto instead"),
            }
        }
    };
    if !eto.is_finite() || eto < 0.0 {
        bail!("ETo must be a non-negative number, got {}", eto);
    }

    let kc = try_lookup_coefficient(&selection.crop, &selection.stage)?;
    let soil = config
        .soil_profile()
        .with_efficiency(selection.efficiency_percent);
    validate_efficiency(soil.efficiency_percent)?;

    let snapshot = current_requirement(eto, kc, &soil);
    println!("{} - {}", selection.crop, selection.stage);
    println!("  ETo:        {:.1} mm/day", snapshot.eto);
    println!("  Kc:         {:.2}", snapshot.kc);
    println!("  ETc:        {:.1} mm/day", snapshot.etc);
    println!("  Efficiency: {:.0}% ({})", snapshot.efficiency_percent, soil.soil_type);
    println!("  Gross:      {:.1} mm/day", snapshot.gross);
    Ok(())
}

fn run_analytics(cli: &Cli, args: &AnalyticsArgs) -> Result<()> {
    let config = load_config(cli)?;
    if !Timeframe::all().iter().any(|tf| tf.as_str() == args.timeframe) {
        tracing::warn!(
            "Unknown timeframe '{}', showing {}",
            args.timeframe,
            Timeframe::default()
        );
    }
    let summary = get_analytics_summary(&args.timeframe);

    match output_format(&args.output, &config)? {
        None => {
            print_analytics(&summary);
            Ok(())
        }
        Some(format) => {
            let content = export::export_analytics(&summary, format)?;
            emit(&content, &args.output, &config, cli, "analytics", format)
        }
    }
}

fn run_dashboard(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let selection = resolve_selection(&config, &CropArgs::default());
    let user_type = config.display.user_type;
    println!("AgriWeather Pro - {} ({} view)", config.farm.name, user_type);
    println!();

    let forecast = match config.forecast.path {
        Some(_) => Some(resolve_forecast(&config, None)?),
        None => None,
    };

    for service in user_type.services() {
        println!("== {} ==", service);
        let Some(forecast) = forecast.as_ref() else {
            match service {
                Service::Analytics => print_analytics(&get_analytics_summary("Last 30 Days")),
                _ => println!("No forecast configured (set forecast.path in config.yaml)"),
            }
            println!();
            continue;
        };
        match service {
            Service::IrrigationSchedule => {
                let entries = try_compute_schedule(
                    &mut FixedCadence::default(),
                    &selection.crop,
                    &selection.stage,
                    selection.efficiency_percent,
                    &forecast.days,
                )?;
                print_schedule_table(&entries);
            }
            Service::GrossRequirement => match forecast.first() {
                Some(today) => {
                    let kc = try_lookup_coefficient(&selection.crop, &selection.stage)?;
                    let snapshot = current_requirement(today.eto, kc, &config.soil_profile());
                    println!(
                        "ETc {:.1} mm/day, gross requirement {:.1} mm/day at {:.0}% efficiency",
                        snapshot.etc, snapshot.gross, snapshot.efficiency_percent
                    );
                }
                None => println!("Forecast has no days"),
            },
            Service::Analytics => print_analytics(&get_analytics_summary("Last 30 Days")),
        }
        println!();
    }
    Ok(())
}

/// `None` means print a table to the terminal
fn output_format(args: &OutputArgs, config: &Config) -> Result<Option<ExportFormat>> {
    if args.format.eq_ignore_ascii_case("table") {
        if let Some(ref path) = args.output {
            let by_extension = path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(ExportFormat::from_str);
            return Ok(Some(by_extension.unwrap_or(config.export.format)));
        }
        if args.save {
            return Ok(Some(config.export.format));
        }
        return Ok(None);
    }

    match ExportFormat::from_str(&args.format) {
        Some(format) => Ok(Some(format)),
        None => bail!(
            "Unknown format '{}'; use table, csv, json or markdown",
            args.format
        ),
    }
}

fn emit(
    content: &str,
    args: &OutputArgs,
    config: &Config,
    cli: &Cli,
    stem: &str,
    format: ExportFormat,
) -> Result<()> {
    let path: Option<PathBuf> = match (&args.output, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => {
            let dir = config.export_dir(cli.data_dir.as_ref())?;
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            Some(dir.join(format!("{}-{}.{}", stem, stamp, format.extension())))
        }
        (None, false) => None,
    };

    match path {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} export to {}", format, path.display());
            println!("Saved {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn print_schedule_table(entries: &[ScheduleEntry]) {
    println!(
        "{:<16} {:>8} {:>8} {:>10}  {}",
        "Date", "ETc", "Rain", "Irrigation", "Status"
    );
    for e in entries {
        println!(
            "{:<16} {:>8.1} {:>8.1} {:>10.1}  {}",
            e.date, e.etc, e.rain, e.irrigation, e.status
        );
    }
    let totals = ScheduleTotals::from_entries(entries);
    println!(
        "Total: {:.1} mm irrigation on {} day(s), {:.1} mm rain",
        totals.irrigation_mm, totals.irrigation_days, totals.rain_mm
    );
}

fn print_analytics(summary: &AnalyticsSummary) {
    println!("{}", summary.timeframe);
    println!(
        "  Irrigation {:.1} mm, rainfall {:.1} mm, efficiency {:.0}%",
        summary.total_irrigation_mm, summary.total_rainfall_mm, summary.efficiency_percent
    );
    println!(
        "  Applied {:.1} mm, needed {:.1} mm, lost {:.1} mm",
        summary.water_applied_mm, summary.water_needed_mm, summary.water_lost_mm
    );
    println!(
        "  Usage {:.0} m3 vs {:.0} m3 previous ({:.0}% saved)",
        summary.usage.current_period_m3,
        summary.usage.previous_period_m3,
        summary.usage.savings_percent
    );
    for h in &summary.history {
        println!(
            "    {:<8} {:>6.1} mm {:>4} min {:>3.0}%",
            h.date, h.amount_mm, h.duration_minutes, h.efficiency_percent
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_forecast_reports_path() {
        let mut config = Config::default();
        config.forecast.path = Some(PathBuf::from("/nonexistent/forecast.yaml"));

        let err = resolve_forecast(&config, None).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Failed to load forecast /nonexistent/forecast.yaml"));
    }

    #[test]
    fn no_forecast_configured() {
        let err = resolve_forecast(&Config::default(), None).unwrap_err();
        assert!(err.to_string().contains("--forecast"));
    }

    #[test]
    fn selection_canonicalises_crop_names() {
        let config = Config::default();
        let args = CropArgs {
            crop: Some("maize".into()),
            ..CropArgs::default()
        };
        assert_eq!(resolve_selection(&config, &args).crop, "Corn");
        assert_eq!(resolve_selection(&config, &CropArgs::default()).crop, "Almonds");
    }
}
