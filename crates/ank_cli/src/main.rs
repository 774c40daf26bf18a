use std::fmt::Display;
use std::path::PathBuf;

use ank_base::dasha::{
    ALL_DASHA_LEVELS, daily_timeline, maha_timeline, monthly_timeline, yearly_timeline,
    yearly_timeline_default,
};
use ank_base::{
    Catalog, CoreNumbers, DashaLevel, DashaPeriod, DashaSnapshot, Language, PersonalCycles,
    asset_vibration, build_grid, compatibility, planes,
};
use ank_config::{NumerologyConfig, load_catalog};
use ank_report::{
    DashaCalendar, DynamicAnalysis, NumerologyReport, ReportInput, ValidatedInput, build_report,
    dynamic_summary, foundational_prompt, report_on, story_prompt,
};
use ank_time::{BirthDate, parse_date};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ank", about = "Numerology grid and dasha period CLI")]
struct Cli {
    /// TOML settings file (overrides ANK_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Output language: en, hi, en-hi
    #[arg(long, global = true)]
    lang: Option<Language>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Basic and Destiny numbers for a birth date
    Core {
        /// Birth date (DD/MM/YYYY, DD-MM-YYYY or YYYY-MM-DD)
        dob: String,
    },
    /// Kundli digit grid with plane analysis
    Grid {
        /// Birth date
        dob: String,
    },
    /// Full foundational report: grid, recurring numbers and yogas
    Report {
        /// Person's name (2-50 letters, English or Hindi)
        #[arg(long)]
        name: String,
        /// Birth date
        #[arg(long)]
        dob: String,
        /// Also print the text-generation prompts
        #[arg(long)]
        prompt: bool,
        /// Omit the length limit from the story prompt
        #[arg(long)]
        premium: bool,
    },
    /// Active Maha/Yearly/Monthly/Daily periods on a date
    Dasha {
        /// Birth date
        dob: String,
        /// Query date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List the periods of one dasha level
    Timeline {
        /// Birth date
        dob: String,
        /// Level: maha, yearly, monthly, daily
        #[arg(long, default_value = "maha", value_parser = parse_level)]
        level: DashaLevel,
        /// Year for monthly/daily (default: the current calendar year)
        #[arg(long)]
        year: Option<i32>,
        /// Maximum periods to print
        #[arg(long, default_value = "50")]
        limit: usize,
    },
    /// Overlay the active dasha numbers on the foundational grid
    Overlay {
        /// Birth date
        dob: String,
        /// Query date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Deepest level feeding the grid: maha, yearly, monthly, daily
        #[arg(long, default_value = "daily", value_parser = parse_level)]
        view: DashaLevel,
        /// Name shown in the report header
        #[arg(long, default_value = "Seeker")]
        name: String,
    },
    /// Personal year, month and day numbers
    Cycles {
        /// Birth date
        dob: String,
        /// Query date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Compatibility of two people from their Destiny numbers
    Compat {
        /// First birth date
        dob_a: String,
        /// Second birth date
        dob_b: String,
    },
    /// Single-digit vibration of a house, vehicle or account number
    Vibration {
        /// Any text containing digits
        value: String,
    },
}

fn parse_level(s: &str) -> Result<DashaLevel, String> {
    let key = s.trim().to_ascii_lowercase();
    ALL_DASHA_LEVELS
        .iter()
        .copied()
        .find(|l| l.key() == key)
        .ok_or_else(|| format!("unknown level: {s} (maha, yearly, monthly, daily)"))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{what}: {e}");
        std::process::exit(1);
    })
}

fn require_dob(s: &str) -> BirthDate {
    let dob = or_exit(parse_date(s), "Invalid birth date");
    if dob.to_naive().is_none() {
        eprintln!("Birth date out of calendar range: {s}");
        std::process::exit(1);
    }
    dob
}

fn query_date(s: Option<&str>) -> NaiveDate {
    match s {
        Some(s) => or_exit(
            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d"),
            "Invalid query date (expected YYYY-MM-DD)",
        ),
        None => Local::now().date_naive(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value), "Failed to encode JSON"));
}

fn format_period(p: &DashaPeriod) -> String {
    format!(
        "{:<8} {} ({} to {}, {} days)",
        p.level.name(),
        p.number,
        p.start,
        p.end,
        p.duration_days(),
    )
}

fn print_snapshot(snapshot: &DashaSnapshot) {
    let periods = snapshot.periods();
    if periods.is_empty() {
        println!("  (no active periods)");
    }
    for p in &periods {
        let indent = "  ".repeat(p.level as usize + 1);
        println!("{indent}{}", format_period(p));
    }
}

fn print_report(report: &NumerologyReport) {
    println!("Numerology Report for {} (born {})\n", report.name, report.dob);
    println!("Basic number:   {}", report.core.basic);
    println!("Destiny number: {}\n", report.core.destiny);
    print_grid(&report.matrix);
    for p in &report.planes {
        println!("{:<9} plane: {} ({}/3)", p.plane.name(), p.status.name(), p.present);
    }
    println!("\n{}\n", report.grid_summary);

    println!("Recurring numbers:");
    if report.recurrences.is_empty() {
        println!("  (none)");
    }
    for r in &report.recurrences {
        println!("  {} x{}: {}", r.digit, r.occurrences, r.influence);
    }
    println!("\nYogas:");
    if report.yogas.is_empty() {
        println!("  (none)");
    }
    for y in &report.yogas {
        println!("  {}: {}", y.name, y.description);
        if !y.traits.is_empty() {
            println!("    traits: {}", y.traits.join(", "));
        }
    }
    println!(
        "\nRemedies (personal year {}, month {} on {}):",
        report.cycles.year, report.cycles.month, report.cycles.on
    );
    if report.remedies.is_empty() {
        println!("  (none)");
    }
    for r in &report.remedies {
        println!("  {}: {}", r.title, r.text);
    }
}

fn print_list(label: &str, items: &[String]) {
    if !items.is_empty() {
        println!("{label}:");
        for item in items {
            println!("  - {item}");
        }
    }
}

fn print_grid(matrix: &[[u32; 3]; 3]) {
    for (row, digits) in matrix.iter().zip(ank_base::LO_SHU_LAYOUT) {
        let cells: Vec<String> = row
            .iter()
            .zip(digits)
            .map(|(count, digit)| {
                if *count == 0 {
                    " - ".to_string()
                } else {
                    format!("{:>3}", digit.to_string().repeat(*count as usize))
                }
            })
            .collect();
        println!("  | {} |", cells.join(" | "));
    }
    println!();
}

fn load(cli: &Cli) -> (NumerologyConfig, Catalog) {
    let mut config = or_exit(NumerologyConfig::load(cli.config.as_deref()), "Failed to load config");
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    let catalog = or_exit(load_catalog(&config), "Failed to load catalogs");
    tracing::debug!(
        yogas = catalog.yogas.len(),
        horizon = config.horizon_years,
        "configuration ready"
    );
    (config, catalog)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Core { dob } => {
            let dob = require_dob(dob);
            let (config, _) = load(&cli);
            let core = CoreNumbers::with_masters(&dob, config.preserve_master_numbers);
            if cli.json {
                print_json(&core);
            } else {
                println!("Birth date:     {dob}");
                println!("Basic number:   {}", core.basic);
                println!("Destiny number: {}", core.destiny);
            }
        }
        Commands::Grid { dob } => {
            let dob = require_dob(dob);
            let (config, _) = load(&cli);
            let grid = build_grid(&dob, config.preserve_master_numbers);
            let plane_reports = planes(&grid.histogram);
            if cli.json {
                print_json(&serde_json::json!({
                    "grid": grid,
                    "matrix": grid.matrix(),
                    "planes": plane_reports,
                }));
            } else {
                println!(
                    "Kundli grid for {dob} (basic {}, destiny {})\n",
                    grid.core.basic, grid.core.destiny
                );
                print_grid(&grid.matrix());
                for p in &plane_reports {
                    println!("{:<9} plane: {}", p.plane.name(), p.status.name());
                }
            }
        }
        Commands::Report {
            name,
            dob,
            prompt,
            premium,
        } => {
            let (config, catalog) = load(&cli);
            let report = or_exit(
                build_report(&ReportInput::new(name.as_str(), dob.as_str()), &catalog, &config),
                "Error",
            );
            let foundational = prompt.then(|| foundational_prompt(&report)).flatten();
            let story = prompt.then(|| story_prompt(&report.name, &report.core, config.language, *premium));
            if cli.json {
                print_json(&serde_json::json!({
                    "report": report,
                    "foundational_prompt": foundational,
                    "story_prompt": story,
                }));
            } else {
                print_report(&report);
                if let Some(p) = foundational {
                    println!("\n--- Foundational prompt ---\n{p}");
                }
                if let Some(p) = story {
                    println!("\n--- Story prompt ---\n{p}");
                }
            }
        }
        Commands::Dasha { dob, date } => {
            let dob = require_dob(dob);
            let date = query_date(date.as_deref());
            let (config, _) = load(&cli);
            let calendar = DashaCalendar::new(dob, &config.tiler_config());
            let snapshot = calendar.snapshot(date);
            if cli.json {
                print_json(&snapshot);
            } else {
                println!("Dasha Snapshot at {date} for birth {dob}\n");
                print_snapshot(&snapshot);
            }
        }
        Commands::Timeline {
            dob,
            level,
            year,
            limit,
        } => {
            let dob = require_dob(dob);
            let (config, _) = load(&cli);
            let tiler = config.tiler_config();
            let dasha_year = year.unwrap_or_else(|| Local::now().year());
            let periods = match level {
                DashaLevel::Maha => maha_timeline(&dob, &tiler),
                DashaLevel::Yearly => match year {
                    Some(y) => yearly_timeline(&dob, *y, *y),
                    None => yearly_timeline_default(&dob, &tiler),
                },
                DashaLevel::Monthly => monthly_timeline(&dob, dasha_year),
                DashaLevel::Daily => daily_timeline(&dob, dasha_year),
            };
            tracing::info!(dasha_level = level.key(), count = periods.len(), "timeline built");
            if cli.json {
                print_json(&periods);
            } else {
                println!("{} timeline for birth {dob} ({} periods)\n", level.name(), periods.len());
                let shown = periods.len().min(*limit);
                for p in &periods[..shown] {
                    println!("  [{}] {}", p.order, format_period(p));
                }
                if periods.len() > shown {
                    println!("  ... and {} more periods", periods.len() - shown);
                }
            }
        }
        Commands::Overlay {
            dob,
            date,
            view,
            name,
        } => {
            let dob = require_dob(dob);
            let date = query_date(date.as_deref());
            let (config, catalog) = load(&cli);
            let input = ValidatedInput {
                name: name.clone(),
                dob,
            };
            let report = report_on(&input, &catalog, &config, date);
            let calendar = DashaCalendar::new(dob, &config.tiler_config());
            let analysis = DynamicAnalysis::compute(
                &report,
                &calendar,
                &catalog,
                date,
                *view,
                &config.recurrence_options(),
            );
            let summary = dynamic_summary(&analysis);
            if cli.json {
                print_json(&serde_json::json!({
                    "analysis": analysis,
                    "summary": summary,
                }));
            } else {
                println!("Dynamic grid for {dob} on {date} ({} view)\n", view.name());
                print_snapshot(&analysis.snapshot);
                println!();
                let counts = analysis.histogram;
                let matrix = ank_base::LO_SHU_LAYOUT.map(|row| row.map(|d| counts.get(d)));
                print_grid(&matrix);
                for f in &analysis.yogas {
                    let by: Vec<&str> = f.formed_by.iter().map(|l| l.key()).collect();
                    println!("  formed: {} (via {})", f.yoga.name, by.join(", "));
                }
                println!("{summary}");
            }
        }
        Commands::Cycles { dob, date } => {
            let dob = require_dob(dob);
            let date = query_date(date.as_deref());
            let cycles = PersonalCycles::on(&dob, date);
            if cli.json {
                print_json(&cycles);
            } else {
                println!("Personal cycles for {dob} on {date}");
                println!("  Year:  {}", cycles.year);
                println!("  Month: {}", cycles.month);
                println!("  Day:   {}", cycles.day);
            }
        }
        Commands::Compat { dob_a, dob_b } => {
            let a = require_dob(dob_a);
            let b = require_dob(dob_b);
            let (config, catalog) = load(&cli);
            let result = compatibility(&a, &b, &catalog.compatibility, config.language);
            if cli.json {
                print_json(&result);
            } else {
                println!("Compatibility {a} / {b} (destiny pair {})\n", result.key);
                println!("{}\n", result.summary);
                print_list("Strengths", &result.strengths);
                print_list("Frictions", &result.frictions);
                print_list("Remedies", &result.remedies);
                println!("Auspicious days: {}", result.auspicious_days.join(", "));
                println!("Favorable colors: {}", result.favorable_colors.join(", "));
            }
        }
        Commands::Vibration { value } => match asset_vibration(value) {
            Some(n) if cli.json => print_json(&serde_json::json!({ "value": value, "vibration": n })),
            Some(n) => println!("{value} vibrates as {n}"),
            None => {
                eprintln!("No digits in {value:?}");
                std::process::exit(1);
            }
        },
    }
}
