use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ganzhi_rs::{
    BirthInput, ChartReading, CivilDate, CompatibilityResult, DailyFortuneResult, EngineConfig,
    Gender, LunarDate, MajorFortune, PillarBreakdown, RelationshipContext,
    SolarTermEvent,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ganzhi", about = "Sexagenary stem-branch chart CLI")]
struct Cli {
    /// Path to a TOML config file (default: $GANZHI_CONFIG, else built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Local clock time (HH:MM)
    #[arg(long, default_value = "12:00")]
    time: String,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: String,
    /// Interpret --date as a lunisolar date
    #[arg(long)]
    lunar: bool,
    /// Lunar month is the intercalary month
    #[arg(long)]
    leap_month: bool,
    /// Birth city (unknown names fall back to the configured default)
    #[arg(long, default_value = "")]
    city: String,
}

#[derive(Args, Clone)]
struct OtherBirthArgs {
    /// Second person's birth date (YYYY-MM-DD)
    #[arg(long)]
    other_date: String,
    /// Second person's clock time (HH:MM)
    #[arg(long, default_value = "12:00")]
    other_time: String,
    #[arg(long, default_value = "female")]
    other_gender: String,
    #[arg(long)]
    other_lunar: bool,
    #[arg(long)]
    other_leap_month: bool,
    #[arg(long, default_value = "")]
    other_city: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars of a birth moment
    Pillars {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Full chart reading: pillars, elements, strength, useful element
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Compatibility between two birth moments
    Compat {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        other: OtherBirthArgs,
        /// colleague, friend, family, partner or romantic
        #[arg(long, default_value = "friend")]
        context: String,
    },
    /// Ten-year major fortune sequence
    MajorFortune {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Daily fortune for one day or a short range
    Daily {
        #[command(flatten)]
        birth: BirthArgs,
        /// Day to read (YYYY-MM-DD)
        #[arg(long)]
        on: String,
        /// Last day of a range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,
    },
    /// Convert a lunisolar date to Gregorian
    LunarToSolar {
        /// Lunar date (YYYY-MM-DD)
        date: String,
        #[arg(long)]
        leap_month: bool,
    },
    /// Convert a Gregorian date to lunisolar
    SolarToLunar {
        /// Gregorian date (YYYY-MM-DD)
        date: String,
    },
    /// The 24 solar terms of a Gregorian year
    SolarTerms {
        year: i32,
    },
    /// List the built-in city table
    Cities,
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok((year, month, day))
}

fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("expected HH:MM, got {s}"))?;
    let hour: u32 = h.parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = m.parse().map_err(|e| format!("{e}"))?;
    Ok((hour, minute))
}

fn require_date(s: &str) -> (i32, u32, u32) {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

fn require_civil_date(s: &str) -> CivilDate {
    let (y, m, d) = require_date(s);
    CivilDate::new(y, m, d)
}

fn parse_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s}. Use male or female.");
            std::process::exit(1);
        }
    }
}

fn parse_context(s: &str) -> RelationshipContext {
    match s.to_lowercase().as_str() {
        "colleague" => RelationshipContext::Colleague,
        "friend" => RelationshipContext::Friend,
        "family" => RelationshipContext::Family,
        "partner" => RelationshipContext::Partner,
        "romantic" | "lover" => RelationshipContext::Romantic,
        _ => {
            eprintln!(
                "Invalid context: {s}. Use colleague, friend, family, partner or romantic."
            );
            std::process::exit(1);
        }
    }
}

fn birth_input(
    date: &str,
    time: &str,
    gender: &str,
    lunar: bool,
    leap_month: bool,
    city: &str,
) -> BirthInput {
    let (year, month, day) = require_date(date);
    let (hour, minute) = parse_time(time).unwrap_or_else(|e| {
        eprintln!("Invalid time: {e}");
        std::process::exit(1);
    });
    let mut input =
        BirthInput::solar(year, month, day, hour, minute, parse_gender(gender)).with_city(city);
    if lunar {
        input = input.lunar(leap_month);
    }
    input
}

impl BirthArgs {
    fn input(&self) -> BirthInput {
        birth_input(
            &self.date,
            &self.time,
            &self.gender,
            self.lunar,
            self.leap_month,
            &self.city,
        )
    }
}

impl OtherBirthArgs {
    fn input(&self) -> BirthInput {
        birth_input(
            &self.other_date,
            &self.other_time,
            &self.other_gender,
            self.other_lunar,
            self.other_leap_month,
            &self.other_city,
        )
    }
}

fn load_config(path: Option<&PathBuf>) -> EngineConfig {
    let loaded = match path {
        Some(p) => EngineConfig::load(p),
        None => EngineConfig::discover(),
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn or_exit<T>(result: Result<T, ganzhi_rs::GanzhiError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_pillars(b: &PillarBreakdown) {
    println!("Pillars:     {}", b.pillars);
    for (position, p) in b.pillars.iter() {
        println!("  {:<6} {} ({} / {})", position.name(), p.hanzi(), p, p.hangul());
    }
    println!("Solar year:  {}", b.solar_year);
    println!("Sun lon:     {:.4} deg", b.sun_longitude_deg);
    println!("Day date:    {}", b.day_date);
    if b.late_zi {
        println!("Late Zi hour (23:00-24:00)");
    }
}

fn print_chart(r: &ChartReading) {
    println!("Pillars:     {}", r.pillars);
    println!(
        "Corrected:   {} ({:+} min, {})",
        r.instant.corrected, r.instant.offset_minutes, r.instant.location.name
    );
    if !r.city_resolved {
        println!("  (city not found, default location used)");
    }
    println!(
        "Day master:  {} {} ({} {})",
        r.day_master.hanzi(),
        r.day_master.name(),
        r.day_master_polarity.name(),
        r.day_master_element.name()
    );
    let elements: Vec<String> = r
        .elements
        .iter()
        .zip(r.element_percentages)
        .map(|((e, w), (_, pct))| format!("{}={w} ({pct:.0}%)", e.name()))
        .collect();
    println!("Elements:    {} ({})", elements.join(" "), r.balance.name());
    println!("Strength:    {} (support {})", r.strength.name(), r.support);
    println!("Useful:      {}", r.useful_element.name());
    let lacking: Vec<&str> = r.lacking.iter().map(|e| e.name()).collect();
    if !lacking.is_empty() {
        println!("Lacking:     {}", lacking.join(", "));
    }
    for fact in &r.branch_facts {
        let positions: Vec<&str> = fact.positions.iter().map(|p| p.name()).collect();
        let branches: Vec<&str> = fact.branches.iter().map(|b| b.hanzi()).collect();
        println!(
            "  {:?}: {} ({})",
            fact.kind,
            branches.join(""),
            positions.join("/")
        );
    }
}

fn print_compat(r: &CompatibilityResult) {
    println!("A:           {}", r.pillars_a);
    println!("B:           {}", r.pillars_b);
    println!(
        "Score:       {} (raw {}, grade {}, {})",
        r.score,
        r.raw_score,
        r.grade.name(),
        r.context.name()
    );
    for s in &r.sub_scores {
        println!("  {:<14} {}", s.dimension.name(), s.score);
    }
    println!(
        "Day masters: {} / {}",
        r.day_master_relation.0.label(),
        r.day_master_relation.1.label()
    );
    println!("Year branch: {}", r.year_branch_relation.label());
    println!("Day branch:  {}", r.day_branch_relation.label());
    let keys: Vec<&str> = r.advisories.iter().map(|k| k.name()).collect();
    if !keys.is_empty() {
        println!("Advisories:  {}", keys.join(", "));
    }
}

fn print_major(mf: &MajorFortune) {
    println!(
        "Direction:   {} ({} at {}, {:.2} days)",
        mf.direction.name(),
        mf.boundary_term.term.name(),
        mf.boundary_term.utc,
        mf.days_to_term
    );
    println!("Start age:   {}", mf.start_age);
    for p in &mf.pillars {
        println!(
            "  {:>2}. {} age {:>3}-{:<3} {}-{}  {:>3} {}",
            p.order,
            p.pillar.hanzi(),
            p.start_age,
            p.end_age,
            p.start_year,
            p.end_year,
            p.analysis.score,
            p.analysis.grade.name()
        );
    }
}

fn print_daily(d: &DailyFortuneResult) {
    let rels: Vec<&str> = d
        .branch_relations
        .iter()
        .map(|r| r.relation.label())
        .collect();
    println!(
        "{}  {}  {:>3} {:<9} stem: {}  branches: {}",
        d.date,
        d.pillar.hanzi(),
        d.score,
        d.grade.name(),
        d.stem_relation.label(),
        rels.join(", ")
    );
}

fn print_terms(terms: &[SolarTermEvent]) {
    for t in terms {
        println!(
            "{:<12} {:<22} {:>5.1} deg  {} UTC",
            t.term.name(),
            t.term.english_name(),
            t.term.longitude_deg(),
            t.utc
        );
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("GANZHI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = ganzhi_rs::init(load_config(cli.config.as_ref())) {
        eprintln!("Failed to initialize engine: {e}");
        std::process::exit(1);
    }

    match cli.command {
        Commands::Pillars { birth } => {
            let b = or_exit(ganzhi_rs::pillars(&birth.input()));
            if cli.json {
                print_json(&b);
            } else {
                print_pillars(&b);
            }
        }

        Commands::Chart { birth } => {
            let r = or_exit(ganzhi_rs::chart(&birth.input()));
            if cli.json {
                print_json(&r);
            } else {
                print_chart(&r);
            }
        }

        Commands::Compat {
            birth,
            other,
            context,
        } => {
            let ctx = parse_context(&context);
            let r = or_exit(ganzhi_rs::compatibility(&birth.input(), &other.input(), ctx));
            if cli.json {
                print_json(&r);
            } else {
                print_compat(&r);
            }
        }

        Commands::MajorFortune { birth } => {
            let mf = or_exit(ganzhi_rs::major_fortune(&birth.input()));
            if cli.json {
                print_json(&mf);
            } else {
                print_major(&mf);
            }
        }

        Commands::Daily { birth, on, until } => {
            let input = birth.input();
            let start = require_civil_date(&on);
            let days = match until {
                Some(end) => or_exit(ganzhi_rs::daily_fortune_range(
                    &input,
                    start,
                    require_civil_date(&end),
                )),
                None => vec![or_exit(ganzhi_rs::daily_fortune(&input, start))],
            };
            if cli.json {
                print_json(&days);
            } else {
                days.iter().for_each(print_daily);
            }
        }

        Commands::LunarToSolar { date, leap_month } => {
            let (y, m, d) = require_date(&date);
            let solar = or_exit(ganzhi_rs::lunar_to_solar(LunarDate::new(
                y, m, d, leap_month,
            )));
            if cli.json {
                print_json(&solar);
            } else {
                println!("{solar}");
            }
        }

        Commands::SolarToLunar { date } => {
            let lunar = or_exit(ganzhi_rs::solar_to_lunar(require_civil_date(&date)));
            if cli.json {
                print_json(&lunar);
            } else {
                println!("{lunar}");
            }
        }

        Commands::SolarTerms { year } => {
            let terms = or_exit(ganzhi_rs::solar_terms(year));
            if cli.json {
                print_json(&terms);
            } else {
                print_terms(&terms);
            }
        }

        Commands::Cities => {
            if cli.json {
                let rows: Vec<serde_json::Value> = ganzhi_rs::cities()
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "name": c.name,
                            "aliases": c.aliases,
                            "longitude_deg": c.longitude_deg,
                            "utc_offset_minutes": c.utc_offset_minutes,
                        })
                    })
                    .collect();
                print_json(&rows);
            } else {
                for c in ganzhi_rs::cities() {
                    println!(
                        "{:<16} {:>8.2} deg  UTC{:+}:{:02}",
                        c.name,
                        c.longitude_deg,
                        c.utc_offset_minutes / 60,
                        (c.utc_offset_minutes % 60).abs()
                    );
                }
            }
        }
    }
}
