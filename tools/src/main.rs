//! insights-runner: headless workforce insights runner.
//!
//! Usage:
//!   insights-runner --db records.db --kind employee
//!   insights-runner --demo 40 --seed 12345
//!   insights-runner --db records.db --config insights.json --ipc-mode

use anyhow::Result;
use std::env;
use std::io::{self, BufRead, Write};
use workforce_core::{
    config::InsightsConfig,
    demo::populate_demo,
    insights::{AiInsights, InsightsEngine},
    record::RecordKind,
    rng::AnalysisSlot,
    source::FetchResponse,
    store::{RecordStore, StoreSource},
};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetInsights,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = args
        .windows(2)
        .find(|w| w[0] == "--seed")
        .and_then(|w| w[1].parse::<u64>().ok());
    let demo = parse_arg(&args, "--demo", 0usize);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = flag_value(&args, "--db").unwrap_or(":memory:");
    let kind = RecordKind::parse(flag_value(&args, "--kind").unwrap_or("employee"))?;
    let config = match flag_value(&args, "--config") {
        Some(path) => InsightsConfig::load(path)?,
        None => InsightsConfig::default(),
    };

    if !ipc_mode {
        println!("Workforce insights runner");
        println!("  db:    {db}");
        println!("  kind:  {kind}");
        println!("  seed:  {}", seed.map_or("time".to_string(), |s| s.to_string()));
        println!("  demo:  {demo}");
        println!();
    }

    let store = RecordStore::open(db)?;
    store.migrate()?;

    let engine = InsightsEngine::build(config, seed);

    if demo > 0 {
        let mut rng = engine.rng_bank.for_slot(AnalysisSlot::DemoPopulation);
        populate_demo(&store, &mut rng, kind, demo, engine.clock.now_ms())?;
    }

    let source = StoreSource::new(&store, kind);

    if ipc_mode {
        run_ipc_loop(&engine, &source)?;
    } else {
        let insights = engine.ai_insights(&source);
        print_summary(&store, kind, &insights)?;
        println!();
        println!("{}", serde_json::to_string_pretty(&insights)?);
    }

    Ok(())
}

fn run_ipc_loop(engine: &InsightsEngine, source: &StoreSource<'_>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Invalid IPC command: {e}");
                let reply: FetchResponse<AiInsights> = FetchResponse::failed(e.to_string());
                writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetInsights => {
                let reply = FetchResponse::ok(engine.ai_insights(source));
                writeln!(stdout, "{}", serde_json::to_string(&reply)?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(store: &RecordStore, kind: RecordKind, insights: &AiInsights) -> Result<()> {
    let people = store.person_count(kind)?;
    let departments = store.department_count()?;
    let risk = &insights.turnover_risk;
    let clusters = &insights.performance_clusters;

    println!("=== INSIGHTS SUMMARY ===");
    println!("  {kind} records:   {people}");
    println!("  departments:      {departments}");
    println!(
        "  turnover risk:    {} high / {} medium / {} low",
        risk.high_risk_count, risk.medium_risk_count, risk.low_risk_count
    );
    for (name, count) in clusters.cluster_names.iter().zip(&clusters.cluster_counts) {
        println!("  {name:<18}{count}");
    }
    println!(
        "  salary outliers:  {} over / {} under",
        insights.salary_outliers.overperforming.len(),
        insights.salary_outliers.underperforming.len()
    );
    println!("  optimal team:     {}", insights.team_structure.optimal_team_size);
    for unit in &insights.team_structure.unbalanced_departments {
        println!("    unbalanced:     {}", unit.name);
    }
    println!("  skill gaps:       {}", insights.skill_gaps.join(", "));
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
