use std::path::PathBuf;

use census_scatter::api::{ChartConfig, ClickOutcome, ScatterChart};
use census_scatter::core::Field;
use census_scatter::data::load_csv_path;
use census_scatter::render::NullRenderer;
use census_scatter::telemetry;

#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    config_path: Option<PathBuf>,
    clicks: Vec<Field>,
    at_ms: f64,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("scatter_snapshot failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };
    let dataset = load_csv_path(&args.data_path).map_err(|err| {
        format!(
            "failed to load dataset `{}`: {err}",
            args.data_path.display()
        )
    })?;

    let mut chart = ScatterChart::new(NullRenderer::default(), dataset, config)
        .map_err(|err| format!("chart init failed: {err}"))?;

    // Clicks are replayed one millisecond apart, starting at t=0.
    for (index, field) in args.clicks.iter().enumerate() {
        let outcome = chart
            .click_label(*field, index as f64)
            .map_err(|err| format!("click on `{field}` failed: {err}"))?;
        if outcome == ClickOutcome::Ignored {
            eprintln!("click on `{field}` ignored: label already active");
        }
    }

    chart
        .render(args.at_ms)
        .map_err(|err| format!("render failed: {err}"))?;
    let json = chart
        .snapshot_json_contract_v1_pretty(args.at_ms)
        .map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut data_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut clicks = Vec::new();
    let mut at_ms: Option<f64> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--click" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --click".to_owned())?;
                let (axis, name) = value
                    .split_once(':')
                    .ok_or_else(|| format!("--click expects `<axis>:<field>`, got `{value}`"))?;
                clicks.push(Field::from_label(axis, name).map_err(|err| err.to_string())?);
            }
            "--at" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --at".to_owned())?;
                at_ms = Some(
                    value
                        .parse::<f64>()
                        .map_err(|err| format!("invalid --at value `{value}`: {err}"))?,
                );
            }
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin scatter_snapshot -- --data <csv> [--config <json>] [--click <axis>:<field>]... [--at <ms>]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    let data_path = data_path.ok_or_else(|| "--data is required".to_owned())?;
    Ok(CliArgs {
        data_path,
        config_path,
        // Without --at, sample after every transition has settled.
        at_ms: at_ms.unwrap_or(f64::MAX),
        clicks,
    })
}
