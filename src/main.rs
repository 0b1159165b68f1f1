//! PV yield simulator entry point: CLI wiring and config-driven runs.

use std::path::Path;
use std::process;

use pv_yield_sim::config::ScenarioConfig;
use pv_yield_sim::io::export::{export_daily_csv, export_series_csv};
use pv_yield_sim::sim::engine::simulate_with_diagnostics;
use pv_yield_sim::sim::kpi::{YieldSummary, daily_totals};
use tracing_subscriber::FmtSubscriber;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    years_override: Option<u32>,
    series_out: Option<String>,
    daily_out: Option<String>,
    verbose: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("pv-yield-sim - Quarter-hourly PV yield simulator");
    eprintln!();
    eprintln!("Usage: pv-yield-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!(
        "  --preset <name>          Use a built-in preset ({})",
        ScenarioConfig::PRESETS.join(", ")
    );
    eprintln!("  --years <1|2>            Override the simulated number of years");
    eprintln!("  --out <path>             Export the quarter-hour series to CSV");
    eprintln!("  --daily-out <path>       Export daily energy totals to CSV");
    eprintln!("  --verbose                Log debug diagnostics");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start REST API server after simulation");
        eprintln!("  --port <u16>             API server port (default: 3000)");
    }
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

/// Returns the value following flag `args[*i]`, advancing `i`, or exits.
fn flag_value(args: &[String], i: &mut usize, what: &str) -> String {
    let flag = &args[*i];
    *i += 1;
    if *i >= args.len() {
        eprintln!("error: {flag} requires {what}");
        process::exit(1);
    }
    args[*i].clone()
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        years_override: None,
        series_out: None,
        daily_out: None,
        verbose: false,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                cli.scenario_path = Some(flag_value(&args, &mut i, "a path argument"));
            }
            "--preset" => {
                cli.preset = Some(flag_value(&args, &mut i, "a name argument"));
            }
            "--years" => {
                let value = flag_value(&args, &mut i, "a year count");
                if let Ok(y) = value.parse::<u32>() {
                    cli.years_override = Some(y);
                } else {
                    eprintln!("error: --years value \"{value}\" is not a valid count");
                    process::exit(1);
                }
            }
            "--out" => {
                cli.series_out = Some(flag_value(&args, &mut i, "a path argument"));
            }
            "--daily-out" => {
                cli.daily_out = Some(flag_value(&args, &mut i, "a path argument"));
            }
            "--verbose" | "-v" => {
                cli.verbose = true;
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                let value = flag_value(&args, &mut i, "a u16 argument");
                if let Ok(p) = value.parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{value}\" is not a valid u16");
                    process::exit(1);
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: could not install log subscriber: {e}");
    }
}

fn main() {
    let cli = parse_args();
    init_tracing(cli.verbose);

    // Load config: --scenario takes priority, then --preset, then baseline default
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    if let Some(years) = cli.years_override {
        scenario.simulation.years = years;
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let config = scenario.to_system_config();
    let run = simulate_with_diagnostics(&config);
    let summary = YieldSummary::from_run(&run);
    println!("{summary}");

    if let Some(ref path) = cli.series_out {
        if let Err(e) = export_series_csv(&run.series, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Series written to {path}");
    }

    if let Some(ref path) = cli.daily_out {
        if let Err(e) = export_daily_csv(&daily_totals(&run.series), Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Daily totals written to {path}");
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(pv_yield_sim::api::AppState::from_run(config, run));
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        if let Err(e) = rt.block_on(pv_yield_sim::api::serve(state, addr)) {
            eprintln!("error: API server failed: {e}");
            process::exit(1);
        }
    }
}
