//! Calculator entry point: CLI wiring and scenario-driven assessment.

use std::path::Path;
use std::process;

use eco_calc::engine::Engine;
use eco_calc::factors::EmissionFactorTable;
use eco_calc::io::export::export_csv;
use eco_calc::scenario::Scenario;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    factors_path: Option<String>,
    report_out: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("eco-calc — Event carbon-footprint calculator");
    eprintln!();
    eprintln!("Usage: eco-calc [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>     Load event scenario from TOML file");
    eprintln!("  --preset <name>       Use a built-in preset (trade_show, festival)");
    eprintln!("  --factors <path>      Load emission factor table from TOML file");
    eprintln!("  --report-out <path>   Export category breakdown to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve               Start REST API server instead of one-shot run");
        eprintln!("  --port <u16>          API server port (default: 3000)");
    }
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the trade_show preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        factors_path: None,
        report_out: None,
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
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--factors" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --factors requires a path argument");
                    process::exit(1);
                }
                cli.factors_path = Some(args[i].clone());
            }
            "--report-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --report-out requires a path argument");
                    process::exit(1);
                }
                cli.report_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = p;
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
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

fn main() {
    eco_calc::logging::init();
    let cli = parse_args();

    // Factor table: --factors takes priority, otherwise built-in defaults
    let factors = if let Some(ref path) = cli.factors_path {
        match EmissionFactorTable::from_toml_file(Path::new(path)) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        EmissionFactorTable::builtin()
    };

    let factor_errors = factors.validate();
    if !factor_errors.is_empty() {
        for e in &factor_errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let engine = Engine::new(factors);

    // Scenario: --scenario takes priority, then --preset, then trade_show
    let scenario = if let Some(ref path) = cli.scenario_path {
        match Scenario::from_toml_file(Path::new(path)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match Scenario::from_preset(name) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        Scenario::trade_show()
    };

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let (event, inputs) = scenario.into_parts();

    // Serve mode seeds the store with the scenario event and assesses
    // stored events on demand
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        use eco_calc::api::AppState;
        use eco_calc::store::{CategoryRecord, EventStore};

        let store = EventStore::new();
        let seeded = store.create_event(event).and_then(|id| {
            for record in CategoryRecord::from_inputs(inputs) {
                store.put_record(&id, record)?;
            }
            Ok(id)
        });
        match seeded {
            Ok(id) => eprintln!("Seeded scenario event {id}"),
            Err(e) => {
                eprintln!("error: failed to seed scenario event: {e}");
                process::exit(1);
            }
        }

        let state = Arc::new(AppState { store, engine });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(eco_calc::api::serve(state, addr));
        return;
    }

    let report = engine.assess(&event, &inputs);

    println!("{report}");

    if let Some(ref path) = cli.report_out {
        if let Err(e) = export_csv(&report, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Report written to {path}");
    }
}
