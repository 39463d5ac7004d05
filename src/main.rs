use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;

use threatsig::commands;
use threatsig::config::DataConfig;
use threatsig::error::Result;
use threatsig::logging::{LogConfig, LogOutput, init_logging, level_from_verbosity};

fn build_cli() -> Command {
    let threat_code = Arg::new("threat_code")
        .required(true)
        .help("Threat code, e.g. 'radar_basic'");

    Command::new("threatsig")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Threat vs. Signature Explorer (synthetic data demo)")
        .long_about("Estimates whether simplified radar or sonar threats detect a ship,\n\
                     based on synthetic RCS and acoustic signature tables.")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("YAML config with data file locations"),
        )
        .arg(
            Arg::new("data_dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .global(true)
                .help("Directory containing the CSV reference tables"),
        )
        .arg(
            Arg::new("band")
                .short('b')
                .long("band")
                .value_name("LABEL")
                .global(true)
                .help("Reference acoustic band, e.g. '125 Hz'"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log verbosity (-v: info, -vv: debug, -vvv: trace)"),
        )
        .arg(
            Arg::new("log_output")
                .long("log-output")
                .value_name("TARGET")
                .default_value("console")
                .value_parser(["console", "file", "both"])
                .global(true)
                .help("Log destination"),
        )
        .arg(
            Arg::new("log_dir")
                .long("log-dir")
                .value_name("DIR")
                .default_value("logs")
                .global(true)
                .help("Directory for log files"),
        )
        .subcommand(Command::new("list-ships").about("List all available ships"))
        .subcommand(Command::new("list-threats").about("List all available threats"))
        .subcommand(
            Command::new("evaluate")
                .about("Evaluate a single ship against a given threat")
                .arg(
                    Arg::new("ship_name")
                        .required(true)
                        .help("Name of the ship, e.g. 'Alpha'"),
                )
                .arg(threat_code.clone()),
        )
        .subcommand(
            Command::new("matrix")
                .about("Create a Markdown matrix for all ships vs. one threat")
                .arg(threat_code.clone()),
        )
        .subcommand(
            Command::new("figure")
                .about("Export a radar detection range bar chart for one threat")
                .arg(threat_code),
        )
}

/// CLI 引数から設定を組み立てる（設定ファイル → 引数の順に上書き）
fn resolve_config(matches: &ArgMatches) -> Result<DataConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => DataConfig::from_file(path)?,
        None => DataConfig::default(),
    };

    if let Some(dir) = matches.get_one::<String>("data_dir") {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(band) = matches.get_one::<String>("band") {
        config.reference_band = band.clone();
    }

    config.validate()?;
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = resolve_config(matches)?;

    match matches.subcommand() {
        Some(("list-ships", _)) => print!("{}", commands::list_ships(&config)?),
        Some(("list-threats", _)) => print!("{}", commands::list_threats(&config)?),
        Some(("evaluate", sub)) => {
            let ship_name = required(sub, "ship_name");
            let threat_code = required(sub, "threat_code");
            println!("{}", commands::evaluate(&config, ship_name, threat_code)?);
        }
        Some(("matrix", sub)) => {
            println!("{}", commands::matrix(&config, required(sub, "threat_code"))?);
        }
        Some(("figure", sub)) => {
            let paths = commands::figure(&config, required(sub, "threat_code"))?;
            println!("Saved radar detection figure to: {}", paths.png.display());
            println!("Saved radar detection figure to: {}", paths.svg.display());
        }
        _ => unreachable!("subcommand_required"),
    }

    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();

    let log_config = LogConfig {
        level: level_from_verbosity(matches.get_count("verbose")),
        output: matches
            .get_one::<String>("log_output")
            .and_then(|s| s.parse::<LogOutput>().ok())
            .unwrap_or(LogOutput::Console),
        log_dir: matches
            .get_one::<String>("log_dir")
            .cloned()
            .unwrap_or_else(|| "logs".to_string()),
        ..LogConfig::default()
    };
    let _guard = match init_logging(log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {}", e);
            None
        }
    };

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
