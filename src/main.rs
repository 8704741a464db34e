use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use geocanvas::utils::logger::Logger;
use geocanvas::commands::{CommandFactory, GeocanvasCommandFactory};

fn main() {
    let matches = ClapCommand::new("geocanvas")
        .version("0.1")
        .about("Resolve and navigate between geographic and canvas coordinates")
        .arg(
            Arg::new("input")
                .help("Session file (TOML) listing the layers to load")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extent")
                .short('e')
                .long("extent")
                .help("Summarize the session and report its extent (default)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("jump")
                .short('j')
                .long("jump")
                .help("Jump to a coordinate, e.g. '35.2,25.1' or '25.1N 35.2E'")
                .value_name("LON,LAT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("locate")
                .long("locate")
                .help("Jump to a city by name (needs --cities)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("cities")
                .long("cities")
                .help("City gazetteer CSV (name,country,latitude,longitude)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("scene")
                .long("scene")
                .help("Show the status line for a scene point 'x,y'")
                .value_name("X,Y")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("geo")
                .long("geo")
                .help("Map a geographic coordinate 'lon,lat' to the scene")
                .value_name("LON,LAT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write the log to this file instead of stderr")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = matches.get_one::<String>("log-file").map(String::as_str);
    let logger = match Logger::new(log_file.unwrap_or("geocanvas.log")) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    // One file handle serves both the global log and the command reports
    if log_file.is_some() {
        logger.install_global();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let factory = GeocanvasCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
