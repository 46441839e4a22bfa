/* 3rd party libraries */
use clap::{Arg, Command as Cli};
use crossbeam_channel as cbc;
use log::info;
use std::thread::Builder;

/* Custom libraries */
use coordinator::{Command, DispatchHandle, DispatchServer, Dispatcher};
use scenario::Scenario;
use shared::ElevatorStatus;

/* Modules */
mod config;
mod coordinator;
mod elevator;
mod scenario;
mod shared;

fn cli() -> Cli<'static> {
    Cli::new("elevator-sim")
        .about("Discrete-time simulation of an elevator fleet")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .takes_value(true)
                .default_value("config.toml")
                .help("Simulation configuration file"),
        )
        .arg(
            Arg::new("scenario")
                .long("scenario")
                .value_name("PATH")
                .takes_value(true)
                .help("TOML script of requests and steps; defaults to the built-in demo"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print status snapshots as JSON"),
        )
}

fn print_snapshot(snapshot: &[ElevatorStatus], json: bool) {
    if json {
        println!("{}", unwrap_or_exit!(serde_json::to_string(snapshot)));
    } else {
        snapshot.iter().for_each(|status| println!("{}", status));
        println!();
    }
}

/* Main */
fn main() {
    env_logger::init();
    let matches = cli().get_matches();

    // Load the configuration and the script to play
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path));
    let scenario = match matches.value_of("scenario") {
        Some(path) => unwrap_or_exit!(Scenario::load(path)),
        None => Scenario::default_script(),
    };

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the dispatcher
    let dispatcher = unwrap_or_exit!(Dispatcher::from_config(&config.simulation));
    let server = DispatchServer::new(dispatcher, command_rx, terminate_rx);
    let server_thread = unwrap_or_exit!(Builder::new()
        .name("dispatcher".into())
        .spawn(move || server.run()));

    // Play the scenario
    let handle = DispatchHandle::new(command_tx);
    info!("Playing {} actions", scenario.actions.len());
    let snapshots = unwrap_or_exit!(scenario.play(&handle));
    for snapshot in &snapshots {
        print_snapshot(snapshot, matches.is_present("json"));
    }

    // Shut down
    let _ = terminate_tx.send(());
    if server_thread.join().is_err() {
        log::error!("Dispatcher thread panicked");
        std::process::exit(1);
    }
}
