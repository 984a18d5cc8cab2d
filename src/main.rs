/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command};
use crossbeam_channel as cbc;
use log::{debug, error, info};
use std::io::{self, BufRead, Write};
use std::thread::Builder;
use std::time::Duration;

/* Custom libraries */
use elevator_sim::config::{self, Config};
use elevator_sim::exit_on_err;
use elevator_sim::shared::SimError;
use elevator_sim::Simulation;

/* Input handling */
enum Flow {
    Continue,
    Exit,
}

const HELP: &str = "Commands: <enter>/next, new <name> <origin> <destination>, s/status, json, help, exit";

/* Main */
fn main() {
    let matches = cli().get_matches();

    // Load the configuration and start logging
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config_result = config::load_config(config_path);

    let log_level = matches
        .value_of("log_level")
        .map(str::to_string)
        .or_else(|| config_result.as_ref().ok().map(|c| c.simulation.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let config = exit_on_err!(config_result, "Failed to load configuration");

    // Pick the scenario
    let scenario_number = exit_on_err!(parse_arg::<usize>(&matches, "scenario"), "Invalid --scenario");
    let scenario_number = match scenario_number.or(config.simulation.default_scenario) {
        Some(number) => number,
        None => exit_on_err!(prompt_scenario(&config), "No scenario picked"),
    };
    let scenario = exit_on_err!(config.scenario(scenario_number), "No such scenario");
    let mut simulation = exit_on_err!(Simulation::from_scenario(scenario), "Invalid scenario");
    info!("Running scenario {}: {}", scenario_number, simulation.description());

    // Forward stdin lines to the simulation loop
    let (input_tx, input_rx) = cbc::unbounded::<String>();
    let input_thread = Builder::new().name("stdin_reader".into());
    exit_on_err!(
        input_thread.spawn(move || read_input(input_tx)),
        "Failed to start the input thread"
    );

    let auto_tick_ms = exit_on_err!(parse_arg::<u64>(&matches, "auto_tick_ms"), "Invalid --auto-tick-ms")
        .or(config.simulation.auto_tick_ms)
        .filter(|ms| *ms > 0);
    let ticker = match auto_tick_ms {
        Some(ms) => cbc::tick(Duration::from_millis(ms)),
        None => cbc::never(),
    };

    println!("{}", HELP);

    // Main loop
    loop {
        cbc::select! {
            recv(input_rx) -> line => {
                match line {
                    Ok(answer) => match handle_input(&mut simulation, &answer) {
                        Ok(Flow::Exit) => break,
                        Ok(Flow::Continue) => {}
                        Err(e) => error!("{}", e),
                    },
                    Err(_) => {
                        debug!("Input closed");
                        break;
                    }
                }
            }
            recv(ticker) -> _ => {
                if let Err(e) = run_tick(&mut simulation) {
                    error!("{}", e);
                }
                if simulation.is_finished() {
                    info!("Everybody has arrived after {} ticks", simulation.tick_count());
                    break;
                }
            }
        }
    }
}

fn cli() -> Command<'static> {
    Command::new("elevator_sim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs the elevator program.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the scenario configuration"),
        )
        .arg(
            Arg::new("scenario")
                .short('s')
                .long("scenario")
                .takes_value(true)
                .help("Scenario to run, counting from 1"),
        )
        .arg(
            Arg::new("auto_tick_ms")
                .long("auto-tick-ms")
                .takes_value(true)
                .help("Advance the simulation on a timer instead of on input"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .takes_value(true)
                .help("Log filter, overrides the configuration file"),
        )
}

fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, T::Err> {
    matches.value_of(name).map(|value| value.trim().parse::<T>()).transpose()
}

fn prompt_scenario(config: &Config) -> Result<usize, io::Error> {
    for (index, scenario) in config.scenarios.iter().enumerate() {
        println!("{}. - {}", index + 1, scenario.description);
    }
    print!("Pick a scenario > ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    answer
        .trim()
        .parse::<usize>()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}

fn read_input(input_tx: cbc::Sender<String>) {
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if input_tx.send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                error!("Error reading from stdin: {}", e);
                break;
            }
        }
    }
}

fn handle_input(simulation: &mut Simulation, answer: &str) -> Result<Flow, SimError> {
    let mut words = answer.split_whitespace();
    let command = words.next().map(|word| word.to_lowercase());

    match command.as_deref() {
        None | Some("next") | Some("n") => run_tick(simulation)?,
        Some("new") => {
            let args: Vec<&str> = words.collect();
            if let [name, origin, destination] = args[..] {
                simulation.add_passenger(name, &origin.into(), &destination.into())?;
            } else {
                println!("Usage: new <name> <origin> <destination>");
            }
        }
        Some("s") | Some("status") => println!("{}", simulation.status()),
        Some("json") => match serde_json::to_string_pretty(&simulation.status()) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize status: {}", e),
        },
        Some("help") => println!("{}", HELP),
        Some("exit") | Some("quit") => return Ok(Flow::Exit),
        Some(other) => println!("No action for '{}'", other),
    }

    Ok(Flow::Continue)
}

fn run_tick(simulation: &mut Simulation) -> Result<(), SimError> {
    let report = simulation.next_tick()?;
    println!(
        "Tick {}: {} left, {} entered, {} called a lift, {} still without one",
        report.tick,
        report.alighted.len(),
        report.boarded.len(),
        report.dispatched.len(),
        report.unserved.len()
    );
    if let Ok(json) = serde_json::to_string(&report) {
        debug!("{}", json);
    }
    Ok(())
}
