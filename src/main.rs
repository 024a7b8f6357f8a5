use std::env;
use std::fs;
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgGroup};
use env_logger::Env;

use sokoban_astar::config::{Budget, Config, DeadSquareMethod, Format, HeuristicKind};
use sokoban_astar::level::Level;
use sokoban_astar::solver::Outcome;
use sokoban_astar::Solve;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = App::new("sokoban-astar")
        .author("martin-t")
        .version("0.1")
        .arg(
            Arg::with_name("custom")
                .short("c")
                .long("custom")
                .help("parse as custom format"),
        )
        .arg(
            Arg::with_name("xsb")
                .short("x")
                .long("xsb")
                .help("parse as XSB format"),
        )
        .group(ArgGroup::with_name("format").arg("custom").arg("xsb"))
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["greedy", "optimal"])
                .default_value("greedy")
                .help("greedy is faster, optimal finds the shortest solution"),
        )
        .arg(
            Arg::with_name("dead-squares")
                .long("dead-squares")
                .takes_value(true)
                .possible_values(&["reachability", "corners", "disabled"])
                .default_value("reachability")
                .help("how to find cells boxes must never be pushed onto"),
        )
        .arg(
            Arg::with_name("max-visited")
                .long("max-visited")
                .takes_value(true)
                .help("give up after visiting this many states"),
        )
        .arg(
            Arg::with_name("timeout")
                .long("timeout")
                .takes_value(true)
                .help("give up after this many seconds"),
        )
        .arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .help("print the board after every move, not just pushes"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let format = if matches.is_present("custom") {
        Some(Format::Custom)
    } else if matches.is_present("xsb") {
        Some(Format::Xsb)
    } else {
        None
    };
    let heuristic: HeuristicKind =
        parse_arg(&matches, "heuristic").unwrap_or(HeuristicKind::Greedy);
    let dead_squares: DeadSquareMethod =
        parse_arg(&matches, "dead-squares").unwrap_or(DeadSquareMethod::Reachability);
    let budget = Budget {
        max_visited: parse_arg(&matches, "max-visited"),
        time_limit: parse_arg(&matches, "timeout").map(Duration::from_secs),
    };
    let config = Config::default()
        .with_heuristic(heuristic)
        .with_dead_squares(dead_squares)
        .with_budget(budget);
    let include_steps = matches.is_present("steps");

    // required arg
    let path = matches.value_of("file").unwrap();

    let level = fs::read_to_string(path).unwrap_or_else(|err| {
        let current_dir = env::current_dir().unwrap_or_default();
        eprintln!(
            "Can't read file {} in {}: {}",
            path,
            current_dir.display(),
            err
        );
        process::exit(1);
    });

    // detected from the contents unless specified
    let level = match format {
        Some(format) => Level::parse_format(&level, format),
        None => level.parse(),
    };
    let level: Level = level.unwrap_or_else(|err| {
        eprintln!("Failed to parse: {}", err);
        process::exit(1);
    });

    let format = format.unwrap_or(Format::Xsb);
    println!("Solving {}...", path);
    let solver_ok = level.solve(&config).unwrap_or_else(|err| {
        eprintln!("Invalid level: {}", err);
        process::exit(1);
    });
    println!("{}", solver_ok.stats);

    match solver_ok.outcome {
        Outcome::Solved(ref moves) => {
            println!("Found solution:");
            print!("{}", level.format_solution(format, moves, include_steps));
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
            println!("Pushes: {}", moves.push_cnt());
        }
        ref outcome => println!("{}", outcome),
    }
}

/// Parses an optional argument, exits with an error message if it's invalid.
fn parse_arg<T>(matches: &clap::ArgMatches<'_>, name: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = matches.value_of(name)?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            eprintln!("Invalid value for --{}: {}: {}", name, value, err);
            process::exit(1);
        }
    }
}
