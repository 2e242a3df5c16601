//! Pivot Square CLI
//!
//! Usage:
//!   pivot-square [OPTIONS] [SCRIPT]
//!
//! Options:
//!   -l, --levels <FILE>      Level file (TOML format)
//!   -L, --level <NAME>       Level to start on
//!   -s, --stylesheet <FILE>  Stylesheet file for color palette (TOML format)
//!       --list-levels        List available levels and exit
//!   -g, --grammar            Show replay script reference
//!   -v, --verbose            Increase log verbosity (repeatable)
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pivot_square::{replay_with_config, LevelSet, ReplayConfig, ReplayError, Stylesheet};

#[derive(Parser)]
#[command(name = "pivot-square")]
#[command(about = "Replay pivot-rotation puzzle moves and render the board as SVG")]
struct Cli {
    /// Replay script (reads from stdin if not provided)
    script: Option<PathBuf>,

    /// Level file (TOML format); the built-in levels are used otherwise
    #[arg(short, long)]
    levels: Option<PathBuf>,

    /// Level to start on (defaults to the first level of the set)
    #[arg(short = 'L', long)]
    level: Option<String>,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Virtual milliseconds between animation frames
    #[arg(long, default_value_t = 16.0)]
    frame_interval: f64,

    /// List available levels and exit
    #[arg(long)]
    list_levels: bool,

    /// Show replay script reference
    #[arg(short, long)]
    grammar: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.grammar {
        print_grammar();
        return;
    }

    let levels = match &cli.levels {
        Some(path) => match LevelSet::from_file(path) {
            Ok(levels) => levels,
            Err(e) => {
                eprintln!("Error loading levels '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => LevelSet::builtin(),
    };

    if cli.list_levels {
        for level in levels.levels() {
            match &level.description {
                Some(description) => println!("{:<12} {}", level.name, description),
                None => println!("{}", level.name),
            }
        }
        return;
    }

    // If no script and stdin is a terminal (interactive), show intro help
    if cli.script.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let (source, filename) = match &cli.script {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut config = ReplayConfig::new()
        .with_levels(levels)
        .with_stylesheet(stylesheet)
        .with_frame_interval(cli.frame_interval);
    if let Some(name) = cli.level {
        config = config.with_start_level(name);
    }

    match replay_with_config(&source, &config) {
        Ok(outcome) => {
            println!("{}", outcome.svg);
            let report = outcome.report;
            eprintln!(
                "level {}: {} move{}, square at ({:.1}, {:.1}) turned {:.0}°{}",
                report.level,
                report.moves,
                if report.moves == 1 { "" } else { "s" },
                report.square.x,
                report.square.y,
                report.square.display_angle().to_degrees(),
                if report.solved { ", solved" } else { "" }
            );
        }
        Err(ReplayError::Parse(errors)) => {
            for error in &errors {
                eprint!("{}", error.format(&source, &filename));
            }
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr; stdout carries the SVG. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_intro() {
    println!(
        r#"Pivot Square - rotation puzzle replay and renderer

USAGE:
    pivot-square [OPTIONS] [SCRIPT]
    echo '<script>' | pivot-square

OPTIONS:
    -l, --levels       Level file (TOML)
    -L, --level        Level to start on
    -s, --stylesheet   Custom color palette (TOML file)
    --list-levels      List available levels
    -g, --grammar      Show replay script reference
    -v, --verbose      More logging on stderr
    -h, --help         Print help

QUICK START:
    echo 'click 250,150 move 250,250 down 250,250' | pivot-square > board.svg

This arms the top-left corner of the free-play square, snaps its top-right
corner onto the pointer, and rolls the square a quarter turn."#
    );
}

fn print_grammar() {
    println!(
        r#"PIVOT SQUARE REPLAY SCRIPTS
===========================

COMMANDS
--------
level <name>          Restart on a named level (identifier or "quoted")
reset                 Restart the current level
down <x>, <y>         Pointer press: arms a pivot corner, or commits the
                      snapped rotation when a pivot is armed
move <x>, <y>         Pointer motion: snaps another corner onto the pointer
click <x>, <y>        move followed by down
wait <ms>             Let virtual time pass; frames tick while a rotation
                      or win notice is pending
cancel [snap|freeze]  Stop a running rotation at its end pose (snap, the
                      default) or where it currently is (freeze)

Commas between coordinates are optional. Comments use // and /* */.
Input is ignored while a rotation is running. After the last command the
replay keeps ticking until everything has settled.

COORDINATES
-----------
Board pixels, origin top-left, y pointing down. Positive angles turn
clockwise on screen."#
    );
}
