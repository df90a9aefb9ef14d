//! skulk-run: headless flee-behavior simulation runner.
//!
//! Usage:
//!   skulk-run --ticks 600
//!   skulk-run --seed 7 --chase --config flee.json
//!
//! Spawns one player and one NPC, runs the engine, and prints one JSON
//! snapshot per tick to stdout. RUST_LOG controls library logging.

use std::process;

use tracing_subscriber::EnvFilter;

use skulk_core::commands::SimCommand;
use skulk_core::config::FleeConfig;
use skulk_core::types::Position;
use skulk_nav::WalkableGrid;
use skulk_sim::{SimConfig, SimulationEngine};

struct Args {
    seed: u64,
    ticks: u64,
    /// Initial player distance north of the NPC (meters).
    start_distance: f64,
    /// Walkable grid side length in 1 m cells.
    world: u32,
    /// Reposition the player 5 m behind the NPC every tick.
    chase: bool,
    config: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(&std::env::args().skip(1).collect::<Vec<_>>()) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            print_usage();
            process::exit(1);
        }
    };

    let flee_config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(msg) => {
                eprintln!("failed to load {path}: {msg}");
                process::exit(1);
            }
        },
        None => FleeConfig::default(),
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        time_scale: 1.0,
        nav: WalkableGrid::new(args.world, args.world, 1.0),
    });
    engine.spawn_player(Position::new(0.0, args.start_distance, 0.0));
    engine.spawn_npc(Position::new(0.0, 0.0, 0.0), flee_config);

    let mut npc_position = Position::new(0.0, 0.0, 0.0);
    for _ in 0..args.ticks {
        if args.chase {
            engine.queue_command(SimCommand::SetPlayerPosition {
                position: Position::new(npc_position.x, npc_position.y + 5.0, 0.0),
            });
        }
        let snapshot = engine.tick();
        if let Some(npc) = snapshot.npcs.first() {
            npc_position = npc.position;
        }
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{line}"),
            Err(err) => {
                eprintln!("snapshot serialization failed: {err}");
                process::exit(1);
            }
        }
    }
}

fn print_usage() {
    eprintln!(
        "skulk-run: headless flee-behavior simulation\n\
         \n\
         Options:\n\
         \n\
           --seed <N>            RNG seed (default: 42)\n\
           --ticks <N>           Ticks to simulate (default: 900, 30 s)\n\
           --start-distance <M>  Initial player distance in meters (default: 5)\n\
           --world <N>           Walkable grid side length in cells (default: 256)\n\
           --chase               Keep the player 5 m behind the NPC\n\
           --config <path>       JSON FleeConfig overrides\n\
         \n\
         Examples:\n\
         \n\
           skulk-run --ticks 300\n\
           RUST_LOG=debug skulk-run --chase --seed 7 --config flee.json\n"
    );
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args {
        seed: 42,
        ticks: 900,
        start_distance: 5.0,
        world: 256,
        chase: false,
        config: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => parsed.seed = parse_value(args, &mut i)?,
            "--ticks" => parsed.ticks = parse_value(args, &mut i)?,
            "--start-distance" => parsed.start_distance = parse_value(args, &mut i)?,
            "--world" => parsed.world = parse_value(args, &mut i)?,
            "--chase" => {
                parsed.chase = true;
                i += 1;
            }
            "--config" => {
                parsed.config = Some(next_value(args, &mut i)?);
            }
            "help" | "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(format!("unknown option: {other}")),
        }
    }
    Ok(parsed)
}

fn next_value(args: &[String], i: &mut usize) -> Result<String, String> {
    let flag = &args[*i];
    let Some(value) = args.get(*i + 1) else {
        return Err(format!("{flag} requires a value"));
    };
    *i += 2;
    Ok(value.clone())
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = args[*i].clone();
    let value = next_value(args, i)?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn load_config(path: &str) -> Result<FleeConfig, String> {
    let text = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
    serde_json::from_str(&text).map_err(|err| err.to_string())
}
