//! Waymark CLI entry point.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;
use waymark_engine::{Engine, EngineConfig};
use waymark_multiplayer::{BroadcastCoordinator, ServerConfig, serve};
use waymark_runtime::content::{START_ROOM, demo_engine};
use waymark_runtime::{Repl, ScriptEditor};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    serve: Option<SocketAddr>,
    name: Option<String>,
    script: Option<PathBuf>,
    no_directions: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-directions" => config.no_directions = true,
            "--serve" => {
                let default = ServerConfig::default().bind;
                config.serve = match args.get(i + 1) {
                    Some(addr) if !addr.starts_with('-') => {
                        i += 1;
                        Some(
                            addr.parse()
                                .map_err(|_| format!("invalid --serve address: {addr}"))?,
                        )
                    }
                    _ => Some(default),
                };
            }
            "--name" => {
                i += 1;
                let name = args.get(i).ok_or("--name requires a value")?;
                config.name = Some(name.clone());
            }
            "--script" => {
                i += 1;
                let path = args.get(i).ok_or("--script requires a value")?;
                config.script = Some(PathBuf::from(path));
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("waymark {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut engine = demo_engine(EngineConfig::default())?;
    if config.no_directions {
        engine.world_mut().set_show_directions(false);
    }

    if let Some(bind) = config.serve {
        init_tracing("info");
        let server_config = ServerConfig::new(START_ROOM).with_bind(bind);
        tokio::runtime::Runtime::new()?.block_on(serve_demo(engine, server_config))?;
        return Ok(());
    }

    init_tracing("warn");
    let name = config.name.unwrap_or_else(|| "Player 1".to_string());
    let player = engine.start_player(name, START_ROOM)?;

    match config.script {
        Some(path) => {
            let editor = ScriptEditor::from_file(&path)?;
            Repl::with_editor(editor, engine, player).run()?;
        }
        None => {
            Repl::new(engine, player)?.run()?;
        }
    }
    Ok(())
}

async fn serve_demo(engine: Engine, config: ServerConfig) -> waymark_foundation::Result<()> {
    let listener = TcpListener::bind(config.bind).await?;
    let coordinator = Arc::new(Mutex::new(BroadcastCoordinator::new(engine)));
    serve(listener, coordinator, Arc::new(config)).await
}

fn print_help() {
    println!(
        "\x1b[1mWaymark\x1b[0m - A small interactive-fiction engine

\x1b[1mUSAGE:\x1b[0m
    waymark [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --serve [ADDR]     Run the multiplayer server (default 0.0.0.0:4611)
    --name NAME        Player name for single-player mode
    --script FILE      Run each line of FILE as a command, then exit
    --no-directions    Leave exits out of room descriptions

\x1b[1mEXAMPLES:\x1b[0m
    waymark                          Play the demo world
    waymark --script walk.txt        Replay a transcript
    waymark --serve 127.0.0.1:4000   Host the demo world over telnet

\x1b[1mCOMMANDS:\x1b[0m
    go DIR, n/s/e/w/ne/nw/se/sw/u/d  Move
    look [ITEM]                      Look around, or at something
    take ITEM, drop ITEM             Pick up and put down
    inventory                        List what you carry
    say WORDS                        Talk to the room
    quit                             Leave

Set RUST_LOG to control log output (for example RUST_LOG=debug)."
    );
}
