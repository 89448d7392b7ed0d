mod command;
mod config;
mod render;
mod shell;

use std::path::PathBuf;

use clap::Parser;
use snake_engine::config::Validate;
use snake_engine::{log, logger};
use tokio::io::BufReader;

use config::{get_config_manager, Config};
use shell::{Screen, Shell};

#[derive(Parser)]
#[command(name = "snake_terminal")]
struct Args {
    /// Config file; defaults to snake_terminal_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    tick_interval_ms: Option<u64>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_manager = get_config_manager(args.config.clone());

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written");
        return Ok(());
    }

    let mut config = config_manager.get_config()?;
    if let Some(tick_interval_ms) = args.tick_interval_ms {
        config.game.tick_interval_ms = tick_interval_ms;
    }
    if let Some(seed) = args.seed {
        config.game.seed = Some(seed);
    }
    config.validate()?;

    let prefix = if args.use_log_prefix {
        Some("Terminal".to_string())
    } else {
        config.log.prefix.clone()
    };
    logger::init_logger(prefix, config.log.level);

    log!(
        "Starting with a {}x{} board, tick every {} ms",
        config.game.cell_count,
        config.game.cell_count,
        config.game.tick_interval_ms
    );

    let mut shell = Shell::new(config.game.to_settings(), Screen::stdout());
    let input = BufReader::new(tokio::io::stdin());

    tokio::select! {
        result = shell.run(input) => result?,
        _ = tokio::signal::ctrl_c() => {
            log!("Interrupted, shutting down");
        }
    }

    log!("Bye");
    Ok(())
}
