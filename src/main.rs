use anyhow::Context;
use clap::Parser;
use gridmvi::cli::Cli;
use gridmvi::config::Config;
use gridmvi::logging::init_tracing;
use gridmvi::ui::board::{self, LayoutReport};
use gridmvi::ui::mvi::Component;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(&cli, &config) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<()> {
    let board = board::build(config)?;

    if cli.dump_layout {
        let report = LayoutReport::new(&board.init());
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize layout")?;
        println!("{json}");
        return Ok(());
    }

    gridmvi::ui::run(board, config.ui.tick_rate()).context("Terminal UI failed")?;
    Ok(())
}
