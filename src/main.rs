use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ledlife::args::Args;
use ledlife::display::RED;
use ledlife::display::Screen;
use ledlife::display::TerminalScreen;
use ledlife::display::YELLOW;
use ledlife::input;
use ledlife::pace::Sleep;
use ledlife::pattern;
use ledlife::sim::Simulation;
use ledlife::world::World;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the frames drawn on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ledlife=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut world = World::new(args.size).context("Invalid world size")?;
    let mut screen = TerminalScreen::new(io::stdout());

    let n = pattern::count();
    screen.clear().context("Failed to clear the screen")?;
    screen
        .show_banner("Game of Life", RED)
        .context("Failed to show the title")?;
    screen
        .show_banner(&format!("Enter number 1 to {n}"), YELLOW)
        .context("Failed to show the prompt")?;

    let index = match &args.pattern {
        Some(selection) => pattern::resolve_selection(selection),
        None => {
            println!("Enter a number (1 upto {n}) on the keyboard");
            input::read_selection(io::stdin().lock()).context("Failed to read selection")?
        }
    };

    let pattern = pattern::get(index);
    info!("Starting with map {index} ({})", pattern.name);

    world.initialize(&pattern.cells());
    screen.clear().context("Failed to clear the screen")?;

    let mut sim = Simulation::new(world, args.config(), screen, Sleep);
    let end = sim.run().context("Simulation failed")?;

    println!("{}", end.message());
    println!("Goodbye!");

    Ok(())
}
