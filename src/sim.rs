use std::io;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::display::Palette;
use crate::display::RED;
use crate::display::Screen;
use crate::pace::Pacer;
use crate::world::World;

/// Generations to run before giving up on the pattern dying out
pub const MAX_GENERATIONS: u32 = 150;

/// Pause after each frame
pub const DELAY: Duration = Duration::from_millis(500);

/// Pause after the starting frame
pub const START_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Display error: {0}")]
    Display(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_generations: u32,
    pub delay: Duration,
    pub start_delay: Duration,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_generations: MAX_GENERATIONS,
            delay: DELAY,
            start_delay: START_DELAY,
            palette: Palette::default(),
        }
    }
}

/// Why a run stopped. Both are normal endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    /// Ran for `generations` without the window dying out
    MaxGenerations { generations: u32 },

    /// Every displayed cell was dead after `generation`. Anything still alive in the border is in
    /// `border_survivors`.
    Extinct {
        generation: u32,
        border_survivors: Vec<(usize, usize)>,
    },
}

impl Termination {
    pub fn message(&self) -> String {
        match self {
            Termination::MaxGenerations { generations } => {
                format!("Over {generations} generations.")
            }
            Termination::Extinct { .. } => "All displayed cells are now dead.".to_string(),
        }
    }
}

/// Runs a [`World`] generation by generation, drawing its window on a [`Screen`].
pub struct Simulation<S, P> {
    world: World,
    generation: u32,
    config: Config,
    screen: S,
    pacer: P,
}

impl<S: Screen, P: Pacer> Simulation<S, P> {
    /// `world` should already hold its starting pattern.
    pub fn new(world: World, config: Config, screen: S, pacer: P) -> Self {
        Self {
            world,
            generation: 0,
            config,
            screen,
            pacer,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Show the starting frame, then step until the generation cap is passed or the window dies
    /// out. The screen is cleared and says goodbye either way.
    pub fn run(&mut self) -> Result<Termination, SimError> {
        self.render()?;
        self.pacer.pause(self.config.start_delay);

        let end = loop {
            if let Some(end) = self.tick()? {
                break end;
            }

            self.pacer.pause(self.config.delay);
        };

        info!("{}", end.message());

        if let Termination::Extinct {
            border_survivors, ..
        } = &end
        {
            for (x, y) in border_survivors {
                info!("live cell in border at x,y= {x} {y}");
            }
        }

        self.screen.clear()?;
        self.screen.show_banner("Goodbye!", RED)?;

        Ok(end)
    }

    /// Advance one generation and draw it. Returns `Some` once the run is over.
    pub fn tick(&mut self) -> Result<Option<Termination>, SimError> {
        self.generation += 1;
        info!("Generation {}", self.generation);

        if self.generation > self.config.max_generations {
            return Ok(Some(Termination::MaxGenerations {
                generations: self.config.max_generations,
            }));
        }

        self.world.step();
        self.render()?;

        if self.world.is_window_extinct() {
            return Ok(Some(Termination::Extinct {
                generation: self.generation,
                border_survivors: self.world.border_survivors(),
            }));
        }

        Ok(None)
    }

    fn render(&mut self) -> io::Result<()> {
        let pixels = self.config.palette.paint(&self.world.window());
        self.screen.render_window(&pixels)
    }
}
