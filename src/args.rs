use std::time::Duration;

use clap::Parser;

use crate::sim::Config;
use crate::world::DEFAULT_SIZE;

/// Conway's Game of Life, shown on an 8x8 window at the center of a larger world
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Starting pattern (1-based). Asked for on stdin when missing; anything invalid picks 1
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Side length of the world. Must be even, at least 8 and at most 4096
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    pub size: usize,

    /// Stop after this many generations
    #[arg(short, long, default_value_t = crate::sim::MAX_GENERATIONS)]
    pub max_generations: u32,

    /// Milliseconds between frames
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Milliseconds to show the starting frame for
    #[arg(long, default_value_t = 2000)]
    pub start_delay_ms: u64,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            max_generations: self.max_generations,
            delay: Duration::from_millis(self.delay_ms),
            start_delay: Duration::from_millis(self.start_delay_ms),
            ..Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Args;
    use crate::sim::Config;

    #[test]
    fn defaults_match_config() {
        let args = Args::try_parse_from(["ledlife"]).unwrap();

        assert_eq!(args.pattern, None);
        assert_eq!(args.size, 12);
        assert_eq!(args.config(), Config::default());
    }

    #[test]
    fn flags() {
        let args = Args::try_parse_from([
            "ledlife",
            "-p",
            "2",
            "--size",
            "20",
            "--max-generations",
            "10",
            "--delay-ms",
            "0",
        ])
        .unwrap();

        assert_eq!(args.pattern.as_deref(), Some("2"));
        assert_eq!(args.size, 20);

        let config = args.config();
        assert_eq!(config.max_generations, 10);
        assert!(config.delay.is_zero());
    }
}
