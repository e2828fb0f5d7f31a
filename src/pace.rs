use std::thread;
use std::time::Duration;

/// Blocks between frames.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Sleeps the current thread
#[derive(Debug, Default, Clone, Copy)]
pub struct Sleep;

impl Pacer for Sleep {
    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Returns immediately, remembering every pause it was asked for.
#[derive(Debug, Default, Clone)]
pub struct Skip {
    pub pauses: Vec<Duration>,
}

impl Pacer for Skip {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
