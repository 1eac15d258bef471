/// Repeating interval timer driven cooperatively by frame time.
///
/// The owner feeds elapsed time in via `advance` and fires once per
/// completed interval. Everything happens on the caller's thread, so
/// `cancel` is synchronous: once it returns, `advance` can never report
/// another due tick.
#[derive(Debug)]
pub struct Ticker {
    interval: f32,
    elapsed: f32,
    cancelled: bool,
}

impl Ticker {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            cancelled: false,
        }
    }

    /// Account for `dt` seconds and return how many intervals completed.
    ///
    /// A dt spanning several intervals reports each of them, so a
    /// stalled frame catches up instead of silently dropping ticks.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.cancelled {
            return 0;
        }
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        due
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
