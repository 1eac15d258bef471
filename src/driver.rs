use rand::Rng;
use rand::rngs::ThreadRng;

use crate::bounds::{self, DisplayParams};
use crate::config::{ConfigError, PanZoomConfig};
use crate::image_set::ImageSet;
use crate::state::DriverState;
use crate::ticker::Ticker;

/// Rendering sink for the rotation driver. Receives one call per cycle
/// with the freshly drawn parameters; the host animates towards them
/// over its configured transition duration.
pub trait PresentationHost {
    fn render(&mut self, params: DisplayParams, opacity: f32);
}

/// Drives the image rotation: picks a random image and random pan/zoom
/// parameters once per display interval and hands them to the host.
///
/// `activate` performs one update on the spot so the first image shows
/// without waiting a full interval, then arms the ticker. `deactivate`
/// cancels the ticker synchronously; it is idempotent and once it
/// returns no further update reaches the host no matter how much time
/// is advanced.
pub struct RotationDriver<R: Rng = ThreadRng> {
    config: PanZoomConfig,
    images: ImageSet,
    rng: R,
    state: DriverState,
    ticker: Option<Ticker>,
}

impl RotationDriver<ThreadRng> {
    pub fn new(images: ImageSet, config: PanZoomConfig) -> Result<Self, ConfigError> {
        Self::with_rng(images, config, rand::rng())
    }
}

impl<R: Rng> RotationDriver<R> {
    pub fn with_rng(images: ImageSet, config: PanZoomConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            images,
            rng,
            state: DriverState::Inactive,
            ticker: None,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Start rotating: fire one update immediately, then once per
    /// display interval. Does nothing if already active.
    pub fn activate<H: PresentationHost>(&mut self, host: &mut H) {
        if self.state == DriverState::Active {
            return;
        }
        self.ticker = Some(Ticker::new(self.config.display_interval));
        self.state = DriverState::Active;
        self.tick(host);
    }

    /// Feed elapsed frame time; fires one update per completed interval.
    pub fn advance<H: PresentationHost>(&mut self, dt: f32, host: &mut H) {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.advance(dt),
            None => return,
        };
        for _ in 0..due {
            self.tick(host);
        }
    }

    /// Stop rotating and drop the ticker. Safe to call repeatedly.
    pub fn deactivate(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.state = DriverState::Inactive;
    }

    fn tick<H: PresentationHost>(&mut self, host: &mut H) {
        let index = self.images.random_index(&mut self.rng);
        let params = bounds::draw_params(&mut self.rng, index, self.images.get(index), &self.config);
        host.render(params, self.config.opacity);
    }
}
