//! Automatic rotation of the home page carousels.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::domain::carousel::{Carousel, CarouselTicker, SharedCarousel, snapshot};

/// The carousels that rotate on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselName {
    Hero,
    Showcase,
}

impl CarouselName {
    pub fn as_str(self) -> &'static str {
        match self {
            CarouselName::Hero => "hero",
            CarouselName::Showcase => "showcase",
        }
    }
}

impl fmt::Display for CarouselName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown carousel: {0}")]
pub struct UnknownCarousel(pub String);

impl FromStr for CarouselName {
    type Err = UnknownCarousel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(CarouselName::Hero),
            "showcase" => Ok(CarouselName::Showcase),
            other => Err(UnknownCarousel(other.to_string())),
        }
    }
}

/// Slide count and cadence of one carousel.
#[derive(Debug, Clone, Copy)]
pub struct RotationSpec {
    pub slides: usize,
    pub cadence: Duration,
}

/// Holds the shared carousel positions and the tickers advancing them.
///
/// Dropping the service stops the tickers.
pub struct RotationService {
    hero: SharedCarousel,
    showcase: SharedCarousel,
    cadences: (Duration, Duration),
    tickers: Mutex<Vec<CarouselTicker>>,
}

impl RotationService {
    /// Creates the carousels without starting any ticker.
    pub fn new(hero: RotationSpec, showcase: RotationSpec) -> Self {
        Self {
            hero: Arc::new(Mutex::new(Carousel::new(hero.slides))),
            showcase: Arc::new(Mutex::new(Carousel::new(showcase.slides))),
            cadences: (hero.cadence, showcase.cadence),
            tickers: Mutex::new(Vec::new()),
        }
    }

    /// Spawns one ticker per carousel. Must run inside a tokio runtime.
    ///
    /// Calling it again while the tickers exist does nothing.
    pub fn start(&self) {
        let mut tickers = self.tickers.lock().unwrap_or_else(PoisonError::into_inner);
        if tickers.is_empty() {
            let (hero_cadence, showcase_cadence) = self.cadences;
            *tickers = vec![
                CarouselTicker::spawn("hero", Arc::clone(&self.hero), hero_cadence),
                CarouselTicker::spawn("showcase", Arc::clone(&self.showcase), showcase_cadence),
            ];
            tracing::info!(
                hero_secs = hero_cadence.as_secs(),
                showcase_secs = showcase_cadence.as_secs(),
                "Carousel rotation started"
            );
        }
    }

    /// Aborts the tickers. Positions keep their last value.
    pub fn stop(&self) {
        let stopped = std::mem::take(
            &mut *self.tickers.lock().unwrap_or_else(PoisonError::into_inner),
        );
        if !stopped.is_empty() {
            tracing::info!("Carousel rotation stopped");
        }
    }

    /// Current position of a carousel.
    pub fn position(&self, name: CarouselName) -> Carousel {
        snapshot(self.shared(name))
    }

    pub fn cadence(&self, name: CarouselName) -> Duration {
        match name {
            CarouselName::Hero => self.cadences.0,
            CarouselName::Showcase => self.cadences.1,
        }
    }

    /// True while every started ticker is still running.
    pub fn is_running(&self) -> bool {
        let tickers = self.tickers.lock().unwrap_or_else(PoisonError::into_inner);
        !tickers.is_empty() && tickers.iter().all(|t| !t.is_finished())
    }

    /// True when a started ticker has ended on its own.
    pub fn has_failed(&self) -> bool {
        let tickers = self.tickers.lock().unwrap_or_else(PoisonError::into_inner);
        tickers.iter().any(CarouselTicker::is_finished)
    }

    fn shared(&self, name: CarouselName) -> &SharedCarousel {
        match name {
            CarouselName::Hero => &self.hero,
            CarouselName::Showcase => &self.showcase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(slides: usize, secs: u64) -> RotationSpec {
        RotationSpec {
            slides,
            cadence: Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_carousel_name_parsing() {
        assert_eq!("hero".parse::<CarouselName>(), Ok(CarouselName::Hero));
        assert_eq!("showcase".parse::<CarouselName>(), Ok(CarouselName::Showcase));
        assert!("Hero".parse::<CarouselName>().is_err());
        assert_eq!(CarouselName::Showcase.to_string(), "showcase");
    }

    #[test]
    fn test_new_service_is_idle() {
        let service = RotationService::new(spec(4, 5), spec(3, 4));

        assert!(!service.is_running());
        assert!(!service.has_failed());
        assert_eq!(service.position(CarouselName::Hero).current(), 0);
        assert_eq!(service.position(CarouselName::Hero).len(), 4);
        assert_eq!(service.position(CarouselName::Showcase).len(), 3);
        assert_eq!(service.cadence(CarouselName::Showcase), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_carousels_advance_at_their_own_cadence() {
        let service = RotationService::new(spec(4, 5), spec(3, 4));
        service.start();
        service.start();
        assert!(service.is_running());

        tokio::time::sleep(Duration::from_millis(4_100)).await;
        assert_eq!(service.position(CarouselName::Hero).current(), 0);
        assert_eq!(service.position(CarouselName::Showcase).current(), 1);

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(service.position(CarouselName::Hero).current(), 1);

        // 20s: hero has ticked 4 times and wrapped.
        tokio::time::sleep(Duration::from_millis(15_000)).await;
        assert_eq!(service.position(CarouselName::Hero).current(), 0);
        // Showcase ticked 5 times over 3 slides.
        assert_eq!(service.position(CarouselName::Showcase).current(), 2);

        service.stop();
        assert!(!service.is_running());
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(service.position(CarouselName::Hero).current(), 0);
    }
}
