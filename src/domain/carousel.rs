//! Slide position arithmetic and the background ticker that drives it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("slide {index} is out of range for {len} slides")]
pub struct SlideOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Position within a fixed-length list of slides.
///
/// Moving wraps around in both directions. A carousel over zero slides never
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Creates a carousel positioned at `index`, clamped into range.
    pub fn at(len: usize, index: usize) -> Self {
        Self {
            len,
            index: if len == 0 { 0 } else { index % len },
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn retreat(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Index that [`advance`](Self::advance) would move to.
    pub fn peek_next(&self) -> usize {
        let mut next = *self;
        next.advance()
    }

    /// Index that [`retreat`](Self::retreat) would move to.
    pub fn peek_prev(&self) -> usize {
        let mut prev = *self;
        prev.retreat()
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), SlideOutOfRange> {
        if index >= self.len {
            return Err(SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }
}

/// A carousel shared between a ticker task and readers.
pub type SharedCarousel = Arc<Mutex<Carousel>>;

/// Reads the current position of a shared carousel.
pub fn snapshot(carousel: &SharedCarousel) -> Carousel {
    *carousel.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Background task advancing a [`SharedCarousel`] at a fixed cadence.
///
/// The task is aborted when the ticker is dropped.
#[derive(Debug)]
pub struct CarouselTicker {
    handle: JoinHandle<()>,
}

impl CarouselTicker {
    /// Spawns the ticker on the current tokio runtime.
    ///
    /// The first advance happens one full `cadence` after spawning.
    pub fn spawn(name: &'static str, carousel: SharedCarousel, cadence: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticks = interval(cadence);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticks.tick().await;

            loop {
                ticks.tick().await;
                let index = carousel
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .advance();
                tracing::trace!(carousel = name, index, "Carousel advanced");
            }
        });

        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CarouselTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
