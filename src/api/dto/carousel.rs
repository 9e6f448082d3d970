//! DTOs for carousel positions.

use serde::Serialize;

use crate::application::services::CarouselName;

/// Current position of a rotating carousel.
#[derive(Debug, Serialize)]
pub struct CarouselResponse {
    pub name: CarouselName,
    pub current: usize,
    pub next: usize,
    pub prev: usize,
    pub len: usize,
    pub cadence_secs: u64,
    pub slides: Vec<String>,
}
