//! Hero and portfolio-hero carousels. The periodic tasks that advance them
//! live in the app runtime; this module only holds the counters.

use std::time::Duration;

pub mod carousel;
pub mod slides;

pub use carousel::Carousel;
pub use slides::{Slide, HERO_SLIDES, PORTFOLIO_HERO_SLIDES};

/// Default period between automatic slide advances.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(7);

/// Which carousel an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKind {
    Hero,
    PortfolioHero,
}
