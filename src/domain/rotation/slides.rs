//! The fixed slide decks the two carousels rotate through.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub tag: &'static str,
    pub title: &'static str,
}

pub const HERO_SLIDES: [Slide; 3] = [
    Slide {
        tag: "Eco-Friendly & High Precision",
        title: "Where Design Grows Beyond Boundaries.",
    },
    Slide {
        tag: "Next-Gen Branding",
        title: "Shape Your Identity with Modern Vision.",
    },
    Slide {
        tag: "Masterpiece Printing",
        title: "Tangible Excellence, Delivered Nationwide.",
    },
];

pub const PORTFOLIO_HERO_SLIDES: [Slide; 2] = [
    Slide {
        tag: "Creative Excellence",
        title: "Digital Masterpieces",
    },
    Slide {
        tag: "Industry Standard",
        title: "Visionary Branding",
    },
];
