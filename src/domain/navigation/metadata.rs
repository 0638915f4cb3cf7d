//! Static per-view page metadata (document title, meta description and the
//! Open Graph title).

use crate::domain::navigation::View;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub og_title: &'static str,
}

const HOME: PageMetadata = PageMetadata {
    title: "Aspire Graphics | Premium Print & Branding Studio",
    description: "Aspire Graphics is a premier creative studio offering professional printing, visionary branding, and high-end graphic design solutions for modern businesses.",
    og_title: "Aspire Graphics | Premium Print & Branding Studio",
};

const PRODUCTS: PageMetadata = PageMetadata {
    title: "Shop Premium Print & Graphics | Aspire Graphics Catalog",
    description: "Explore our extensive catalog of high-quality print products, from premium business cards to large scale signage and custom corporate apparel.",
    og_title: "Shop Premium Print & Graphics | Aspire Graphics Catalog",
};

const CREATIVE_DESIGNS: PageMetadata = PageMetadata {
    title: "Portfolio & Design Case Studies | Aspire Graphics Excellence",
    description: "View our portfolio of award-winning design projects, branding case studies, and creative digital masterpieces crafted by our expert team.",
    og_title: "Portfolio & Design Case Studies | Aspire Graphics Excellence",
};

const CONTACT: PageMetadata = PageMetadata {
    title: "Get a Quote & Contact Us | Aspire Graphics Print Studio",
    description: "Contact Aspire Graphics for custom design quotes, professional printing inquiries, and premium branding consultations. We bring your vision to life.",
    og_title: "Get a Quote & Contact Us | Aspire Graphics Print Studio",
};

const SERVICES: PageMetadata = PageMetadata {
    title: "Professional Design & Print Services | Aspire Graphics",
    description: "Discover our comprehensive range of creative services including corporate identity systems, digital printing solutions, and signage production.",
    og_title: "Professional Design & Print Services | Aspire Graphics",
};

const LEGAL: PageMetadata = PageMetadata {
    title: "Legal Information & Privacy | Aspire Graphics",
    description: "Privacy Policy, Terms of Service, and legal information for Aspire Graphics Creative Print & Branding Studio.",
    og_title: "Legal Information & Privacy | Aspire Graphics",
};

pub fn metadata_for(view: View) -> &'static PageMetadata {
    match view {
        View::Home => &HOME,
        View::Products => &PRODUCTS,
        View::CreativeDesigns => &CREATIVE_DESIGNS,
        View::Contact => &CONTACT,
        View::Services => &SERVICES,
        View::Legal => &LEGAL,
    }
}

/// Lookup by raw view key. Unknown keys get the home entry.
pub fn metadata_for_key(key: &str) -> &'static PageMetadata {
    key.parse::<View>().map(metadata_for).unwrap_or(&HOME)
}
