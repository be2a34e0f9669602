//! Static site content
//!
//! Everything the site shows is authored here and compiled into the binary.
//! The carousels only care that these are sequences of known length.

pub mod gallery;
pub mod hero;
pub mod highlights;
pub mod itinerary;
pub mod pricing;
pub mod testimonials;

use serde::Serialize;

pub use gallery::{GalleryImage, GALLERY_IMAGES};
pub use hero::{HeroImage, HERO_IMAGES};
pub use highlights::{Highlight, HIGHLIGHTS};
pub use itinerary::{Difficulty, ItineraryDay, ITINERARY};
pub use pricing::{FaqEntry, PricingCard, PricingTier, FAQ, INTEREST_OPTIONS, PRICING_TIERS};
pub use testimonials::{Testimonial, TESTIMONIALS};

/// A page section reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub id: &'static str,
}

/// Left side first, then right side; the mobile menu shows them all in order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Adventure", href: "#hero", id: "hero" },
    NavItem { label: "Itinerary", href: "#itinerary", id: "itinerary" },
    NavItem { label: "Gallery", href: "#gallery", id: "gallery" },
    NavItem { label: "About", href: "#about", id: "about" },
    NavItem { label: "Pricing", href: "#pricing", id: "pricing" },
];

/// Everything at once, for clients that render the whole page
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub hero: &'static [HeroImage],
    pub gallery: &'static [GalleryImage],
    pub highlights: &'static [Highlight],
    pub itinerary: &'static [ItineraryDay],
    pub pricing: Vec<PricingCard>,
    pub testimonials: &'static [Testimonial],
    pub interests: &'static [&'static str],
    pub faq: &'static [FaqEntry],
    pub navigation: &'static [NavItem],
}

impl SiteContent {
    pub fn get() -> Self {
        Self {
            hero: HERO_IMAGES,
            gallery: GALLERY_IMAGES,
            highlights: HIGHLIGHTS,
            itinerary: ITINERARY,
            pricing: pricing::cards(),
            testimonials: TESTIMONIALS,
            interests: INTEREST_OPTIONS,
            faq: FAQ,
            navigation: NAV_ITEMS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousels_have_slides() {
        assert_eq!(HERO_IMAGES.len(), 5);
        assert_eq!(GALLERY_IMAGES.len(), 13);
    }

    #[test]
    fn highlight_ids_are_unique() {
        let mut ids: Vec<_> = HIGHLIGHTS.iter().map(|h| h.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), HIGHLIGHTS.len());
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }

    #[test]
    fn itinerary_days_are_consecutive() {
        for (i, day) in ITINERARY.iter().enumerate() {
            assert_eq!(usize::from(day.day), i + 1);
        }
        assert_eq!(ITINERARY.last().map(|d| d.title), Some("Departure"));
    }

    #[test]
    fn content_serializes() {
        let json = serde_json::to_value(SiteContent::get()).expect("serializable");
        assert_eq!(json["navigation"][0]["href"], "#hero");
        assert_eq!(json["itinerary"][4]["difficulty"], "Hard");
        assert_eq!(json["pricing"][0]["original_price"], 299000);
        assert_eq!(json["pricing"][0]["display_savings"], "₹50,000");
        assert_eq!(json["highlights"][4]["difficulty"], "Hard");
        assert_eq!(json["highlights"][0]["best_time"], "Year-round");
        assert_eq!(json["testimonials"][2]["name"], "Sneha Patel");
    }
}
