//! Hero carousel images

use serde::Serialize;

/// A full-bleed background slide of the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroImage {
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub location: &'static str,
}

pub const HERO_IMAGES: &[HeroImage] = &[
    HeroImage {
        src: "/images/hero/hero1.jpg",
        alt: "Northern Lights Aurora over Iceland landscape",
        title: "Aurora Borealis",
        location: "Reykjavik",
    },
    HeroImage {
        src: "/images/hero/hero2.jpg",
        alt: "Dramatic waterfall in Iceland with rainbow",
        title: "Gullfoss Falls",
        location: "Golden Circle",
    },
    HeroImage {
        src: "/images/hero/hero3.jpg",
        alt: "Black sand beach with ice chunks in Iceland",
        title: "Diamond Beach",
        location: "Jökulsárlón",
    },
    HeroImage {
        src: "/images/hero/hero4.jpg",
        alt: "Blue ice cave formations in Iceland glacier",
        title: "Crystal Ice Cave",
        location: "Vatnajökull",
    },
    HeroImage {
        src: "/images/hero/hero5.jpg",
        alt: "Dramatic basalt columns and waterfalls",
        title: "Svartifoss",
        location: "Skaftafell",
    },
];
