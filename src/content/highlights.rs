//! Trip highlight cards

use serde::Serialize;

use super::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub features: &'static [&'static str],
    pub difficulty: Difficulty,
    pub duration: &'static str,
    pub best_time: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        id: "golden-circle",
        title: "Golden Circle",
        description: "Experience Iceland's most famous tourist route featuring three spectacular natural wonders.",
        location: "Southwestern Iceland",
        image: "/images/highlights/golden-circle.svg",
        features: &["Gullfoss Waterfall", "Geysir Geothermal Area", "Þingvellir National Park"],
        difficulty: Difficulty::Easy,
        duration: "8 hours",
        best_time: "Year-round",
    },
    Highlight {
        id: "waterfalls",
        title: "Chasing Waterfalls",
        description: "Discover Iceland's most powerful and photogenic waterfalls in dramatic landscapes.",
        location: "South Coast",
        image: "/images/highlights/waterfalls.svg",
        features: &["Skógafoss", "Seljalandsfoss", "Gljúfrabúi Hidden Falls"],
        difficulty: Difficulty::Medium,
        duration: "6 hours",
        best_time: "Spring-Fall",
    },
    Highlight {
        id: "black-sand-beach",
        title: "Black Sand & Diamond Beach",
        description: "Marvel at the otherworldly beauty of volcanic black sand beaches with crystal ice formations.",
        location: "Jökulsárlón",
        image: "/images/highlights/diamond-beach.svg",
        features: &["Reynisfjara Beach", "Basalt Columns", "Glacier Lagoon Icebergs"],
        difficulty: Difficulty::Easy,
        duration: "4 hours",
        best_time: "Winter",
    },
    Highlight {
        id: "dc3-plane-wreck",
        title: "DC-3 Plane Wreck",
        description: "Photograph the iconic abandoned US Navy plane on Sólheimasandur black sand beach.",
        location: "Sólheimasandur",
        image: "/images/highlights/dc3-wreck.svg",
        features: &["Historic Wreckage", "Dramatic Landscape", "Unique Photo Opportunity"],
        difficulty: Difficulty::Medium,
        duration: "3 hours",
        best_time: "Year-round",
    },
    Highlight {
        id: "ice-cave",
        title: "Ice Cave Adventure",
        description: "Explore crystal blue ice caves formed within ancient glaciers - a truly magical experience.",
        location: "Vatnajökull Glacier",
        image: "/images/highlights/ice-cave.svg",
        features: &["Crystal Ice Formations", "Blue Light Photography", "Glacier Exploration"],
        difficulty: Difficulty::Hard,
        duration: "5 hours",
        best_time: "Winter Only",
    },
    Highlight {
        id: "geothermal",
        title: "Geothermal Areas",
        description: "Witness the raw power of Earth with bubbling hot springs, geysers, and volcanic activity.",
        location: "Reykjanes & Haukadalur",
        image: "/images/highlights/geothermal.svg",
        features: &["Blue Lagoon", "Strokkur Geyser", "Hot Spring Photography"],
        difficulty: Difficulty::Easy,
        duration: "4 hours",
        best_time: "Year-round",
    },
    Highlight {
        id: "northern-lights",
        title: "Northern Lights",
        description: "Hunt for the Aurora Borealis dancing across Iceland's dark winter skies.",
        location: "Dark Sky Areas",
        image: "/images/highlights/northern-lights.svg",
        features: &["Aurora Photography", "Night Sky Compositions", "Professional Guidance"],
        difficulty: Difficulty::Medium,
        duration: "All Night",
        best_time: "September-March",
    },
];

