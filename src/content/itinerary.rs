//! Day-by-day itinerary

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItineraryDay {
    pub day: u8,
    pub title: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
    pub accommodation: Option<&'static str>,
    pub difficulty: Difficulty,
}

const REYKJAVIK_HOTEL: Option<&str> = Some("Hotel Reykjavik Centrum");
const VIK_HOTEL: Option<&str> = Some("Hotel Kría, Vík");

pub const ITINERARY: &[ItineraryDay] = &[
    ItineraryDay {
        day: 1,
        title: "Arrival & Reykjavik Exploration",
        location: "Reykjavik",
        highlights: &[
            "Arrival at Keflavik Airport",
            "City Walking Tour",
            "Hallgrímskirkja Church",
        ],
        accommodation: REYKJAVIK_HOTEL,
        difficulty: Difficulty::Easy,
    },
    ItineraryDay {
        day: 2,
        title: "Golden Circle Classic",
        location: "Thingvellir • Geysir • Gullfoss",
        highlights: &["Thingvellir National Park", "Strokkur Geyser", "Gullfoss Waterfall"],
        accommodation: REYKJAVIK_HOTEL,
        difficulty: Difficulty::Easy,
    },
    ItineraryDay {
        day: 3,
        title: "South Coast Waterfalls",
        location: "Seljalandsfoss • Skógafoss • Vík",
        highlights: &[
            "Walk behind Seljalandsfoss",
            "Climb Skógafoss stairs",
            "Black sand beaches",
        ],
        accommodation: VIK_HOTEL,
        difficulty: Difficulty::Medium,
    },
    ItineraryDay {
        day: 4,
        title: "Glacier Lagoon & Diamond Beach",
        location: "Jökulsárlón • Diamond Beach",
        highlights: &["Glacier Lagoon boat tour", "Ice photography", "Seal watching"],
        accommodation: VIK_HOTEL,
        difficulty: Difficulty::Medium,
    },
    ItineraryDay {
        day: 5,
        title: "DC-3 Plane Wreck & Ice Cave",
        location: "Sólheimasandur • Katla Ice Cave",
        highlights: &["Iconic plane wreck", "Blue ice cave exploration", "Glacier hiking"],
        accommodation: VIK_HOTEL,
        difficulty: Difficulty::Hard,
    },
    ItineraryDay {
        day: 6,
        title: "Reykjanes Peninsula",
        location: "Blue Lagoon • Reykjanes",
        highlights: &["Geothermal spa", "Volcanic landscapes", "Lighthouse views"],
        accommodation: REYKJAVIK_HOTEL,
        difficulty: Difficulty::Easy,
    },
    ItineraryDay {
        day: 7,
        title: "Snæfellsnes Peninsula",
        location: "Kirkjufell • Snæfellsjökull",
        highlights: &["Most photographed mountain", "Glacier national park", "Coastal cliffs"],
        accommodation: REYKJAVIK_HOTEL,
        difficulty: Difficulty::Medium,
    },
    ItineraryDay {
        day: 8,
        title: "Northern Lights Hunt",
        location: "Dark Sky Locations",
        highlights: &["Aurora photography", "Night driving", "Hot chocolate breaks"],
        accommodation: REYKJAVIK_HOTEL,
        difficulty: Difficulty::Medium,
    },
    ItineraryDay {
        day: 9,
        title: "Westman Islands",
        location: "Heimaey Island",
        highlights: &["Ferry to islands", "Puffin colonies", "Volcanic landscapes"],
        accommodation: REYKJAVIK_HOTEL,
        difficulty: Difficulty::Medium,
    },
    ItineraryDay {
        day: 10,
        title: "Photography Masterclass",
        location: "Reykjavik & Surroundings",
        highlights: &["Edit previous photos", "Final shooting locations", "Portfolio review"],
        accommodation: REYKJAVIK_HOTEL,
        difficulty: Difficulty::Easy,
    },
    ItineraryDay {
        day: 11,
        title: "Departure",
        location: "Keflavik Airport",
        highlights: &["Final breakfast", "Airport transfer", "Journey home"],
        accommodation: None,
        difficulty: Difficulty::Easy,
    },
];

