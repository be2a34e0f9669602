//! Pricing tiers and frequently asked questions

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub id: &'static str,
    pub name: &'static str,
    /// Price in whole rupees
    pub price: u64,
    pub original_price: Option<u64>,
    pub currency: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub not_included: &'static [&'static str],
    pub popular: bool,
    pub urgency: Option<&'static str>,
}

impl PricingTier {
    /// Price with Indian digit grouping, e.g. `₹2,49,000`
    pub fn display_price(&self) -> String {
        format!("{}{}", self.currency, format_inr(self.price))
    }

    pub fn display_original_price(&self) -> Option<String> {
        self.original_price
            .map(|original| format!("{}{}", self.currency, format_inr(original)))
    }

    pub fn savings(&self) -> Option<u64> {
        self.original_price
            .and_then(|original| original.checked_sub(self.price))
    }

    /// The tier with its prices formatted for display
    pub fn card(&'static self) -> PricingCard {
        let savings = self.savings().filter(|&s| s > 0);
        PricingCard {
            tier: self,
            display_price: self.display_price(),
            display_original_price: self.display_original_price(),
            savings,
            display_savings: savings.map(|s| format!("{}{}", self.currency, format_inr(s))),
        }
    }
}

/// What the pricing card renders: the raw tier plus ready-made price labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingCard {
    #[serde(flatten)]
    pub tier: &'static PricingTier,
    pub display_price: String,
    pub display_original_price: Option<String>,
    pub savings: Option<u64>,
    pub display_savings: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const PRICING_TIERS: &[PricingTier] = &[PricingTier {
    id: "standard",
    name: "Standard Adventure",
    price: 249_000,
    original_price: Some(299_000),
    currency: "₹",
    description: "Complete 11-day Iceland photography expedition with all essentials included.",
    features: &[
        "11 days / 10 nights accommodation",
        "Professional photography guidance",
        "All transportation in Iceland",
        "Entrance to all attractions",
        "Small group (max 12 travelers)",
        "Airport transfers",
        "Photography workshops",
        "Post-processing tutorials",
        "Northern Lights hunting (weather permitting)",
        "Ice cave exploration",
        "Golden Circle tour",
        "South Coast waterfalls",
        "Jökulsárlón glacier lagoon",
        "Group photo editing sessions",
        "24/7 support during trip",
    ],
    not_included: &[
        "International flights to/from Iceland",
        "Travel insurance",
        "Personal expenses",
        "Alcoholic beverages",
        "Photography equipment rental",
        "Extra activities not in itinerary",
    ],
    popular: true,
    urgency: Some("Only 3 spots left!"),
}];

pub const INTEREST_OPTIONS: &[&str] = &[
    "Northern Lights Photography",
    "Landscape Photography",
    "Waterfall Photography",
    "Ice Cave Exploration",
    "Wildlife Photography",
    "Portrait Photography",
    "Night Sky Photography",
    "Drone Photography",
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I need professional photography experience?",
        answer: "Not at all! Our expedition welcomes photographers of all levels. Adithya provides hands-on guidance, workshops, and personalized instruction to help you capture stunning shots regardless of your experience level.",
    },
    FaqEntry {
        question: "What's the ideal group size?",
        answer: "We maintain small groups of maximum 12 travelers to ensure personalized attention, better photography opportunities, and a more intimate experience with Iceland's landscapes.",
    },
    FaqEntry {
        question: "What vehicles will we use for transportation?",
        answer: "We use comfortable 4x4 vehicles that can handle Iceland's diverse terrain, including F-roads to reach remote locations. All fuel, tolls, and parking fees are included.",
    },
    FaqEntry {
        question: "Who is the trip leader?",
        answer: "Adithya Subramaniam, a professional adventure photographer and travel expert, leads every expedition. With years of Iceland experience, he knows the best spots and optimal timing for incredible shots.",
    },
    FaqEntry {
        question: "Do I need driving experience in Iceland?",
        answer: "No driving required! Our professional drivers handle all transportation, allowing you to focus entirely on photography and enjoying the stunning landscapes.",
    },
    FaqEntry {
        question: "What exactly is included in the package?",
        answer: "Twin-shared accommodations, all transportation, national park entries, geothermal spa visits, ice cave adventures, Northern Lights hunting, professional photography guidance, and airport transfers.",
    },
    FaqEntry {
        question: "What's not included in the pricing?",
        answer: "International flights, visa charges, meals, personal expenses, travel insurance, and photography equipment rental are not included. We can help arrange these separately.",
    },
    FaqEntry {
        question: "Are Northern Lights guaranteed?",
        answer: "While we can't control nature, we maximize your chances with optimal timing, location scouting, and multiple hunting sessions. March offers excellent Northern Lights visibility in Iceland.",
    },
    FaqEntry {
        question: "How should I prepare for Iceland's weather?",
        answer: "We'll provide a detailed packing list including waterproof layers, warm clothing, and proper footwear. Iceland's weather can be unpredictable, so preparation is key for comfort and safety.",
    },
];

pub fn tier(id: &str) -> Option<&'static PricingTier> {
    PRICING_TIERS.iter().find(|t| t.id == id)
}

pub fn cards() -> Vec<PricingCard> {
    PRICING_TIERS.iter().map(PricingTier::card).collect()
}

/// Group digits the en-IN way: last three, then pairs (`12,34,567`)
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_indian_grouping() {
        assert_eq!(format_inr(0), "0");
        assert_eq!(format_inr(999), "999");
        assert_eq!(format_inr(1_000), "1,000");
        assert_eq!(format_inr(50_000), "50,000");
        assert_eq!(format_inr(249_000), "2,49,000");
        assert_eq!(format_inr(12_345_678), "1,23,45,678");
    }

    #[test]
    fn standard_tier_pricing() {
        let standard = tier("standard").expect("standard tier exists");
        assert_eq!(standard.display_price(), "₹2,49,000");
        assert_eq!(standard.display_original_price().as_deref(), Some("₹2,99,000"));
        assert_eq!(standard.savings(), Some(50_000));
        assert!(tier("luxury").is_none());
    }

    #[test]
    fn cards_carry_display_labels() {
        let cards = cards();
        assert_eq!(cards.len(), PRICING_TIERS.len());

        let json = serde_json::to_value(&cards[0]).expect("serializable");
        assert_eq!(json["id"], "standard");
        assert_eq!(json["price"], 249_000);
        assert_eq!(json["display_price"], "₹2,49,000");
        assert_eq!(json["display_original_price"], "₹2,99,000");
        assert_eq!(json["savings"], 50_000);
        assert_eq!(json["display_savings"], "₹50,000");
    }
}
