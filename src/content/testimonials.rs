//! Traveler testimonials shown under the pricing card

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    /// Stars out of five
    pub rating: u8,
    pub text: &'static str,
    /// When the reviewer travelled
    pub trip: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        location: "Mumbai",
        rating: 5,
        text: "Absolutely incredible experience! Adithya's guidance helped me capture the Northern Lights perfectly. Worth every rupee!",
        trip: "October 2023",
    },
    Testimonial {
        name: "Rajesh Kumar",
        location: "Bangalore",
        rating: 5,
        text: "Best photography trip ever! The ice caves were magical and the group was fantastic. Already planning to book again.",
        trip: "December 2023",
    },
    Testimonial {
        name: "Sneha Patel",
        location: "Delhi",
        rating: 5,
        text: "From a complete beginner to capturing award-winning shots - this trip transformed my photography skills.",
        trip: "February 2024",
    },
];
