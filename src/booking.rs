//! Booking handoff to an external messaging service
//!
//! Nothing is sent from here. A booking request becomes a pre-filled message
//! and a deep link the visitor's browser opens.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::info;

use crate::content::{pricing, PricingTier};

/// Messaging deep link the booking form hands off to
pub const DEFAULT_BOOKING_URL: &str = "https://wa.me/917373076000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        })
    }
}

fn default_tier() -> String {
    "standard".to_string()
}

fn default_travelers() -> u32 {
    1
}

/// The booking form as submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(default = "default_tier")]
    pub tier: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_travelers")]
    pub travelers: u32,
    #[serde(default)]
    pub experience: Experience,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("unknown pricing tier '{0}'")]
    UnknownTier(String),

    #[error("at least one traveler is required")]
    NoTravelers,

    #[error("a name is required")]
    MissingName,
}

/// A composed message and the link that carries it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingHandoff {
    pub message: String,
    pub link: String,
}

impl BookingRequest {
    /// Check the request and resolve its pricing tier
    pub fn validate(&self) -> Result<&'static PricingTier, BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::MissingName);
        }
        if self.travelers == 0 {
            return Err(BookingError::NoTravelers);
        }
        pricing::tier(&self.tier).ok_or_else(|| BookingError::UnknownTier(self.tier.clone()))
    }

    /// Fill the booking message template. Fields are inserted as submitted.
    pub fn compose_message(&self, tier: &PricingTier) -> String {
        let special = match self.special_requests.as_deref() {
            Some(requests) if !requests.is_empty() => format!("- Special Requests: {}", requests),
            _ => String::new(),
        };

        format!(
            "Hi! I'm interested in booking the \"{tier}\" Iceland photography expedition \
             for {travelers} traveler(s). \n\
             \n\
             My details:\n\
             - Name: {name}\n\
             - Email: {email}\n\
             - Phone: {phone}\n\
             - Photography Experience: {experience}\n\
             - Interests: {interests}\n\
             {special}\n\
             \n\
             Please send me more details and booking information. Thanks!",
            tier = tier.name,
            travelers = self.travelers,
            name = self.name,
            email = self.email,
            phone = self.phone,
            experience = self.experience,
            interests = self.interests.join(", "),
            special = special,
        )
    }

    /// Validate, compose and link in one go
    pub fn handoff(&self, base_url: &str) -> Result<BookingHandoff, BookingError> {
        let tier = self.validate()?;
        let message = self.compose_message(tier);
        let link = deep_link(base_url, &message);
        info!("Prepared booking handoff for {} traveler(s), tier '{}'", self.travelers, tier.id);
        Ok(BookingHandoff { message, link })
    }
}

/// `<base>?text=<percent-encoded message>`
pub fn deep_link(base_url: &str, message: &str) -> String {
    format!("{}?text={}", base_url, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest {
            tier: "standard".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            travelers: 2,
            experience: Experience::Intermediate,
            interests: vec![
                "Northern Lights Photography".to_string(),
                "Ice Cave Exploration".to_string(),
            ],
            special_requests: None,
        }
    }

    #[test]
    fn composes_the_template() {
        let req = request();
        let tier = req.validate().unwrap();
        let message = req.compose_message(tier);

        let expected = "Hi! I'm interested in booking the \"Standard Adventure\" Iceland \
            photography expedition for 2 traveler(s). \n\
            \n\
            My details:\n\
            - Name: Priya Sharma\n\
            - Email: priya@example.com\n\
            - Phone: +91 98765 43210\n\
            - Photography Experience: intermediate\n\
            - Interests: Northern Lights Photography, Ice Cave Exploration\n\
            \n\
            \n\
            Please send me more details and booking information. Thanks!";
        assert_eq!(message, expected);
    }

    #[test]
    fn fields_are_inserted_verbatim() {
        let mut req = request();
        req.name = " Priya ".to_string();
        req.special_requests = Some(" Vegetarian meals ".to_string());
        let message = req.compose_message(req.validate().unwrap());
        assert!(message.contains("- Name:  Priya \n"));
        assert!(message.contains("\n- Special Requests:  Vegetarian meals \n\n"));

        req.special_requests = Some(String::new());
        let message = req.compose_message(req.validate().unwrap());
        assert!(!message.contains("Special Requests"));
    }

    #[test]
    fn link_is_percent_encoded() {
        let link = deep_link(DEFAULT_BOOKING_URL, "Hi! 2 traveler(s) & more\nthanks");
        assert!(link.starts_with("https://wa.me/917373076000?text="));
        let encoded = link.split_once("?text=").map(|(_, q)| q).unwrap();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert!(encoded.contains("%20"));
        assert!(encoded.contains("%26"));
        assert!(encoded.contains("%0A"));
        assert_eq!(urlencoding::decode(encoded).unwrap(), "Hi! 2 traveler(s) & more\nthanks");
    }

    #[test]
    fn rejects_bad_requests() {
        let mut req = request();
        req.travelers = 0;
        assert_eq!(req.validate(), Err(BookingError::NoTravelers));

        let mut req = request();
        req.name = "  ".to_string();
        assert_eq!(req.validate(), Err(BookingError::MissingName));

        let mut req = request();
        req.tier = "luxury".to_string();
        assert_eq!(
            req.handoff(DEFAULT_BOOKING_URL),
            Err(BookingError::UnknownTier("luxury".to_string()))
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let req: BookingRequest = serde_json::from_str(r#"{"name":"Rajesh"}"#).unwrap();
        assert_eq!(req.tier, "standard");
        assert_eq!(req.travelers, 1);
        assert_eq!(req.experience, Experience::Beginner);
        assert!(req.handoff(DEFAULT_BOOKING_URL).is_ok());
    }
}
