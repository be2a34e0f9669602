//! Configuration and CLI argument handling

use clap::Parser;
use std::time::Duration;

use crate::{booking::DEFAULT_BOOKING_URL, state::HostSettings};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "expedition-site")]
#[command(about = "Headless preview host for the expedition site carousels")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20553")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Hero auto-advance period in milliseconds
    #[arg(long, default_value = "4000", value_parser = clap::value_parser!(u64).range(1..))]
    pub hero_interval_ms: u64,

    /// Lightbox slideshow period in milliseconds (0 disables the slideshow)
    #[arg(long, default_value = "3000")]
    pub lightbox_interval_ms: u64,

    /// Messaging deep link that booking messages are appended to
    #[arg(long, default_value = DEFAULT_BOOKING_URL)]
    pub booking_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Settings for the shared state
    pub fn settings(&self) -> HostSettings {
        HostSettings {
            host: self.host.clone(),
            port: self.port,
            hero_interval: Duration::from_millis(self.hero_interval_ms),
            lightbox_interval: Duration::from_millis(self.lightbox_interval_ms),
            booking_url: self.booking_url.trim_end_matches('?').to_string(),
        }
    }
}
