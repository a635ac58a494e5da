//! Browser geolocation for Dioxus web apps
//!
//! This crate wraps the platform's "get current position" capability behind the
//! [`PositionSource`] trait. The browser API reports its outcome through a pair
//! of callbacks; here both are folded into a single future that resolves to
//! either [`Coordinates`] or an [`Error`] describing why no position was given.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use yuletide_geolocation::{Geolocation, PositionOptions, PositionSource};
//!
//! # async fn run() {
//! let geolocation = Geolocation;
//! if geolocation.is_supported() {
//!     match geolocation.current_position(&PositionOptions::default()).await {
//!         Ok(coords) => println!("{coords}"),
//!         Err(err) => println!("no position: {err}"),
//!     }
//! }
//! # }
//! ```
//!
//! ## Platform behavior
//!
//! - **Web (wasm32)**: `navigator.geolocation.getCurrentPosition`
//! - **Other platforms**: the capability is reported as absent

mod error;
mod sys;

use std::{fmt, time::Duration};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::{Error, Result};

/// Represents a geographic coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Latitude: {:.6} / Longitude: {:.6}",
            self.latitude, self.longitude
        )
    }
}

/// Options handed to the platform with every position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// Ask for the most precise position the device can produce
    pub enable_high_accuracy: bool,
    /// How long the platform may take before reporting [`Error::Timeout`]
    pub timeout: Duration,
    /// The oldest cached position that is acceptable. Zero forces a fresh fix.
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::ZERO,
        }
    }
}

impl PositionOptions {
    pub fn timeout_millis(&self) -> u32 {
        u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX)
    }

    pub fn maximum_age_millis(&self) -> u32 {
        u32::try_from(self.maximum_age.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Something that can answer "where is the device right now?".
///
/// Implemented by [`Geolocation`] for the real platform. Tests and alternative
/// hosts can provide their own implementation.
#[async_trait(?Send)]
pub trait PositionSource {
    /// The capability check: does this environment expose geolocation at all?
    fn is_supported(&self) -> bool;

    /// Issue exactly one permission-gated position request.
    ///
    /// The platform owns the timeout. Exactly one of the two outcomes is
    /// produced and there is no way to cancel the request once issued.
    async fn current_position(&self, options: &PositionOptions) -> Result<Coordinates>;
}

/// The geolocation capability of the current platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geolocation;

#[async_trait(?Send)]
impl PositionSource for Geolocation {
    fn is_supported(&self) -> bool {
        sys::is_supported()
    }

    async fn current_position(&self, options: &PositionOptions) -> Result<Coordinates> {
        if !sys::is_supported() {
            return Err(Error::Unsupported);
        }

        tracing::debug!(
            high_accuracy = options.enable_high_accuracy,
            timeout_ms = options.timeout_millis(),
            "requesting current position"
        );
        sys::current_position(options).await
    }
}

/// A free-form description of the client making the request.
///
/// On the web this is the browser's user agent string.
pub fn client_descriptor() -> String {
    sys::user_agent()
        .unwrap_or_else(|| concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into())
}
