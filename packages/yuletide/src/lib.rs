//! A festive page that asks for permission before sharing the visitor's location.
//!
//! The visitor presses a button, the browser asks for consent, and only on a
//! grant are the coordinates shown back to them and forwarded to a collection
//! endpoint. Every other path ends in a friendly message.
//!
//! - [`flow`] drives a single activation of the button
//! - [`report`] builds and sends the [`report::LocationReport`]
//! - [`messages`] holds everything the page says
//! - [`Surprise`] is the composition root handed to the UI through context

mod app;
pub mod config;
pub mod flow;
pub mod messages;
pub mod report;
mod surprise;

pub use app::{
    spawn_share, use_page, App, CoordinatePanel, SharePanel, SignalPage, StatusBanner, SurprisePage,
};
pub use config::Config;
pub use surprise::Surprise;

pub use yuletide_geolocation as geolocation;
