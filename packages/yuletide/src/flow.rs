//! The share flow: check, ask, branch, report, present.
//!
//! The flow never touches the DOM directly. It talks to a [`Page`], which the
//! app implements over signals and tests implement over plain fields.

use yuletide_geolocation::{Coordinates, Error};

use crate::{messages, report::LocationReport, Surprise};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    pub fn class(&self) -> &'static str {
        match self {
            StatusKind::Info => "info",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// A line of feedback in the status region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// The state of the share button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trigger {
    /// Nothing has been asked yet
    #[default]
    Ready,
    /// A permission request is in flight
    Pending,
    /// The visitor said no or no position could be read. Asking again is fine.
    Declined,
    /// Location was shared. The button stays off for good.
    Shared,
}

impl Trigger {
    pub fn is_interactive(&self) -> bool {
        matches!(self, Trigger::Ready | Trigger::Declined)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Trigger::Ready => "Share My Location for a Christmas Surprise 🎁",
            Trigger::Pending => "Asking for your location... ⏳",
            Trigger::Declined => "That's Okay - Merry Christmas Anyway! 🎄",
            Trigger::Shared => "Location Shared! Thank you! 🎅",
        }
    }
}

/// The UI boundary of the flow.
pub trait Page {
    fn set_status(&mut self, status: Option<Status>);
    fn set_coordinates(&mut self, coordinates: Option<Coordinates>);
    fn set_trigger(&mut self, trigger: Trigger);
    fn trigger(&self) -> Trigger;
}

/// What a single activation of the trigger ended in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The trigger was not interactive, nothing happened
    Ignored,
    /// The environment has no geolocation capability
    Unsupported,
    /// The visitor consented. `reported` tells whether the endpoint accepted it.
    Shared {
        coordinates: Coordinates,
        reported: bool,
    },
    /// No position was handed out
    Declined(Error),
}

/// Run the flow once for a click on the trigger.
///
/// Exactly one permission request is made per call, and exactly one report is
/// sent per granted request. The success feedback is on the page before the
/// report goes out, so a failed report is only ever logged.
pub async fn share_location(surprise: &Surprise, page: &mut impl Page) -> Outcome {
    let trigger = page.trigger();
    if !trigger.is_interactive() {
        tracing::debug!(?trigger, "ignoring activation of a disabled trigger");
        return Outcome::Ignored;
    }

    page.set_status(None);
    page.set_coordinates(None);

    if !surprise.source.is_supported() {
        tracing::warn!("geolocation is not available in this environment");
        page.set_status(Some(Status::error(messages::UNSUPPORTED)));
        return Outcome::Unsupported;
    }

    page.set_status(Some(Status::info(messages::CHECKING)));
    page.set_trigger(Trigger::Pending);

    let options = surprise.config.position_options();
    match surprise.source.current_position(options).await {
        Ok(coordinates) => {
            tracing::info!("visitor shared their location");

            page.set_coordinates(Some(coordinates));
            let text = surprise
                .pick(messages::SUCCESS)
                .unwrap_or(messages::SUCCESS[0]);
            page.set_status(Some(Status::success(text)));
            page.set_trigger(Trigger::Shared);

            let reported = send_report(surprise, coordinates).await;
            Outcome::Shared {
                coordinates,
                reported,
            }
        }

        Err(Error::Unsupported) => {
            tracing::warn!("geolocation vanished between check and request");
            page.set_status(Some(Status::error(messages::UNSUPPORTED)));
            page.set_trigger(trigger);
            Outcome::Unsupported
        }

        Err(error) => {
            tracing::info!(%error, "location was not shared");
            page.set_status(Some(Status::error(surprise.failure_message(&error))));
            page.set_trigger(Trigger::Declined);
            Outcome::Declined(error)
        }
    }
}

async fn send_report(surprise: &Surprise, coordinates: Coordinates) -> bool {
    let report = LocationReport::new(coordinates, surprise.config.purpose());
    match surprise.reporter.submit(&report).await {
        Ok(()) => {
            tracing::info!("coordinates sent to the collection endpoint");
            true
        }
        Err(err) => {
            tracing::error!("coordinates could not be sent, they were only captured locally: {err}");
            false
        }
    }
}
