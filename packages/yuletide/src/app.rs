use dioxus::{core::Task, prelude::*};
use yuletide_geolocation::Coordinates;

use crate::{
    flow::{share_location, Page, Status, Trigger},
    Config, Surprise,
};

/// The page as launched in the browser.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Surprise::new(Config::default()));

    rsx! {
        SurprisePage {}
    }
}

/// The greeting around the [`SharePanel`].
///
/// Expects a [`Surprise`] in context.
#[component]
pub fn SurprisePage() -> Element {
    let page = use_page();

    rsx! {
        div { class: "container",
            header {
                h1 { "🎄 A Little Christmas Surprise 🎄" }
                p { "Share your location and something festive might find its way to you." }
                p { class: "privacy-note",
                    "Nothing is shared unless you press the button and allow access."
                }
            }
            SharePanel { page }
        }
    }
}

/// The share button and its two output regions.
#[component]
pub fn SharePanel(page: SignalPage) -> Element {
    let surprise = use_context::<Surprise>();
    let trigger = *page.trigger.read();
    let label = trigger.label();

    rsx! {
        button {
            id: "shareLocationBtn",
            class: "share-button",
            disabled: !trigger.is_interactive(),
            onclick: move |_| {
                spawn_share(surprise.clone(), page);
            },
            "{label}"
        }
        if let Some(status) = page.status.cloned() {
            StatusBanner { status }
        }
        if let Some(coordinates) = page.coordinates.cloned() {
            CoordinatePanel { coordinates }
        }
    }
}

/// Run [`share_location`] for one activation of the trigger, in the background.
pub fn spawn_share(surprise: Surprise, mut page: SignalPage) -> Task {
    spawn(async move {
        share_location(&surprise, &mut page).await;
    })
}

#[component]
pub fn StatusBanner(status: Status) -> Element {
    let class = format!("status-message {}", status.kind.class());
    let text = status.text;
    rsx! {
        div { id: "statusMessage", class: "{class}", "{text}" }
    }
}

/// The transparency panel: exactly what was sent, and why.
#[component]
pub fn CoordinatePanel(coordinates: Coordinates) -> Element {
    let latitude = format!("{:.6}", coordinates.latitude);
    let longitude = format!("{:.6}", coordinates.longitude);

    rsx! {
        div { id: "coordinates", class: "coordinates show",
            strong { "Coordinates shared:" }
            br {}
            "Latitude: {latitude}"
            br {}
            "Longitude: {longitude}"
            br {}
            small {
                em { "This data was only sent because you explicitly consented" }
            }
        }
    }
}

/// A [`Page`] backed by signals, so every update rerenders the page.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalPage {
    pub status: Signal<Option<Status>>,
    pub coordinates: Signal<Option<Coordinates>>,
    pub trigger: Signal<Trigger>,
}

/// Create the signals behind a [`SignalPage`].
pub fn use_page() -> SignalPage {
    SignalPage {
        status: use_signal(|| None),
        coordinates: use_signal(|| None),
        trigger: use_signal(Trigger::default),
    }
}

impl Page for SignalPage {
    fn set_status(&mut self, status: Option<Status>) {
        self.status.set(status);
    }

    fn set_coordinates(&mut self, coordinates: Option<Coordinates>) {
        self.coordinates.set(coordinates);
    }

    fn set_trigger(&mut self, trigger: Trigger) {
        self.trigger.set(trigger);
    }

    fn trigger(&self) -> Trigger {
        *self.trigger.peek()
    }
}
