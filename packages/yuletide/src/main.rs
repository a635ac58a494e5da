use dioxus::logger::tracing::Level;

fn main() {
    // Debug output from the flow is noisy in the console, keep it to info and up.
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    dioxus::launch(yuletide::App);
}
