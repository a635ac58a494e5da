use std::{cell::RefCell, rc::Rc};

use yuletide_geolocation::{Geolocation, PositionSource};

use crate::{
    messages::{self, IndexSource, RandomIndex},
    report::{HttpReporter, Reporter},
    Config,
};

/// The composition root of the page.
///
/// Built once at startup and handed to the UI through context. Every
/// collaborator the share flow touches lives here, so tests can swap any of
/// them out.
#[derive(Clone)]
pub struct Surprise {
    pub(crate) config: Rc<Config>,
    pub(crate) source: Rc<dyn PositionSource>,
    pub(crate) reporter: Rc<dyn Reporter>,
    pub(crate) picker: Rc<RefCell<dyn IndexSource>>,
}

impl Surprise {
    /// Wire up the real platform: browser geolocation, HTTP reporting and a
    /// clock-seeded message picker.
    pub fn new(config: Config) -> Self {
        let reporter = HttpReporter::new(config.endpoint());
        Self {
            config: Rc::new(config),
            source: Rc::new(Geolocation),
            reporter: Rc::new(reporter),
            picker: Rc::new(RefCell::new(RandomIndex::from_clock())),
        }
    }

    pub fn with_source(mut self, source: impl PositionSource + 'static) -> Self {
        self.source = Rc::new(source);
        self
    }

    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Rc::new(reporter);
        self
    }

    pub fn with_index_source(mut self, picker: impl IndexSource + 'static) -> Self {
        self.picker = Rc::new(RefCell::new(picker));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn pick<'a>(&self, choices: &[&'a str]) -> Option<&'a str> {
        messages::choose(choices, &mut *self.picker.borrow_mut())
    }

    pub(crate) fn failure_message(&self, error: &yuletide_geolocation::Error) -> String {
        messages::failure_message(error, &mut *self.picker.borrow_mut())
    }
}

impl Default for Surprise {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
