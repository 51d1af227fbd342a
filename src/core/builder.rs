use std::sync::{Arc, Weak};
use url::Url;

use super::{config::VisitConfig, state::Direction, visit::Visit};
use crate::{drivers::Driver, observers::Observe};

/// Builder for constructing a [`Visit`] with optional settings.
pub struct VisitBuilder {
    driver: Driver,
    location: Option<Url>,
    direction: Direction,
    observer: Option<Weak<dyn Observe>>,
    cfg: VisitConfig,
}

impl VisitBuilder {
    /// Creates a new builder for a visit driven by `driver`.
    pub fn new(driver: Driver) -> Self {
        Self {
            driver,
            location: None,
            direction: Direction::default(),
            observer: None,
            cfg: VisitConfig::default(),
        }
    }

    /// Sets the target location.
    ///
    /// Without a location, starting the visit issues no request.
    pub fn with_location(mut self, location: Url) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the direction (informational).
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the observer. Only a weak reference is kept: the caller owns it.
    pub fn with_observer<O: Observe>(mut self, observer: &Arc<O>) -> Self {
        let weak = Arc::downgrade(observer) as Weak<dyn Observe>;
        self.observer = Some(weak);
        self
    }

    /// Sets the configuration.
    pub fn with_config(mut self, cfg: VisitConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Builds the visit: request track `Initialized`, navigation track `Started`.
    pub fn build(self) -> Visit {
        Visit::from_parts(
            self.driver,
            self.location,
            self.direction,
            self.observer,
            self.cfg,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeView, Recorder, location};

    #[test]
    fn observer_is_held_weakly() {
        let recorder = Arc::new(Recorder::default());
        let mut visit = Visit::builder(Driver::navigation(Arc::new(FakeView::default())))
            .with_location(location("/a"))
            .with_observer(&recorder)
            .build();

        assert_eq!(Arc::strong_count(&recorder), 1);
        assert_eq!(Arc::weak_count(&recorder), 1);

        visit.start();
        assert_eq!(recorder.events().len(), 2);
    }
}
