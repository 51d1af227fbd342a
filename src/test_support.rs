//! Recording fakes shared by unit tests.

use std::sync::Mutex;
use url::Url;

use crate::core::VisitId;
use crate::drivers::{ContentView, PolicyDecision, RequestTransport};
use crate::events::{Event, EventKind};
use crate::observers::Observe;

/// Observer keeping every event it receives.
#[derive(Default)]
pub(crate) struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn kinds(&self) -> Vec<EventKind> {
        self.events().iter().map(|e| e.kind).collect()
    }

    pub(crate) fn count(&self, kind: EventKind) -> usize {
        self.events().iter().filter(|e| e.kind == kind).count()
    }
}

impl Observe for Recorder {
    fn on_event(&self, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}

/// Content view recording the calls made to it.
#[derive(Default)]
pub(crate) struct FakeView {
    navigations: Mutex<Vec<Url>>,
    decisions: Mutex<Vec<PolicyDecision>>,
    releases: Mutex<usize>,
}

impl FakeView {
    pub(crate) fn navigations(&self) -> Vec<Url> {
        self.navigations.lock().unwrap().clone()
    }

    pub(crate) fn decisions(&self) -> Vec<PolicyDecision> {
        self.decisions.lock().unwrap().clone()
    }

    pub(crate) fn releases(&self) -> usize {
        *self.releases.lock().unwrap()
    }
}

impl ContentView for FakeView {
    fn navigate(&self, _visit: VisitId, location: &Url) {
        self.navigations.lock().unwrap().push(location.clone());
    }

    fn decide_policy(&self, _visit: VisitId, decision: PolicyDecision) {
        self.decisions.lock().unwrap().push(decision);
    }

    fn release(&self, _visit: VisitId) {
        *self.releases.lock().unwrap() += 1;
    }
}

/// Side-channel transport recording the calls made to it.
#[derive(Default)]
pub(crate) struct FakeTransport {
    issued: Mutex<Vec<(VisitId, Url)>>,
    aborts: Mutex<usize>,
}

impl FakeTransport {
    pub(crate) fn issued(&self) -> Vec<(VisitId, Url)> {
        self.issued.lock().unwrap().clone()
    }

    pub(crate) fn aborts(&self) -> usize {
        *self.aborts.lock().unwrap()
    }
}

impl RequestTransport for FakeTransport {
    fn issue_request(&self, visit: VisitId, location: &Url) {
        self.issued.lock().unwrap().push((visit, location.clone()));
    }

    fn abort_current_request(&self) {
        *self.aborts.lock().unwrap() += 1;
    }
}

pub(crate) fn location(path: &str) -> Url {
    Url::parse("https://example.com/")
        .and_then(|base| base.join(path))
        .unwrap()
}
