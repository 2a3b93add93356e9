use std::cell::RefCell;
use std::rc::Rc;

use super::SiteEvent;

/// Receiver of [`SiteEvent`]s published by the page.
pub trait EventSink {
    fn send(&self, event: SiteEvent);
}

impl EventSink for crossbeam::channel::Sender<SiteEvent> {
    fn send(&self, event: SiteEvent) {
        // A dropped receiver only means nobody listens anymore.
        let _ = crossbeam::channel::Sender::send(self, event);
    }
}

impl<F> EventSink for F
where
    F: Fn(SiteEvent),
{
    fn send(&self, event: SiteEvent) {
        self(event);
    }
}

/// Buffer used on wasm where blocking channels are not an option.
impl EventSink for Rc<RefCell<Vec<SiteEvent>>> {
    fn send(&self, event: SiteEvent) {
        self.borrow_mut().push(event);
    }
}
