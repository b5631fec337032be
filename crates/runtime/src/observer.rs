//! Session observers.
//!
//! Observers see every [`GameEvent`] after the session has applied it, in the
//! order observers were registered. They cannot touch the simulation; audio,
//! particles and analytics hang off this seam.

use brawl_core::GameEvent;
use tracing::trace;

pub trait SessionObserver: Send {
    /// Human-readable name, used in logs.
    fn name(&self) -> &'static str;

    fn on_event(&mut self, frame: u64, event: &GameEvent);
}

#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<Box<dyn SessionObserver>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: impl SessionObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn notify(&mut self, frame: u64, event: &GameEvent) {
        for observer in &mut self.observers {
            trace!(observer = observer.name(), frame, ?event, "notify");
            observer.on_event(frame, event);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.observers.iter().map(|o| o.name())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
