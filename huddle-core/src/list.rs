//! The in-memory event list.

use std::ops::Index;
use std::sync::Arc;

use crate::event::Event;

/// An immutable list of events with structural sharing.
///
/// Every change produces a new list. Events that a change does not touch are
/// shared with the previous list, so `Arc::ptr_eq` holds for them.
#[derive(Debug, Clone, Default)]
pub struct EventList {
    events: Vec<Arc<Event>>,
}

impl EventList {
    pub fn new() -> Self {
        EventList::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Event>> {
        self.events.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Event>> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    /// A new list with `event` appended.
    pub fn with_event(&self, event: impl Into<Arc<Event>>) -> EventList {
        let mut events = self.events.clone();
        events.push(event.into());
        EventList { events }
    }

    /// A new list with the event at `index` swapped for `event`.
    pub(crate) fn with_replaced(&self, index: usize, event: Event) -> EventList {
        let mut events = self.events.clone();
        events[index] = Arc::new(event);
        EventList { events }
    }
}

impl Index<usize> for EventList {
    type Output = Arc<Event>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.events[index]
    }
}

impl FromIterator<Event> for EventList {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        EventList {
            events: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EventList {
    type Item = &'a Arc<Event>;
    type IntoIter = std::slice::Iter<'a, Arc<Event>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
