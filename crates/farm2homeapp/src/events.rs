//! State-change notifications.
//!
//! Stores never render anything. After each mutation they emit a
//! [`StoreEvent`] to whoever subscribed, and the presentation layer decides
//! what to redraw.

/// Emitted after a store mutation has been applied in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    CartChanged { total_items: u32 },
    FarmersChanged { count: usize },
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// A list of subscribers, called in subscription order.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<Listener>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: StoreEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
