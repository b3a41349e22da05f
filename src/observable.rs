use tokio::sync::watch;

/// A single observable value: the current state plus change notification.
///
/// Externally read-only. The owning component writes through the
/// crate-private `set`, so each value has exactly one writer and consumers
/// never need a lock of their own.
#[derive(Debug)]
pub struct Observed<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone + PartialEq> Observed<T> {
    pub(crate) fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx }
    }

    /// The most recently published value.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// A receiver whose `changed()` future resolves after each new value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Publishes `value`, waking subscribers only when it differs from the
    /// value currently held.
    pub(crate) fn set(&self, value: T) {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });
    }
}
