//! Change notifications for presentation layers.
//!
//! The plugin shim re-renders after every handled event anyway; observers are
//! for side channels that care about specific changes, such as the pane
//! title showing the number of favorites.

/// Something observable happened to the application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// A search for `term` was started.
    QueryCommitted { term: String },
    /// The result list was replaced by a search response.
    ResultsReplaced { count: usize },
    /// The favorites list changed, or was loaded.
    FavoritesChanged { count: usize },
    /// A detail lookup settled, successfully or not.
    DetailsSettled { movie_id: String, ok: bool },
}

type Observer = Box<dyn FnMut(&StateChange)>;

/// Registered observers, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    list: Vec<Observer>,
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.list.len())
            .finish()
    }
}

impl Observers {
    pub fn subscribe(&mut self, observer: impl FnMut(&StateChange) + 'static) {
        self.list.push(Box::new(observer));
    }

    pub fn notify(&mut self, change: &StateChange) {
        tracing::trace!(?change, observers = self.list.len(), "notifying observers");
        for observer in &mut self.list {
            observer(change);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
