//! Favorites overlay: a modal list of every favorite with removal.

use crate::app::scroll::ScrollLock;
use crate::storage::FavoritesStore;

#[derive(Debug, Default)]
pub struct FavoritesOverlay {
    open: bool,
    selected: usize,
    lock: Option<ScrollLock>,
}

impl FavoritesOverlay {
    /// Shows the overlay with the cursor on the newest favorite.
    pub fn open(&mut self, lock_flag: &mut bool) {
        if self.open {
            return;
        }
        self.open = true;
        self.selected = 0;
        self.lock = Some(ScrollLock::engage(lock_flag));
    }

    pub fn close(&mut self, lock_flag: &mut bool) {
        if !self.open {
            return;
        }
        self.open = false;
        if let Some(lock) = self.lock.take() {
            lock.release(lock_flag);
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
    }

    /// Removes the favorite under the cursor and returns its id.
    pub fn remove_selected(&mut self, favorites: &mut FavoritesStore) -> Option<String> {
        let id = favorites.items().get(self.selected)?.id.clone();
        favorites.remove(&id);
        self.clamp(favorites.len());
        Some(id)
    }

    /// Keeps the cursor inside a list of `len` entries.
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MovieSummary, Poster};

    fn favorites(ids: &[&str]) -> FavoritesStore {
        let mut store = FavoritesStore::default();
        for id in ids.iter().rev() {
            store.add(MovieSummary {
                id: (*id).to_string(),
                title: (*id).to_string(),
                year: String::new(),
                poster: Poster::Missing,
                kind: "movie".to_string(),
            });
        }
        store
    }

    #[test]
    fn removing_last_row_moves_cursor_up() {
        let mut locked = false;
        let mut store = favorites(&["tt1", "tt2"]);
        let mut overlay = FavoritesOverlay::default();
        overlay.open(&mut locked);
        overlay.move_down(store.len());

        assert_eq!(overlay.remove_selected(&mut store).as_deref(), Some("tt2"));
        assert_eq!(overlay.selected(), 0);
        assert_eq!(overlay.remove_selected(&mut store).as_deref(), Some("tt1"));
        assert_eq!(overlay.remove_selected(&mut store), None);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut overlay = FavoritesOverlay::default();
        overlay.move_up(3);
        assert_eq!(overlay.selected(), 2);
        overlay.move_down(3);
        assert_eq!(overlay.selected(), 0);
    }

    #[test]
    fn open_and_close_toggle_scroll_lock() {
        let mut locked = false;
        let mut overlay = FavoritesOverlay::default();
        overlay.open(&mut locked);
        assert!(locked && overlay.is_open());
        overlay.close(&mut locked);
        assert!(!locked && !overlay.is_open());
    }
}
