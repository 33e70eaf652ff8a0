use crate::types::SongRecord;

/// Favorites and listening history for one server process.
///
/// Both lists keep insertion order and never hold two songs with the same id.
/// Nothing is persisted; a restart starts from empty lists.
#[derive(Debug, Default, Clone)]
pub struct Library {
    favorites: Vec<SongRecord>,
    history: Vec<SongRecord>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a favorite unless one with the same id exists. Returns whether the
    /// list changed.
    pub fn add_favorite(&mut self, song: SongRecord) -> bool {
        push_unique(&mut self.favorites, song)
    }

    /// Removes the favorite with `id`. Returns whether the list changed.
    pub fn remove_favorite(&mut self, id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|song| song.id != id);
        self.favorites.len() != before
    }

    pub fn favorites(&self) -> &[SongRecord] {
        &self.favorites
    }

    /// Records a played song unless it is already in the history.
    pub fn add_history(&mut self, song: SongRecord) -> bool {
        push_unique(&mut self.history, song)
    }

    pub fn history(&self) -> &[SongRecord] {
        &self.history
    }
}

fn push_unique(list: &mut Vec<SongRecord>, song: SongRecord) -> bool {
    if list.iter().any(|existing| existing.id == song.id) {
        return false;
    }
    list.push(song);
    true
}
