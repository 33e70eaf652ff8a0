use saavnfetch::{management::Library, types::SongRecord};

fn song(id: &str, title: &str) -> SongRecord {
    SongRecord::new(id).with_field("title", title)
}

#[test]
fn test_add_favorite_then_remove() {
    let mut library = Library::new();
    assert!(library.favorites().is_empty());

    assert!(library.add_favorite(song("1", "A")));
    assert_eq!(library.favorites(), &[song("1", "A")]);

    // same id again, even with different fields, leaves the list unchanged
    assert!(!library.add_favorite(song("1", "Another title")));
    assert_eq!(library.favorites(), &[song("1", "A")]);

    assert!(library.remove_favorite("1"));
    assert!(library.favorites().is_empty());
}

#[test]
fn test_remove_unknown_favorite_is_noop() {
    let mut library = Library::new();
    library.add_favorite(song("1", "A"));

    assert!(!library.remove_favorite("2"));
    assert_eq!(library.favorites(), &[song("1", "A")]);
}

#[test]
fn test_favorites_keep_insertion_order() {
    let mut library = Library::new();
    library.add_favorite(song("3", "C"));
    library.add_favorite(song("1", "A"));
    library.add_favorite(song("2", "B"));
    library.remove_favorite("1");

    let ids: Vec<&str> = library.favorites().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2"]);
}

#[test]
fn test_history_never_holds_duplicate_ids() {
    let mut library = Library::new();
    for id in ["1", "2", "1", "3", "2", "1"] {
        library.add_history(song(id, "x"));
    }

    let ids: Vec<&str> = library.history().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_history_and_favorites_are_independent() {
    let mut library = Library::new();
    library.add_history(song("1", "A"));

    assert!(library.favorites().is_empty());
    assert!(library.add_favorite(song("1", "A")));
    assert!(library.remove_favorite("1"));
    assert_eq!(library.history().len(), 1);
}
