//! Fixed interaction datasets as `(user, item, rating)` triples.

/// Two users which both rated item `0` highly, only user `1` rated item `1`.
pub fn shared_taste() -> Vec<(u32, u32, f32)> {
    vec![(0, 0, 5.), (1, 0, 5.), (1, 1, 4.)]
}

/// User `0` has a single rating on an item nobody else rated.
pub fn isolated_user() -> Vec<(u32, u32, f32)> {
    vec![(0, 0, 5.), (1, 1, 4.), (2, 1, 3.)]
}

/// Seven users on eight items, with a re-rating of item `0` by user `5`.
///
/// The same dataset is stored as `data/interactions.csv` in the workspace.
pub fn movie_night() -> Vec<(u32, u32, f32)> {
    vec![
        (0, 0, 5.),
        (0, 1, 4.),
        (0, 2, 1.),
        (1, 0, 5.),
        (1, 1, 5.),
        (1, 3, 4.),
        (1, 4, 2.),
        (2, 0, 4.),
        (2, 2, 2.),
        (2, 3, 5.),
        (2, 5, 3.),
        (3, 1, 4.),
        (3, 4, 5.),
        (3, 6, 4.),
        (4, 5, 5.),
        (4, 6, 3.),
        (4, 7, 4.),
        (5, 0, 3.),
        (5, 3, 4.),
        (5, 7, 5.),
        (5, 0, 4.),
        (6, 7, 2.),
    ]
}
