//! The four recommendation domains shown in the figure
//!
//! Each domain owns its fixed slot in the 2×2 grid, so the layout never
//! depends on the order in which panels are configured or generated.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Movies,
    Books,
    Music,
    Products,
}

impl Domain {
    /// All domains in grid order (row-major)
    pub const ALL: [Domain; 4] = [Domain::Movies, Domain::Books, Domain::Music, Domain::Products];

    /// Grid slot as (row, col)
    pub fn slot(&self) -> (usize, usize) {
        match self {
            Domain::Movies => (0, 0),
            Domain::Books => (0, 1),
            Domain::Music => (1, 0),
            Domain::Products => (1, 1),
        }
    }

    /// Row-major index of the slot in a 2×2 grid
    pub fn slot_index(&self) -> usize {
        let (row, col) = self.slot();
        row * 2 + col
    }

    /// Prefix used for item (column) labels
    pub fn item_prefix(&self) -> &'static str {
        match self {
            Domain::Movies => "Movie",
            Domain::Books => "Book",
            Domain::Music => "Track",
            Domain::Products => "Product",
        }
    }

    /// Item labels "<prefix> 1" .. "<prefix> n"
    pub fn item_labels(&self, n: usize) -> Vec<String> {
        numbered_labels(self.item_prefix(), n)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Movies => "movies",
            Domain::Books => "books",
            Domain::Music => "music",
            Domain::Products => "products",
        };
        write!(f, "{}", name)
    }
}

/// Labels "<prefix> 1" .. "<prefix> n"
pub fn numbered_labels(prefix: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{} {}", prefix, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slots_are_fixed_and_distinct() {
        assert_eq!(Domain::Movies.slot(), (0, 0));
        assert_eq!(Domain::Books.slot(), (0, 1));
        assert_eq!(Domain::Music.slot(), (1, 0));
        assert_eq!(Domain::Products.slot(), (1, 1));

        let indices: HashSet<usize> = Domain::ALL.iter().map(|d| d.slot_index()).collect();
        assert_eq!(indices.len(), 4);

        for (i, domain) in Domain::ALL.iter().enumerate() {
            assert_eq!(domain.slot_index(), i);
        }
    }

    #[test]
    fn test_item_labels() {
        let labels = Domain::Music.item_labels(10);
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "Track 1");
        assert_eq!(labels[9], "Track 10");

        assert_eq!(numbered_labels("User", 2), vec!["User 1", "User 2"]);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let domain: Domain = serde_json::from_str("\"products\"").unwrap();
        assert_eq!(domain, Domain::Products);
        assert!(serde_json::from_str::<Domain>("\"Podcasts\"").is_err());
    }
}
