use std::fmt;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Exit,
    ListMovies,
    AddMovie,
    DeleteMovie,
    UpdateMovie,
    Stats,
    RandomMovie,
    SearchMovie,
    MoviesByRating,
    MoviesByYear,
    FilterMovies,
    GenerateWebsite,
}

impl MenuAction {
    pub const ALL: [MenuAction; 12] = [
        Self::Exit,
        Self::ListMovies,
        Self::AddMovie,
        Self::DeleteMovie,
        Self::UpdateMovie,
        Self::Stats,
        Self::RandomMovie,
        Self::SearchMovie,
        Self::MoviesByRating,
        Self::MoviesByYear,
        Self::FilterMovies,
        Self::GenerateWebsite,
    ];

    /// Action for a menu number, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::ListMovies => "List Movies",
            Self::AddMovie => "Add Movie",
            Self::DeleteMovie => "Delete Movie",
            Self::UpdateMovie => "Update Movie",
            Self::Stats => "Stats",
            Self::RandomMovie => "Random Movie",
            Self::SearchMovie => "Search Movie",
            Self::MoviesByRating => "Movies By Rating",
            Self::MoviesByYear => "Movies By Year",
            Self::FilterMovies => "Filter Movies",
            Self::GenerateWebsite => "Generate Website",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(MenuAction::from_index(0), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_index(2), Some(MenuAction::AddMovie));
        assert_eq!(MenuAction::from_index(11), Some(MenuAction::GenerateWebsite));
        assert_eq!(MenuAction::from_index(12), None);
    }

    #[test]
    fn test_indices_match_display_order() {
        for (index, action) in MenuAction::ALL.iter().enumerate() {
            assert_eq!(MenuAction::from_index(index), Some(*action));
        }
    }
}
