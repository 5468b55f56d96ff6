use crate::catalog::SkipOption;

/// The skip the user has picked, if any.
///
/// Once something is held there is no way back to `Empty`; picking another
/// skip replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    Empty,
    Holding(SkipOption),
}

impl Selection {
    pub fn select(&mut self, option: SkipOption) {
        tracing::debug!(id = %option.id, size = option.size, "skip selected");
        *self = Selection::Holding(option);
    }

    pub fn current(&self) -> Option<&SkipOption> {
        match self {
            Selection::Empty => None,
            Selection::Holding(option) => Some(option),
        }
    }

    /// Identity comparison by `id` only.
    pub fn is_selected(&self, option: &SkipOption) -> bool {
        self.current().is_some_and(|held| held.id == option.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample;

    #[test]
    fn test_starts_empty() {
        let selection = Selection::default();
        assert!(selection.current().is_none());
        assert!(!selection.is_selected(&sample(1, 4, 100.0)));
    }

    #[test]
    fn test_select_replaces() {
        let mut selection = Selection::default();
        let first = sample(1, 4, 100.0);
        let second = sample(2, 6, 200.0);

        selection.select(first.clone());
        assert_eq!(selection.current(), Some(&first));

        selection.select(second.clone());
        assert_eq!(selection.current(), Some(&second));
        assert!(!selection.is_selected(&first));
        assert!(selection.is_selected(&second));
    }

    #[test]
    fn test_is_selected_compares_ids_only() {
        let mut selection = Selection::default();
        selection.select(sample(7, 4, 100.0));

        let same_id_other_fields = sample(7, 40, 999.0);
        assert!(selection.is_selected(&same_id_other_fields));
    }

    #[test]
    fn test_reselect_same_option() {
        let mut selection = Selection::default();
        let option = sample(1, 4, 100.0);
        selection.select(option.clone());
        selection.select(option.clone());
        assert_eq!(selection, Selection::Holding(option));
    }
}
