use crate::schemas::Artwork;

/// The single artwork currently opened for preview, if any.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<Artwork>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previous selection.
    pub fn select(&mut self, item: &Artwork) {
        self.current = Some(item.clone());
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn selected(&self) -> Option<&Artwork> {
        self.current.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.id.as_str())
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the selection when its id is no longer among `items`.
    pub fn retain_if_present<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a Artwork>,
    {
        let still_listed = match self.selected_id() {
            Some(id) => items.into_iter().any(|item| item.id == id),
            None => return,
        };
        if !still_listed {
            self.current = None;
        }
    }
}
