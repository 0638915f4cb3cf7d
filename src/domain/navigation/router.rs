use crate::domain::navigation::metadata::{metadata_for, PageMetadata};
use crate::domain::navigation::{LegalSection, View};

/// Entry actions produced by a transition, for the host to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    ScrollToOrigin,
    UpdateMetadata(&'static PageMetadata),
}

/// Finite state machine over [`View`], with the legal sub-section kept as
/// sticky auxiliary state: leaving the legal view does not reset it.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: View,
    legal_section: LegalSection,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn legal_section(&self) -> LegalSection {
        self.legal_section
    }

    pub fn metadata(&self) -> &'static PageMetadata {
        metadata_for(self.current)
    }

    /// Moves to `view`. Any view may follow any other.
    pub fn navigate(&mut self, view: View) -> Vec<EntryAction> {
        self.current = view;
        self.entry_actions()
    }

    /// Picks a legal document and forces the legal view.
    pub fn select_legal_section(&mut self, section: LegalSection) -> Vec<EntryAction> {
        self.legal_section = section;
        self.current = View::Legal;
        self.entry_actions()
    }

    fn entry_actions(&self) -> Vec<EntryAction> {
        vec![
            EntryAction::ScrollToOrigin,
            EntryAction::UpdateMetadata(metadata_for(self.current)),
        ]
    }
}
