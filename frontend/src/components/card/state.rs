//! State for a single note card.
//!
//! The card is a two-state machine, `viewing` or `editing`, with every
//! transition expressed as a method on [`NoteCard`]. The methods are plain
//! state manipulation with no DOM access, so the whole transition table is
//! unit-testable on the host; the `update` module supplies the side effects
//! (network calls, the confirmation prompt, focus).

use yew::NodeRef;

/// View state of a card.
///
/// `busy` is the race guard: while a save or delete is in flight the card
/// ignores further save/delete requests, so at most one mutation per card
/// can be outstanding.
#[derive(Debug, Clone, PartialEq)]
pub enum CardMode {
    Viewing,
    Editing { draft: String, busy: bool },
}

/// Per-card controller state. `content` is the last server-acknowledged
/// text; an in-progress edit lives only in the mode's `draft` until a save
/// succeeds.
pub struct NoteCard {
    pub content: String,
    pub mode: CardMode,
    /// The edit textarea, focused after entering `editing`.
    pub textarea_ref: NodeRef,
    /// Set when the next render should move focus into the textarea.
    pub focus_pending: bool,
}

impl NoteCard {
    pub fn new(content: String) -> Self {
        Self {
            content,
            mode: CardMode::Viewing,
            textarea_ref: NodeRef::default(),
            focus_pending: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing { .. })
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.mode, CardMode::Editing { busy: true, .. })
    }

    /// `viewing -> editing`, draft pre-filled with the current content.
    /// Returns `false` (no change) when already editing.
    pub fn enter_edit(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.mode = CardMode::Editing {
            draft: self.content.clone(),
            busy: false,
        };
        true
    }

    /// Tracks textarea input while editing. Ignored in `viewing`.
    pub fn set_draft(&mut self, text: String) -> bool {
        match &mut self.mode {
            CardMode::Editing { draft, .. } => {
                *draft = text;
                true
            }
            CardMode::Viewing => false,
        }
    }

    /// Arms a save: marks the card busy and hands back the draft to send.
    /// Returns `None` when not editing or when a request is already out.
    pub fn begin_save(&mut self) -> Option<String> {
        match &mut self.mode {
            CardMode::Editing { draft, busy } if !*busy => {
                *busy = true;
                Some(draft.clone())
            }
            _ => None,
        }
    }

    /// Arms a delete under the same guard as [`Self::begin_save`].
    pub fn begin_delete(&mut self) -> bool {
        match &mut self.mode {
            CardMode::Editing { busy, .. } if !*busy => {
                *busy = true;
                true
            }
            _ => false,
        }
    }

    /// `editing -> viewing` on 200, committing the draft. Any other status
    /// stays in `editing` with the draft untouched, re-armed for a retry.
    pub fn apply_save_result(&mut self, status: u16) -> bool {
        match &mut self.mode {
            CardMode::Editing { draft, busy } => {
                if status == crate::api::STATUS_OK {
                    self.content = std::mem::take(draft);
                    self.mode = CardMode::Viewing;
                } else {
                    *busy = false;
                }
                true
            }
            CardMode::Viewing => false,
        }
    }

    /// Returns `true` when the card should be destroyed (200). Any other
    /// status re-arms `editing` so the user can retry.
    pub fn apply_delete_result(&mut self, status: u16) -> bool {
        if status == crate::api::STATUS_OK {
            return true;
        }
        if let CardMode::Editing { busy, .. } = &mut self.mode {
            *busy = false;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::STATUS_NETWORK_FAILURE;

    fn editing_card() -> NoteCard {
        let mut card = NoteCard::new("hello".into());
        assert!(card.enter_edit());
        card
    }

    #[test]
    fn starts_viewing_with_given_content() {
        let card = NoteCard::new("hello".into());
        assert_eq!(card.mode, CardMode::Viewing);
        assert_eq!(card.content, "hello");
    }

    #[test]
    fn enter_edit_prefills_draft() {
        let card = editing_card();
        assert_eq!(
            card.mode,
            CardMode::Editing { draft: "hello".into(), busy: false }
        );
    }

    #[test]
    fn enter_edit_is_ignored_while_editing() {
        let mut card = editing_card();
        card.set_draft("world".into());
        assert!(!card.enter_edit());
        assert_eq!(
            card.mode,
            CardMode::Editing { draft: "world".into(), busy: false }
        );
    }

    #[test]
    fn successful_save_commits_draft_and_returns_to_viewing() {
        let mut card = editing_card();
        card.set_draft("world".into());
        assert_eq!(card.begin_save(), Some("world".into()));
        assert!(card.apply_save_result(200));
        assert_eq!(card.mode, CardMode::Viewing);
        assert_eq!(card.content, "world");
    }

    #[test]
    fn failed_save_keeps_draft_and_rearms_editing() {
        let mut card = editing_card();
        card.set_draft("world".into());
        assert!(card.begin_save().is_some());
        assert!(card.apply_save_result(500));
        assert_eq!(
            card.mode,
            CardMode::Editing { draft: "world".into(), busy: false }
        );
        assert_eq!(card.content, "hello");

        // Retry entry point is idempotent: the card is armed again.
        assert_eq!(card.begin_save(), Some("world".into()));
    }

    #[test]
    fn network_failure_is_treated_like_a_rejected_save() {
        let mut card = editing_card();
        assert!(card.begin_save().is_some());
        card.apply_save_result(STATUS_NETWORK_FAILURE);
        assert!(card.is_editing());
        assert!(!card.is_busy());
    }

    #[test]
    fn busy_card_ignores_reentrant_save_and_delete() {
        let mut card = editing_card();
        assert!(card.begin_save().is_some());
        assert_eq!(card.begin_save(), None);
        assert!(!card.begin_delete());
    }

    #[test]
    fn save_is_rejected_while_viewing() {
        let mut card = NoteCard::new("hello".into());
        assert_eq!(card.begin_save(), None);
        assert!(!card.apply_save_result(200));
    }

    #[test]
    fn accepted_delete_is_terminal() {
        let mut card = editing_card();
        assert!(card.begin_delete());
        assert!(card.apply_delete_result(200));
    }

    #[test]
    fn failed_delete_reenters_editing() {
        let mut card = editing_card();
        card.set_draft("keep me".into());
        assert!(card.begin_delete());
        assert!(!card.apply_delete_result(502));
        assert_eq!(
            card.mode,
            CardMode::Editing { draft: "keep me".into(), busy: false }
        );
    }
}
