//! State for the note board: the card list, the color wheel that paints new
//! cards, and the pagination cursor driving the incremental loader.

use yew::NodeRef;

use crate::palette::{ColorPair, ColorWheel};
use common::model::note::Note;

use super::observer::SentinelObserver;

/// Notes per listing request.
pub const PAGE_SIZE: i64 = 15;

/// One entry in the board's card list. The color pair is drawn from the
/// board's wheel when the entry is created and never changes.
pub struct BoardCard {
    pub note: Note,
    pub colors: ColorPair,
}

/// Pagination cursor with an explicit in-flight guard.
///
/// The page number advances when a request is issued, not when it resolves,
/// so a failed request does not re-fetch an already delivered page. The
/// `in_flight` flag keeps overlapping visibility events from issuing
/// overlapping requests. Exhaustion is terminal for the board instance.
#[derive(Debug)]
pub struct PageCursor {
    page: i64,
    page_size: i64,
    in_flight: bool,
    exhausted: bool,
}

impl PageCursor {
    pub fn new(page_size: i64) -> Self {
        Self {
            page: 0,
            page_size,
            in_flight: false,
            exhausted: false,
        }
    }

    /// Claims the next page to request, or `None` while a request is out or
    /// after the listing ran dry.
    pub fn begin(&mut self) -> Option<i64> {
        if self.in_flight || self.exhausted {
            return None;
        }
        let page = self.page;
        self.page += 1;
        self.in_flight = true;
        Some(page)
    }

    /// Records a delivered page. A short page marks the cursor exhausted.
    pub fn settle(&mut self, taken: i64) {
        self.in_flight = false;
        if taken < self.page_size {
            self.exhausted = true;
        }
    }

    /// Records a failed request. The page number stays advanced; the next
    /// visibility event may retry.
    pub fn fail(&mut self) {
        self.in_flight = false;
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }
}

pub struct NoteBoard {
    pub cards: Vec<BoardCard>,
    pub wheel: ColorWheel,
    pub cursor: PageCursor,
    /// The loader image at the tail of the note container.
    pub sentinel_ref: NodeRef,
    /// Alive while pagination is; dropped on exhaustion.
    pub observer: Option<SentinelObserver>,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            wheel: ColorWheel::new(),
            cursor: PageCursor::new(PAGE_SIZE),
            sentinel_ref: NodeRef::default(),
            observer: None,
        }
    }

    /// Appends a card for `note`, painting it with the next wheel colors.
    pub fn push_card(&mut self, note: Note) {
        let colors = self.wheel.next_pair();
        self.cards.push(BoardCard { note, colors });
    }

    /// Drops the card for `id`. Returns whether anything was removed.
    pub fn remove_card(&mut self, id: i32) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.note.id != id);
        self.cards.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE;

    fn note(id: i32) -> Note {
        Note {
            id,
            content: format!("note {id}"),
        }
    }

    #[test]
    fn cursor_claims_pages_in_order() {
        let mut cursor = PageCursor::new(15);
        assert_eq!(cursor.begin(), Some(0));
        cursor.settle(15);
        assert_eq!(cursor.begin(), Some(1));
        cursor.settle(15);
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn cursor_refuses_overlapping_requests() {
        let mut cursor = PageCursor::new(15);
        assert_eq!(cursor.begin(), Some(0));
        assert_eq!(cursor.begin(), None);
        cursor.settle(15);
        assert_eq!(cursor.begin(), Some(1));
    }

    #[test]
    fn short_page_exhausts_the_cursor_permanently() {
        let mut cursor = PageCursor::new(15);
        cursor.begin();
        cursor.settle(7);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.begin(), None);
    }

    #[test]
    fn full_page_keeps_the_cursor_live() {
        let mut cursor = PageCursor::new(15);
        cursor.begin();
        cursor.settle(15);
        assert!(!cursor.is_exhausted());
    }

    #[test]
    fn failure_allows_retry_without_skipping_a_page() {
        let mut cursor = PageCursor::new(15);
        assert_eq!(cursor.begin(), Some(0));
        cursor.fail();
        // The original increments before the response resolves; a retry
        // therefore asks for the following page.
        assert_eq!(cursor.begin(), Some(1));
    }

    #[test]
    fn cards_are_painted_in_wheel_order() {
        let mut board = NoteBoard::new();
        board.push_card(note(1));
        board.push_card(note(2));
        assert_eq!(board.cards[0].colors, PALETTE[0]);
        assert_eq!(board.cards[1].colors, PALETTE[1]);
    }

    #[test]
    fn remove_card_drops_exactly_the_matching_note() {
        let mut board = NoteBoard::new();
        board.push_card(note(1));
        board.push_card(note(2));
        assert!(board.remove_card(1));
        assert!(!board.remove_card(1));
        assert_eq!(board.cards.len(), 1);
        assert_eq!(board.cards[0].note.id, 2);
    }
}
