//! Update logic for the note board.
//!
//! The board reacts to the sentinel's visibility by claiming a page from
//! the cursor and fetching it; everything else is bookkeeping on the card
//! list. Cards mutate themselves, so the board only ever adds and removes
//! entries.

use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::NoteBoard;

pub fn update(board: &mut NoteBoard, ctx: &Context<NoteBoard>, msg: Msg) -> bool {
    match msg {
        Msg::SentinelVisible => {
            let Some(page) = board.cursor.begin() else {
                return false;
            };
            let page_size = board.cursor.page_size();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::list_notes(page, page_size).await {
                    Some(notes) => link.send_message(Msg::PageLoaded(notes)),
                    None => link.send_message(Msg::PageFailed),
                }
            });
            false
        }
        Msg::PageLoaded(notes) => {
            for note in notes.content {
                board.push_card(note);
            }
            board.cursor.settle(notes.taken);
            if board.cursor.is_exhausted() {
                if let Some(observer) = board.observer.take() {
                    observer.disconnect();
                }
            }
            true
        }
        Msg::PageFailed => {
            // The sentinel stays mounted and observed, so scrolling it back
            // into view retries the fetch.
            error!("failed to load a page of notes");
            board.cursor.fail();
            false
        }
        Msg::NoteCreated(note) => {
            board.push_card(note);
            true
        }
        Msg::NoteDeleted(id) => board.remove_card(id),
    }
}
