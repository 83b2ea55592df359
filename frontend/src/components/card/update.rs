//! Update logic for the note card.
//!
//! Every user action arrives as a message and is dispatched against the
//! card's current mode; a message that does not apply in the current mode is
//! dropped without re-rendering. Network work is spawned here and reports
//! back through the `*Resolved` messages with a normalized status.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

use super::messages::Msg;
use super::state::NoteCard;

pub fn update(card: &mut NoteCard, ctx: &Context<NoteCard>, msg: Msg) -> bool {
    match msg {
        Msg::EditRequested => {
            if !card.enter_edit() {
                return false;
            }
            card.focus_pending = true;
            true
        }
        Msg::DraftChanged(text) => card.set_draft(text),
        Msg::SaveRequested => {
            let Some(draft) = card.begin_save() else {
                return false;
            };
            let id = ctx.props().note.id;
            let link = ctx.link().clone();
            spawn_local(async move {
                let status = api::update_note(id, &draft).await;
                link.send_message(Msg::SaveResolved(status));
            });
            true
        }
        Msg::SaveResolved(status) => card.apply_save_result(status),
        Msg::DeleteRequested => {
            if !card.is_editing() || card.is_busy() {
                return false;
            }
            if !confirm_delete() {
                return false;
            }
            card.begin_delete();
            let id = ctx.props().note.id;
            let link = ctx.link().clone();
            spawn_local(async move {
                let status = api::delete_note(id).await;
                link.send_message(Msg::DeleteResolved(status));
            });
            true
        }
        Msg::DeleteResolved(status) => {
            if card.apply_delete_result(status) {
                // The board unmounts this card in response.
                ctx.props().on_deleted.emit(ctx.props().note.id);
                return false;
            }
            true
        }
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message("Deletar nota?").unwrap_or(false))
        .unwrap_or(false)
}
