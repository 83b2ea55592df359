//! View rendering for the note card.
//!
//! `viewing` shows the content in a `<span>` behind an edit button;
//! `editing` swaps the span for a textarea and grows a delete button while
//! the edit button becomes a save button. Both renditions paint the card
//! with its fixed color pair.

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{CardMode, NoteCard};

pub fn view(card: &NoteCard, ctx: &Context<NoteCard>) -> Html {
    let link = ctx.link();
    let (background, foreground) = ctx.props().colors;
    let style = format!("background-color: {background}; color: {foreground};");

    match &card.mode {
        CardMode::Viewing => html! {
            <div class="note" style={style}>
                <button
                    class="edit"
                    type="button"
                    onclick={link.callback(|_| Msg::EditRequested)}
                >
                    { "✎" }
                </button>
                <span>{ card.content.clone() }</span>
            </div>
        },
        CardMode::Editing { draft, .. } => html! {
            <div class="note" style={style}>
                <button
                    class="edit-delete"
                    type="button"
                    onclick={link.callback(|_| Msg::DeleteRequested)}
                >
                    { "🗑" }
                </button>
                <button
                    class="edit edit-save"
                    type="button"
                    onclick={link.callback(|_| Msg::SaveRequested)}
                >
                    { "💾" }
                </button>
                <textarea
                    ref={card.textarea_ref.clone()}
                    value={draft.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::DraftChanged(input.value())
                    })}
                />
            </div>
        },
    }
}
