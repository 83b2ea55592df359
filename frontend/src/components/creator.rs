//! The note creator: a persistent input card that posts new notes.
//!
//! On success the server's echo (with its assigned id) is handed to the
//! board through `on_created` and the input is cleared. On any failure the
//! user gets a blocking alert and the input keeps its text for a retry.

use common::model::note::Note;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;

pub enum Msg {
    DraftChanged(String),
    Submit,
    Created(Note),
    Rejected,
}

#[derive(Properties, PartialEq)]
pub struct CreatorProps {
    pub on_created: Callback<Note>,
}

pub struct NoteCreator {
    draft: String,
}

impl Component for NoteCreator {
    type Message = Msg;
    type Properties = CreatorProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: String::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DraftChanged(text) => {
                self.draft = text;
                true
            }
            Msg::Submit => {
                let content = self.draft.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::create_note(&content).await {
                        Ok(note) => link.send_message(Msg::Created(note)),
                        Err(_) => link.send_message(Msg::Rejected),
                    }
                });
                false
            }
            Msg::Created(note) => {
                self.draft.clear();
                ctx.props().on_created.emit(note);
                true
            }
            Msg::Rejected => {
                if let Some(window) = web_sys::window() {
                    window.alert_with_message("failed to create note").ok();
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="note-creator">
                <textarea
                    value={self.draft.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::DraftChanged(input.value())
                    })}
                />
                <button type="button" title="create" onclick={link.callback(|_| Msg::Submit)}>
                    { "+" }
                </button>
            </div>
        }
    }
}
