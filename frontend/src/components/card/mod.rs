//! Note card: one note, independently switchable between a read view and an
//! edit view, persisting its own changes against the remote endpoint.
//!
//! The module follows the state/messages/update/view split: `state` holds
//! the mode machine and its transition methods, `update` dispatches messages
//! and spawns the network calls, `view` renders the active mode.

use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CardProps;
pub use state::{CardMode, NoteCard};

impl Component for NoteCard {
    type Message = Msg;
    type Properties = CardProps;

    fn create(ctx: &Context<Self>) -> Self {
        NoteCard::new(ctx.props().note.content.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.focus_pending {
            self.focus_pending = false;
            if let Some(textarea) = self.textarea_ref.cast::<HtmlTextAreaElement>() {
                textarea.focus().ok();
            }
        }
    }
}
