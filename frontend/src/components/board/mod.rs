//! Note board: composes the creator, the dynamically loaded note cards, and
//! the visibility-triggered pagination loader into one container.
//!
//! On first render the board attaches an `IntersectionObserver` to the
//! sentinel at the tail of the note container; every time the sentinel
//! scrolls into view the next page is fetched and its cards are appended in
//! front of it. A short page retires the sentinel and its observer for
//! good. The first page loads without user interaction because a fresh,
//! empty board renders the sentinel inside the viewport.

use gloo_console::error;
use web_sys::Element;
use yew::prelude::*;

mod messages;
mod observer;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::{BoardCard, NoteBoard, PageCursor, PAGE_SIZE};

use observer::SentinelObserver;

impl Component for NoteBoard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NoteBoard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render || self.observer.is_some() {
            return;
        }
        let Some(sentinel) = self.sentinel_ref.cast::<Element>() else {
            return;
        };
        let link = ctx.link().clone();
        match SentinelObserver::watch(&sentinel, move || link.send_message(Msg::SentinelVisible)) {
            Ok(observer) => self.observer = Some(observer),
            Err(err) => error!("failed to observe the note loader", err),
        }
    }
}
