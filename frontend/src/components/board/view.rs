//! View rendering for the note board: the creator slot, then the note
//! container with one card per note and the pagination sentinel as its last
//! child. The sentinel leaves the tree entirely (not merely hidden) once
//! the listing is exhausted.

use yew::prelude::*;

use crate::components::card::NoteCard;
use crate::components::creator::NoteCreator;

use super::messages::Msg;
use super::state::NoteBoard;

pub fn view(board: &NoteBoard, ctx: &Context<NoteBoard>) -> Html {
    let link = ctx.link();

    html! {
        <div id="notes">
            <div id="note-creator-container">
                <NoteCreator on_created={link.callback(Msg::NoteCreated)} />
            </div>
            <div id="note-container">
                {
                    for board.cards.iter().map(|card| html! {
                        <NoteCard
                            key={card.note.id}
                            note={card.note.clone()}
                            colors={card.colors}
                            on_deleted={link.callback(Msg::NoteDeleted)}
                        />
                    })
                }
                {
                    if board.cursor.is_exhausted() {
                        html! {}
                    } else {
                        html! {
                            <img
                                ref={board.sentinel_ref.clone()}
                                src="https://htmx.org/img/bars.svg"
                            />
                        }
                    }
                }
            </div>
        </div>
    }
}
