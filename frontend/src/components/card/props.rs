use crate::palette::ColorPair;
use common::model::note::Note;
use yew::prelude::*;

/// Properties for one note card.
///
/// The note's `content` only seeds the card; after mounting, the card owns
/// its text and keeps it in sync with the server itself. `colors` are fixed
/// for the card's lifetime. `on_deleted` tells the board to drop the card
/// once the server has confirmed the delete.
#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    pub note: Note,
    pub colors: ColorPair,
    pub on_deleted: Callback<i32>,
}
