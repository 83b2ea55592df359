use common::model::note::{Note, NotePage};

pub enum Msg {
    /// The pagination sentinel scrolled into view.
    SentinelVisible,
    PageLoaded(NotePage),
    PageFailed,
    /// The creator posted a note successfully.
    NoteCreated(Note),
    /// A card's delete was confirmed by the server.
    NoteDeleted(i32),
}
