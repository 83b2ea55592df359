#[derive(Clone)]
pub enum Msg {
    EditRequested,
    DraftChanged(String),
    SaveRequested,
    SaveResolved(u16),
    DeleteRequested,
    DeleteResolved(u16),
}
