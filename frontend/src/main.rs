use crate::app::App;

mod api;
mod app;
mod components;
mod palette;

fn main() {
    yew::Renderer::<App>::new().render();
}
