use crate::app::App;

mod app;
mod components;
mod sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
