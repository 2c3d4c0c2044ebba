//! Students page: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `FormField`, `StudentsComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the student list from the backend.

use yew::prelude::*;

mod api;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::{FormField, Msg};
pub use state::StudentsComponent;

impl Component for StudentsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        StudentsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            update::reload(ctx.link().clone());
        }
    }
}
