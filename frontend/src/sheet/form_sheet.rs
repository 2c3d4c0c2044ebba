use js_sys::Function;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Sliding sheet that hosts the add/edit form. The sheet element stays in
/// the DOM permanently; visibility is driven by the `show` CSS class, which
/// [`open_sheet`] and [`close_sheet`] toggle through the element id.
pub struct FormSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for FormSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="form-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: &NodeRef) {
    toggle_show_class(sheet_ref, "add");
}

pub fn close_sheet(sheet_ref: &NodeRef) {
    toggle_show_class(sheet_ref, "remove");
}

// The class flip is deferred through setTimeout so it lands after the sheet
// content from the same update has been committed to the DOM.
fn toggle_show_class(sheet_ref: &NodeRef, op: &str) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let func = Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            sheet.id(),
            op
        ));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}
