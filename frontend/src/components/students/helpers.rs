//! Utility functions for the students page.
//!
//! Supports `update.rs` and `view.rs` with:
//! - **Form buffer edits**: routing a single field change into the buffer.
//! - **Confirmation**: the blocking confirm dialog guarding deletes.
//! - **User feedback**: transient toast notifications for failed backend
//!   operations.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::student::Student;

use super::messages::FormField;

/// Applies one field change to the form buffer, leaving every other field
/// untouched. The id is not reachable from here; it is assigned on create
/// and carried through unchanged on edit.
pub fn set_field(form: &mut Student, field: FormField, value: String) {
    match field {
        FormField::Name => form.name = value,
        FormField::Location => form.location = value,
        FormField::Email => form.email = value,
        FormField::Dob => form.dob = value,
        FormField::Education => form.education = value,
    }
}

/// Shows the browser's blocking confirm dialog and reports the choice.
/// Returns `false` when no window or no answer is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates a styled `div`, appends it to the body, and removes it again
/// after a few seconds. Used for non-blocking feedback when a backend
/// operation fails.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let html_toast: HtmlElement = toast.unchecked_into();
            let style = html_toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "20px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();
            style.set_property("font-family", "Arial, sans-serif").ok();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student {
            id: "2".to_string(),
            name: "Ann".to_string(),
            location: "Oslo".to_string(),
            email: "ann@example.com".to_string(),
            dob: "2001-04-05".to_string(),
            education: "BSc".to_string(),
        }
    }

    #[test]
    fn field_change_touches_exactly_one_field() {
        let mut buffer = sample();
        set_field(&mut buffer, FormField::Location, "Bergen".to_string());

        let expected = Student {
            location: "Bergen".to_string(),
            ..sample()
        };
        assert_eq!(buffer, expected);
    }

    #[test]
    fn id_is_not_reachable_from_the_form() {
        let mut buffer = sample();
        for field in [
            FormField::Name,
            FormField::Location,
            FormField::Email,
            FormField::Dob,
            FormField::Education,
        ] {
            set_field(&mut buffer, field, "changed".to_string());
        }
        assert_eq!(buffer.id, "2");
    }

    #[test]
    fn add_buffer_is_empty_with_no_id() {
        let buffer = Student::default();
        assert!(buffer.id.is_empty());
        assert!(buffer.name.is_empty());
        assert!(buffer.location.is_empty());
        assert!(buffer.email.is_empty());
        assert!(buffer.dob.is_empty());
        assert!(buffer.education.is_empty());
    }
}
