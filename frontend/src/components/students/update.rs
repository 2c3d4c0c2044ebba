//! Update function for the students page.
//!
//! This module contains a single Elm-style `update` function: it receives
//! the current `StudentsComponent` state, the `Context`, and a `Msg`,
//! mutates the state accordingly, and returns a `bool` indicating whether
//! the view should re-render.
//!
//! Key behaviors
//! - The list is reloaded wholesale after every successful mutation; a
//!   failed fetch leaves the previous list on screen.
//! - Create assigns the next free id from the list as it stood when the
//!   form was submitted; update addresses the record by the id already in
//!   the buffer.
//! - Transport and backend failures are logged to the console, surfaced as
//!   a toast, and otherwise swallowed. Nothing is retried and the form
//!   stays open when a submit fails.

use gloo_console::error;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::student::{next_student_id, Student};

use crate::sheet::form_sheet::{close_sheet, open_sheet};

use super::api;
use super::helpers::{confirm, set_field, show_toast};
use super::messages::Msg;
use super::state::StudentsComponent;

const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - Network work runs in `spawn_local` and reports back through further
///   messages; the handler itself never blocks.
/// - Returns `true` to re-render the view, `false` when only side effects
///   occur.
pub fn update(
    component: &mut StudentsComponent,
    ctx: &Context<StudentsComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::StudentsLoaded(students) => {
            component.students = students;
            true
        }
        Msg::LoadFailed(err) => {
            error!("Failed to load students:", err);
            show_toast("Could not load students from the server.");
            false
        }
        Msg::SearchChanged(term) => {
            component.search = term;
            true
        }
        Msg::ShowAddForm => {
            component.form = Some(Student::default());
            open_sheet(&component.sheet_ref);
            true
        }
        Msg::ShowEditForm(student) => {
            component.form = Some(student);
            open_sheet(&component.sheet_ref);
            true
        }
        Msg::FieldChanged(field, value) => {
            if let Some(form) = &mut component.form {
                set_field(form, field, value);
            }
            true
        }
        Msg::CancelForm => {
            component.form = None;
            close_sheet(&component.sheet_ref);
            true
        }
        Msg::SubmitForm => {
            let Some(mut record) = component.form.clone() else {
                return false;
            };
            let updating = !record.id.is_empty();
            if !updating {
                record.id = next_student_id(&component.students);
            }

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = if updating {
                    api::update_student(&record).await
                } else {
                    api::create_student(&record).await
                };
                match result {
                    Ok(()) => link.send_message(Msg::SubmitSucceeded),
                    Err(err) => link.send_message(Msg::SubmitFailed(err)),
                }
            });
            false
        }
        Msg::SubmitSucceeded => {
            component.form = None;
            close_sheet(&component.sheet_ref);
            reload(ctx.link().clone());
            true
        }
        Msg::SubmitFailed(err) => {
            error!("Failed to save the student:", err);
            show_toast("Could not save the student.");
            false
        }
        Msg::RequestDelete(id) => {
            if confirm(DELETE_PROMPT) {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::delete_student(&id).await {
                        Ok(()) => link.send_message(Msg::DeleteSucceeded),
                        Err(err) => link.send_message(Msg::DeleteFailed(err)),
                    }
                });
            }
            false
        }
        Msg::DeleteSucceeded => {
            reload(ctx.link().clone());
            false
        }
        Msg::DeleteFailed(err) => {
            error!("Failed to delete the student:", err);
            show_toast("Could not delete the student.");
            false
        }
    }
}

/// Fetches the full collection and replaces the in-memory list on success.
/// On failure the previous list stays visible and only a diagnostic is
/// emitted (via `Msg::LoadFailed`).
pub fn reload(link: Scope<StudentsComponent>) {
    spawn_local(async move {
        match api::fetch_students().await {
            Ok(students) => link.send_message(Msg::StudentsLoaded(students)),
            Err(err) => link.send_message(Msg::LoadFailed(err)),
        }
    });
}
