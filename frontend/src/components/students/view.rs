//! View rendering for the students page.
//!
//! The page shows a heading, a header row with the search box and an Add
//! button, and the student table. The add/edit form lives in a `FormSheet`
//! overlay that slides in while a buffer is active. Form inputs carry
//! browser-native validation (`required`, email and date types), so a
//! submit message only fires once those checks pass.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::student::Student;

use crate::sheet::form_sheet::FormSheet;

use super::messages::{FormField, Msg};
use super::state::StudentsComponent;

/// Main view function for the students page.
pub fn view(component: &StudentsComponent, ctx: &Context<StudentsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="students-root">
            <h2>{ "Student Management System..." }</h2>
            { build_header(component, link) }
            { build_table(component, link) }
            { build_form_sheet(component, link) }
        </div>
    }
}

/// Builds the header row: the search box and the Add button.
fn build_header(component: &StudentsComponent, link: &Scope<StudentsComponent>) -> Html {
    html! {
        <div class="header">
            <input
                type="text"
                placeholder="Search by Name or Education"
                value={component.search.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SearchChanged(input.value())
                })}
            />
            <button class="add-button" onclick={link.callback(|_| Msg::ShowAddForm)}>
                { "Add" }
            </button>
        </div>
    }
}

/// Builds the table of students currently visible under the search term.
fn build_table(component: &StudentsComponent, link: &Scope<StudentsComponent>) -> Html {
    html! {
        <table>
            <thead>
                <tr>
                    <th>{ "ID" }</th>
                    <th>{ "Name" }</th>
                    <th>{ "Location" }</th>
                    <th>{ "Email" }</th>
                    <th>{ "Date of Birth" }</th>
                    <th>{ "Education" }</th>
                    <th colspan="2">{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for component
                    .visible_students()
                    .map(|student| build_student_row(student, link)) }
            </tbody>
        </table>
    }
}

fn build_student_row(student: &Student, link: &Scope<StudentsComponent>) -> Html {
    let edit_target = student.clone();
    let delete_id = student.id.clone();

    html! {
        <tr key={student.id.clone()}>
            <td>{ student.id.clone() }</td>
            <td>{ student.name.clone() }</td>
            <td>{ student.location.clone() }</td>
            <td>{ student.email.clone() }</td>
            <td>{ student.dob.clone() }</td>
            <td>{ student.education.clone() }</td>
            <td>
                { icon_button("edit", "Edit", link.callback(move |_| Msg::ShowEditForm(edit_target.clone()))) }
            </td>
            <td>
                { icon_button("delete", "Delete", link.callback(move |_| Msg::RequestDelete(delete_id.clone()))) }
            </td>
        </tr>
    }
}

/// Builds the sheet overlay. The sheet element is always rendered so the
/// open/close class toggle has a target; the form inside it only exists
/// while a buffer is active.
fn build_form_sheet(component: &StudentsComponent, link: &Scope<StudentsComponent>) -> Html {
    let body = match &component.form {
        Some(form) => build_form(form, link),
        None => html! {},
    };

    html! {
        <FormSheet node_ref={component.sheet_ref.clone()}>
            { body }
        </FormSheet>
    }
}

fn build_form(form: &Student, link: &Scope<StudentsComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitForm
    });

    html! {
        <form class="student-form" {onsubmit}>
            { labeled_input("Name:", "text", form.name.clone(), field_callback(link, FormField::Name)) }
            { labeled_input("Location:", "text", form.location.clone(), field_callback(link, FormField::Location)) }
            { labeled_input("Email:", "email", form.email.clone(), field_callback(link, FormField::Email)) }
            { labeled_input("Date of Birth:", "date", form.dob.clone(), field_callback(link, FormField::Dob)) }
            { labeled_input("Education:", "text", form.education.clone(), field_callback(link, FormField::Education)) }
            <div class="form-actions">
                <button type="submit">{ "Submit" }</button>
                <button type="button" onclick={link.callback(|_| Msg::CancelForm)}>{ "Cancel" }</button>
            </div>
        </form>
    }
}

/// Creates an input callback that routes the new value to `field`.
fn field_callback(link: &Scope<StudentsComponent>, field: FormField) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(field, input.value())
    })
}

fn labeled_input(
    label: &str,
    input_type: &'static str,
    value: String,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <label class="form-row">
            { label }
            <input type={input_type} required={true} value={value} {oninput} />
        </label>
    }
}

/// Renders an action button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click}>
            <i class="material-icons">{ icon_name }</i>
            <span class="icon-label">{ label }</span>
        </button>
    }
}
