use common::model::student::Student;

/// Editable fields of the form buffer. The id is deliberately absent: it is
/// assigned on create and never changed afterwards.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FormField {
    Name,
    Location,
    Email,
    Dob,
    Education,
}

pub enum Msg {
    StudentsLoaded(Vec<Student>),
    LoadFailed(String),
    SearchChanged(String),
    ShowAddForm,
    ShowEditForm(Student),
    FieldChanged(FormField, String),
    CancelForm,
    SubmitForm,
    SubmitSucceeded,
    SubmitFailed(String),
    RequestDelete(String),
    DeleteSucceeded,
    DeleteFailed(String),
}
