//! Component state for the students page.
//!
//! One struct holds everything the page needs: the last fetched list, the
//! search term, the transient form buffer, and the `NodeRef` of the sheet
//! the form slides in on. The filtered view is derived on demand and never
//! stored.

use common::model::student::Student;
use yew::prelude::*;

/// Main state container for the `StudentsComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct StudentsComponent {
    /// Most recently fetched student list, in backend order. Replaced
    /// wholesale after every successful fetch, never merged incrementally.
    pub students: Vec<Student>,

    /// Current search term. Applied client-side only; no request is made
    /// while typing.
    pub search: String,

    /// Edit buffer backing the form sheet. `None` while the sheet is
    /// hidden. A buffer with an empty `id` belongs to a record being
    /// created, one with a non-empty `id` to a record being edited.
    pub form: Option<Student>,

    /// Reference to the form sheet element, used to slide it open and
    /// closed.
    pub sheet_ref: NodeRef,

    /// Guard to avoid running the first-render fetch more than once.
    pub loaded: bool,
}

impl StudentsComponent {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            search: String::new(),
            form: None,
            sheet_ref: Default::default(),
            loaded: false,
        }
    }

    /// Records visible under the current search term, in store order.
    pub fn visible_students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students
            .iter()
            .filter(|student| student.matches_search(&self.search))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_students(students: Vec<Student>) -> StudentsComponent {
        let mut component = StudentsComponent::new();
        component.students = students;
        component
    }

    fn student(id: &str, name: &str, education: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            education: education.to_string(),
            ..Student::default()
        }
    }

    #[test]
    fn view_follows_the_search_term() {
        let mut component = with_students(vec![student("1", "Ann", "BSc")]);

        component.search = "bs".to_string();
        let ids: Vec<&str> = component.visible_students().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["1"]);

        component.search = "zz".to_string();
        assert_eq!(component.visible_students().count(), 0);
    }

    #[test]
    fn empty_search_shows_the_whole_store() {
        let component = with_students(vec![
            student("1", "Ann", "BSc"),
            student("2", "Bo", "MSc"),
        ]);
        assert_eq!(component.visible_students().count(), 2);
    }
}
