use serde::{Deserialize, Serialize};

/// A single student record as exchanged with the REST backend.
///
/// The backend keeps the collection behind `/students`; the frontend fetches
/// the full list, renders it, and sends whole records back on create and
/// update. Field names map one-to-one onto the JSON wire format, so renaming
/// a field here is a breaking change to the backend contract.
///
/// `id` holds the decimal form of a positive integer. It is assigned on the
/// client when the record is first created (see [`next_student_id`]) and
/// never changes afterwards.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Default)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub location: String,
    pub email: String,
    /// ISO calendar date, as produced by a `<input type="date">`.
    pub dob: String,
    pub education: String,
}

impl Student {
    /// Search predicate backing the list view: true when `term` occurs as a
    /// case-insensitive substring of the name or the education field. The
    /// empty term matches every record.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.education.to_lowercase().contains(&term)
    }
}

/// Computes the id for a record about to be created: one greater than the
/// highest numeric id in `students`, or `1` when there is none. Ids that do
/// not parse as integers are skipped.
///
/// The backend stays the authority on uniqueness; two clients creating at
/// the same time can both pick the same id here.
pub fn next_student_id(students: &[Student]) -> String {
    students
        .iter()
        .filter_map(|student| student.id.parse::<u64>().ok())
        .max()
        .map_or(1, |highest| highest + 1)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str, education: &str) -> Student {
        Student {
            id: id.to_string(),
            name: name.to_string(),
            education: education.to_string(),
            ..Student::default()
        }
    }

    #[test]
    fn empty_term_matches_every_record() {
        let list = [
            student("1", "Ann", "BSc"),
            student("2", "Bo", "MSc"),
            student("3", "Cy", "PhD"),
        ];
        assert!(list.iter().all(|s| s.matches_search("")));
    }

    #[test]
    fn matches_name_or_education_case_insensitively() {
        let ann = student("1", "Ann", "BSc");
        assert!(ann.matches_search("bs"), "education substring should match");
        assert!(ann.matches_search("aNN"), "name should match ignoring case");
        assert!(!ann.matches_search("zz"));
    }

    #[test]
    fn filter_keeps_exactly_the_matching_records() {
        let list = [
            student("1", "Ann", "BSc"),
            student("2", "Bo", "MSc"),
            student("3", "Bastian", "PhD"),
        ];
        let visible: Vec<&str> = list
            .iter()
            .filter(|s| s.matches_search("bs"))
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(visible, ["1"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let list = vec![
            student("1", "Ann", "BSc"),
            student("2", "Bo", "MSc"),
            student("3", "Cy", "MSc"),
        ];
        let once: Vec<&Student> = list.iter().filter(|s| s.matches_search("msc")).collect();
        let twice: Vec<&Student> = once
            .iter()
            .copied()
            .filter(|s| s.matches_search("msc"))
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn first_id_is_one() {
        assert_eq!(next_student_id(&[]), "1");
    }

    #[test]
    fn next_id_is_one_past_the_maximum() {
        let list = [student("1", "Ann", "BSc"), student("3", "Bo", "MSc")];
        assert_eq!(next_student_id(&list), "4");
    }

    #[test]
    fn next_id_ignores_non_numeric_ids() {
        let list = [student("2", "Ann", "BSc"), student("draft", "Bo", "MSc")];
        assert_eq!(next_student_id(&list), "3");
    }

    #[test]
    fn wire_format_uses_plain_field_names() {
        let record = Student {
            id: "1".to_string(),
            name: "Ann".to_string(),
            location: "Oslo".to_string(),
            email: "ann@example.com".to_string(),
            dob: "2001-04-05".to_string(),
            education: "BSc".to_string(),
        };
        let json = serde_json::to_value(&record).expect("serialize student");
        let mut keys: Vec<&str> = json
            .as_object()
            .expect("student serializes to an object")
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, ["dob", "education", "email", "id", "location", "name"]);
    }
}
