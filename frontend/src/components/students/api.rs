//! REST client for the student collection.
//!
//! Four thin wrappers over the backend endpoints. The path is relative to
//! the serving origin; in development the trunk proxy forwards it to the
//! configured backend host/port.
//!
//! Failures are deliberately flat: network errors, non-2xx statuses, and
//! undecodable payloads all surface as the same `Err(String)`, and callers
//! treat them identically (log, toast, move on).

use gloo_net::http::{Request, Response};

use common::model::student::Student;

const STUDENTS_PATH: &str = "/students";

fn record_path(id: &str) -> String {
    format!("{STUDENTS_PATH}/{id}")
}

fn ensure_ok(response: Response, operation: &str) -> Result<Response, String> {
    if response.ok() {
        Ok(response)
    } else {
        Err(format!(
            "{operation} failed with status {}",
            response.status()
        ))
    }
}

/// Fetches the full collection, in backend order.
pub async fn fetch_students() -> Result<Vec<Student>, String> {
    let response = Request::get(STUDENTS_PATH)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    let response = ensure_ok(response, "listing students")?;
    response
        .json::<Vec<Student>>()
        .await
        .map_err(|err| err.to_string())
}

/// Creates `student`. The caller has already assigned its id.
pub async fn create_student(student: &Student) -> Result<(), String> {
    let response = Request::post(STUDENTS_PATH)
        .json(student)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    ensure_ok(response, "creating the student").map(|_| ())
}

/// Replaces the record addressed by the id inside `student`.
pub async fn update_student(student: &Student) -> Result<(), String> {
    let response = Request::put(&record_path(&student.id))
        .json(student)
        .map_err(|err| err.to_string())?
        .send()
        .await
        .map_err(|err| err.to_string())?;
    ensure_ok(response, "updating the student").map(|_| ())
}

/// Removes the record addressed by `id`.
pub async fn delete_student(id: &str) -> Result<(), String> {
    let response = Request::delete(&record_path(id))
        .send()
        .await
        .map_err(|err| err.to_string())?;
    ensure_ok(response, "deleting the student").map(|_| ())
}
