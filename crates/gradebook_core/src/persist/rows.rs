//! CSV row shapes with the on-disk header names.

use crate::model::course::{Course, DEFAULT_COURSE_CREDITS};
use crate::model::credential::Credential;
use crate::model::professor::Professor;
use crate::model::student::Student;
use serde::{Deserialize, Serialize};

pub(crate) const STUDENT_HEADERS: [&str; 6] = [
    "Email_address",
    "First_name",
    "Last_name",
    "Course.id",
    "grades",
    "Marks",
];
pub(crate) const COURSE_HEADERS: [&str; 4] = ["Course_id", "Course_name", "Description", "Credits"];
pub(crate) const PROFESSOR_HEADERS: [&str; 4] =
    ["Professor_id", "Professor_Name", "Rank", "Course.id"];
pub(crate) const CREDENTIAL_HEADERS: [&str; 3] = ["User_id", "Password", "Role"];

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StudentRow {
    #[serde(rename = "Email_address", default)]
    pub email_address: String,
    #[serde(rename = "First_name", default)]
    pub first_name: String,
    #[serde(rename = "Last_name", default)]
    pub last_name: String,
    #[serde(rename = "Course.id", default)]
    pub course_id: String,
    #[serde(rename = "grades", default)]
    pub grade: String,
    #[serde(rename = "Marks", default)]
    pub marks: Option<i32>,
}

impl From<&Student> for StudentRow {
    fn from(value: &Student) -> Self {
        Self {
            email_address: value.email_address.clone(),
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            course_id: value.course_id.clone(),
            grade: value.grade.clone(),
            marks: value.marks,
        }
    }
}

impl From<StudentRow> for Student {
    fn from(value: StudentRow) -> Self {
        Student::new(
            value.email_address,
            value.first_name,
            value.last_name,
            value.course_id,
            value.marks,
        )
        .with_grade(value.grade)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CourseRow {
    #[serde(rename = "Course_id", default)]
    pub course_id: String,
    #[serde(rename = "Course_name", default)]
    pub course_name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Credits", default)]
    pub credits: Option<u32>,
}

impl From<&Course> for CourseRow {
    fn from(value: &Course) -> Self {
        Self {
            course_id: value.course_id.clone(),
            course_name: value.course_name.clone(),
            description: value.description.clone(),
            credits: Some(value.credits),
        }
    }
}

impl From<CourseRow> for Course {
    fn from(value: CourseRow) -> Self {
        Course::new(value.course_id, value.course_name, value.description)
            .with_credits(value.credits.unwrap_or(DEFAULT_COURSE_CREDITS))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProfessorRow {
    #[serde(rename = "Professor_id", default)]
    pub professor_id: String,
    #[serde(rename = "Professor_Name", default)]
    pub professor_name: String,
    #[serde(rename = "Rank", default)]
    pub rank: String,
    #[serde(rename = "Course.id", default)]
    pub course_id: String,
}

impl From<&Professor> for ProfessorRow {
    fn from(value: &Professor) -> Self {
        Self {
            professor_id: value.professor_id.clone(),
            professor_name: value.professor_name.clone(),
            rank: value.rank.clone(),
            course_id: value.course_id.clone(),
        }
    }
}

impl From<ProfessorRow> for Professor {
    fn from(value: ProfessorRow) -> Self {
        Professor::new(
            value.professor_id,
            value.professor_name,
            value.rank,
            value.course_id,
        )
    }
}

#[derive(Serialize, Deserialize)]
pub(crate) struct CredentialRow {
    #[serde(rename = "User_id", default)]
    pub user_id: String,
    #[serde(rename = "Password", default)]
    pub password: String,
    #[serde(rename = "Role", default)]
    pub role: String,
}

impl From<&Credential> for CredentialRow {
    fn from(value: &Credential) -> Self {
        Self {
            user_id: value.user_id.clone(),
            password: value.password.clone(),
            role: value.role.clone(),
        }
    }
}

impl From<CredentialRow> for Credential {
    fn from(value: CredentialRow) -> Self {
        Credential::new(value.user_id, value.password, value.role)
    }
}
