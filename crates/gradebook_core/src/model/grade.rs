//! Marks to letter-grade classification.
//!
//! # Invariants
//! - Classification is total over `i32`; anything below the lowest band is `F`.
//! - Bands are checked from highest to lowest and the first match wins.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Letter grade band assigned from numeric marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

/// Lower bound (inclusive) of every band above `F`, highest first.
const GRADE_BANDS: &[(i32, LetterGrade)] = &[
    (97, LetterGrade::APlus),
    (93, LetterGrade::A),
    (90, LetterGrade::AMinus),
    (87, LetterGrade::BPlus),
    (83, LetterGrade::B),
    (80, LetterGrade::BMinus),
    (77, LetterGrade::CPlus),
    (73, LetterGrade::C),
    (70, LetterGrade::CMinus),
    (60, LetterGrade::D),
];

impl LetterGrade {
    /// Stable string stored on student records and in CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a marks value to its letter-grade band.
pub fn classify(marks: i32) -> LetterGrade {
    GRADE_BANDS
        .iter()
        .find(|(floor, _)| marks >= *floor)
        .map(|(_, grade)| *grade)
        .unwrap_or(LetterGrade::F)
}

/// Returns the stored grade string for optional marks.
///
/// Absent marks yield an empty grade rather than `F`.
pub fn grade_for(marks: Option<i32>) -> String {
    marks
        .map(|value| classify(value).as_str().to_string())
        .unwrap_or_default()
}
