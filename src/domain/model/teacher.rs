use serde::{Deserialize, Serialize};

use super::{require_range, require_text, Record};
use crate::domain::error::ValidationError;

/// Conventional qualification categories, highest first.
pub const TEACHER_CATEGORIES: [&str; 4] = ["Высшая", "Первая", "Вторая", "Без категории"];

/// The top qualification category counted by the reports.
pub const HIGH_CATEGORY: &str = TEACHER_CATEGORIES[0];

pub const MIN_EXPERIENCE: i32 = 0;
pub const MAX_EXPERIENCE: i32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: u32,
    pub full_name: String,
    pub subject: String,
    /// Years of experience.
    pub experience: i32,
    pub category: String,
    #[serde(default)]
    pub phone: String,
}

impl Record for Teacher {
    const COLLECTION: &'static str = "teachers";
    const ENTITY: &'static str = "teacher";

    fn id(&self) -> u32 {
        self.id
    }

    fn unique_name(&self) -> &str {
        &self.full_name
    }
}

impl Teacher {
    pub(crate) fn from_draft(id: u32, draft: TeacherDraft) -> Self {
        Self {
            id,
            full_name: draft.full_name,
            subject: draft.subject,
            experience: draft.experience,
            category: draft.category,
            phone: draft.phone,
        }
    }

    pub(crate) fn apply(&mut self, draft: TeacherDraft) {
        self.full_name = draft.full_name;
        self.subject = draft.subject;
        self.experience = draft.experience;
        self.category = draft.category;
        self.phone = draft.phone;
    }
}

/// Candidate values for adding or updating a teacher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherDraft {
    pub full_name: String,
    pub subject: String,
    pub experience: i32,
    pub category: String,
    pub phone: String,
}

impl TeacherDraft {
    pub fn new(
        full_name: impl Into<String>,
        subject: impl Into<String>,
        experience: i32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            subject: subject.into(),
            experience,
            category: category.into(),
            phone: String::new(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Checks every field and returns the trimmed values that get stored.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        Ok(Self {
            full_name: require_text("full name", &self.full_name)?,
            subject: require_text("subject", &self.subject)?,
            experience: require_range(
                "experience",
                self.experience,
                MIN_EXPERIENCE,
                MAX_EXPERIENCE,
            )?,
            category: require_text("category", &self.category)?,
            phone: self.phone.trim().to_string(),
        })
    }
}
