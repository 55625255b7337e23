use crate::errors::{Error, Result};
use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Title bounds, counted in Unicode scalar values.
const TITLE_MIN_CHARS: usize = 1;
const TITLE_MAX_CHARS: usize = 200;

/// Timestamp format used everywhere a task timestamp is shown.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i32,
    pub title: String,
    /// Freeform text. Absent is distinct from empty; no length limit is
    /// enforced on the contents.
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    /// Equals `created_at` until the first successful mutation.
    pub updated_at: NaiveDateTime,
}

impl Task {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Result<Self> {
        let title = title.into();
        validate_title(&title)?;
        let now = Local::now().naive_local();
        Ok(Self {
            id: 1,
            title,
            description,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies the provided fields; `None` means "leave unchanged". The new
    /// title is validated before anything is written, so a failed edit
    /// leaves every field as it was. `updated_at` is refreshed only when at
    /// least one field was actually provided.
    pub fn modify(
        &mut self,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<&Self> {
        if let Some(new_title) = &title {
            validate_title(new_title)?;
        }
        let provided = title.is_some() || description.is_some();
        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_description) = description {
            self.description = Some(new_description);
        }
        if provided {
            self.touch();
        }
        Ok(self)
    }

    /// Sets the completion flag. Idempotent on the flag; `updated_at` is
    /// refreshed on every call.
    pub fn set_completed(&mut self, completed: bool) -> &Self {
        self.completed = completed;
        self.touch();
        self
    }

    /// True once any mutation has landed since creation.
    pub fn was_updated(&self) -> bool {
        self.updated_at != self.created_at
    }

    fn touch(&mut self) {
        self.updated_at = Local::now().naive_local();
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(id={}, title='{}', completed={})",
            self.id, self.title, self.completed
        )
    }
}

fn validate_title(title: &str) -> Result<()> {
    let chars = title.chars().count();
    if chars < TITLE_MIN_CHARS || chars > TITLE_MAX_CHARS {
        return Err(Error::validation(format!(
            "Title must be between {} and {} characters",
            TITLE_MIN_CHARS, TITLE_MAX_CHARS
        )));
    }
    Ok(())
}
