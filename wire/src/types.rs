//! Request and response DTOs for the learning backend.
//!
//! DESIGN
//! ======
//! Response shapes are deserialized strictly enough to surface a
//! `MalformedResponse` when a required field is missing, but numeric and id
//! fields accept either JSON strings or numbers since the backend is not
//! consistent about them. The session user is the exception: it is kept as
//! the raw JSON value the backend returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Course recorded by the "Mark Intro Complete" action.
pub const INTRO_COURSE: &str = "Foundations";
/// Lesson recorded by the "Mark Intro Complete" action.
pub const INTRO_LESSON: &str = "Intro";
/// Provider tag sent with every signup.
pub const EMAIL_PROVIDER: &str = "email";

// =============================================================================
// VIDEOS
// =============================================================================

/// Curated channel list returned by `GET /api/videos`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoCatalog {
    pub channels: Vec<Channel>,
}

/// One creator channel with its topics and a few featured videos.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Channel {
    /// Topics joined for display, e.g. `"Rust, Systems"`.
    #[must_use]
    pub fn topics_label(&self) -> String {
        self.topics.join(", ")
    }
}

/// A single embeddable video.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "videoId")]
    pub video_id: String,
    pub title: String,
}

impl Video {
    #[must_use]
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.video_id)
    }
}

// =============================================================================
// NOTES
// =============================================================================

/// A stored note as listed by `GET /api/notes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_owner_id")]
    pub user_id: String,
    pub title: String,
    pub content: String,
}

/// Body of `POST /api/notes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub user_id: String,
    pub title: String,
    pub content: String,
}

// =============================================================================
// MENTOR
// =============================================================================

/// Experience level the mentor tailors its answer to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl MentorLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire value, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parse a wire value; anything outside the closed set is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == raw.trim())
    }
}

/// Body of `POST /api/ai/mentor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorRequest {
    pub question: String,
    pub language: String,
    pub level: MentorLevel,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct MentorAnswer {
    pub answer: String,
}

// =============================================================================
// CONVERTER
// =============================================================================

/// Body of `POST /api/ai/convert`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub source_language: String,
    pub target_language: String,
    pub code: String,
}

/// Converted source plus optional commentary from the converter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResult {
    pub converted: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ConvertResult {
    /// `converted`, followed by a notes section only when notes are non-empty.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self.notes.as_deref() {
            Some(notes) if !notes.is_empty() => format!("{}\n\nNotes: {notes}", self.converted),
            _ => self.converted.clone(),
        }
    }
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Per-user progress summary from `GET /api/progress/{user_id}`.
///
/// A user with no recorded lessons may come back with either field missing
/// or `null`. Ranks are shown as text, so numeric ranks are stringified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub completed: i64,
    #[serde(default, deserialize_with = "deserialize_rank")]
    pub rank: Option<String>,
}

/// Body of `POST /api/progress`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub user_id: String,
    pub course: String,
    pub lesson: String,
    pub completed: bool,
}

impl ProgressUpdate {
    /// The fixed update behind "Mark Intro Complete".
    #[must_use]
    pub fn intro_complete(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_owned(),
            course: INTRO_COURSE.to_owned(),
            lesson: INTRO_LESSON.to_owned(),
            completed: true,
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub provider: String,
}

impl SignupRequest {
    #[must_use]
    pub fn email(name: &str, email: &str) -> Self {
        Self { name: name.to_owned(), email: email.to_owned(), provider: EMAIL_PROVIDER.to_owned() }
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

/// Identity returned by signup/login, kept exactly as the backend sent it.
///
/// Accessors read well-known fields leniently; a payload without a usable
/// `user_id` still stores, it just grants no identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionUser(pub Value);

impl SessionUser {
    /// `user_id` as a string, accepting JSON strings and numbers.
    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        match self.0.get("user_id")? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    #[must_use]
    pub fn rank(&self) -> Option<&str> {
        self.0.get("rank").and_then(Value::as_str)
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.0
    }
}

// =============================================================================
// LENIENT FIELDS
// =============================================================================

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Like [`deserialize_id`], but a `null` owner reads as empty.
fn deserialize_owner_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_rank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(rank) => Ok(Some(rank)),
        Value::Number(rank) => Ok(Some(rank.to_string())),
        Value::Bool(rank) => Ok(Some(rank.to_string())),
        other => Err(D::Error::custom(format!("expected scalar rank, got {other}"))),
    }
}

/// Integral numbers, including integral floats; `null` reads as 0.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
