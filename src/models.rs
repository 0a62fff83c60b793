use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub description: String,
    // Counts are seeded at creation and are not recomputed when sources are
    // added or removed; see DESIGN.md.
    pub pdf_count: u32,
    pub image_count: u32,
    pub audio_count: u32,
    pub modified: DateTime<Utc>,
    pub user_id: String,
}

/// Classification of an uploaded file, derived once from the declared content
/// type and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Pdf,
    Image,
    Audio,
    Other,
}

impl SourceKind {
    /// Substring match on the declared content type, e.g. both
    /// `application/pdf` and `application/x-pdf` classify as `Pdf`.
    pub fn from_content_type(content_type: &str) -> Self {
        let lowered = content_type.to_ascii_lowercase();
        if lowered.contains("pdf") {
            SourceKind::Pdf
        } else if lowered.contains("image") {
            SourceKind::Image
        } else if lowered.contains("audio") {
            SourceKind::Audio
        } else {
            SourceKind::Other
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFile {
    pub id: String,
    pub name: String,
    pub size: String,
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub uploaded_at: DateTime<Utc>,
    pub workspace_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub id: u32,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceGender {
    Female,
    Male,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub full_name: String,
    pub email: String,
    pub dark_mode: bool,
    pub auto_read: bool,
    pub voice_gender: VoiceGender,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            full_name: "User".to_string(),
            email: "user@example.com".to_string(),
            dark_mode: true,
            auto_read: true,
            voice_gender: VoiceGender::Female,
            profile_picture: None,
        }
    }
}

/// Partial settings update; absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub dark_mode: Option<bool>,
    #[serde(default)]
    pub auto_read: Option<bool>,
    #[serde(default)]
    pub voice_gender: Option<VoiceGender>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl Settings {
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(dark_mode) = patch.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(auto_read) = patch.auto_read {
            self.auto_read = auto_read;
        }
        if let Some(voice_gender) = patch.voice_gender {
            self.voice_gender = voice_gender;
        }
        if let Some(profile_picture) = patch.profile_picture {
            self.profile_picture = Some(profile_picture);
        }
    }
}

/// Human-readable size used on the wire, e.g. 2048 bytes -> "2.0 KB".
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
