//! Core types for Notespace workspaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique identifier for a folder
///
/// Uses ULID for time-ordered unique identifiers that sort lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FolderId(pub Ulid);

impl FolderId {
    /// Create a new FolderId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl Default for FolderId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FolderId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Ulid::from_string(s)?))
    }
}

/// Unique identifier for a note
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub Ulid);

impl NoteId {
    /// Create a new NoteId with current timestamp
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Get the underlying ULID
    pub fn as_ulid(&self) -> &Ulid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A folder in the workspace tree.
///
/// Folders nest: `parent: None` means the folder sits at the workspace
/// root. Sibling folders must have distinct names (enforced by
/// [`crate::Workspace`], not by this type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    pub parent: Option<FolderId>,
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Create a new folder under the given parent
    pub fn new(name: impl Into<String>, parent: Option<FolderId>) -> Self {
        Self {
            id: FolderId::new(),
            name: name.into(),
            parent,
            created_at: Utc::now(),
        }
    }
}

/// A note inside a folder.
///
/// `image_count` tracks how many images the body embeds; the UI shows an
/// indicator badge when it is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub folder: FolderId,
    pub title: String,
    pub body: String,
    pub image_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note in the given folder
    pub fn new(folder: FolderId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            folder,
            title: title.into(),
            body: body.into(),
            image_count: 0,
            updated_at: Utc::now(),
        }
    }

    /// Set the number of embedded images
    pub fn with_images(mut self, count: u32) -> Self {
        self.image_count = count;
        self
    }
}

/// One segment of a breadcrumb trail.
///
/// `id: None` is the workspace root ("All notes"); every other segment
/// points at a folder on the path to the current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub id: Option<FolderId>,
    pub label: String,
}

impl Crumb {
    /// The workspace root segment
    pub fn root() -> Self {
        Self {
            id: None,
            label: "All notes".to_string(),
        }
    }

    /// A segment pointing at a folder
    pub fn folder(id: FolderId, label: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_id_display_parses_back() {
        let id = FolderId::new();
        let parsed: FolderId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn folder_id_rejects_garbage() {
        assert!("not-a-ulid".parse::<FolderId>().is_err());
    }

    #[test]
    fn folder_ids_are_distinct() {
        assert_ne!(FolderId::new(), FolderId::new());
    }

    #[test]
    fn note_with_images_sets_count() {
        let note = Note::new(FolderId::new(), "Sketches", "").with_images(3);
        assert_eq!(note.image_count, 3);
    }

    #[test]
    fn root_crumb_has_no_id() {
        let crumb = Crumb::root();
        assert!(crumb.id.is_none());
        assert_eq!(crumb.label, "All notes");
    }
}
