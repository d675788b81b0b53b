//! In-memory workspace store.
//!
//! Owns the folders and notes the desktop shell shows. The shell wraps a
//! [`Workspace`] in `Arc<RwLock<_>>` and hands it to components via
//! context; contents live only for the process lifetime (disk persistence
//! is out of scope).

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::{Crumb, Folder, FolderId, Note, NoteId};

/// Folder/note store behind the desktop shell.
#[derive(Debug, Default, Serialize)]
pub struct Workspace {
    folders: HashMap<FolderId, Folder>,
    notes: HashMap<NoteId, Note>,
}

impl Workspace {
    /// Empty workspace
    pub fn new() -> Self {
        Self::default()
    }

    /// Workspace pre-seeded with demo content for the desktop shell
    pub fn demo() -> Self {
        let mut ws = Self::new();

        let reports = ws.insert_folder(Folder::new("Reports", None));
        let archive = ws.insert_folder(Folder::new("Archive", Some(reports.clone())));
        let projects = ws.insert_folder(Folder::new("Projects", None));

        ws.insert_note(Note::new(
            reports.clone(),
            "Quarterly summary",
            "Numbers are up across the board.",
        ));
        ws.insert_note(
            Note::new(reports, "Site survey", "Photos from the walkthrough.").with_images(4),
        );
        ws.insert_note(
            Note::new(archive, "2023 retrospective", "What went well last year.").with_images(1),
        );
        ws.insert_note(Note::new(projects, "Garden plan", "Beds, paths, irrigation."));

        ws
    }

    /// Create a folder under the given parent.
    ///
    /// Fails with [`CoreError::NameTaken`] when a sibling already uses the
    /// trimmed name.
    pub fn create_folder(
        &mut self,
        name: &str,
        parent: Option<FolderId>,
    ) -> Result<FolderId, CoreError> {
        let name = name.trim();
        if self.sibling_named(parent.as_ref(), name).is_some() {
            return Err(CoreError::NameTaken(name.to_string()));
        }
        let id = self.insert_folder(Folder::new(name, parent));
        tracing::debug!(folder = %id, %name, "folder created");
        Ok(id)
    }

    fn insert_folder(&mut self, folder: Folder) -> FolderId {
        let id = folder.id.clone();
        self.folders.insert(id.clone(), folder);
        id
    }

    /// Look up a folder by id
    pub fn folder(&self, id: &FolderId) -> Option<&Folder> {
        self.folders.get(id)
    }

    /// Folders directly under `parent` (`None` = workspace root), sorted by name
    pub fn subfolders(&self, parent: Option<&FolderId>) -> Vec<Folder> {
        let mut out: Vec<Folder> = self
            .folders
            .values()
            .filter(|f| f.parent.as_ref() == parent)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    /// Notes in a folder, newest first
    pub fn notes_in(&self, folder: &FolderId) -> Vec<Note> {
        let mut out: Vec<Note> = self
            .notes
            .values()
            .filter(|n| &n.folder == folder)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(a.title.cmp(&b.title)));
        out
    }

    /// Rename a folder. This is the persistence operation behind the
    /// rename dialog; the dialog has already trimmed and validated `name`.
    pub fn rename_folder(&mut self, id: &FolderId, name: &str) -> Result<(), CoreError> {
        let parent = match self.folders.get(id) {
            Some(folder) => folder.parent.clone(),
            None => return Err(CoreError::FolderNotFound(id.to_string())),
        };
        if let Some(existing) = self.sibling_named(parent.as_ref(), name) {
            if existing != *id {
                return Err(CoreError::NameTaken(name.to_string()));
            }
        }
        let folder = self
            .folders
            .get_mut(id)
            .ok_or_else(|| CoreError::FolderNotFound(id.to_string()))?;
        folder.name = name.to_string();
        tracing::info!(folder = %id, %name, "folder renamed");
        Ok(())
    }

    /// Add a note to a folder
    pub fn add_note(&mut self, note: Note) -> Result<NoteId, CoreError> {
        if !self.folders.contains_key(&note.folder) {
            return Err(CoreError::FolderNotFound(note.folder.to_string()));
        }
        Ok(self.insert_note(note))
    }

    /// Root-first breadcrumb path to a folder, starting at the workspace
    /// root crumb. Walks at most the folder count, so a corrupted parent
    /// cycle cannot hang the caller.
    pub fn trail(&self, id: &FolderId) -> Vec<Crumb> {
        let mut segments = Vec::new();
        let mut cursor = Some(id.clone());
        while let Some(current) = cursor {
            let Some(folder) = self.folders.get(&current) else {
                break;
            };
            segments.push(Crumb::folder(current, folder.name.clone()));
            cursor = folder.parent.clone();
            if segments.len() > self.folders.len() {
                tracing::warn!(folder = %id, "parent cycle detected in folder tree");
                break;
            }
        }
        segments.push(Crumb::root());
        segments.reverse();
        segments
    }

    fn insert_note(&mut self, note: Note) -> NoteId {
        let id = note.id.clone();
        self.notes.insert(id.clone(), note);
        id
    }

    fn sibling_named(&self, parent: Option<&FolderId>, name: &str) -> Option<FolderId> {
        self.folders
            .values()
            .find(|f| f.parent.as_ref() == parent && f.name == name)
            .map(|f| f.id.clone())
    }
}
