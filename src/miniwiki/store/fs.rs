use super::EntryStore;
use crate::error::{Result, WikiError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".md".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Map a title to its file path. Titles that could escape the root
    /// (separators, NUL, dot components) get no path at all.
    fn entry_path(&self, title: &str) -> Option<PathBuf> {
        if title.is_empty()
            || title == "."
            || title == ".."
            || title.contains(['/', '\\', '\0'])
        {
            return None;
        }
        Some(self.root.join(format!("{}{}", title, self.file_ext)))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WikiError::Io)?;
        }
        Ok(())
    }
}

impl EntryStore for FileStore {
    fn list_entries(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut titles = Vec::new();
        for dirent in fs::read_dir(&self.root)? {
            let dirent = dirent?;
            if !dirent.file_type()?.is_file() {
                continue;
            }
            let name = dirent.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            // Only files with the entry extension are entries; config.json
            // and anything else in the directory is left alone.
            if let Some(title) = name.strip_suffix(self.file_ext.as_str()) {
                if !title.is_empty() {
                    titles.push(title.to_string());
                }
            }
        }

        titles.sort();
        Ok(titles)
    }

    fn get_entry(&self, title: &str) -> Result<Option<String>> {
        let Some(path) = self.entry_path(title) else {
            // A title the store can't represent is simply not stored.
            return Ok(None);
        };
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WikiError::Io(e)),
        }
    }

    fn save_entry(&mut self, title: &str, content: &str) -> Result<()> {
        let path = self
            .entry_path(title)
            .ok_or_else(|| WikiError::Store(format!("Invalid entry title: {:?}", title)))?;
        self.ensure_root()?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn save_then_get_roundtrips_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir);

        store.save_entry("Python", "# Python\nA language.").unwrap();

        let content = store.get_entry("Python").unwrap();
        assert_eq!(content.as_deref(), Some("# Python\nA language."));
        assert!(dir.path().join("Python.md").exists());
    }

    #[test]
    fn save_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir);

        store.save_entry("CSS", "old").unwrap();
        store.save_entry("CSS", "new").unwrap();

        assert_eq!(store.get_entry("CSS").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn get_missing_entry_is_none_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        assert_eq!(store.get_entry("Nope").unwrap(), None);
    }

    #[test]
    fn get_is_case_sensitive_at_store_level() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir);
        store.save_entry("Python", "x").unwrap();
        assert_eq!(store.get_entry("python").unwrap(), None);
    }

    #[test]
    fn list_is_sorted_and_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir);
        store.save_entry("Python", "x").unwrap();
        store.save_entry("CSS", "y").unwrap();

        fs::write(dir.path().join("config.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "not an entry").unwrap();
        fs::create_dir(dir.path().join("subdir.md")).unwrap();

        let titles = store.list_entries().unwrap();
        assert_eq!(titles, vec!["CSS".to_string(), "Python".to_string()]);
    }

    #[test]
    fn list_on_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-created"));
        assert!(store.list_entries().unwrap().is_empty());
    }

    #[test]
    fn custom_file_ext_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf()).with_file_ext("txt");

        store.save_entry("Rust", "hello").unwrap();

        assert!(dir.path().join("Rust.txt").exists());
        assert_eq!(store.list_entries().unwrap(), vec!["Rust".to_string()]);
    }

    #[test]
    fn traversal_titles_never_touch_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir);

        assert!(store.save_entry("../escape", "x").is_err());
        assert!(store.save_entry("a/b", "x").is_err());
        assert!(store.save_entry("..", "x").is_err());

        // Reads with such titles are a normal "not found".
        assert_eq!(store.get_entry("../escape").unwrap(), None);
        assert!(store.list_entries().unwrap().is_empty());
    }
}
