//! Manual override sidecar.
//!
//! A plain-text file of `id:label` lines recording the support level a user
//! picked for an entry. Lines split on the last `:`, so ids may contain
//! colons but labels may not. Labels are kept raw; see
//! [`SupportLevel::from_label_loose`](padcompat_core::SupportLevel::from_label_loose).

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct OverrideFile {
    path: PathBuf,
    labels: BTreeMap<String, String>,
}

impl OverrideFile {
    /// Load the sidecar at `path`.
    ///
    /// A missing file is empty. An unreadable file is logged and treated as
    /// empty. Lines without a `:` or with an empty id are skipped.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let labels = match fs::read_to_string(&path) {
            Ok(contents) => parse_lines(&path, &contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                log::error!("Failed to read overrides {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, labels }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Record a label for `id` and rewrite the file.
    ///
    /// Rejects pairs that would not survive a reload: a blank id, a line
    /// break in either part, or a `:` in the label.
    pub fn set(&mut self, id: impl Into<String>, label: impl Into<String>) -> io::Result<()> {
        let id = id.into();
        let label = label.into();
        let breaks_line = |s: &str| s.contains(['\n', '\r']);
        if id.trim().is_empty() || breaks_line(&id) || breaks_line(&label) || label.contains(':') {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("override '{}:{}' cannot be stored as a single line", id, label),
            ));
        }
        self.labels.insert(id.trim().to_string(), label.trim().to_string());
        self.save()
    }

    /// Drop the label for `id`, rewriting the file if anything changed.
    pub fn remove(&mut self, id: &str) -> io::Result<bool> {
        if self.labels.remove(id).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.labels.iter().map(|(id, label)| (id.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut contents = String::new();
        for (id, label) in &self.labels {
            contents.push_str(id);
            contents.push(':');
            contents.push_str(label);
            contents.push('\n');
        }
        let tmp = self.path.with_extension("txt.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)
    }
}

fn parse_lines(path: &Path, contents: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    for (number, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.rsplit_once(':') {
            Some((id, label)) if !id.trim().is_empty() => {
                labels.insert(id.trim().to_string(), label.trim().to_string());
            }
            _ => log::warn!(
                "{}:{}: skipping malformed override line '{}'",
                path.display(),
                number + 1,
                line
            ),
        }
    }
    labels
}

#[cfg(test)]
#[path = "tests/overrides_tests.rs"]
mod tests;
