//! The parked-file entry model.

use crate::kind::FileKind;
use std::path::PathBuf;
use time::UtcDateTime;
use uuid::Uuid;

/// Opaque, never-reused identifier of a [`ShelfEntry`].
///
/// Generated once at entry creation. Two entries created from the same path
/// at different times carry different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Display icon token for an entry, derived from its [`FileKind`].
///
/// The core never renders anything; this is the stable name a UI
/// collaborator resolves to an actual image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon(&'static str);

impl Icon {
    pub fn for_kind(kind: FileKind) -> Self {
        Self(match kind {
            FileKind::Directory => "folder",
            FileKind::Image => "photo",
            FileKind::Audio => "music-note",
            FileKind::Video => "film",
            FileKind::Document => "doc-richtext",
            FileKind::Archive => "shipping-box",
            FileKind::Text => "doc-plaintext",
            FileKind::Other => "doc",
        })
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Preview image supplied by an external generator.
///
/// The core stores whatever bytes the collaborator produced; it never
/// decodes or generates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// One file parked on the shelf.
///
/// Identity is the [`EntryId`] alone: equality and hashing ignore every
/// other field, so an in-place thumbnail update does not produce a "new"
/// entry. Size and kind are sampled once at creation; an unreadable file
/// gets size 0 rather than failing the add.
#[derive(Debug, Clone)]
pub struct ShelfEntry {
    pub id: EntryId,
    pub path: PathBuf,
    pub name: String,
    pub kind: FileKind,
    pub size: u64,
    pub added_at: UtcDateTime,
    pub icon: Icon,
    pub thumbnail: Option<Thumbnail>,
}

impl ShelfEntry {
    /// Create an entry for a path, sampling filesystem metadata.
    ///
    /// Metadata access is synchronous: it happens once per add, on the
    /// collection's owner context, and only stats the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let metadata = std::fs::metadata(&path).ok();
        let kind = match metadata.as_ref() {
            Some(m) if m.is_dir() => FileKind::Directory,
            _ => FileKind::from_path(&path),
        };
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        Self {
            id: EntryId::generate(),
            name,
            kind,
            size: metadata.map(|m| m.len()).unwrap_or(0),
            added_at: UtcDateTime::now(),
            icon: Icon::for_kind(kind),
            thumbnail: None,
            path,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == FileKind::Directory
    }

    /// Human-readable size, decimal units ("1.2 MB").
    pub fn size_formatted(&self) -> String {
        const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];
        if self.size < 1000 {
            return format!("{} {}", self.size, UNITS[0]);
        }
        let mut value = self.size as f64;
        let mut unit = 0;
        while value >= 1000.0 && unit < UNITS.len() - 1 {
            value /= 1000.0;
            unit += 1;
        }
        format!("{value:.1} {}", UNITS[unit])
    }
}

impl PartialEq for ShelfEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for ShelfEntry {}

impl std::hash::Hash for ShelfEntry {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    fn entry_with_size(size: u64) -> ShelfEntry {
        let mut entry = ShelfEntry::new("/tmp/size-probe");
        entry.size = size;
        entry
    }

    #[test]
    fn test_new_samples_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"not really a pdf").unwrap();

        let entry = ShelfEntry::new(&path);
        assert_eq!(entry.name, "report.pdf");
        assert_eq!(entry.kind, FileKind::Document);
        assert_eq!(entry.size, 16);
        assert_eq!(entry.icon.name(), "doc-richtext");
        assert!(entry.thumbnail.is_none());
    }

    #[test]
    fn test_new_directory_kind_from_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let entry = ShelfEntry::new(dir.path());
        assert!(entry.is_directory());
        assert_eq!(entry.icon, Icon::for_kind(FileKind::Directory));
    }

    #[test]
    fn test_new_missing_file_defaults() {
        let entry = ShelfEntry::new("/definitely/not/here.txt");
        assert_eq!(entry.size, 0);
        assert_eq!(entry.kind, FileKind::Text);
    }

    #[test]
    fn test_equality_is_by_id_only() {
        let a = ShelfEntry::new("/tmp/same.txt");
        let b = ShelfEntry::new("/tmp/same.txt");
        assert_ne!(a, b);
        let mut c = a.clone();
        c.thumbnail = Some(Thumbnail { width: 1, height: 1, bytes: vec![0] });
        assert_eq!(a, c);
    }

    #[rstest]
    #[case(0, "0 bytes")]
    #[case(999, "999 bytes")]
    #[case(1_000, "1.0 KB")]
    #[case(1_536, "1.5 KB")]
    #[case(2_450_000, "2.5 MB")]
    #[case(9_100_000_000, "9.1 GB")]
    fn test_size_formatted(#[case] size: u64, #[case] expected: &str) {
        assert_eq!(entry_with_size(size).size_formatted(), expected);
    }
}
