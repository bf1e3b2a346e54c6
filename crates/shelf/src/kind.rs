//! File type detection from path extensions.

use std::path::Path;

/// Coarse file type tag detected when an entry is created.
///
/// Used by UI collaborators to pick a glyph and by nothing else; detection
/// is best-effort from the file extension (directories are detected from
/// metadata by the caller, not from the path).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Directory,
    Image,
    Audio,
    Video,
    Document,
    Archive,
    Text,
    #[default]
    Other,
}

impl FileKind {
    /// Detect a file kind from the path's extension.
    ///
    /// Never returns [`FileKind::Directory`]; only filesystem metadata can
    /// establish that, so it is the caller's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use ledge_shelf::FileKind;
    /// use std::path::Path;
    ///
    /// assert_eq!(FileKind::from_path(Path::new("photo.JPG")), FileKind::Image);
    /// assert_eq!(FileKind::from_path(Path::new("notes")), FileKind::Other);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Other;
        };
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "heic" | "bmp" | "tiff" | "svg" => Self::Image,
            "mp3" | "m4a" | "aac" | "flac" | "ogg" | "wav" | "aiff" => Self::Audio,
            "mp4" | "mov" | "mkv" | "avi" | "webm" | "m4v" => Self::Video,
            "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" | "key" | "pages" | "numbers" => Self::Document,
            "zip" | "tar" | "gz" | "bz2" | "xz" | "zst" | "7z" | "rar" | "dmg" => Self::Archive,
            "txt" | "md" | "rtf" | "csv" | "json" | "yaml" | "yml" | "toml" | "xml" | "html" | "log" => Self::Text,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case("archive.tar.GZ", FileKind::Archive)]
    #[case("clip.mov", FileKind::Video)]
    #[case("cover.jpeg", FileKind::Image)]
    #[case("deck.pptx", FileKind::Document)]
    #[case("dump.log", FileKind::Text)]
    #[case("song.flac", FileKind::Audio)]
    #[case("binary.bin", FileKind::Other)]
    #[case("no_extension", FileKind::Other)]
    #[case(".hidden", FileKind::Other)]
    fn test_from_path(#[case] path: &str, #[case] expected: FileKind) {
        assert_eq!(FileKind::from_path(Path::new(path)), expected);
    }
}
