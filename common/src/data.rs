use std::path::Path;

use serde::{Deserialize, Serialize};

/// The file the user picked in the file-input control. Replaced wholesale by
/// the next selection; nothing else holds on to it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
}

impl SelectedFile {
    /// Builds a selection from a filesystem path, keeping only the final
    /// component the way a file picker reports it.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        Some(Self { name })
    }
}

/// One previously processed video, as listed by the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VideoEntry {
    pub filename: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::SelectedFile;

    #[test]
    fn selection_keeps_only_the_file_name() {
        let tests = [
            ("/home/user/videos/holiday.mp4", "holiday.mp4"),
            ("holiday.mp4", "holiday.mp4"),
            ("videos/holiday.mp4", "holiday.mp4"),
        ];
        for (src, expected) in tests {
            let selection = SelectedFile::from_path(Path::new(src)).unwrap();
            assert_eq!(selection.name, expected);
        }
    }

    #[test]
    fn selection_of_a_bare_root_is_rejected() {
        assert_eq!(SelectedFile::from_path(Path::new("/")), None);
    }
}
