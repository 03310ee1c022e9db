//! Selection Reporter: projects the picked file's name into the page.

use common::data::SelectedFile;

use crate::ui::Region;

pub struct SelectionReporter {
    file_name: Region<String>,
}

impl SelectionReporter {
    pub fn new(file_name: Region<String>) -> Self {
        Self { file_name }
    }

    /// Displays the selected file's name and reveals its container. No
    /// validation happens here; the server rejects bad uploads itself.
    pub fn report(&self, selection: &SelectedFile) {
        self.file_name.set(selection.name.clone());
        self.file_name.show();
    }
}

#[cfg(test)]
mod tests {
    use common::data::SelectedFile;

    use super::SelectionReporter;
    use crate::ui::Region;

    #[test]
    fn reporting_shows_the_file_name() {
        let region = Region::new(String::new());
        let reporter = SelectionReporter::new(region.clone());
        reporter.report(&SelectedFile {
            name: "holiday.mp4".to_string(),
        });
        assert_eq!(region.get(), "holiday.mp4");
        assert!(region.is_visible());
    }

    #[test]
    fn a_new_selection_replaces_the_old_one() {
        let region = Region::new(String::new());
        let reporter = SelectionReporter::new(region.clone());
        reporter.report(&SelectedFile {
            name: "holiday.mp4".to_string(),
        });
        reporter.report(&SelectedFile {
            name: "wedding.mp4".to_string(),
        });
        assert_eq!(region.get(), "wedding.mp4");
        assert!(region.is_visible());
    }
}
