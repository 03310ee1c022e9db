//! Observable UI state.
//!
//! Every visual region the page mutates is a named cell instead of a global
//! lookup, so the flows can be driven and inspected without a rendering
//! surface. Cells are watch channels under the hood; anything holding a clone
//! can write, and observers subscribe for changes.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

/// A single named state cell.
#[derive(Clone, Debug)]
pub struct Cell<T> {
    tx: Arc<watch::Sender<T>>,
}

impl<T: Clone> Cell<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Watches the cell; the receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

/// A region of the page: content plus a visibility flag. Regions start
/// hidden, like the `hidden` class in the page markup.
#[derive(Clone, Debug)]
pub struct Region<T> {
    content: Cell<T>,
    visible: Cell<bool>,
}

impl<T: Clone> Region<T> {
    pub fn new(initial: T) -> Self {
        Self {
            content: Cell::new(initial),
            visible: Cell::new(false),
        }
    }

    pub fn set(&self, value: T) {
        self.content.set(value);
    }

    pub fn get(&self) -> T {
        self.content.get()
    }

    /// Handle to the content cell, for writers that outlive a borrow of the
    /// region (the animation tick loop).
    pub fn content(&self) -> Cell<T> {
        self.content.clone()
    }

    pub fn show(&self) {
        self.visible.set(true);
    }

    pub fn hide(&self) {
        self.visible.set(false);
    }

    pub fn toggle(&self) {
        self.visible.update(|v| *v = !*v);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn visibility(&self) -> Cell<bool> {
        self.visible.clone()
    }
}

/// A rendered hyperlink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
    pub new_tab: bool,
}

impl Link {
    /// A link opening in a new browsing context.
    pub fn new_tab(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            new_tab: true,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.new_tab {
            write!(
                f,
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                self.href, self.label
            )
        } else {
            write!(f, "<a href=\"{}\">{}</a>", self.href, self.label)
        }
    }
}

/// What the result region is showing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ResultContent {
    #[default]
    Empty,
    /// Plain text, used for the error renderings.
    Text(String),
    /// A lead sentence followed by a link.
    Markup { lead: String, link: Link },
}

impl fmt::Display for ResultContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => write!(f, "{text}"),
            Self::Markup { lead, link } => write!(f, "{lead}{link}"),
        }
    }
}

/// The regions of the upload page. Each flow writes only its own regions;
/// once a submission starts, the coordinator is the sole writer of the
/// loading, filename and result regions until it settles.
#[derive(Clone, Debug)]
pub struct Page {
    pub file_name: Region<String>,
    pub loading: Region<String>,
    pub result: Region<ResultContent>,
    pub videos: Region<Vec<Link>>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            file_name: Region::new(String::new()),
            loading: Region::new(String::new()),
            result: Region::new(ResultContent::Empty),
            videos: Region::new(Vec::new()),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Link, Page, Region, ResultContent};

    #[test]
    fn cell_holds_the_last_write() {
        let cell = Cell::new(0u32);
        cell.set(3);
        cell.update(|v| *v += 1);
        assert_eq!(cell.get(), 4);
    }

    #[tokio::test]
    async fn subscribers_see_writes() {
        let cell = Cell::new(String::new());
        let mut rx = cell.subscribe();
        cell.set("holiday.mp4".to_string());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "holiday.mp4");
    }

    #[test]
    fn regions_start_hidden() {
        let page = Page::new();
        assert!(!page.file_name.is_visible());
        assert!(!page.loading.is_visible());
        assert!(!page.result.is_visible());
        assert!(!page.videos.is_visible());
    }

    #[test]
    fn toggling_twice_restores_visibility_and_keeps_content() {
        let panel: Region<Vec<Link>> = Region::new(vec![Link::new_tab("a.mp4", "/v/a")]);
        panel.show();
        let before = panel.get();
        panel.toggle();
        assert!(!panel.is_visible());
        panel.toggle();
        assert!(panel.is_visible());
        assert_eq!(panel.get(), before);
    }

    #[test]
    fn result_content_renders_like_the_page() {
        let markup = ResultContent::Markup {
            lead: "Video processed successfully! ".to_string(),
            link: Link::new_tab("View Shortened Video", "https://x/y.mp4"),
        };
        assert_eq!(
            markup.to_string(),
            "Video processed successfully! <a href=\"https://x/y.mp4\" target=\"_blank\">View Shortened Video</a>"
        );
        assert_eq!(
            ResultContent::Text("Error: bad format".to_string()).to_string(),
            "Error: bad format"
        );
        assert_eq!(ResultContent::Empty.to_string(), "");
    }
}
