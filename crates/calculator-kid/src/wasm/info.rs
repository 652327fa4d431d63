//! About & Privacy modal
//!
//! Static content plus an open flag. The modal never touches the engine.

use super::dom::{ids, DomElement};

/// Modal title
pub const TITLE: &str = "About & Privacy";
/// Privacy policy link target
pub const PRIVACY_URL: &str = "https://createanything.com/privacy";
/// Privacy policy link text
pub const PRIVACY_LINK_TEXT: &str = "View Full Privacy Policy";
/// Footer line
pub const VERSION_LINE: &str = "Version 1.0.0 (Web)";

/// A titled block of modal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoSection {
    /// Section heading
    pub heading: &'static str,
    /// Paragraphs, in order
    pub paragraphs: &'static [&'static str],
    /// Bullet points, in order
    pub bullets: &'static [&'static str],
}

/// Sections shown in the modal body
pub const SECTIONS: [InfoSection; 3] = [
    InfoSection {
        heading: "Math Game Calculator",
        paragraphs: &[
            "A fun, game-like calculator designed for kids to make learning math enjoyable!",
        ],
        bullets: &[],
    },
    InfoSection {
        heading: "Privacy Policy",
        paragraphs: &[
            "This app does not collect, store, or share any personal information. All calculations and scores are stored locally in the temporary session of your browser.",
            "We do not use any third-party analytics, advertising, or tracking services. Your child's privacy is our top priority.",
        ],
        bullets: &[],
    },
    InfoSection {
        heading: "Data Collection",
        paragraphs: &[],
        bullets: &[
            "No personal information collected",
            "No account registration required",
            "No data shared with third parties",
            "Scores reset when you refresh",
        ],
    },
];

/// Visibility of the About & Privacy modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InfoModal {
    open: bool,
}

impl InfoModal {
    /// Creates a closed modal
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the modal is shown
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Shows the modal
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the modal
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Body sections
    #[must_use]
    pub fn sections(&self) -> &'static [InfoSection] {
        &SECTIONS
    }

    /// Builds the modal subtree, hidden unless open
    #[must_use]
    pub fn create_element(&self) -> DomElement {
        let header = DomElement::new("div")
            .with_class("modal-header")
            .with_child(DomElement::new("h2").with_text(TITLE))
            .with_child(
                DomElement::new("button")
                    .with_id(ids::INFO_CLOSE)
                    .with_class("modal-close")
                    .with_attr("aria-label", "Close"),
            );

        let body = SECTIONS
            .iter()
            .fold(DomElement::new("div").with_class("modal-body"), |body, section| {
                let body = body.with_child(DomElement::new("h3").with_text(section.heading));
                let body = section
                    .paragraphs
                    .iter()
                    .fold(body, |body, p| body.with_child(DomElement::new("p").with_text(p)));
                if section.bullets.is_empty() {
                    return body;
                }
                let list = section.bullets.iter().fold(DomElement::new("ul"), |list, item| {
                    list.with_child(DomElement::new("li").with_text(&format!("• {item}")))
                });
                body.with_child(list)
            })
            .with_child(
                DomElement::new("a")
                    .with_class("privacy-link")
                    .with_text(PRIVACY_LINK_TEXT)
                    .with_attr("href", PRIVACY_URL)
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener noreferrer"),
            )
            .with_child(DomElement::new("p").with_class("version").with_text(VERSION_LINE));

        let mut modal = DomElement::new("div")
            .with_id(ids::INFO_MODAL)
            .with_class("modal-overlay")
            .with_child(header)
            .with_child(body);
        modal.set_visible(self.open);
        modal
    }
}
