//! Blurred-background wrapping of `<img>` tags.
//!
//! Finds images of the shape
//!
//! ```text
//! <img src="SRC" alt="ALT" class="PATTERN">
//! ```
//!
//! and replaces each one with a fixed-height container holding a blurred,
//! scaled copy of the image behind the original (`object-contain`) image.
//!
//! # Module Structure
//!
//! ```text
//! rewrite/
//! ├── mod.rs     # ImageWrapper matcher + template (this file)
//! └── file.rs    # rewrite_file, Outcome, RewriteError
//! ```

mod file;

pub use file::{Outcome, rewrite_file};

use regex::{Captures, Regex};
use std::borrow::Cow;

/// Class of the blurred background image emitted by the template.
pub const BACKGROUND_CLASS: &str =
    "absolute inset-0 w-full h-full object-cover blur-lg scale-110 opacity-50";

/// Class of the foreground image emitted by the template.
pub const FOREGROUND_CLASS: &str = "relative z-10 w-full h-full object-contain";

/// Render the wrapper block for one matched image.
///
/// The indentation of the inner lines is part of the output.
pub fn render_wrapper(src: &str, alt: &str, height_class: &str) -> String {
    format!(
        r#"<div class="relative {height_class} w-full overflow-hidden bg-gray-900">
                            <img src="{src}" class="{BACKGROUND_CLASS}" alt="">
                            <img src="{src}" alt="{alt}" class="{FOREGROUND_CLASS}">
                        </div>"#
    )
}

// =============================================================================
// Matcher
// =============================================================================

/// Compiled matcher + replacement for one class pattern.
#[derive(Debug, Clone)]
pub struct ImageWrapper {
    pattern: Regex,
    height_class: String,
}

impl ImageWrapper {
    /// Build a wrapper for images whose `class` equals `img_class` exactly.
    ///
    /// `img_class` is matched literally, regex metacharacters included.
    pub fn new(height_class: impl Into<String>, img_class: &str) -> Self {
        let source = format!(
            r#"<img src="([^"]+)" alt="([^"]+)"\s+class="{}">"#,
            regex::escape(img_class)
        );
        // The only dynamic part is escaped, so the pattern is always valid.
        let pattern = Regex::new(&source).expect("escaped image pattern must compile");

        Self {
            pattern,
            height_class: height_class.into(),
        }
    }

    pub fn height_class(&self) -> &str {
        &self.height_class
    }

    /// Run one substitution pass over `content`.
    ///
    /// Text outside matched spans is copied through unchanged; when nothing
    /// matches the result borrows `content`.
    pub fn rewrite<'a>(&self, content: &'a str) -> Rewrite<'a> {
        let mut replaced = 0;
        let content = self.pattern.replace_all(content, |caps: &Captures| {
            replaced += 1;
            render_wrapper(&caps[1], &caps[2], &self.height_class)
        });
        Rewrite { content, replaced }
    }

    /// `src` values of every image the pass would replace, in document order.
    pub fn matched_sources<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}

/// Result of [`ImageWrapper::rewrite`].
#[derive(Debug)]
pub struct Rewrite<'a> {
    pub content: Cow<'a, str>,
    pub replaced: usize,
}

impl Rewrite<'_> {
    /// Whether the pass produced different text.
    pub fn is_changed(&self) -> bool {
        self.replaced > 0
    }
}

// =============================================================================
// Tests
// =============================================================================
