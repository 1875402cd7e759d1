//! `[rewrite]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [rewrite]
//! height_class = "h-64"                     # Height class of the wrapper container
//! img_class = "h-48 w-full object-cover"    # Exact class of images to wrap
//! files = ["index.html", "projects.html"]   # Relative to the config file
//! ```

use serde::Deserialize;
use std::path::PathBuf;

use crate::rewrite::{BACKGROUND_CLASS, FOREGROUND_CLASS};

/// The only character that ends a double-quoted `class` attribute value.
const ATTR_QUOTE: char = '"';

/// Image rewriting settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Height class inserted into the wrapper `<div>`.
    pub height_class: String,

    /// `class` attribute value an image must have to be wrapped.
    pub img_class: String,

    /// Files to rewrite when none are given on the command line.
    pub files: Vec<PathBuf>,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            height_class: "h-64".to_string(),
            img_class: "h-48 w-full object-cover".to_string(),
            files: Vec::new(),
        }
    }
}

impl RewriteConfig {
    /// Collect validation problems, one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("rewrite.height_class", &self.height_class),
            ("rewrite.img_class", &self.img_class),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("[{field}] must not be empty"));
            } else if value.contains(ATTR_QUOTE) {
                errors.push(format!("[{field}] must not contain `\"` (got `{value}`)"));
            }
        }

        if self.img_class == BACKGROUND_CLASS || self.img_class == FOREGROUND_CLASS {
            errors.push(format!(
                "[rewrite.img_class] `{}` is emitted by the wrapper itself and would match again",
                self.img_class
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_rewrite_config() {
        let config = test_parse_config(
            "[rewrite]\nheight_class = \"h-80\"\nimg_class = \"rounded\"\nfiles = [\"a.html\"]",
        );
        assert_eq!(config.rewrite.height_class, "h-80");
        assert_eq!(config.rewrite.img_class, "rounded");
        assert_eq!(config.rewrite.files, vec![PathBuf::from("a.html")]);
    }

    #[test]
    fn test_rewrite_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.rewrite, RewriteConfig::default());
        assert_eq!(config.rewrite.height_class, "h-64");
        assert_eq!(config.rewrite.img_class, "h-48 w-full object-cover");
        assert!(config.rewrite.validate().is_empty());
    }

    #[test]
    fn test_validate_empty_values() {
        let config = RewriteConfig {
            height_class: "  ".to_string(),
            img_class: String::new(),
            files: Vec::new(),
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("rewrite.height_class"));
        assert!(errors[1].contains("rewrite.img_class"));
    }

    #[test]
    fn test_validate_forbidden_chars() {
        let config = RewriteConfig {
            height_class: "h-64\" onload=\"x".to_string(),
            ..RewriteConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must not contain"));
    }

    #[test]
    fn test_validate_allows_arbitrary_variants() {
        let config = RewriteConfig {
            height_class: "h-[calc(100%-2rem)]".to_string(),
            img_class: "[&>img]:rounded w-full data-[state=open]:<x>".to_string(),
            files: Vec::new(),
        };
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_template_classes() {
        for class in [BACKGROUND_CLASS, FOREGROUND_CLASS] {
            let config = RewriteConfig {
                img_class: class.to_string(),
                ..RewriteConfig::default()
            };
            assert_eq!(config.validate().len(), 1);
        }
    }
}
