//! blurfill - wrap matching `<img>` tags in a blurred-background container.

mod cli;
mod config;
mod logger;
mod rewrite;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::RunConfig;
use rewrite::{ImageWrapper, Outcome, rewrite_file};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = RunConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    let wrapper = ImageWrapper::new(&config.rewrite.height_class, &config.rewrite.img_class);
    debug!("rewrite"; "class `{}` -> height `{}`", config.rewrite.img_class, wrapper.height_class());

    let summary = rewrite_all(&config, &wrapper)?;
    summary.report(config.dry_run);
    Ok(())
}

// =============================================================================
// Rewrite Command
// =============================================================================

/// Rewrite every configured file in order, stopping at the first error.
fn rewrite_all(config: &RunConfig, wrapper: &ImageWrapper) -> Result<Summary> {
    let mut summary = Summary::default();

    for path in config.files() {
        let display = config.root_relative(path).display().to_string();

        let outcome = match rewrite_file(path, wrapper, config.dry_run) {
            Ok(outcome) => outcome,
            Err(err) => {
                logger::status_error(&display);
                return Err(err.into());
            }
        };

        match outcome {
            Outcome::Updated { replaced } => {
                logger::status_updated(&display, &format!("wrapped {}", images(replaced)));
            }
            Outcome::WouldUpdate { replaced } => {
                logger::status_updated(&display, &format!("would wrap {}", images(replaced)));
            }
            Outcome::Unchanged => logger::status_unchanged(&display),
        }
        summary.record(outcome);
    }

    Ok(summary)
}

fn images(count: usize) -> String {
    format!("{} image{}", count, if count == 1 { "" } else { "s" })
}

/// Totals across one run.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    updated: usize,
    unchanged: usize,
    replaced: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        if outcome.is_unchanged() {
            self.unchanged += 1;
        } else {
            self.updated += 1;
            self.replaced += outcome.replaced();
        }
    }

    fn message(&self, dry_run: bool) -> String {
        let files = |n: usize| format!("{} file{}", n, if n == 1 { "" } else { "s" });
        let verb = if dry_run { "would update" } else { "updated" };
        format!(
            "{verb} {} ({}), {} unchanged",
            files(self.updated),
            images(self.replaced),
            self.unchanged
        )
    }

    fn report(&self, dry_run: bool) {
        let module = if dry_run { "dry-run" } else { "done" };
        log!(module; "{}", self.message(dry_run));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = r#"<img src="a.jpg" alt="A" class="h-48 w-full object-cover">
<img src="b.jpg" alt="B" class="h-48 w-full object-cover">
"#;

    fn config_for(dir: &TempDir, files: &[&str], dry_run: bool) -> RunConfig {
        let mut config = RunConfig {
            root: dir.path().to_path_buf(),
            dry_run,
            ..RunConfig::default()
        };
        config.rewrite.files = files.iter().map(|f| dir.path().join(f)).collect();
        config
    }

    #[test]
    fn test_summary_message() {
        let mut summary = Summary::default();
        summary.record(Outcome::Updated { replaced: 2 });
        summary.record(Outcome::Updated { replaced: 1 });
        summary.record(Outcome::Unchanged);

        assert_eq!(
            summary,
            Summary {
                updated: 2,
                unchanged: 1,
                replaced: 3
            }
        );
        assert_eq!(summary.message(false), "updated 2 files (3 images), 1 unchanged");
    }

    #[test]
    fn test_summary_message_dry_run_singular() {
        let mut summary = Summary::default();
        summary.record(Outcome::WouldUpdate { replaced: 1 });
        assert_eq!(summary.message(true), "would update 1 file (1 image), 0 unchanged");
    }

    #[test]
    fn test_rewrite_all_mixed_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();
        fs::write(dir.path().join("about.html"), "<p>no images</p>").unwrap();

        let config = config_for(&dir, &["index.html", "about.html"], false);
        let wrapper = ImageWrapper::new("h-64", "h-48 w-full object-cover");

        let summary = rewrite_all(&config, &wrapper).unwrap();
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.unchanged, 1);
        assert_eq!(summary.replaced, 2);

        // Second run is a no-op
        let summary = rewrite_all(&config, &wrapper).unwrap();
        assert_eq!(summary.updated, 0);
        assert_eq!(summary.unchanged, 2);
    }

    #[test]
    fn test_rewrite_all_stops_at_first_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();
        fs::write(dir.path().join("last.html"), PAGE).unwrap();

        let config = config_for(&dir, &["index.html", "missing.html", "last.html"], false);
        let wrapper = ImageWrapper::new("h-64", "h-48 w-full object-cover");

        let err = rewrite_all(&config, &wrapper).unwrap_err();
        assert!(err.to_string().contains("missing.html"));
        assert_ne!(fs::read_to_string(dir.path().join("index.html")).unwrap(), PAGE);
        assert_eq!(fs::read_to_string(dir.path().join("last.html")).unwrap(), PAGE);
    }

    #[test]
    fn test_rewrite_all_dry_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("index.html"), PAGE).unwrap();

        let config = config_for(&dir, &["index.html"], true);
        let wrapper = ImageWrapper::new("h-64", "h-48 w-full object-cover");

        let summary = rewrite_all(&config, &wrapper).unwrap();
        assert_eq!(summary.updated, 1);
        assert_eq!(fs::read_to_string(dir.path().join("index.html")).unwrap(), PAGE);
    }
}
