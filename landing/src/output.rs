//! Writing the built site to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{SiteConfig, StylesheetMode};
use crate::error::{LandingError, Result};
use crate::{render_page, render_stylesheet};

/// Document file written into the output directory.
pub const INDEX_FILE: &str = "index.html";

/// One file produced by [`write_site`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Files produced by a build, in write order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub files: Vec<WrittenFile>,
}

impl BuildReport {
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|file| file.bytes).sum()
    }
}

/// Render the page for `config` and write it into `out_dir`.
///
/// Writes `index.html`, plus the stylesheet file when the config asks for an
/// external stylesheet. Creates `out_dir` if needed; existing files are
/// overwritten.
pub fn write_site(config: &SiteConfig, out_dir: &Path) -> Result<BuildReport> {
    fs::create_dir_all(out_dir).map_err(|source| LandingError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut report = BuildReport::default();

    if config.output.stylesheet == StylesheetMode::External {
        let css_path = out_dir.join(&config.output.stylesheet_file);
        report.files.push(write_file(&css_path, &render_stylesheet())?);
    }

    let index_path = out_dir.join(INDEX_FILE);
    report.files.push(write_file(&index_path, &render_page(config))?);

    Ok(report)
}

fn write_file(path: &Path, contents: &str) -> Result<WrittenFile> {
    fs::write(path, contents).map_err(|source| LandingError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(WrittenFile {
        path: path.to_path_buf(),
        bytes: contents.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_inline_site() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        let report = write_site(&SiteConfig::default(), &out).expect("build");

        assert_eq!(report.files.len(), 1);
        assert_eq!(report.files[0].path, out.join(INDEX_FILE));
        let html = fs::read_to_string(out.join(INDEX_FILE)).expect("index");
        assert_eq!(html.len(), report.total_bytes());
        assert!(html.contains("<style>"));
    }

    #[test]
    fn writes_external_stylesheet() {
        let temp = TempDir::new().expect("temp dir");
        let mut config = SiteConfig::default();
        config.output.stylesheet = StylesheetMode::External;
        config.output.stylesheet_file = "app.css".into();

        let report = write_site(&config, temp.path()).expect("build");

        assert_eq!(report.files.len(), 2);
        let css = fs::read_to_string(temp.path().join("app.css")).expect("css");
        assert_eq!(css, render_stylesheet());
        let html = fs::read_to_string(temp.path().join(INDEX_FILE)).expect("index");
        assert!(html.contains(r#"href="app.css""#));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn reports_unwritable_output() {
        let temp = TempDir::new().expect("temp dir");
        let blocker = temp.path().join("taken");
        fs::write(&blocker, "not a directory").expect("write blocker");

        let err = write_site(&SiteConfig::default(), &blocker).expect_err("dir is a file");
        assert!(matches!(err, LandingError::Write { .. }));
    }
}
