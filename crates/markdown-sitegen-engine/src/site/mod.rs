//! # Site Generation
//!
//! Walks a content directory and writes a static site: markdown files become
//! templated `.html` pages, everything else is copied verbatim.

pub mod template;

pub use template::Template;

use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::error::ConvertError;
use crate::html::{RenderOptions, convert_with};
use crate::io::{self, IoError};
use crate::parsing::extract_title;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: RelativePathBuf,
        source: ConvertError,
    },
}

/// Inputs for [`generate_site`].
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub content_dir: PathBuf,
    pub template_path: PathBuf,
    /// Wiped and recreated on every run.
    pub output_dir: PathBuf,
    /// Copied into the output directory before pages are generated.
    pub static_dir: Option<PathBuf>,
    pub render: RenderOptions,
}

/// What a site run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteReport {
    pub pages: usize,
    pub assets: usize,
}

/// Renders one markdown document into a full page.
///
/// # Errors
/// [`ConvertError::TitleNotFound`] when the document has no `# Title` line,
/// or any conversion error.
pub fn generate_page(
    markdown: &str,
    template: &Template,
    options: &RenderOptions,
) -> Result<String, ConvertError> {
    let title = extract_title(markdown)?;
    let content = convert_with(markdown, options)?;
    Ok(template.render(&title, &content))
}

/// Builds the whole site.
///
/// Generation stops at the first file that fails; the output directory may
/// then hold the pages written so far.
pub fn generate_site(options: &SiteOptions) -> Result<SiteReport, SiteError> {
    let template = Template::load(&options.template_path)?;
    let files = io::scan_content_files(&options.content_dir)?;

    log::info!("Resetting output directory {}", options.output_dir.display());
    io::reset_dir(&options.output_dir)?;

    let mut report = SiteReport::default();

    if let Some(static_dir) = &options.static_dir {
        report.assets += copy_tree(static_dir, &options.output_dir)?;
    }

    for file in &files {
        let relative = file.relative_path();
        if file.is_markdown() {
            let dest = file.output_path();
            log::debug!("Generating page {relative} -> {dest}");
            let markdown = io::read_file(relative, &options.content_dir)?;
            let page = generate_page(&markdown, &template, &options.render).map_err(|source| {
                SiteError::Convert {
                    path: relative.to_relative_path_buf(),
                    source,
                }
            })?;
            io::write_file(&dest, &options.output_dir, &page)?;
            report.pages += 1;
        } else {
            log::debug!("Copying {relative}");
            io::copy_file(relative, &options.content_dir, &options.output_dir)?;
            report.assets += 1;
        }
    }

    log::info!(
        "Generated {} pages and copied {} assets into {}",
        report.pages,
        report.assets,
        options.output_dir.display()
    );
    Ok(report)
}

fn copy_tree(from: &Path, to: &Path) -> Result<usize, IoError> {
    let files = io::scan_content_files(from)?;
    for file in &files {
        log::debug!("Copying static {}", file.relative_path());
        io::copy_file(file.relative_path(), from, to)?;
    }
    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use std::fs;

    const TEMPLATE: &str = "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    fn site_options(content: &Path, template: PathBuf, output: &Path) -> SiteOptions {
        SiteOptions {
            content_dir: content.to_path_buf(),
            template_path: template,
            output_dir: output.to_path_buf(),
            static_dir: None,
            render: RenderOptions::default(),
        }
    }

    #[test]
    fn generate_page_fills_template() {
        let template = Template::new(TEMPLATE);
        let page = generate_page("# Hello\n\nWorld", &template, &RenderOptions::default())
            .unwrap();
        assert_eq!(
            page,
            "<html><head><title>Hello</title></head><body><div><h1>Hello</h1><p>World</p></div></body></html>"
        );
    }

    #[test]
    fn generate_page_requires_title() {
        let template = Template::new(TEMPLATE);
        let err = generate_page("No heading", &template, &RenderOptions::default())
            .unwrap_err();
        assert_eq!(err, ConvertError::TitleNotFound);
    }

    #[test]
    fn generate_site_converts_and_copies() {
        let content = create_test_dir();
        let work = create_test_dir();
        let output = work.path().join("public");
        let template = create_test_file(&work, "template.html", TEMPLATE);

        create_test_file(&content, "index.md", "# Home\n\nWelcome");
        create_test_file(&content, "blog/first/index.md", "# First\n\n- a\n- b");
        create_test_file(&content, "images/logo.png", "png bytes");

        let report = generate_site(&site_options(content.path(), template, &output)).unwrap();

        assert_eq!(report, SiteReport { pages: 2, assets: 1 });
        let home = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(home.contains("<title>Home</title>"));
        assert!(home.contains("<p>Welcome</p>"));
        let post = fs::read_to_string(output.join("blog/first/index.html")).unwrap();
        assert!(post.contains("<ul><li>a</li><li>b</li></ul>"));
        assert!(output.join("images/logo.png").exists());
    }

    #[test]
    fn generate_site_removes_stale_output() {
        let content = create_test_dir();
        let work = create_test_dir();
        let template = create_test_file(&work, "template.html", TEMPLATE);
        create_test_file(&work, "public/stale.html", "old");
        create_test_file(&content, "index.md", "# Home");

        let output = work.path().join("public");
        generate_site(&site_options(content.path(), template, &output)).unwrap();

        assert!(!output.join("stale.html").exists());
        assert!(output.join("index.html").exists());
    }

    #[test]
    fn generate_site_copies_static_dir() {
        let content = create_test_dir();
        let statics = create_test_dir();
        let work = create_test_dir();
        let template = create_test_file(&work, "template.html", TEMPLATE);
        create_test_file(&content, "index.md", "# Home");
        create_test_file(&statics, "index.css", "body {}");

        let output = work.path().join("public");
        let mut options = site_options(content.path(), template, &output);
        options.static_dir = Some(statics.path().to_path_buf());

        let report = generate_site(&options).unwrap();

        assert_eq!(report, SiteReport { pages: 1, assets: 1 });
        assert_eq!(
            fs::read_to_string(output.join("index.css")).unwrap(),
            "body {}"
        );
    }

    #[test]
    fn generate_site_reports_failing_page() {
        let content = create_test_dir();
        let work = create_test_dir();
        let template = create_test_file(&work, "template.html", TEMPLATE);
        create_test_file(&content, "bad.md", "# Bad\n\nThis is `unbalanced");

        let output = work.path().join("public");
        let err = generate_site(&site_options(content.path(), template, &output)).unwrap_err();

        match err {
            SiteError::Convert { path, source } => {
                assert_eq!(path.as_str(), "bad.md");
                assert!(matches!(source, ConvertError::MalformedInline { .. }));
            }
            other => panic!("expected conversion error, got {other:?}"),
        }
    }

    #[test]
    fn generate_site_needs_template() {
        let content = create_test_dir();
        let work = create_test_dir();
        let output = work.path().join("public");

        let err = generate_site(&site_options(
            content.path(),
            work.path().join("missing.html"),
            &output,
        ))
        .unwrap_err();
        assert!(matches!(err, SiteError::Io(IoError::NotFound(_))));
    }
}
