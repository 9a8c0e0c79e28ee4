//! Handlers for `render`, `check`, and `inspect`.

use std::io::Write;
use std::path::{Path, PathBuf};

use eqvis_core::{Error, Result};
use eqvis_index::markdown::{LinkKind, extract_link_targets};
use eqvis_index::{Drift, Manifest, ReadmeSummary, RenderOptions, compare};

use crate::config::EqvisConfig;

/// Where `render` sent its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Stdout,
    Written(PathBuf),
    Unchanged(PathBuf),
}

/// Load and validate a manifest, then render it.
pub fn render_manifest(manifest: &Path, options: &RenderOptions) -> Result<String> {
    let index = Manifest::load(manifest)?.into_index()?;
    Ok(index.render_with(options))
}

/// Render the README to stdout or to a file.
///
/// An output file whose content already matches is left untouched.
pub fn cmd_render(
    config: &EqvisConfig,
    manifest: Option<&Path>,
    output: Option<&Path>,
) -> Result<RenderOutcome> {
    let manifest = manifest.map_or_else(|| config.manifest_path(), Path::to_path_buf);
    let rendered = render_manifest(&manifest, &config.render_options()?)?;

    let Some(output) = output else {
        print!("{rendered}");
        return Ok(RenderOutcome::Stdout);
    };

    if let Ok(existing) = std::fs::read_to_string(output) {
        if existing == rendered {
            tracing::info!(path = %output.display(), "README already up to date");
            return Ok(RenderOutcome::Unchanged(output.to_path_buf()));
        }
    }

    write_atomically(output, &rendered)?;
    tracing::info!(
        path = %output.display(),
        manifest = %manifest.display(),
        "Wrote README"
    );
    Ok(RenderOutcome::Written(output.to_path_buf()))
}

/// Replace `path` with `content` via a temporary file in the same directory,
/// so a failed write never leaves a truncated README behind.
fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io_with_path(e, dir))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::io_with_path(e, path))?;
    file.persist(path)
        .map_err(|e| Error::io_with_path(e.error, path))?;
    Ok(())
}

/// Compare the README on disk with a fresh rendering.
pub fn cmd_check(
    config: &EqvisConfig,
    manifest: Option<&Path>,
    readme: Option<&Path>,
) -> Result<Drift> {
    let manifest = manifest.map_or_else(|| config.manifest_path(), Path::to_path_buf);
    let readme = readme.map_or_else(|| config.readme_path(), Path::to_path_buf);

    let expected = render_manifest(&manifest, &config.render_options()?)?;
    let actual = std::fs::read_to_string(&readme).map_err(|e| Error::io_with_path(e, &readme))?;

    let drift = compare(&expected, &actual);
    match &drift {
        Drift::UpToDate => tracing::info!(path = %readme.display(), "README is up to date"),
        Drift::Changed { line, .. } => {
            tracing::warn!(path = %readme.display(), line, "README differs from manifest")
        }
    }
    Ok(drift)
}

/// Summarize a README and print what it lists.
pub fn cmd_inspect(config: &EqvisConfig, readme: Option<&Path>) -> Result<ReadmeSummary> {
    let readme = readme.map_or_else(|| config.readme_path(), Path::to_path_buf);
    let content = std::fs::read_to_string(&readme).map_err(|e| Error::io_with_path(e, &readme))?;

    let summary = ReadmeSummary::from_markdown(&content, &config.render_options()?)?;
    print!("{}", format_inspection(&summary, &content));
    Ok(summary)
}

/// Human-readable listing used by `inspect`.
pub fn format_inspection(summary: &ReadmeSummary, content: &str) -> String {
    let mut lines = vec![format!(
        "title: {}",
        summary.title.as_deref().unwrap_or("<none>")
    )];

    lines.push(format!("media ({}):", summary.media.len()));
    for media in &summary.media {
        lines.push(format!(
            "  {} [{}] {}",
            media.label, media.release_tag, media.release_url
        ));
    }

    lines.push(format!("authors ({}):", summary.authors.len()));
    for author in &summary.authors {
        lines.push(format!("  {author}"));
    }

    let targets = extract_link_targets(content);
    lines.push(format!("links ({}):", targets.len()));
    for target in &targets {
        let kind = match target.kind {
            LinkKind::Link => "link ",
            LinkKind::Image => "image",
        };
        lines.push(format!("  {kind} {}", target.url));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

// ============================================================================
// Tests
// ============================================================================
