// SentiView - app/headless.rs
//
// Preview without a window: parse one file and emit the HTML table.
// Used by the `--html` CLI mode.

use crate::app::loader;
use crate::core::model::PreviewLimit;
use crate::core::{parser, render};
use crate::util::error::{PreviewError, Result, SentiViewError};
use std::io::Write;
use std::path::Path;

/// Parse `path` and render its preview at `limit` as HTML.
///
/// Unlike the GUI, a non-.csv path is an error here: there is no other way
/// to tell the caller nothing happened.
pub fn preview_html(path: &Path, limit: PreviewLimit) -> Result<String> {
    if !parser::is_supported_file(path) {
        return Err(PreviewError::UnsupportedFile {
            path: path.to_path_buf(),
        }
        .into());
    }
    let result = loader::run_load(path)?;
    let table = render::render(&result, limit);
    tracing::info!(
        path = %path.display(),
        rendered = table.len(),
        filtered = result.rows.len(),
        "Rendered HTML preview"
    );
    Ok(render::to_html(&table))
}

/// Write `html` to `out`, or to stdout when `out` is "-".
pub fn write_output(html: &str, out: &Path) -> Result<()> {
    if out.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        return stdout
            .write_all(html.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| SentiViewError::Io {
                path: out.to_path_buf(),
                operation: "write",
                source: e,
            });
    }
    std::fs::write(out, html).map_err(|e| SentiViewError::Io {
        path: out.to_path_buf(),
        operation: "write",
        source: e,
    })
}
