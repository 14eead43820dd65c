use anyhow::Result;

use crate::escape::escape_for_js_template_literal;
use crate::imports::extract_imports;
use crate::templates::{render_footer, render_header, STLITE_VERSION};
use crate::title::detect_title_from_code;

/// Convert a Streamlit app into a standalone stlite HTML document.
///
/// `title` and `requirements` fall back to detection from the source when
/// not supplied; `stlite_version` falls back to [`STLITE_VERSION`].
///
/// Known limitation: a title or requirement containing a double quote is
/// spliced into the templates as-is and breaks the surrounding quoting.
pub fn convert(
    python_code: &str,
    title: Option<&str>,
    requirements: Option<&[String]>,
    stlite_version: Option<&str>,
) -> Result<String> {
    let title = match title {
        Some(t) => t.to_string(),
        None => detect_title_from_code(python_code),
    };

    let requirements: Vec<String> = match requirements {
        Some(r) => r.to_vec(),
        None => extract_imports(python_code),
    };

    let escaped_code = escape_for_js_template_literal(python_code);

    let req_str = requirements
        .iter()
        .map(|pkg| format!("\"{pkg}\""))
        .collect::<Vec<_>>()
        .join(", ");

    let version = stlite_version.unwrap_or(STLITE_VERSION);
    let header = render_header(&title, version)?;
    let footer = render_footer(&req_str)?;

    Ok(format!("{header}{escaped_code}{footer}"))
}
