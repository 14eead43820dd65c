use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::tables::{PIP_ALIASES, STDLIB, TRANSITIVE_DEPS};

// Line-anchored import forms. Deliberately a lexical heuristic, not a
// parser: no comment awareness, no multi-line imports, no indent logic.
// `import pkg.sub` and `from pkg.sub import x` both yield `pkg`.
static IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^import\s+(\w+)").unwrap());
static FROM_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^from\s+(\w+)(?:\.\w+)*\s+import").unwrap());

/// Extract the pip packages a Streamlit app needs, judging by its import
/// lines. Best effort: the result is a suggestion, not a lockfile.
///
/// Returns a sorted, deduplicated list with the standard library and
/// streamlit itself filtered out, import names mapped to their pip
/// distribution names, and known indirect dependencies added.
pub fn extract_imports(python_code: &str) -> Vec<String> {
    let mut packages: BTreeSet<String> = BTreeSet::new();

    for line in python_code.lines() {
        let line = line.trim();
        let caps = IMPORT_RE
            .captures(line)
            .or_else(|| FROM_IMPORT_RE.captures(line));
        let Some(caps) = caps else { continue };

        let module = &caps[1];
        let pkg = PIP_ALIASES.get(module).copied().unwrap_or(module);
        if STDLIB.contains(pkg) {
            continue;
        }
        packages.insert(pkg.to_string());
    }

    // Pull in packages needed at runtime but never imported directly.
    let mut extra: Vec<String> = Vec::new();
    for pkg in &packages {
        if let Some(deps) = TRANSITIVE_DEPS.get(pkg.as_str()) {
            extra.extend(deps.iter().map(|d| (*d).to_string()));
        }
    }
    packages.extend(extra);

    packages.into_iter().collect()
}
