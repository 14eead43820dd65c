//! Fixed lookup tables for requirement inference.
//!
//! Built once on first use; nothing here is configurable at runtime. The
//! config overlay (see `config.rs`) layers user additions on top of the
//! extractor's output instead of mutating these.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

/// Import-time module names whose pip distribution name differs.
pub static PIP_ALIASES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        ("cv2", "opencv-python"),
        ("sklearn", "scikit-learn"),
        ("PIL", "Pillow"),
        ("yaml", "pyyaml"),
        ("bs4", "beautifulsoup4"),
    ])
});

/// Modules that ship with the Python standard library and never need
/// installing, plus the host framework itself (`streamlit` is built into
/// stlite, `st` covers the conventional alias used as a bare import).
pub static STDLIB: LazyLock<BTreeSet<&'static str>> = LazyLock::new(|| {
    BTreeSet::from([
        "os", "sys", "re", "json", "datetime", "time", "math", "random",
        "collections", "itertools", "functools", "operator", "copy",
        "io", "base64", "hashlib", "pickle", "pathlib", "typing",
        "abc", "contextlib", "dataclasses", "enum", "warnings",
        "threading", "multiprocessing", "subprocess", "socket",
        "urllib", "http", "email", "html", "xml", "csv", "sqlite3",
        "logging", "unittest", "doctest", "pdb", "traceback",
        "gc", "inspect", "importlib", "pkgutil", "platform",
        "struct", "array", "decimal", "fractions", "statistics",
        "tempfile", "shutil", "glob", "fnmatch", "linecache",
        "textwrap", "difflib", "string", "secrets", "uuid",
        "argparse", "getopt", "configparser", "fileinput",
        "stat", "filecmp", "zipfile", "tarfile", "gzip", "bz2", "lzma",
        "zlib", "binascii", "quopri", "uu", "codecs",
        "streamlit", "st",
    ])
});

/// Packages that pull in runtime dependencies which are never imported
/// directly (e.g. pandas needs the Excel writers for `to_excel`).
pub static TRANSITIVE_DEPS: LazyLock<BTreeMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        BTreeMap::from([
            ("lmfit", &["scipy"] as &[&str]),
            ("tadatakit", &["pydantic"]),
            ("plotly", &[]),
            ("pandas", &["xlsxwriter", "openpyxl"]),
            ("numpy", &[]),
            ("matplotlib", &[]),
        ])
    });
