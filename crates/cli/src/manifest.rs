//! The golden-example manifest and its consistency checks.
//!
//! The manifest pins, for every example document, whether it validates and
//! (for passing examples) the SHA-256 of its rendered PDF. `check` verifies
//! the manifest's shape, re-validates every source, and renders each
//! passing example twice: the two digests must match each other and the
//! pinned hash. Diagnostics go to stderr, one line per finding.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use docdraw::RenderOptions;

use crate::CliError;

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub manifest_version: u32,
    pub examples: Vec<Example>,
}

#[derive(Debug, Deserialize)]
pub struct Example {
    pub id: String,
    pub source: Source,
    pub expected_result: ExpectedResult,
    #[serde(default)]
    pub output: Option<Output>,
}

#[derive(Debug, Deserialize)]
pub struct Source {
    /// Path to the DocDraw source, relative to the manifest file.
    pub docdraw: String,
}

#[derive(Debug, Deserialize)]
pub struct ExpectedResult {
    #[serde(rename = "type")]
    pub kind: ExpectedKind,
    #[serde(default)]
    pub error_code: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedKind {
    Pass,
    Fail,
}

#[derive(Debug, Default, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub pdf_sha256: Option<String>,
}

/// Runs all checks against a manifest file and returns the number of
/// failed findings.
pub fn check(manifest_path: &Path) -> Result<usize, CliError> {
    let json = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&json)?;
    let root = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    log::debug!(
        "checking manifest version {} with {} example(s)",
        manifest.manifest_version,
        manifest.examples.len()
    );

    let mut errors = 0usize;
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for example in &manifest.examples {
        let id = example.id.as_str();
        if !valid_id(id) {
            eprintln!("ERROR: example id must be lowercase kebab-case: {id:?}");
            errors += 1;
        }
        if !seen_ids.insert(id) {
            eprintln!("ERROR: duplicate example id: {id}");
            errors += 1;
        }

        let source_path = root.join(&example.source.docdraw);
        let text = match fs::read_to_string(&source_path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!(
                    "ERROR: example {id} missing source file {}: {err}",
                    source_path.display()
                );
                errors += 1;
                continue;
            }
        };

        errors += match example.expected_result.kind {
            ExpectedKind::Pass => check_pass(example, &text),
            ExpectedKind::Fail => check_fail(example, &text),
        };
    }

    Ok(errors)
}

fn check_pass(example: &Example, text: &str) -> usize {
    let id = &example.id;
    if let Err(err) = docdraw::validate(text) {
        eprintln!("ERROR: example {id} expected to pass but failed validation: {err}");
        return 1;
    }

    let options = RenderOptions::default();
    let first = docdraw::render_digest(text, &options);
    let second = docdraw::render_digest(text, &options);
    let (first, second) = match (first, second) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("ERROR: example {id} failed to render: {err}");
            return 1;
        }
    };

    let mut errors = 0;
    if first != second {
        eprintln!("ERROR: example {id} rendered non-deterministically: {first} vs {second}");
        errors += 1;
    }
    match example
        .output
        .as_ref()
        .and_then(|output| output.pdf_sha256.as_deref())
    {
        Some(expected) if expected != first => {
            eprintln!("ERROR: example {id} pdf_sha256 mismatch: manifest {expected}, got {first}");
            errors += 1;
        }
        Some(_) => {}
        None => {
            eprintln!("ERROR: example {id} (pass) must have output.pdf_sha256 populated");
            errors += 1;
        }
    }
    errors
}

fn check_fail(example: &Example, text: &str) -> usize {
    let id = &example.id;
    match docdraw::validate(text) {
        Ok(()) => {
            eprintln!("ERROR: example {id} expected to fail but validated cleanly");
            1
        }
        Err(err) => match &example.expected_result.error_code {
            Some(code) if code != err.code.as_str() => {
                eprintln!(
                    "ERROR: example {id} expected error code {code}, got {}",
                    err.code
                );
                1
            }
            Some(_) => 0,
            None => {
                eprintln!("ERROR: example {id} (fail) must declare expected_result.error_code");
                1
            }
        },
    }
}

fn valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
