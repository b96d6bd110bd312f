//! The bracket-template grammar.
//!
//! A template is arbitrary text containing zero or more bracket spans of the
//! form `{{name|description}}`. A span whose name starts with `!` is a
//! secret placeholder; its value is fetched from the secret store at run
//! time instead of from caller input. A span with an empty name is
//! discarded.
//!
//! This module lexes templates, extracts ordered parameter and secret
//! descriptors, normalizes templates into a canonical stored form, and
//! hydrates them by substituting values.
//!
//! # Example
//!
//! ```
//! use shed::core::brackets;
//!
//! let parsed = brackets::parse("ls -la   {{ path | directory path }}")?;
//! assert_eq!(parsed.normalized, "ls -la {{path|directory path}}");
//! assert_eq!(parsed.parameters.names(), vec!["path"]);
//! # Ok::<(), shed::Error>(())
//! ```

mod params;

pub use params::{Parameter, Parameters};

use std::collections::HashMap;

use crate::core::validation;
use crate::error::{Result, TemplateError};

/// Result of parsing a template: the canonical form plus the extracted
/// parameter and secret descriptors, each in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    /// Canonical template text, suitable for storage.
    pub normalized: String,
    /// Placeholders filled from caller-supplied values.
    pub parameters: Parameters,
    /// Placeholders filled from the secret store (sigil stripped).
    pub secrets: Parameters,
}

/// One lexed segment of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// Text between bracket spans, verbatim.
    Literal(&'a str),
    /// Raw inner content of a `{{...}}` span, without the braces.
    Bracket(&'a str),
}

/// Scan the input into literal runs and bracket spans.
///
/// Single pass, no backtracking. A span opens at `{{` and closes at the
/// next `}}`; nesting is not recognized. An unterminated open swallows
/// nothing: the remainder of the input is emitted as a literal.
fn lex(input: &str) -> Vec<Segment<'_>> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut lit_start = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'{' {
            match find_close(bytes, i + 2) {
                Some(close) => {
                    if i > lit_start {
                        segments.push(Segment::Literal(&input[lit_start..i]));
                    }
                    segments.push(Segment::Bracket(&input[i + 2..close]));
                    i = close + 2;
                    lit_start = i;
                }
                None => break,
            }
        } else {
            i += 1;
        }
    }

    if lit_start < input.len() {
        segments.push(Segment::Literal(&input[lit_start..]));
    }

    segments
}

/// Find the byte index of the next `}}` at or after `from`.
fn find_close(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'}' && bytes[i + 1] == b'}' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Trimmed name of a span: the text before the first `|`, whitespace
/// stripped. Includes the `!` sigil for secret spans.
fn inner_name(raw: &str) -> &str {
    match raw.split_once('|') {
        Some((head, _)) => head.trim(),
        None => raw.trim(),
    }
}

/// Canonical inner content of a span: `head` or `head|tail` with the head
/// and tail individually trimmed and internal whitespace preserved.
fn clean_inner(raw: &str) -> String {
    match raw.split_once('|') {
        Some((head, tail)) => format!("{}|{}", head.trim(), tail.trim()),
        None => raw.trim().to_string(),
    }
}

/// Append `text` with runs of whitespace collapsed to a single space.
fn push_collapsed(out: &mut String, text: &str) {
    let mut in_whitespace = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            in_whitespace = true;
        } else {
            if in_whitespace {
                out.push(' ');
                in_whitespace = false;
            }
            out.push(ch);
        }
    }
    if in_whitespace {
        out.push(' ');
    }
}

/// Normalize a template into its canonical stored form.
///
/// Outer whitespace is trimmed, whitespace runs outside bracket spans
/// collapse to a single space, and span content is rewritten as
/// `{{head}}` or `{{head|tail}}`. Idempotent.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in lex(input) {
        match segment {
            Segment::Literal(text) => push_collapsed(&mut out, text),
            Segment::Bracket(raw) => {
                out.push_str("{{");
                out.push_str(&clean_inner(raw));
                out.push_str("}}");
            }
        }
    }
    out.trim().to_string()
}

/// Extract the canonical inner contents of all named spans, de-duplicated
/// by span name. When a name repeats, the occurrence with the longest
/// canonical content wins; order of first appearance is preserved.
fn spans(input: &str) -> Vec<String> {
    let mut results: Vec<String> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for segment in lex(input) {
        let Segment::Bracket(raw) = segment else {
            continue;
        };
        let name = inner_name(raw);
        if name.is_empty() {
            continue;
        }
        let content = clean_inner(raw);
        match seen.get(name) {
            Some(&idx) => {
                if content.len() > results[idx].len() {
                    results[idx] = content;
                }
            }
            None => {
                seen.insert(name.to_string(), results.len());
                results.push(content);
            }
        }
    }

    results
}

/// Parse a template: normalize it and extract validated parameter and
/// secret descriptors.
///
/// # Errors
///
/// Returns a `ValidationError` kind when any span name violates the
/// parameter naming rules.
pub fn parse(input: &str) -> Result<Parsed> {
    let mut parameters = Vec::new();
    let mut secrets = Vec::new();

    for content in spans(input) {
        let (head, description) = match content.split_once('|') {
            Some((head, tail)) => (head, tail.to_string()),
            None => (content.as_str(), String::new()),
        };

        match head.strip_prefix('!') {
            Some(name) => {
                validation::validate_parameter_name(name)?;
                secrets.push(Parameter::new(name, &description));
            }
            None => {
                validation::validate_parameter_name(head)?;
                parameters.push(Parameter::new(head, &description));
            }
        }
    }

    Ok(Parsed {
        normalized: normalize(input),
        parameters: Parameters::from(parameters),
        secrets: Parameters::from(secrets),
    })
}

/// Substitute values into a template, never failing.
///
/// The template is normalized first. Spans whose name has a value in
/// `values` are replaced by it verbatim; spans without one are preserved in
/// canonical form; empty-name spans produce nothing. Secret spans are
/// looked up under their sigiled name (`!key`).
pub fn hydrate_safe(template: &str, values: &HashMap<String, String>) -> String {
    let normalized = normalize(template);
    let mut out = String::with_capacity(normalized.len());

    for segment in lex(&normalized) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Bracket(raw) => {
                let name = inner_name(raw);
                if name.is_empty() {
                    continue;
                }
                match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(raw);
                        out.push_str("}}");
                    }
                }
            }
        }
    }

    out
}

/// Substitute values into a template, requiring completeness.
///
/// # Errors
///
/// Fails with `MissingParameters` (names sorted ascending) when `values`
/// does not cover every parameter extracted from the template. Secret spans
/// are not checked here; resolving them is the run pipeline's job.
pub fn hydrate(template: &str, values: &HashMap<String, String>) -> Result<String> {
    let out = hydrate_safe(template, values);

    let parsed = parse(template)?;
    let mut missing: Vec<String> = parsed
        .parameters
        .iter()
        .filter(|p| !values.contains_key(&p.name))
        .map(|p| p.name.clone())
        .collect();

    if !missing.is_empty() {
        missing.sort();
        return Err(TemplateError::MissingParameters(missing).into());
    }

    Ok(out)
}

/// Decode a strict `{string: string}` JSON object into a value map.
///
/// Empty input and `"{}"` mean "no values".
///
/// # Errors
///
/// Anything other than a flat string-to-string object fails with
/// `ParsingValueParams`.
pub fn values_from_json(json: &str) -> Result<HashMap<String, String>> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        return Ok(HashMap::new());
    }
    serde_json::from_str(trimmed).map_err(|e| TemplateError::ParsingValueParams(e).into())
}

/// Safe hydration from a JSON payload.
///
/// Empty input and `"{}"` return the template unchanged.
///
/// # Errors
///
/// Fails with `ParsingValueParams` when the payload is not a flat
/// `{string: string}` object.
pub fn hydrate_from_json(template: &str, json: &str) -> Result<String> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "{}" {
        return Ok(template.to_string());
    }
    let values = values_from_json(trimmed)?;
    Ok(hydrate_safe(template, &values))
}
