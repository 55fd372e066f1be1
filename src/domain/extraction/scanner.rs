//! Text-level passes over raw model output: fence stripping, span
//! isolation and control-character normalization.

const FENCE: &str = "```";

fn is_fence_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.')
}

/// Removes markdown code fences wrapping the payload.
///
/// Drops a leading fence together with its language tag (`json`, `JSON`,
/// `jsonc`, ...) and a trailing fence, then trims. Repeats until nothing
/// changes, so the operation is idempotent.
pub fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    loop {
        let before = text.len();

        if let Some(rest) = text.strip_prefix(FENCE) {
            let tag_len = rest
                .find(|c: char| !is_fence_tag_char(c))
                .unwrap_or(rest.len());
            text = rest[tag_len..].trim_start();
        }
        if let Some(rest) = text.strip_suffix(FENCE) {
            text = rest.trim_end();
        }

        if text.len() == before {
            return text;
        }
    }
}

/// Which kind of container a span is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Object,
    Array,
}

/// A balanced `{...}` or `[...]` region of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub start: usize,
    pub text: &'a str,
}

/// Finds the earliest-starting balanced object span in `text`, or, when
/// `accept_arrays` is set, the earliest object or array span.
///
/// Braces inside string literals are ignored, as are escaped quotes. String
/// tracking only happens inside a candidate, so stray quotes in surrounding
/// prose do not throw the scan off. A candidate that never closes is
/// abandoned and the scan restarts, with fresh string state, just after its
/// opener.
pub fn find_structured_span(text: &str, accept_arrays: bool) -> Option<Span<'_>> {
    let mut from = 0;
    while let Some(offset) = text[from..].find(|c: char| c == '{' || c == '[') {
        let start = from + offset;
        match scan_candidate(text, start, accept_arrays) {
            Candidate::Found(span) => return Some(span),
            Candidate::ClosedWithoutMatch { end } => from = end,
            Candidate::Unclosed => from = start + 1,
        }
    }
    None
}

enum Candidate<'a> {
    Found(Span<'a>),
    /// Balanced, but held nothing of an acceptable kind.
    ClosedWithoutMatch { end: usize },
    Unclosed,
}

/// Scans one candidate opening at `start` until its opener is balanced.
fn scan_candidate(text: &str, start: usize, accept_arrays: bool) -> Candidate<'_> {
    let mut stack: Vec<(usize, char)> = Vec::new();
    let mut best: Option<(usize, usize, SpanKind)> = None;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, c) in text[start..].char_indices() {
        let i = start + offset;
        if stack.is_empty() {
            stack.push((i, c));
            continue;
        }

        if escape_next {
            escape_next = false;
            continue;
        }

        match c {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            _ if in_string => {}
            '{' | '[' => stack.push((i, c)),
            '}' | ']' => {
                let expected_open = if c == '}' { '{' } else { '[' };
                // A mismatched closer cannot end any open span.
                let Some(&(open_at, open)) = stack.last() else {
                    continue;
                };
                if open != expected_open {
                    continue;
                }
                stack.pop();

                let kind = if open == '{' {
                    SpanKind::Object
                } else {
                    SpanKind::Array
                };
                let acceptable = kind == SpanKind::Object || accept_arrays;
                if acceptable && best.map_or(true, |(s, _, _)| open_at < s) {
                    best = Some((open_at, i + c.len_utf8(), kind));
                }

                if stack.is_empty() {
                    return match best {
                        Some((span_start, span_end, kind)) => Candidate::Found(Span {
                            kind,
                            start: span_start,
                            text: &text[span_start..span_end],
                        }),
                        None => Candidate::ClosedWithoutMatch {
                            end: i + c.len_utf8(),
                        },
                    };
                }
            }
            _ => {}
        }
    }

    Candidate::Unclosed
}

/// Makes raw control characters JSON-safe without touching string content.
///
/// Outside string literals control characters become a single space, so
/// they still separate tokens the way JSON whitespace does. Inside string literals they are replaced by their escape
/// sequences, so a literal newline in a value becomes `\n` and survives
/// parsing.
pub fn normalize_control_chars(span: &str) -> String {
    let mut out = String::with_capacity(span.len());
    let mut in_string = false;
    let mut escape_next = false;

    for c in span.chars() {
        if !in_string {
            if c == '"' {
                in_string = true;
            }
            out.push(if c.is_control() { ' ' } else { c });
            continue;
        }

        if escape_next {
            escape_next = false;
            if c.is_control() {
                // Backslash already emitted; finish the escape sequence.
                push_escape_body(&mut out, c);
            } else {
                out.push(c);
            }
            continue;
        }

        match c {
            '\\' => {
                escape_next = true;
                out.push(c);
            }
            '"' => {
                in_string = false;
                out.push(c);
            }
            c if c.is_control() => {
                out.push('\\');
                push_escape_body(&mut out, c);
            }
            c => out.push(c),
        }
    }
    out
}

fn push_escape_body(out: &mut String, c: char) {
    match c {
        '\n' => out.push('n'),
        '\r' => out.push('r'),
        '\t' => out.push('t'),
        other => out.push_str(&format!("u{:04x}", other as u32)),
    }
}
