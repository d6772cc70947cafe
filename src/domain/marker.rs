// Marker annotation matching, for structured annotations and for annotations
// embedded in normalized source text (type parameters, record components,
// type-use positions and nested annotation arguments).

/// `@X` and `@a.b.X` both match `X`; `@a.b.X` also matches `a.b.X`.
pub fn name_matches(name: &str, marker: &str) -> bool {
    name == marker || name.rsplit('.').next() == Some(marker)
}

/// Drop the argument list of every `marker` annotation found in `text`.
/// String, character and text-block literals are never looked into.
/// Returns how many non-empty argument lists were removed.
pub fn clear_in_text(text: &mut String, marker: &str) -> usize {
    if !text.contains('@') {
        return 0;
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut cleared = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => i = skip_literal(bytes, i),
            b'@' => {
                let name_start = skip_ws(bytes, i + 1);
                let name_end = scan_name(bytes, name_start);
                if name_end == name_start {
                    i += 1;
                    continue;
                }
                let name: String = text[name_start..name_end]
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                let open = skip_ws(bytes, name_end);
                if open < bytes.len() && bytes[open] == b'(' && name_matches(&name, marker) {
                    if let Some(close) = matching_paren(bytes, open) {
                        if !text[open + 1..close].trim().is_empty() {
                            cleared += 1;
                        }
                        out.push_str(&text[copied..name_end]);
                        copied = close + 1;
                        i = close + 1;
                        continue;
                    }
                }
                // Arguments of other annotations are scanned for nested markers.
                i = name_end;
            }
            _ => i += 1,
        }
    }

    if copied > 0 {
        out.push_str(&text[copied..]);
        *text = out;
    }
    cleared
}

fn is_ident(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// End of a possibly qualified name starting at `start`.
fn scan_name(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    while end < bytes.len() && is_ident(bytes[end]) {
        end += 1;
    }
    if end == start {
        return start;
    }
    let dot = skip_ws(bytes, end);
    if dot < bytes.len() && bytes[dot] == b'.' {
        let next = skip_ws(bytes, dot + 1);
        if next < bytes.len() && is_ident(bytes[next]) {
            return scan_name(bytes, next);
        }
    }
    end
}

/// Index just past the literal opening at `start`.
fn skip_literal(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut j = start + 3;
        while j < bytes.len() {
            if bytes[j] == b'\\' {
                j += 2;
            } else if bytes[j..].starts_with(b"\"\"\"") {
                return j + 3;
            } else {
                j += 1;
            }
        }
        return bytes.len();
    }

    let quote = bytes[start];
    let mut j = start + 1;
    while j < bytes.len() {
        match bytes[j] {
            b'\\' => j += 2,
            b if b == quote => return j + 1,
            _ => j += 1,
        }
    }
    bytes.len()
}

fn matching_paren(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'"' | b'\'' => {
                i = skip_literal(bytes, i);
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
