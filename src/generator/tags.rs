use crate::error::GenerateError;
use crate::source::{Comment, StructDecl, TagLiteral};

/// Field-level tag key whose value names the tag key to read instead of the
/// type-level candidates.
pub const FIELD_TAG_DIRECTIVE: &str = "^";

/// Type-level annotation key declaring the candidate tag keys, in
/// precedence order: `tag=json,query`.
pub const STRUCT_TAG_DIRECTIVE: &str = "tag";

/// An ordered list of `key:"value"` pairs parsed from a struct-tag literal.
///
/// Scanning follows `reflect.StructTag`: pairs are read left to right and
/// scanning stops at the first syntax violation, silently dropping the
/// remainder.
#[derive(Debug, Default)]
pub struct StructTag(Vec<(String, String)>);

impl StructTag {
    pub fn parse(content: &str) -> StructTag {
        let mut pairs = Vec::new();
        let bytes = content.as_bytes();
        let mut i = 0;
        loop {
            while i < bytes.len() && bytes[i] == b' ' {
                i += 1;
            }
            let name_start = i;
            while i < bytes.len() && bytes[i] > b' ' && bytes[i] != b':' && bytes[i] != b'"' {
                i += 1;
            }
            if i == name_start
                || i + 1 >= bytes.len()
                || bytes[i] != b':'
                || bytes[i + 1] != b'"'
            {
                break;
            }
            let name = &content[name_start..i];
            i += 2;
            let value_start = i;
            while i < bytes.len() && bytes[i] != b'"' {
                if bytes[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= bytes.len() {
                break;
            }
            let Some(value) = unescape(&content[value_start..i]) else {
                break;
            };
            pairs.push((name.to_string(), value));
            i += 1;
        }
        StructTag(pairs)
    }

    /// Value of the first pair with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }
}

/// Resolve a field's validation identifier.
///
/// Precedence: a `^`-keyed pair redirects the lookup to the tag key it
/// names and that value is used verbatim; otherwise the type-level
/// candidate keys are tried in declared order and the first present value
/// wins, with a leading `*` stripped. No tag, or no match, yields the empty
/// identifier — accepted silently and emitted as-is.
pub fn extract_identifier(
    tag: Option<&TagLiteral>,
    tagnames: &[String],
) -> Result<String, GenerateError> {
    let Some(tag) = tag else {
        return Ok(String::new());
    };
    let content = unquote_literal(&tag.raw).ok_or_else(|| GenerateError::MalformedTag {
        literal: tag.raw.clone(),
        pos: tag.pos,
    })?;
    let parsed = StructTag::parse(&content);

    if let Some(redirect) = parsed.get(FIELD_TAG_DIRECTIVE) {
        let redirect = redirect.to_string();
        return Ok(parsed.get(&redirect).unwrap_or("").to_string());
    }
    for name in tagnames {
        if let Some(value) = parsed.get(name) {
            let value = value.strip_prefix('*').unwrap_or(value);
            return Ok(value.to_string());
        }
    }
    Ok(String::new())
}

/// Tag keys declared for a struct via its annotation comment: the first
/// comment between the `struct` keyword and the field-list opening brace.
pub fn annotation_tag_names(decl: &StructDecl, comments: &[Comment]) -> Vec<String> {
    for comment in comments {
        if comment.start_byte >= decl.annotation_start && comment.end_byte <= decl.annotation_end {
            let text = comment_text(&comment.text);
            return parse_tag_names(&text, STRUCT_TAG_DIRECTIVE).unwrap_or_default();
        }
    }
    Vec::new()
}

/// Scan annotation text for `key=value` tokens and return the named key's
/// value split on commas.
///
/// Tokens are separated by whitespace and line breaks; a value runs to the
/// next separator. Blank lines and tokens without `=` (or with an empty
/// key or value) are ignored.
pub fn parse_tag_names(text: &str, key: &str) -> Option<Vec<String>> {
    for line in text.lines() {
        for token in line.split_whitespace() {
            let Some((name, value)) = token.split_once('=') else {
                continue;
            };
            if name.is_empty() || value.is_empty() {
                continue;
            }
            if name == key {
                return Some(value.split(',').map(str::to_string).collect());
            }
        }
    }
    None
}

/// Comment text with its markers removed.
pub fn comment_text(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("//") {
        return rest.strip_prefix(' ').unwrap_or(rest).to_string();
    }
    if let Some(rest) = raw.strip_prefix("/*") {
        return rest.strip_suffix("*/").unwrap_or(rest).to_string();
    }
    raw.to_string()
}

/// Unquote the outer tag literal: backquoted content is taken verbatim,
/// double-quoted content is unescaped. `None` means malformed.
fn unquote_literal(raw: &str) -> Option<String> {
    if raw.len() >= 2 && raw.starts_with('`') && raw.ends_with('`') {
        return Some(raw[1..raw.len() - 1].to_string());
    }
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape(&raw[1..raw.len() - 1]);
    }
    None
}

fn unescape(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            '\\' => out.push('\\'),
            '"' => out.push('"'),
            '\'' => out.push('\''),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'v' => out.push('\x0b'),
            _ => return None,
        }
    }
    Some(out)
}
