use lazy_static::lazy_static;

/// Common initialisms kept intact as a single word instead of being split
/// character by character ("clientID" → "client_id", not "client_i_d").
///
/// Order matters: when two patterns match at the same position, the one
/// listed first wins ("HTTP" before "HTTPS").
pub const COMMON_INITIALISMS: [&str; 33] = [
    "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SSH", "TLS", "TTL", "UID", "UI",
    "UUID", "URI", "URL", "UTF8", "VM", "XML", "XSRF", "XSS",
];

lazy_static! {
    static ref REPLACEMENTS: Vec<(&'static str, String)> = COMMON_INITIALISMS
        .iter()
        .map(|pattern| (*pattern, title_case(pattern)))
        .collect();
}

/// "HTTP" → "Http", "UTF8" → "Utf8"
fn title_case(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for (i, ch) in pattern.chars().enumerate() {
        if i == 0 {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch.to_ascii_lowercase());
        }
    }
    out
}

/// Replace every occurrence of a known initialism with its Title-case form,
/// scanning left to right without overlapping matches, so that the later
/// character scan sees acronyms as ordinary capitalized words.
///
/// "clientID"   → "clientId"
/// "HTTPServer" → "HttpServer"
pub fn replace_initialisms(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;

    while !rest.is_empty() {
        match REPLACEMENTS.iter().find(|(pattern, _)| rest.starts_with(pattern)) {
            Some((pattern, replacement)) => {
                out.push_str(replacement);
                rest = &rest[pattern.len()..];
            }
            None => {
                let ch = rest.chars().next().unwrap();
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}
