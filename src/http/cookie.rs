/// Find a named cookie in the raw header lines. Only the first `Cookie:`
/// line is inspected (multiple cookie headers are not merged); within it the
/// value is whatever follows the first `name=` up to the next `;` or end of
/// line.
pub fn cookie(headers: &[String], name: &str) -> Option<String> {
    let line = headers.iter().find(|l| l.starts_with("Cookie:"))?;
    let needle = format!("{name}=");
    let start = line.find(&needle)? + needle.len();
    let rest = &line[start..];
    let end = rest.find(';').unwrap_or(rest.len());
    Some(rest[..end].to_string())
}
