use regex::Regex;

/// Strips the markdown decoration Gemini likes to emit: heading markers
/// are removed, bold markers are unwrapped, and asterisk bullets become
/// dash bullets. Runs over whatever the extractor produced, including
/// its diagnostic strings.
pub fn clean_markdown(text: &str) -> String {
    let headings = Regex::new(r"(?m)^#{1,6}\s*").expect("invalid heading pattern");
    let bold = Regex::new(r"\*\*(.*?)\*\*").expect("invalid bold pattern");

    let text = headings.replace_all(text, "");
    let text = bold.replace_all(&text, "$1");
    // Anything left after unwrapping bold pairs is a bullet marker
    text.replace('*', "-")
}
