use std::fmt;

pub const SUMMARIZE_TEMPLATE: &str = "Please summarize the following text in a clear, concise, and easy-to-understand way. Highlight the main ideas and essential details, while keeping the overall context intact:\n\n";

pub const SUGGEST_TEMPLATE: &str = "Based on the following content: suggest related topics and further reading. Format the response in markdown with clear headings (##) and bullet points (*). Use bold for main categories and keep lists concise.\n\n";

pub const FORMAT_TEMPLATE: &str = "Reformat the following content as clean HTML. Start with a single <h2> title, then organize the material into <section> blocks, each containing an <h3> heading followed by a <ul> list of <li> items. Do not use inline styles, do not wrap the output in <html> or <body> tags, and do not include markdown code fences:\n\n";

pub const MEETING_NOTES_TEMPLATE: &str = "Rewrite the following content as meeting notes in the style of Samsung Galaxy AI. Use bracketed section headings like [Summary], write every point as a bullet starting with \u{2022}, and do not include prose paragraphs:\n\n";

/// The operation tag did not match any known template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown Operation: {}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

/// Maps an operation tag to its instruction template and appends the
/// caller's content verbatim. The dispatch is a closed set; anything
/// else is a client input error, not a transient fault.
pub fn build_prompt(operation: &str, content: &str) -> Result<String, UnknownOperation> {
    let template = match operation {
        "summarize" => SUMMARIZE_TEMPLATE,
        "suggest" => SUGGEST_TEMPLATE,
        "format" => FORMAT_TEMPLATE,
        "meetingNotes" => MEETING_NOTES_TEMPLATE,
        other => return Err(UnknownOperation(other.to_string())),
    };
    Ok(format!("{}{}", template, content))
}
