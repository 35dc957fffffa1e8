//! Document rendering.
//!
//! Formatters assemble final documents as single strings: `**…**` pairs
//! mark bold segments and literal newlines separate paragraphs. Both are
//! significant, the print path maps them to presentation verbatim.

pub mod contract;
pub mod html;
pub mod receipt;
pub mod words;

/// Strips marker-significant characters from untrusted free text, so an
/// assembled document stays trusted structured text.
fn sanitize(text: &str) -> String {
    text.chars().filter(|c| *c != '*').collect()
}
