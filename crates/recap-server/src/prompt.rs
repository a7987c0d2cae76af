//! Prompt construction from a caller template and a stored transcription

/// Placeholder token callers put in their template
pub(crate) const TRANSCRIPTION_PLACEHOLDER: &str = "{transcription}";

/// Substitute the first placeholder occurrence with the transcription
///
/// Only the first occurrence is replaced; later ones stay literal. The
/// transcription is inserted verbatim, without escaping, and is never
/// rescanned for further placeholders.
pub(crate) fn build_prompt(template: &str, transcription: &str) -> String {
    template.replacen(TRANSCRIPTION_PLACEHOLDER, transcription, 1)
}
