/// Builds the instruction sent to the generator for `content`.
///
/// The content is interpolated verbatim, newlines included; the whole block
/// goes to the service as a single prompt. The surrounding double quotes and
/// the bare newline after "separated by" are part of the template.
pub fn build_prompt(content: &str) -> String {
    format!(
        "\"Please review the following text and provide exactly three improvement suggestions. \
Each suggestion should be in a separate sentence and separated by \n.\n\
Text: {content}\n\
Suggestions (3 sentences, one per line):\""
    )
}
