use textshot_types::{EngineId, RecognitionOutput, RecognitionResult};
use unicode_normalization::UnicodeNormalization;

/// Collapse an engine's native output into a single string.
///
/// Multi-block output is joined with newlines in detection order; internal
/// line breaks are preserved, surrounding whitespace is stripped. The result
/// is always a string, possibly empty.
pub fn normalize(output: RecognitionOutput) -> String {
    let text = match output {
        RecognitionOutput::Blocks(blocks) => blocks.join("\n"),
        RecognitionOutput::Plain(text) | RecognitionOutput::Markup(text) => text,
    };

    text.nfc().collect::<String>().trim().to_string()
}

pub fn into_result(output: RecognitionOutput, engine: EngineId) -> RecognitionResult {
    RecognitionResult {
        text: normalize(output),
        engine,
    }
}
