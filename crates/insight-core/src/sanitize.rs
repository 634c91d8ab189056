//! Response Sanitizer
//!
//! Generative models rarely return the bare JSON they were asked for: the
//! payload tends to arrive wrapped in markdown code fences, preceded by
//! conversational filler, or both. `extract_json` carves the most plausible
//! JSON substring out of such a blob. It does not validate the result —
//! deserialization downstream decides whether the candidate actually parses.

/// Extract the most plausible JSON payload from raw model output.
///
/// Strips markdown fence markers, then takes the substring from the first
/// `{` or `[` (whichever comes first) through the last `}` or `]` (whichever
/// comes last), inclusive. If no opening bracket is present the fence-
/// stripped, trimmed text is returned unchanged; parsing it will fail
/// downstream, which is the caller's signal that the response was unusable.
///
/// Pure and idempotent: applying it to already-clean JSON is a no-op.
pub fn extract_json(raw: &str) -> String {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    let first_brace = cleaned.find('{');
    let first_bracket = cleaned.find('[');

    let start = match (first_brace, first_bracket) {
        (Some(b), Some(k)) => b.min(k),
        (Some(b), None) => b,
        (None, Some(k)) => k,
        (None, None) => return cleaned.to_string(),
    };

    let last_brace = cleaned.rfind('}');
    let last_bracket = cleaned.rfind(']');

    let end = match (last_brace, last_bracket) {
        (Some(b), Some(k)) => b.max(k),
        (Some(b), None) => b,
        (None, Some(k)) => k,
        (None, None) => return cleaned.to_string(),
    };

    if end < start {
        return cleaned.to_string();
    }

    cleaned[start..=end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_fences() {
        let raw = "```json\n[{\"a\":1}]\n```";
        assert_eq!(extract_json(raw), "[{\"a\":1}]");
    }

    #[test]
    fn test_extracts_object_from_commentary() {
        let raw = "blah { \"x\": [1,2] } blah";
        assert_eq!(extract_json(raw), "{ \"x\": [1,2] }");
    }

    #[test]
    fn test_no_brackets_returns_trimmed_input() {
        let raw = "  no json here  ";
        let extracted = extract_json(raw);
        assert_eq!(extracted, "no json here");
        // Downstream parsing must fail, not panic.
        assert!(serde_json::from_str::<serde_json::Value>(&extracted).is_err());
    }

    #[test]
    fn test_idempotent_on_clean_json() {
        let clean = r#"{"symbol":"BTC","signals":[1,2,3]}"#;
        let once = extract_json(clean);
        let twice = extract_json(&once);
        assert_eq!(once, clean);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_idempotent_after_extraction() {
        let raw = "Here you go:\n```json\n{\"ok\": true}\n```\nHope that helps!";
        let once = extract_json(raw);
        let twice = extract_json(&once);
        assert_eq!(once, "{\"ok\": true}");
        assert_eq!(twice, once);
    }

    #[test]
    fn test_array_before_object_picks_array_start() {
        let raw = "[{\"a\":1}] trailing";
        assert_eq!(extract_json(raw), "[{\"a\":1}]");
    }

    #[test]
    fn test_unbalanced_brackets_fall_back_to_cleaned_text() {
        // Closing bracket before any opening one: no sensible span exists.
        let raw = "} {";
        assert_eq!(extract_json(raw), "} {");
    }

    #[test]
    fn test_fence_markers_inside_text_are_removed() {
        let raw = "```json{\"a\":1}```";
        assert_eq!(extract_json(raw), "{\"a\":1}");
    }
}
