//! Parse document text into a JSON value tree

use crate::error::ExtractorError;
use crate::tree::JsonNode;
use serde::Deserialize;

/// Parse `text` as a single JSON document.
///
/// Nesting depth is not limited: the `serde_json` recursion limit is
/// disabled and `serde_stacker` moves deep recursion onto heap-allocated
/// stack segments. Anything but whitespace after the document is an error.
/// Trees abandoned on error are released by `JsonNode`'s iterative drop.
pub fn parse_document(text: &str) -> Result<JsonNode, ExtractorError> {
    let mut json = serde_json::Deserializer::from_str(text);
    json.disable_recursion_limit();

    let tree = JsonNode::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;

    Ok(tree)
}
