//! JSON value tree with non-recursive teardown

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::Number;
use std::fmt;

/// One node of a parsed JSON document.
///
/// Object members keep document order, duplicate keys included. Dropping a
/// node never recurses, however deep the tree below it: children are moved
/// onto a heap stack and released one at a time. This holds for partially
/// built trees too, so a parse error deep inside a document unwinds safely.
#[derive(Debug)]
pub enum JsonNode {
    /// Members in document order
    Object(Vec<(String, JsonNode)>),
    /// Elements in sequence order
    Array(Vec<JsonNode>),
    /// String leaf
    String(String),
    /// Number leaf
    Number(Number),
    /// Boolean leaf
    Bool(bool),
    /// `null`
    Null,
}

impl JsonNode {
    /// Move this node's children onto `out`, in document order, leaving the
    /// node empty.
    pub(crate) fn take_children(&mut self, out: &mut Vec<JsonNode>) {
        match self {
            JsonNode::Object(members) => {
                out.extend(std::mem::take(members).into_iter().map(|(_, v)| v));
            }
            JsonNode::Array(items) => out.append(items),
            JsonNode::String(_) | JsonNode::Number(_) | JsonNode::Bool(_) | JsonNode::Null => {}
        }
    }
}

impl Drop for JsonNode {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.take_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            // Emptied before it goes out of scope, so its own drop is shallow
            node.take_children(&mut stack);
        }
    }
}

impl<'de> Deserialize<'de> for JsonNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = JsonNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<JsonNode, E> {
        Ok(JsonNode::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<JsonNode, E> {
        Ok(JsonNode::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<JsonNode, E> {
        Ok(JsonNode::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<JsonNode, E> {
        Ok(Number::from_f64(v).map_or(JsonNode::Null, JsonNode::Number))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<JsonNode, E> {
        Ok(JsonNode::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<JsonNode, E> {
        Ok(JsonNode::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<JsonNode, E> {
        Ok(JsonNode::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<JsonNode, E> {
        Ok(JsonNode::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<JsonNode, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonNode::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<JsonNode, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonNode::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<JsonNode, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(member) = map.next_entry::<String, JsonNode>()? {
            members.push(member);
        }
        Ok(JsonNode::Object(members))
    }
}
