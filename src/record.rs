//! Tagged record structure for SocialSim dump objects.
//! Narrative labels live in `extension.socialsim_information_id`: a list of
//! strings where the empty string means "no label assigned".

use serde::Deserialize;
use serde_json::{Map, Value};

/// One social-media item (video, comment, tweet, ...). Fields outside the
/// narrative extension are kept as raw JSON so keyword inference can reach
/// arbitrary text fields without a schema.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub extension: Option<Extension>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// The SocialSim annotation envelope. A record parsed without this block has
/// no narrative metadata at all.
#[derive(Debug, Clone, Deserialize)]
pub struct Extension {
    pub socialsim_information_id: Vec<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Record {
    /// Narrative labels, or `None` when the record carries no extension.
    pub fn labels(&self) -> Option<&[String]> {
        self.extension.as_ref().map(|e| e.socialsim_information_id.as_slice())
    }

    /// Lowercased text of a named field. String fields are lowercased as-is;
    /// list fields have their string elements joined with spaces.
    pub fn text_field_lower(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            Value::String(s) => Some(s.to_lowercase()),
            Value::Array(items) => {
                let joined: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                Some(joined.join(" ").to_lowercase())
            }
            _ => None,
        }
    }
}

/// Hyphen segments of a composite narrative label.
pub fn components(label: &str) -> impl Iterator<Item = &str> {
    label.split('-')
}
