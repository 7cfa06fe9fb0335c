use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The JSON document a token URI points at.
///
/// Nothing here is validated. Every known field is optional and unknown keys survive a round
/// trip through [`NftMetadata::extra`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct NftMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Address of the collection the token was minted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nft: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
