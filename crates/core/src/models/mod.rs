//! Model backends an agent can be built on.
//!
//! The backend is selected by the `type` tag of a record's `model_config`
//! block. Only Bedrock is implemented; the other known tags are rejected
//! with [`FactoryError::UnsupportedType`].

mod bedrock;

pub use bedrock::{BedrockModel, BEDROCK_PARAM_MAPPING, DEFAULT_BEDROCK_MODEL_ID};

use crate::agents::FactoryError;
use crate::params::{filter, translate, Constructor};
use af_protocol::{ConfigRecord, MODEL_TYPE_KEY};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Tag assumed when a `model_config` block has no `type`.
pub const DEFAULT_MODEL_TYPE: &str = "bedrock";

/// A configured language-model backend.
///
/// Inference is performed by the vendor SDK; this only carries the
/// settings the backend was built with.
pub trait Model: Send + Sync + fmt::Debug {
    fn kind(&self) -> ModelKind;

    fn model_id(&self) -> &str;

    /// The backend's settings as JSON, omitting unset values.
    fn settings(&self) -> Value;
}

/// Known model backend tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Bedrock,
    Anthropic,
    OpenAi,
}

impl ModelKind {
    /// Parse a `model_config.type` tag. Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bedrock" => Some(Self::Bedrock),
            "anthropic" => Some(Self::Anthropic),
            "openai" => Some(Self::OpenAi),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Bedrock => "bedrock",
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
        }
    }
}

/// Build a model from a record's `model_config` block.
pub fn create_model_from_config(model_config: &Value) -> Result<Arc<dyn Model>, FactoryError> {
    let Value::Object(block) = model_config else {
        return Err(FactoryError::InvalidBlock {
            key: af_protocol::MODEL_CONFIG_KEY,
            reason: "expected an object".to_string(),
        });
    };

    let tag = match block.get(MODEL_TYPE_KEY) {
        None | Some(Value::Null) => DEFAULT_MODEL_TYPE.to_string(),
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => other.to_string(),
    };

    let kind = ModelKind::from_tag(&tag).ok_or_else(|| FactoryError::UnsupportedType {
        category: "model",
        name: tag.clone(),
    })?;

    match kind {
        ModelKind::Bedrock => {
            let model = create_bedrock_model(block)?;
            debug!(model_id = model.model_id(), "Created Bedrock model");
            Ok(Arc::new(model))
        }
        ModelKind::Anthropic | ModelKind::OpenAi => Err(FactoryError::UnsupportedType {
            category: "model",
            name: kind.tag().to_string(),
        }),
    }
}

fn create_bedrock_model(block: &ConfigRecord) -> Result<BedrockModel, FactoryError> {
    let params = BedrockModel::parameters();
    let args = filter(translate(block, BEDROCK_PARAM_MAPPING, &params), &params);
    BedrockModel::construct(args).map_err(FactoryError::ModelConstruction)
}
