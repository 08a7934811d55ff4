//! Amazon Bedrock model settings.

use crate::models::{Model, ModelKind};
use crate::params::{Arguments, Constructor, ConstructorError, ParameterDescriptor, ParameterSet};
use serde::Serialize;
use serde_json::{json, Value};

pub const DEFAULT_BEDROCK_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

/// `model_config` key -> `BedrockModel` parameter.
pub const BEDROCK_PARAM_MAPPING: &[(&str, &str)] = &[
    ("model_id", "model_id"),
    ("temperature", "temperature"),
    ("max_tokens", "max_tokens"),
    ("top_p", "top_p"),
    ("top_k", "top_k"),
    ("stop_sequences", "stop_sequences"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedrockModel {
    pub model_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u64>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop_sequences: Vec<String>,
}

impl Default for BedrockModel {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_BEDROCK_MODEL_ID.to_string(),
            temperature: None,
            max_tokens: None,
            top_p: None,
            top_k: None,
            stop_sequences: Vec::new(),
        }
    }
}

impl Constructor for BedrockModel {
    type Output = BedrockModel;

    fn parameters() -> ParameterSet {
        ParameterSet::new()
            .with(ParameterDescriptor::with_default("model_id", json!(DEFAULT_BEDROCK_MODEL_ID)))
            .with(ParameterDescriptor::optional("temperature"))
            .with(ParameterDescriptor::optional("max_tokens"))
            .with(ParameterDescriptor::optional("top_p"))
            .with(ParameterDescriptor::optional("top_k"))
            .with(ParameterDescriptor::optional("stop_sequences"))
    }

    fn construct(mut args: Arguments) -> Result<Self::Output, ConstructorError> {
        Self::parameters().check_required(&args)?;

        let model = BedrockModel {
            model_id: args
                .take_string("model_id")?
                .unwrap_or_else(|| DEFAULT_BEDROCK_MODEL_ID.to_string()),
            temperature: non_negative("temperature", args.take_f64("temperature")?)?,
            max_tokens: args.take_u64("max_tokens")?,
            top_p: non_negative("top_p", args.take_f64("top_p")?)?,
            top_k: args.take_u64("top_k")?,
            stop_sequences: args.take_string_list("stop_sequences")?.unwrap_or_default(),
        };

        args.finish()?;
        Ok(model)
    }
}

impl Model for BedrockModel {
    fn kind(&self) -> ModelKind {
        ModelKind::Bedrock
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn settings(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Sampling bounds vary by model family; only the sign is checked here.
fn non_negative(name: &str, value: Option<f64>) -> Result<Option<f64>, ConstructorError> {
    match value {
        Some(v) if v < 0.0 => Err(ConstructorError::InvalidValue {
            name: name.to_string(),
            expected: "a non-negative number",
        }),
        other => Ok(other),
    }
}
