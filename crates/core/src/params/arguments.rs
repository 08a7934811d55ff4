//! Keyword arguments handed to a target constructor.

use crate::models::Model;
use crate::params::ConstructorError;
use crate::tools::Tool;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// One keyword argument value.
///
/// Plain configuration values stay JSON. Objects built from nested
/// configuration blocks (the backing model, the tool list) travel as
/// their own variants.
#[derive(Clone)]
pub enum Argument {
    Value(Value),
    Model(Arc<dyn Model>),
    Tools(Vec<Arc<dyn Tool>>),
}

impl Argument {
    /// True only for JSON `null`. `false`, `0` and `""` are not null.
    pub fn is_null(&self) -> bool {
        matches!(self, Argument::Value(Value::Null))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Argument::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Argument {
    fn from(value: Value) -> Self {
        Argument::Value(value)
    }
}

impl From<Arc<dyn Model>> for Argument {
    fn from(model: Arc<dyn Model>) -> Self {
        Argument::Model(model)
    }
}

impl From<Vec<Arc<dyn Tool>>> for Argument {
    fn from(tools: Vec<Arc<dyn Tool>>) -> Self {
        Argument::Tools(tools)
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Argument::Model(model) => f.debug_tuple("Model").field(model).finish(),
            Argument::Tools(tools) => {
                let names: Vec<String> = tools.iter().map(|t| t.spec().name).collect();
                f.debug_tuple("Tools").field(&names).finish()
            }
        }
    }
}

/// Keyword arguments keyed by parameter name.
#[derive(Clone, Debug, Default)]
pub struct Arguments {
    entries: BTreeMap<String, Argument>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Argument>) -> Option<Argument> {
        self.entries.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Argument> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Argument> {
        self.entries.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Argument)> {
        self.entries.iter().map(|(name, arg)| (name.as_str(), arg))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Argument) -> bool) {
        self.entries.retain(|name, arg| keep(name, arg));
    }

    pub fn take_value(&mut self, name: &str) -> Result<Option<Value>, ConstructorError> {
        match self.entries.remove(name) {
            None => Ok(None),
            Some(Argument::Value(value)) => Ok(Some(value)),
            Some(_) => Err(invalid(name, "a configuration value")),
        }
    }

    pub fn take_string(&mut self, name: &str) -> Result<Option<String>, ConstructorError> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(invalid(name, "a string")),
        }
    }

    pub fn take_bool(&mut self, name: &str) -> Result<Option<bool>, ConstructorError> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(_) => Err(invalid(name, "a boolean")),
        }
    }

    pub fn take_f64(&mut self, name: &str) -> Result<Option<f64>, ConstructorError> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(|| invalid(name, "a number")),
            Some(_) => Err(invalid(name, "a number")),
        }
    }

    pub fn take_u64(&mut self, name: &str) -> Result<Option<u64>, ConstructorError> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .map(Some)
                .ok_or_else(|| invalid(name, "a non-negative integer")),
            Some(_) => Err(invalid(name, "a non-negative integer")),
        }
    }

    pub fn take_string_list(&mut self, name: &str) -> Result<Option<Vec<String>>, ConstructorError> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(invalid(name, "a list of strings")),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(invalid(name, "a list of strings")),
        }
    }

    pub fn take_object(&mut self, name: &str) -> Result<Option<Map<String, Value>>, ConstructorError> {
        match self.take_value(name)? {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(invalid(name, "an object")),
        }
    }

    pub fn take_model(&mut self, name: &str) -> Result<Option<Arc<dyn Model>>, ConstructorError> {
        match self.entries.remove(name) {
            None => Ok(None),
            Some(Argument::Model(model)) => Ok(Some(model)),
            Some(_) => Err(invalid(name, "a model")),
        }
    }

    pub fn take_tools(&mut self, name: &str) -> Result<Option<Vec<Arc<dyn Tool>>>, ConstructorError> {
        match self.entries.remove(name) {
            None => Ok(None),
            Some(Argument::Tools(tools)) => Ok(Some(tools)),
            Some(_) => Err(invalid(name, "a list of tools")),
        }
    }

    /// Fail if any argument was left unconsumed by the constructor.
    pub fn finish(self) -> Result<(), ConstructorError> {
        match self.entries.into_keys().next() {
            Some(name) => Err(ConstructorError::UnexpectedParameter(name)),
            None => Ok(()),
        }
    }
}

fn invalid(name: &str, expected: &'static str) -> ConstructorError {
    ConstructorError::InvalidValue {
        name: name.to_string(),
        expected,
    }
}
