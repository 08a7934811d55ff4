//! Parameter descriptors of a target constructor.

use crate::params::{Arguments, ConstructorError};
use serde_json::Value;

/// A single formal parameter of a target constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,

    /// Default value; `None` when the parameter is required or defaults to nothing.
    pub default: Option<Value>,

    pub required: bool,
}

impl ParameterDescriptor {
    /// A parameter the caller must always supply.
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default: None,
            required: true,
        }
    }

    /// An optional parameter with no default value.
    pub fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default: None,
            required: false,
        }
    }

    /// An optional parameter with a default value.
    pub fn with_default(name: &str, default: Value) -> Self {
        Self {
            name: name.to_string(),
            default: Some(default),
            required: false,
        }
    }
}

/// The formal parameters of a target constructor, keyed by unique name.
///
/// Insertion order is preserved. Inserting a descriptor whose name is
/// already present replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    descriptors: Vec<ParameterDescriptor>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`ParameterSet::insert`].
    pub fn with(mut self, descriptor: ParameterDescriptor) -> Self {
        self.insert(descriptor);
        self
    }

    /// Add a descriptor, returning the one it replaced, if any.
    pub fn insert(&mut self, descriptor: ParameterDescriptor) -> Option<ParameterDescriptor> {
        match self.descriptors.iter_mut().find(|d| d.name == descriptor.name) {
            Some(existing) => Some(std::mem::replace(existing, descriptor)),
            None => {
                self.descriptors.push(descriptor);
                None
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.iter().any(|d| d.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Fail with the first required parameter that `args` does not supply.
    pub fn check_required(&self, args: &Arguments) -> Result<(), ConstructorError> {
        match self
            .descriptors
            .iter()
            .find(|d| d.required && !args.contains(&d.name))
        {
            Some(missing) => Err(ConstructorError::MissingRequired(missing.name.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_set() -> ParameterSet {
        ParameterSet::new()
            .with(ParameterDescriptor::required("model"))
            .with(ParameterDescriptor::optional("system_prompt"))
            .with(ParameterDescriptor::with_default("record_direct_tool_call", json!(true)))
    }

    #[test]
    fn test_descriptor_constructors() {
        let required = ParameterDescriptor::required("model");
        assert!(required.required);
        assert_eq!(required.default, None);

        let optional = ParameterDescriptor::optional("system_prompt");
        assert!(!optional.required);
        assert_eq!(optional.default, None);

        let defaulted = ParameterDescriptor::with_default("stream", json!(false));
        assert!(!defaulted.required);
        assert_eq!(defaulted.default, Some(json!(false)));
    }

    #[test]
    fn test_parameter_set_lookup() {
        let params = sample_set();

        assert_eq!(params.len(), 3);
        assert!(params.contains("model"));
        assert!(!params.contains("max_iterations"));
        assert_eq!(
            params.get("record_direct_tool_call").and_then(|d| d.default.clone()),
            Some(json!(true))
        );
        assert_eq!(
            params.names().collect::<Vec<_>>(),
            vec!["model", "system_prompt", "record_direct_tool_call"]
        );
    }

    #[test]
    fn test_parameter_set_names_are_unique() {
        let mut params = sample_set();
        let replaced = params.insert(ParameterDescriptor::optional("model"));

        assert_eq!(replaced, Some(ParameterDescriptor::required("model")));
        assert_eq!(params.len(), 3);
        assert!(!params.get("model").map(|d| d.required).unwrap_or(true));
    }

    #[test]
    fn test_check_required() {
        let params = sample_set();

        let mut args = Arguments::new();
        args.insert("system_prompt", json!("Hi"));
        assert_eq!(
            params.check_required(&args),
            Err(ConstructorError::MissingRequired("model".to_string()))
        );

        args.insert("model", json!("any"));
        assert_eq!(params.check_required(&args), Ok(()));
    }
}
