//! Translation and filtering of configuration records into arguments.

use crate::params::{Arguments, ParameterSet};
use af_protocol::ConfigRecord;
use tracing::debug;

/// Copy configured values across `table` into a candidate argument set.
///
/// For each `(config_key, param_name)` pair, the value is copied only if
/// `config_key` is present in `record` and `param_name` is declared in
/// `params`. Keys not listed in the table are ignored. Null values are
/// copied as-is; [`filter`] removes them.
pub fn translate(record: &ConfigRecord, table: &[(&str, &str)], params: &ParameterSet) -> Arguments {
    let mut args = Arguments::new();

    for (config_key, param_name) in table {
        let Some(value) = record.get(*config_key) else {
            continue;
        };

        if params.contains(param_name) {
            args.insert(*param_name, value.clone());
        } else {
            debug!(config_key, param_name, "Dropping configuration key not accepted by constructor");
        }
    }

    args
}

/// Drop null-valued entries and entries not declared in `params`.
///
/// Falsy values such as `false` and `0` are kept.
pub fn filter(mut args: Arguments, params: &ParameterSet) -> Arguments {
    args.retain(|name, arg| !arg.is_null() && params.contains(name));
    args
}
