//! Custom assertion helpers for integration tests.

use af_core::agents::{Agent, FactoryError, FactoryResult};

/// Assert that `result` failed with `NotFound` naming `agent_id`.
#[allow(dead_code)]
pub fn assert_not_found<T: std::fmt::Debug>(result: FactoryResult<T>, agent_id: &str) {
    match result {
        Err(FactoryError::NotFound { agent_id: got }) => assert_eq!(got, agent_id),
        other => panic!("Expected NotFound for {agent_id}, got {other:?}"),
    }
}

/// Assert that `result` failed with `UnsupportedType` in `category`.
#[allow(dead_code)]
pub fn assert_unsupported<T: std::fmt::Debug>(result: FactoryResult<T>, category: &str, name: &str) {
    match result {
        Err(FactoryError::UnsupportedType { category: got_category, name: got_name }) => {
            assert_eq!(got_category, category);
            assert_eq!(got_name, name);
        }
        other => panic!("Expected UnsupportedType({category}, {name}), got {other:?}"),
    }
}

/// Assert that an agent exposes exactly the given tool names, in order.
#[allow(dead_code)]
pub fn assert_tool_names(agent: &Agent, expected: &[&str]) {
    let names = agent.tool_names();
    assert_eq!(
        names.iter().map(String::as_str).collect::<Vec<_>>(),
        expected,
        "Unexpected tools on agent {}",
        agent.agent_id()
    );
}
