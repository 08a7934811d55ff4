//! Project initialization for agent-forge.
//!
//! Generates a `.agent-forge/` directory with a global `config.toml` and the
//! sample agent definitions under `agents/`.
//!
//! # Example
//!
//! ```no_run
//! use af_core::init::{InitOptions, generate_agent_forge_structure};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//!     minimal: true,
//! };
//!
//! let written = generate_agent_forge_structure(options).await?;
//! println!("Wrote {} files", written.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_agent_forge_structure, InitOptions};
pub use templates::{get_template, list_templates};
