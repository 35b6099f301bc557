//! Agent-facing help, embedded at compile time so the binary is
//! self-describing wherever it is installed.

pub const LLM_HELP: &str = include_str!("../llms.txt");
