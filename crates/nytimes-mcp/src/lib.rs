pub mod adapter;
pub mod format;
pub mod jsonrpc;
pub mod tools;

pub use adapter::NewsTools;
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use tools::{ToolDefinition, ToolRegistry};
