//! Tool registry - name to brush behavior lookup
//!
//! Purely a dispatch table for host UIs: the tool set is closed and maps
//! one-to-one onto the falloff kernels. No dynamic registration.

use crate::brush::KernelKind;
use crate::core::errors::CoreError;

const TOOLS: [(&str, KernelKind); 6] = [
    ("constant", KernelKind::Constant),
    ("linear", KernelKind::Linear),
    ("quadratic", KernelKind::Quadratic),
    ("gaussian", KernelKind::Gaussian),
    ("ripple", KernelKind::Ripple),
    ("trippy", KernelKind::Trippy),
];

/// Lookup from tool name to its brush kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolRegistry;

impl ToolRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a tool by its display name.
    pub fn get(&self, name: &str) -> Result<KernelKind, CoreError> {
        TOOLS
            .iter()
            .find(|(tool_name, _)| *tool_name == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| CoreError::UnknownTool(name.to_string()))
    }

    /// Tool names in presentation order, for populating a host's picker.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        TOOLS.iter().map(|(name, _)| *name)
    }
}
