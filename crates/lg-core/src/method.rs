use serde::{Deserialize, Serialize};

use crate::property::PropertyDescriptor;

bitflags::bitflags! {
    /// Method flags, numbered as the host numbers them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MethodFlags: u32 {
        const NORMAL = 1;
        const EDITOR = 1 << 1;
        const CONST = 1 << 2;
        const VIRTUAL = 1 << 3;
        const VARARG = 1 << 4;
        const STATIC = 1 << 5;

        const DEFAULT = Self::NORMAL.bits();
    }
}

impl Default for MethodFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A complete method signature, ready to hand to the host's registration API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    /// `None` for methods without a declared return type.
    pub return_type: Option<PropertyDescriptor>,
    pub arguments: Vec<PropertyDescriptor>,
    pub flags: MethodFlags,
}

impl MethodSignature {
    pub fn is_vararg(&self) -> bool {
        self.flags.contains(MethodFlags::VARARG)
    }

    /// Argument names in declaration order.
    pub fn argument_names(&self) -> impl Iterator<Item = &str> {
        self.arguments.iter().map(|arg| arg.name.as_str())
    }
}
