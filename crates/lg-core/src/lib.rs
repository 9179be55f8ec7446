mod method;
mod property;
mod registry;
mod variant;

pub use method::{MethodFlags, MethodSignature};
pub use property::{resource_type_hint, PropertyDescriptor, PropertyHint, PropertyUsage};
pub use registry::{ClassRegistry, StaticClassRegistry};
pub use variant::VariantType;
