use serde::{Deserialize, Serialize};

use crate::variant::VariantType;

/// Editor hints attached to a property, numbered as the host numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum PropertyHint {
    #[default]
    None = 0,
    ResourceType = 17,
    ArrayType = 31,
}

impl PropertyHint {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

bitflags::bitflags! {
    /// Property usage flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PropertyUsage: u32 {
        const STORAGE = 1 << 1;
        const EDITOR = 1 << 2;
        const NIL_IS_VARIANT = 1 << 17;

        const DEFAULT = Self::STORAGE.bits() | Self::EDITOR.bits();
    }
}

impl Default for PropertyUsage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Hint string for an array element that is a resource class, in the
/// `"<kind>/<hint>:<class>"` form the host parses.
pub fn resource_type_hint(class_name: &str) -> String {
    format!(
        "{}/{}:{}",
        VariantType::Object.ordinal(),
        PropertyHint::ResourceType.ordinal(),
        class_name
    )
}

/// One host-reflectable value type.
///
/// An `Object` descriptor is either resource-hinted (`hint` is
/// `ResourceType`, `hint_string` holds the class) or a plain object
/// (`class_name` set, no hint). The constructors keep the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub variant_type: VariantType,
    pub hint: PropertyHint,
    pub hint_string: String,
    pub class_name: Option<String>,
    pub usage: PropertyUsage,
}

impl PropertyDescriptor {
    /// A bare value of the given kind.
    pub fn of(variant_type: VariantType) -> Self {
        Self {
            name: String::new(),
            variant_type,
            hint: PropertyHint::None,
            hint_string: String::new(),
            class_name: None,
            usage: PropertyUsage::DEFAULT,
        }
    }

    /// The "accepts any value" descriptor.
    pub fn any() -> Self {
        Self {
            usage: PropertyUsage::DEFAULT | PropertyUsage::NIL_IS_VARIANT,
            ..Self::of(VariantType::Nil)
        }
    }

    /// An object whose class descends from the resource base class.
    pub fn resource(class_name: impl Into<String>) -> Self {
        Self {
            hint: PropertyHint::ResourceType,
            hint_string: class_name.into(),
            ..Self::of(VariantType::Object)
        }
    }

    /// An object of any other class.
    pub fn object(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Self::of(VariantType::Object)
        }
    }

    /// A typed array whose element is described by `element`.
    pub fn typed_array(element: &PropertyDescriptor) -> Self {
        Self {
            hint: PropertyHint::ArrayType,
            hint_string: element.array_element_hint(),
            ..Self::of(VariantType::Array)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_any(&self) -> bool {
        self.variant_type == VariantType::Nil && self.usage.contains(PropertyUsage::NIL_IS_VARIANT)
    }

    pub fn is_resource(&self) -> bool {
        self.variant_type == VariantType::Object && self.hint == PropertyHint::ResourceType
    }

    /// The string this descriptor contributes when used as a typed-array element.
    fn array_element_hint(&self) -> String {
        if self.variant_type == VariantType::Object {
            if self.is_resource() {
                return resource_type_hint(&self.hint_string);
            }
            if let Some(class_name) = &self.class_name {
                return class_name.clone();
            }
        }
        self.variant_type.type_name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_usage_is_storage_and_editor() {
        assert_eq!(PropertyUsage::default().bits(), 6);
        assert_eq!(PropertyDescriptor::of(VariantType::Int).usage, PropertyUsage::DEFAULT);
    }

    #[test]
    fn any_is_nil_with_nil_is_variant() {
        let any = PropertyDescriptor::any();
        assert_eq!(any.variant_type, VariantType::Nil);
        assert!(any.usage.contains(PropertyUsage::NIL_IS_VARIANT));
        assert!(any.is_any());
        assert!(!PropertyDescriptor::of(VariantType::Nil).is_any());
    }

    #[test]
    fn resource_and_object_forms_are_exclusive() {
        let res = PropertyDescriptor::resource("Texture2D");
        assert_eq!(res.hint, PropertyHint::ResourceType);
        assert_eq!(res.hint_string, "Texture2D");
        assert!(res.class_name.is_none());

        let obj = PropertyDescriptor::object("Node3D");
        assert_eq!(obj.hint, PropertyHint::None);
        assert!(obj.hint_string.is_empty());
        assert_eq!(obj.class_name.as_deref(), Some("Node3D"));
    }

    #[test]
    fn typed_array_hint_strings() {
        let ints = PropertyDescriptor::typed_array(&PropertyDescriptor::of(VariantType::Int));
        assert_eq!(ints.variant_type, VariantType::Array);
        assert_eq!(ints.hint, PropertyHint::ArrayType);
        assert_eq!(ints.hint_string, "int");

        let nodes = PropertyDescriptor::typed_array(&PropertyDescriptor::object("Node"));
        assert_eq!(nodes.hint_string, "Node");

        let textures = PropertyDescriptor::typed_array(&PropertyDescriptor::resource("Texture2D"));
        assert_eq!(textures.hint_string, "24/17:Texture2D");
    }

    #[test]
    fn descriptor_serializes() {
        let desc = PropertyDescriptor::of(VariantType::Vector3).with_name("offset");
        let json = serde_json::to_string(&desc).unwrap();
        let back: PropertyDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, desc);
    }
}
