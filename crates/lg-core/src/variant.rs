use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Host value kinds, numbered as the host's reflection API numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VariantType {
    Nil = 0,
    Bool = 1,
    Int = 2,
    Float = 3,
    String = 4,
    Vector2 = 5,
    Vector2i = 6,
    Rect2 = 7,
    Rect2i = 8,
    Vector3 = 9,
    Vector3i = 10,
    Transform2D = 11,
    Vector4 = 12,
    Vector4i = 13,
    Plane = 14,
    Quaternion = 15,
    Aabb = 16,
    Basis = 17,
    Transform3D = 18,
    Projection = 19,
    Color = 20,
    StringName = 21,
    NodePath = 22,
    Rid = 23,
    Object = 24,
    Callable = 25,
    Signal = 26,
    Dictionary = 27,
    Array = 28,
    PackedByteArray = 29,
    PackedInt32Array = 30,
    PackedInt64Array = 31,
    PackedFloat32Array = 32,
    PackedFloat64Array = 33,
    PackedStringArray = 34,
    PackedVector2Array = 35,
    PackedVector3Array = 36,
    PackedColorArray = 37,
    PackedVector4Array = 38,
}

/// Composite kinds looked up by display name: everything from `Vector2` on.
/// Primitives are spelled with script-side names instead and never go
/// through this table.
static COMPOSITE_BY_NAME: LazyLock<HashMap<&'static str, VariantType>> = LazyLock::new(|| {
    VariantType::ALL
        .iter()
        .copied()
        .filter(|ty| ty.ordinal() >= VariantType::Vector2.ordinal())
        .map(|ty| (ty.type_name(), ty))
        .collect()
});

impl VariantType {
    /// Every kind, in ordinal order.
    pub const ALL: [VariantType; 39] = [
        Self::Nil,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::String,
        Self::Vector2,
        Self::Vector2i,
        Self::Rect2,
        Self::Rect2i,
        Self::Vector3,
        Self::Vector3i,
        Self::Transform2D,
        Self::Vector4,
        Self::Vector4i,
        Self::Plane,
        Self::Quaternion,
        Self::Aabb,
        Self::Basis,
        Self::Transform3D,
        Self::Projection,
        Self::Color,
        Self::StringName,
        Self::NodePath,
        Self::Rid,
        Self::Object,
        Self::Callable,
        Self::Signal,
        Self::Dictionary,
        Self::Array,
        Self::PackedByteArray,
        Self::PackedInt32Array,
        Self::PackedInt64Array,
        Self::PackedFloat32Array,
        Self::PackedFloat64Array,
        Self::PackedStringArray,
        Self::PackedVector2Array,
        Self::PackedVector3Array,
        Self::PackedColorArray,
        Self::PackedVector4Array,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Canonical display name, as the host prints it.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "String",
            Self::Vector2 => "Vector2",
            Self::Vector2i => "Vector2i",
            Self::Rect2 => "Rect2",
            Self::Rect2i => "Rect2i",
            Self::Vector3 => "Vector3",
            Self::Vector3i => "Vector3i",
            Self::Transform2D => "Transform2D",
            Self::Vector4 => "Vector4",
            Self::Vector4i => "Vector4i",
            Self::Plane => "Plane",
            Self::Quaternion => "Quaternion",
            Self::Aabb => "AABB",
            Self::Basis => "Basis",
            Self::Transform3D => "Transform3D",
            Self::Projection => "Projection",
            Self::Color => "Color",
            Self::StringName => "StringName",
            Self::NodePath => "NodePath",
            Self::Rid => "RID",
            Self::Object => "Object",
            Self::Callable => "Callable",
            Self::Signal => "Signal",
            Self::Dictionary => "Dictionary",
            Self::Array => "Array",
            Self::PackedByteArray => "PackedByteArray",
            Self::PackedInt32Array => "PackedInt32Array",
            Self::PackedInt64Array => "PackedInt64Array",
            Self::PackedFloat32Array => "PackedFloat32Array",
            Self::PackedFloat64Array => "PackedFloat64Array",
            Self::PackedStringArray => "PackedStringArray",
            Self::PackedVector2Array => "PackedVector2Array",
            Self::PackedVector3Array => "PackedVector3Array",
            Self::PackedColorArray => "PackedColorArray",
            Self::PackedVector4Array => "PackedVector4Array",
        }
    }

    /// Look up a composite kind (`Vector2` and later) by its display name.
    pub fn from_composite_name(name: &str) -> Option<Self> {
        COMPOSITE_BY_NAME.get(name).copied()
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (n, ty) in VariantType::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(ty.ordinal()), n);
        }
        assert_eq!(VariantType::Object.ordinal(), 24);
    }

    #[test]
    fn composite_lookup_starts_at_vector2() {
        assert_eq!(
            VariantType::from_composite_name("Vector2"),
            Some(VariantType::Vector2)
        );
        assert_eq!(
            VariantType::from_composite_name("AABB"),
            Some(VariantType::Aabb)
        );
        assert_eq!(
            VariantType::from_composite_name("Object"),
            Some(VariantType::Object)
        );
        assert_eq!(
            VariantType::from_composite_name("PackedVector4Array"),
            Some(VariantType::PackedVector4Array)
        );
        // Primitives are spelled differently in scripts.
        assert_eq!(VariantType::from_composite_name("int"), None);
        assert_eq!(VariantType::from_composite_name("String"), None);
        assert_eq!(VariantType::from_composite_name("Nil"), None);
    }
}
