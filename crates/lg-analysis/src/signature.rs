use lg_core::{ClassRegistry, MethodFlags, MethodSignature, PropertyDescriptor, VariantType};
use lg_syntax::{Function, Local, Type, TypeReference};

use crate::config::AnalysisConfig;
use crate::error::SignatureError;
use crate::ScriptAnalysis;

/// Maps type annotations onto host reflection types.
///
/// Every operation is all-or-nothing: an unsupported or unknown piece
/// anywhere in an annotation fails the whole result.
pub struct SignatureMapper<'a> {
    registry: &'a dyn ClassRegistry,
    config: &'a AnalysisConfig,
}

fn describe(ty: &Type) -> String {
    match ty {
        Type::Reference(reference) => match &reference.prefix {
            Some(prefix) => format!("{prefix}.{}", reference.name),
            None => reference.name.clone(),
        },
        Type::Union(parts) => format!("union of {} types", parts.len()),
        Type::Intersection(_) => "intersection type".to_string(),
        Type::Table { .. } => "table type".to_string(),
        Type::Function { .. } => "function type".to_string(),
        Type::Typeof(_) => "typeof type".to_string(),
        Type::StringSingleton(_) | Type::BoolSingleton(_) => "singleton type".to_string(),
        Type::Variadic(_) | Type::GenericPack(_) => "type pack".to_string(),
    }
}

/// Split `T` or `T?` (`T | nil`, either order) into the named reference and
/// whether it was optional.
fn unwrap_optional(ty: &Type) -> Result<(&TypeReference, bool), SignatureError> {
    match ty {
        Type::Reference(reference) => Ok((reference, false)),
        Type::Union(parts) if parts.len() == 2 => {
            let mut nils = 0;
            let mut named = None;
            for part in parts {
                match part.as_reference() {
                    Some(_) if part.is_nil() => nils += 1,
                    Some(reference) if reference.is_plain() => named = Some(reference),
                    _ => return Err(SignatureError::UnsupportedTypeShape(describe(ty))),
                }
            }
            match named {
                Some(reference) if nils == 1 => Ok((reference, true)),
                _ => Err(SignatureError::UnsupportedTypeShape(describe(ty))),
            }
        }
        _ => Err(SignatureError::UnsupportedTypeShape(describe(ty))),
    }
}

impl<'a> SignatureMapper<'a> {
    pub fn new(registry: &'a dyn ClassRegistry, config: &'a AnalysisConfig) -> Self {
        Self { registry, config }
    }

    /// Resolve a bare type name: script primitives, the any-type, host
    /// composite kinds, then registered classes.
    pub fn resolve_primitive_or_class(&self, name: &str) -> Result<PropertyDescriptor, SignatureError> {
        let primitive = match name {
            "nil" => Some(VariantType::Nil),
            "boolean" => Some(VariantType::Bool),
            "integer" => Some(VariantType::Int),
            "number" => Some(VariantType::Float),
            "string" => Some(VariantType::String),
            _ => None,
        };
        if let Some(variant_type) = primitive {
            return Ok(PropertyDescriptor::of(variant_type));
        }

        if name == self.config.any_type {
            return Ok(PropertyDescriptor::any());
        }

        if let Some(variant_type) = VariantType::from_composite_name(name) {
            return Ok(PropertyDescriptor::of(variant_type));
        }

        if self.registry.class_exists(name) {
            return Ok(if self.registry.is_parent_class(name, &self.config.resource_base_class) {
                PropertyDescriptor::resource(name)
            } else {
                PropertyDescriptor::object(name)
            });
        }

        Err(SignatureError::UnknownType(name.to_string()))
    }

    /// Resolve a named reference, including the typed-array container.
    pub fn resolve_parameterized_type(
        &self,
        reference: &TypeReference,
    ) -> Result<PropertyDescriptor, SignatureError> {
        if let Some(prefix) = &reference.prefix {
            return Err(SignatureError::UnsupportedTypeShape(format!(
                "{prefix}.{}",
                reference.name
            )));
        }

        let Some(parameters) = &reference.parameters else {
            return self.resolve_primitive_or_class(&reference.name);
        };

        if reference.name != self.config.array_container {
            return Err(SignatureError::UnsupportedGeneric(reference.name.clone()));
        }

        let element = match parameters.as_slice() {
            [Type::Reference(element)] if element.is_plain() => element,
            _ => {
                return Err(SignatureError::UnsupportedTypeShape(format!(
                    "{} needs exactly one named element type",
                    reference.name
                )))
            }
        };

        let element = self.resolve_primitive_or_class(&element.name)?;
        Ok(PropertyDescriptor::typed_array(&element))
    }

    /// Resolve an annotation, returning the descriptor and whether the
    /// annotation was optional (`T?`).
    pub fn resolve_type_expression(
        &self,
        ty: &Type,
    ) -> Result<(PropertyDescriptor, bool), SignatureError> {
        let (reference, optional) = unwrap_optional(ty)?;
        let descriptor = if optional {
            self.resolve_primitive_or_class(&reference.name)?
        } else {
            self.resolve_parameterized_type(reference)?
        };
        Ok((descriptor, optional))
    }

    /// Build the host signature of a harvested method.
    #[tracing::instrument(level = "debug", skip(self, analysis))]
    pub fn resolve_method_signature(
        &self,
        analysis: &ScriptAnalysis<'_>,
        method: &str,
    ) -> Result<MethodSignature, SignatureError> {
        let Some(stat) = analysis.method(method) else {
            tracing::debug!("method not found in implementation table");
            return Err(SignatureError::UnknownMethod(method.to_string()));
        };

        let signature = self.function_signature(method, &stat.func);
        match &signature {
            Ok(signature) => tracing::debug!(
                arguments = signature.arguments.len(),
                has_return = signature.return_type.is_some(),
                vararg = signature.is_vararg(),
                "signature resolved"
            ),
            Err(err) => tracing::debug!(reason = %err, "signature unavailable"),
        }
        signature
    }

    fn function_signature(
        &self,
        name: &str,
        func: &Function,
    ) -> Result<MethodSignature, SignatureError> {
        let return_type = match func.return_annotation.as_deref() {
            None | Some([]) => None,
            Some([ty]) => Some(self.resolve_return(ty)?),
            Some(types) => {
                return Err(SignatureError::MultipleReturnTypes { count: types.len() })
            }
        };

        let mut flags = MethodFlags::DEFAULT;
        if func.vararg {
            flags |= MethodFlags::VARARG;
        }

        // Without an implicit `self`, the first parameter is the receiver.
        let params: &[Local] = if func.self_param.is_some() {
            &func.params
        } else {
            func.params.get(1..).unwrap_or_default()
        };

        let arguments = params
            .iter()
            .map(|param| self.resolve_parameter(param))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MethodSignature {
            name: name.to_string(),
            return_type,
            arguments,
            flags,
        })
    }

    /// A return type that may be nil is dynamically typed for the host.
    fn resolve_return(&self, ty: &Type) -> Result<PropertyDescriptor, SignatureError> {
        let (reference, optional) = unwrap_optional(ty)?;
        if optional {
            return Ok(PropertyDescriptor::any());
        }
        self.resolve_parameterized_type(reference)
    }

    fn resolve_parameter(&self, param: &Local) -> Result<PropertyDescriptor, SignatureError> {
        let annotation = param
            .annotation
            .as_ref()
            .ok_or_else(|| SignatureError::MissingAnnotation(param.name.clone()))?;

        let (descriptor, optional) = self.resolve_type_expression(annotation)?;
        if optional {
            return Err(SignatureError::OptionalParameter(param.name.clone()));
        }
        Ok(descriptor.with_name(&param.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg_core::{PropertyHint, PropertyUsage, StaticClassRegistry};

    fn registry() -> StaticClassRegistry {
        let mut registry = StaticClassRegistry::new();
        registry
            .register("Object", None)
            .register("Node", Some("Object"))
            .register("Resource", Some("Object"))
            .register("Texture2D", Some("Resource"));
        registry
    }

    fn annotation(source: &str) -> Type {
        let script = lg_syntax::parse(&format!("local x: {source}")).unwrap();
        match &script.root.stats[0] {
            lg_syntax::Stat::Local(local) => local.vars[0].annotation.clone().unwrap(),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn primitives_use_script_names() {
        let registry = registry();
        let config = AnalysisConfig::default();
        let mapper = SignatureMapper::new(&registry, &config);

        for (name, expected) in [
            ("nil", VariantType::Nil),
            ("boolean", VariantType::Bool),
            ("integer", VariantType::Int),
            ("number", VariantType::Float),
            ("string", VariantType::String),
            ("Vector3", VariantType::Vector3),
            ("PackedStringArray", VariantType::PackedStringArray),
        ] {
            assert_eq!(mapper.resolve_primitive_or_class(name).unwrap().variant_type, expected);
        }

        // Host spellings of primitives are not script types.
        assert!(mapper.resolve_primitive_or_class("int").is_err());
        assert!(mapper.resolve_primitive_or_class("bool").is_err());
    }

    #[test]
    fn variant_is_any_and_skips_registry() {
        let mut registry = registry();
        registry.register("Variant", None);
        let config = AnalysisConfig::default();
        let mapper = SignatureMapper::new(&registry, &config);

        let any = mapper.resolve_primitive_or_class("Variant").unwrap();
        assert!(any.is_any());
        assert_eq!(any.usage, PropertyUsage::DEFAULT | PropertyUsage::NIL_IS_VARIANT);
    }

    #[test]
    fn classes_split_on_resource_ancestry() {
        let registry = registry();
        let config = AnalysisConfig::default();
        let mapper = SignatureMapper::new(&registry, &config);

        let texture = mapper.resolve_primitive_or_class("Texture2D").unwrap();
        assert_eq!(texture.hint, PropertyHint::ResourceType);
        assert_eq!(texture.hint_string, "Texture2D");
        assert_eq!(texture.class_name, None);

        let node = mapper.resolve_primitive_or_class("Node").unwrap();
        assert_eq!(node.hint, PropertyHint::None);
        assert_eq!(node.class_name.as_deref(), Some("Node"));

        assert_eq!(
            mapper.resolve_primitive_or_class("Missing"),
            Err(SignatureError::UnknownType("Missing".to_string()))
        );
    }

    #[test]
    fn typed_array_hints() {
        let registry = registry();
        let config = AnalysisConfig::default();
        let mapper = SignatureMapper::new(&registry, &config);

        let resolve = |source: &str| {
            let ty = annotation(source);
            mapper.resolve_parameterized_type(ty.as_reference().unwrap())
        };

        let textures = resolve("TypedArray<Texture2D>").unwrap();
        assert_eq!(textures.variant_type, VariantType::Array);
        assert_eq!(textures.hint, PropertyHint::ArrayType);
        assert_eq!(textures.hint_string, "24/17:Texture2D");

        assert_eq!(resolve("TypedArray<Node>").unwrap().hint_string, "Node");
        assert_eq!(resolve("TypedArray<integer>").unwrap().hint_string, "int");
        assert_eq!(resolve("TypedArray<Vector2>").unwrap().hint_string, "Vector2");

        assert_eq!(
            resolve("TypedArray<Missing>"),
            Err(SignatureError::UnknownType("Missing".to_string()))
        );
        assert!(matches!(
            resolve("Map<string>"),
            Err(SignatureError::UnsupportedGeneric(_))
        ));
        assert!(matches!(
            resolve("TypedArray<string, number>"),
            Err(SignatureError::UnsupportedTypeShape(_))
        ));
        assert!(matches!(
            resolve("TypedArray<TypedArray<string>>"),
            Err(SignatureError::UnsupportedTypeShape(_))
        ));
        assert!(matches!(
            resolve("mod.Node"),
            Err(SignatureError::UnsupportedTypeShape(_))
        ));
    }

    #[test]
    fn optional_unions() {
        let registry = registry();
        let config = AnalysisConfig::default();
        let mapper = SignatureMapper::new(&registry, &config);

        let (node, optional) = mapper.resolve_type_expression(&annotation("Node?")).unwrap();
        assert!(optional);
        assert_eq!(node.class_name.as_deref(), Some("Node"));

        let (_, optional) = mapper.resolve_type_expression(&annotation("nil | string")).unwrap();
        assert!(optional);

        let (_, optional) = mapper.resolve_type_expression(&annotation("string")).unwrap();
        assert!(!optional);

        for shape in [
            "string | number",
            "string | number | nil",
            "nil | nil",
            "TypedArray<string>?",
            "{ number }?",
            "{ x: number }",
            "(number) -> ()",
        ] {
            assert!(
                matches!(
                    mapper.resolve_type_expression(&annotation(shape)),
                    Err(SignatureError::UnsupportedTypeShape(_))
                ),
                "{shape} should be unsupported"
            );
        }
    }

    #[test]
    fn custom_config_names() {
        let mut registry = StaticClassRegistry::new();
        registry.register("Asset", None).register("Mesh", Some("Asset"));
        let config = AnalysisConfig {
            array_container: "List".to_string(),
            resource_base_class: "Asset".to_string(),
            any_type: "Any".to_string(),
            ..AnalysisConfig::default()
        };
        let mapper = SignatureMapper::new(&registry, &config);

        assert!(mapper.resolve_primitive_or_class("Any").unwrap().is_any());
        assert!(mapper.resolve_primitive_or_class("Mesh").unwrap().is_resource());

        let ty = annotation("List<Mesh>");
        let list = mapper.resolve_parameterized_type(ty.as_reference().unwrap()).unwrap();
        assert_eq!(list.hint_string, "24/17:Mesh");
    }
}
