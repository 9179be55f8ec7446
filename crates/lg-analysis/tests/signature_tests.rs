#[cfg(test)]
mod signature_tests {
    use lg_analysis::{analyze, AnalysisConfig, SignatureError, SignatureMapper};
    use lg_core::{
        MethodFlags, MethodSignature, PropertyDescriptor, PropertyHint, StaticClassRegistry,
        VariantType,
    };
    use lg_syntax::parse;

    fn registry() -> StaticClassRegistry {
        let mut registry = StaticClassRegistry::new();
        registry
            .register("Object", None)
            .register("Node", Some("Object"))
            .register("Node2D", Some("Node"))
            .register("Resource", Some("Object"))
            .register("Texture2D", Some("Resource"));
        registry
    }

    /// Wrap `methods` in the standard definition boilerplate and resolve `name`.
    fn resolve(methods: &str, name: &str) -> Result<MethodSignature, SignatureError> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("lg_analysis=debug")
            .with_test_writer()
            .try_init();

        let source = format!(
            "local Impl = {{}}\nlocal Def = Class.New(\"Node\"):RegisterImpl(Impl)\n{methods}\nreturn Def\n"
        );

        let script = parse(&source).expect("parse should succeed");
        let config = AnalysisConfig::default();
        let analysis = analyze(&source, &script, &config).expect("analysis should succeed");
        let registry = registry();
        SignatureMapper::new(&registry, &config).resolve_method_signature(&analysis, name)
    }

    // --- Scenarios ---

    #[test]
    fn integer_parameter_and_string_return() {
        let signature = resolve(
            "function Impl.Foo(self: Def, x: integer): string\n  return tostring(x)\nend",
            "Foo",
        )
        .unwrap();

        assert_eq!(signature.name, "Foo");
        assert_eq!(signature.arguments.len(), 1);
        assert_eq!(signature.arguments[0].name, "x");
        assert_eq!(signature.arguments[0].variant_type, VariantType::Int);
        assert_eq!(
            signature.return_type,
            Some(PropertyDescriptor::of(VariantType::String))
        );
        assert_eq!(signature.flags, MethodFlags::DEFAULT);
    }

    #[test]
    fn missing_parameter_annotation_fails() {
        let err = resolve("function Impl.Foo(self: Def, x): string\nend", "Foo").unwrap_err();
        assert_eq!(err, SignatureError::MissingAnnotation("x".to_string()));
        assert!(!err.is_retryable());
    }

    #[test]
    fn unknown_method() {
        assert_eq!(
            resolve("function Impl.Foo(self) end", "Bar").unwrap_err(),
            SignatureError::UnknownMethod("Bar".to_string())
        );
    }

    // --- Returns ---

    #[test]
    fn no_annotation_means_no_return() {
        let signature = resolve("function Impl.Foo(self) end", "Foo").unwrap();
        assert_eq!(signature.return_type, None);
        assert!(signature.arguments.is_empty());
    }

    #[test]
    fn empty_return_list_means_no_return() {
        let signature = resolve("function Impl.Foo(self): () end", "Foo").unwrap();
        assert_eq!(signature.return_type, None);
    }

    #[test]
    fn optional_return_matches_variant() {
        let optional = resolve("function Impl.Foo(self): Node? end", "Foo").unwrap();
        let variant = resolve("function Impl.Foo(self): Variant end", "Foo").unwrap();
        assert_eq!(optional.return_type, variant.return_type);
        assert!(optional.return_type.unwrap().is_any());
    }

    #[test]
    fn optional_return_of_unknown_class_is_still_any() {
        let signature = resolve("function Impl.Foo(self): Missing? end", "Foo").unwrap();
        assert!(signature.return_type.unwrap().is_any());
    }

    #[test]
    fn multiple_returns_fail() {
        assert_eq!(
            resolve("function Impl.Foo(self): (number, string) end", "Foo").unwrap_err(),
            SignatureError::MultipleReturnTypes { count: 2 }
        );
    }

    #[test]
    fn parenthesized_single_return() {
        let signature = resolve("function Impl.Foo(self): (Texture2D) end", "Foo").unwrap();
        let ret = signature.return_type.unwrap();
        assert_eq!(ret.variant_type, VariantType::Object);
        assert_eq!(ret.hint, PropertyHint::ResourceType);
    }

    #[test]
    fn unknown_return_type_fails() {
        assert_eq!(
            resolve("function Impl.Foo(self): Missing end", "Foo").unwrap_err(),
            SignatureError::UnknownType("Missing".to_string())
        );
    }

    // --- Parameters ---

    #[test]
    fn optional_parameter_fails() {
        assert_eq!(
            resolve("function Impl.Foo(self, node: Node?) end", "Foo").unwrap_err(),
            SignatureError::OptionalParameter("node".to_string())
        );
    }

    #[test]
    fn method_syntax_keeps_first_parameter() {
        let signature = resolve(
            "function Impl:Foo(a: Node2D, b: TypedArray<Texture2D>, c: Color) end",
            "Foo",
        )
        .unwrap();

        let names: Vec<_> = signature.argument_names().collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(signature.arguments[0].class_name.as_deref(), Some("Node2D"));
        assert_eq!(signature.arguments[1].variant_type, VariantType::Array);
        assert_eq!(signature.arguments[1].hint_string, "24/17:Texture2D");
        assert_eq!(signature.arguments[2].variant_type, VariantType::Color);
    }

    #[test]
    fn dot_syntax_without_parameters() {
        let signature = resolve("function Impl.Foo() end", "Foo").unwrap();
        assert!(signature.arguments.is_empty());
    }

    #[test]
    fn vararg_sets_flag() {
        let signature = resolve("function Impl.Foo(self, first: string, ...) end", "Foo").unwrap();
        assert!(signature.is_vararg());
        assert_eq!(signature.flags, MethodFlags::DEFAULT | MethodFlags::VARARG);
        assert_eq!(signature.arguments.len(), 1);
    }

    #[test]
    fn container_with_unknown_element_fails_whole_signature() {
        assert_eq!(
            resolve(
                "function Impl.Foo(self, ok: integer, bad: TypedArray<Missing>): string end",
                "Foo"
            )
            .unwrap_err(),
            SignatureError::UnknownType("Missing".to_string())
        );
    }

    #[test]
    fn unsupported_shapes_fail() {
        for annotation in [
            "{ number }",
            "string | number",
            "(number) -> number",
            "Map<string>",
            "mod.Node",
            "\"literal\"",
        ] {
            let methods = format!("function Impl.Foo(self, x: {annotation}) end");
            let err = resolve(&methods, "Foo").unwrap_err();
            assert!(
                matches!(
                    err,
                    SignatureError::UnsupportedTypeShape(_) | SignatureError::UnsupportedGeneric(_)
                ),
                "{annotation}: {err:?}"
            );
        }
    }

    #[test]
    fn signatures_serialize() {
        let signature = resolve("function Impl.Foo(self, n: number): Node end", "Foo").unwrap();
        let json = serde_json::to_string(&signature).unwrap();
        let back: MethodSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signature);
    }
}
