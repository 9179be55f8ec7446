#[cfg(test)]
mod analysis_tests {
    use lg_analysis::{analyze, AnalysisConfig, AnalysisError, CommentKind};
    use lg_syntax::{parse, ParsedScript};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("lg_analysis=debug")
            .with_test_writer()
            .try_init();
    }

    fn parsed(source: &str) -> ParsedScript {
        init_tracing();
        parse(source).expect("parse should succeed")
    }

    fn analyze_err(source: &str) -> AnalysisError {
        let script = parsed(source);
        analyze(source, &script, &AnalysisConfig::default())
            .expect_err("analysis should fail")
    }

    // --- Entry point ---

    #[test]
    fn literal_table_return_fails_before_harvesting() {
        let source = "local Impl = {}\nfunction Impl.Foo(self) end\nreturn {}";
        assert_eq!(analyze_err(source), AnalysisError::NoReturnedLocal);
    }

    #[test]
    fn empty_return_fails() {
        assert_eq!(
            analyze_err("local Def = Class:RegisterImpl(Impl)\nreturn"),
            AnalysisError::NoReturnedLocal
        );
    }

    #[test]
    fn non_local_first_value_fails() {
        let source = "local Impl = {}\nlocal Def = Class:RegisterImpl(Impl)\nreturn Def.x, Def";
        assert_eq!(analyze_err(source), AnalysisError::NoReturnedLocal);
    }

    #[test]
    fn returned_local_needs_a_declared_value() {
        let source = "local Impl = {}\nlocal Def\nDef = Class:RegisterImpl(Impl)\nreturn Def";
        assert_eq!(
            analyze_err(source),
            AnalysisError::NoLocalDefinition {
                name: "Def".to_string()
            }
        );
    }

    // --- Registration chain ---

    #[test]
    fn chains_without_registration_fail() {
        for definition in [
            "{}",
            "Class.New()",
            "Class.New():Extends(\"Node\")",
            "Class.New():Extends(\"Node\"):Tool():Icon(\"x\")",
            "Class.New():RegisterImpl({})",
            "Class.New():Register(Impl)",
        ] {
            let source = format!("local Impl = {{}}\nlocal Def = {definition}\nreturn Def");
            let err = analyze_err(&source);
            assert!(
                matches!(err, AnalysisError::NoRegistrationCall { .. }),
                "{definition}: {err:?}"
            );
            assert!(!err.is_retryable());
        }
    }

    #[test]
    fn registration_method_is_configurable() {
        let source = "local Impl = {}\nlocal Def = Class:Bind(Impl)\nfunction Impl.Run(self) end\nreturn Def";
        let script = parsed(source);
        let config = AnalysisConfig {
            registration_method: "Bind".to_string(),
            ..AnalysisConfig::default()
        };
        let analysis = analyze(source, &script, &config).unwrap();
        assert_eq!(analysis.method_names(), vec!["Run"]);
    }

    // --- Full scripts ---

    const SCRIPT: &str = r#"
--!strict
local Impl = {}
local Def = Class.New("Node2D")
    :Extends("Node2D") -- base
    :RegisterImpl(Impl)
    :Tool(true)

--[[
    A sprite mover.
]]
function Impl._Ready(self: Def)
end

-- Moves by `delta`.
function Impl:Move(delta: Vector2)
end

do
    local Impl = {}
    function Impl.Hidden(self) end
end

function Impl._Ready(self: Def, again: boolean)
end

return Def
"#;

    #[test]
    fn full_script_is_analyzed() {
        let script = parsed(SCRIPT);
        let analysis = analyze(SCRIPT, &script, &AnalysisConfig::default()).unwrap();

        assert_ne!(analysis.definition, analysis.implementation);
        assert_eq!(analysis.method_names(), vec!["Move", "_Ready"]);

        // The later `_Ready` replaced the earlier one.
        let ready = analysis.method("_Ready").unwrap();
        assert_eq!(ready.func.params.len(), 2);

        let kinds: Vec<_> = analysis.comments.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CommentKind::LineExclusive,
                CommentKind::LineTrailing,
                CommentKind::Block,
                CommentKind::LineExclusive,
            ]
        );
        assert_eq!(analysis.comments[0].text, "--!strict");
        assert_eq!(analysis.method_doc("Move").as_deref(), Some("Moves by `delta`."));
    }

    #[test]
    fn comments_survive_as_owned_records() {
        let script = parsed(SCRIPT);
        let analysis = analyze(SCRIPT, &script, &AnalysisConfig::default()).unwrap();
        let json = serde_json::to_string(&analysis.comments).unwrap();
        assert!(json.contains("LineTrailing"));
        assert!(json.contains("A sprite mover."));
    }
}
