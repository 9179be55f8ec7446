use std::fmt::Write;

use lg_core::StaticClassRegistry;

/// A hand-written class script exercising every supported annotation form.
pub const PLAYER_SCRIPT: &str = r#"--!strict
-- Player controller.

local Impl = {}
local Player = Class.New("CharacterBody2D")
    :Extends("CharacterBody2D")
    :RegisterImpl(Impl)

--- Called when the node enters the tree.
function Impl._Ready(self: Player)
    self.speed = 200
end

--- Moves the player.
--- Returns whether the move collided.
function Impl.Move(self: Player, direction: Vector2, delta: number): boolean
    local velocity = direction * self.speed * delta
    return self:MoveAndCollide(velocity) ~= nil
end

--[[ The sprite currently shown. ]]
function Impl:GetSprite(): Texture2D?
    return self.sprite
end

function Impl.SetFrames(self: Player, frames: TypedArray<Texture2D>)
    self.frames = frames
end

function Impl.Spawn(self: Player, parent: Node, count: integer): TypedArray<Node>
    local spawned = {}
    for i = 1, count do
        spawned[i] = parent:AddChild(Node.new())
    end
    return spawned
end

function Impl.Log(self: Player, message: string, ...)
    print(message, ...)
end

function Impl.Untyped(self: Player, value)
end

return Player
"#;

/// The host classes `PLAYER_SCRIPT` refers to.
pub fn host_registry() -> StaticClassRegistry {
    let mut registry = StaticClassRegistry::new();
    registry
        .register("Object", None)
        .register("Node", Some("Object"))
        .register("CanvasItem", Some("Node"))
        .register("Node2D", Some("CanvasItem"))
        .register("CharacterBody2D", Some("Node2D"))
        .register("Resource", Some("Object"))
        .register("Texture", Some("Resource"))
        .register("Texture2D", Some("Texture"));
    registry
}

const PARAM_TYPES: [&str; 6] = [
    "integer",
    "number",
    "string",
    "Vector3",
    "Node",
    "TypedArray<Texture2D>",
];

/// Generate a class script with `methods` annotated methods, each preceded by
/// a doc comment and followed by some filler statements.
pub fn generated_script(methods: usize) -> String {
    let mut src = String::from("local Impl = {}\nlocal Def = Class.New(\"Node\"):RegisterImpl(Impl)\n\n");

    for i in 0..methods {
        let a = PARAM_TYPES[i % PARAM_TYPES.len()];
        let b = PARAM_TYPES[(i + 1) % PARAM_TYPES.len()];
        let _ = writeln!(src, "--- Method number {i}.");
        let _ = writeln!(
            src,
            "function Impl.Method{i}(self: Def, a: {a}, b: {b}): {a}"
        );
        let _ = writeln!(src, "    local total = 0 -- running sum");
        let _ = writeln!(src, "    for j = 1, {i} do");
        let _ = writeln!(src, "        if j % 2 == 0 then total += j else total -= 1 end");
        let _ = writeln!(src, "    end");
        let _ = writeln!(src, "    return a");
        let _ = writeln!(src, "end\n");
    }

    src.push_str("return Def\n");
    src
}
