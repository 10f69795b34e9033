//! The fixed HTML envelope for scripted scene pages.
//!
//! The prefix and suffix are opaque payloads: the downstream viewer depends
//! on exactly this preamble (library load order included), so they are
//! stored verbatim and never inspected or rewritten.

/// Everything before the generated `<script>` region.
pub(crate) const HTML_PREFIX: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Scene</title>
</head>
<body>
<!-- three.js and its loaders -->
<script src="jsmodules/three.min.js"></script>
<script src="jsmodules/OBJLoader.js"></script>
<script src="jsmodules/MTLLoader.js"></script>
<!-- helper libraries -->
<script src="jsmodules/gl-matrix-min.js"></script>
<script src="jsmodules/dat.gui.min.js"></script>
<script src="jsmodules/gif.js"></script>
<!-- viewer -->
<script src="cameras3d.js"></script>
<script src="scenecanvas.js"></script>
"#;

/// Everything after the generated `<script>` region.
pub(crate) const HTML_SUFFIX: &str = r#"<h2>Controls</h2>
<ul>
<li>W/S: move forward/backward</li>
<li>A/D: move left/right</li>
<li>E/C: move up/down</li>
<li>Mouse drag: look around</li>
<li>Use the menu on the right to switch cameras and move lights</li>
</ul>
</body>
</html>
"#;

/// Escape a scene name for inclusion in a double-quoted JS string literal.
pub(crate) fn escape_js(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}
