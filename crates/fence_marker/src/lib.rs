// crates/fence_marker/src/lib.rs

//! Single source of truth for the literal tokens shared
//! throughout the fenced-block extraction tool-chain.

/// Opening fence for a block tagged as C++ source.
pub const FENCE_CPP: &str = "```cpp";

/// Bare fence. Opens a block with no declared language; also the only
/// token that closes a block.
pub const FENCE: &str = "```";

/// Full-line token substituted in the modules copy (exact match only).
pub const USING_NAMESPACE_STD: &str = "using namespace std;";

/// Replacement line emitted in place of [`USING_NAMESPACE_STD`].
pub const IMPORT_STD: &str = "import std;";

/// Prefix of directive lines dropped from the modules copy.
pub const INCLUDE_PREFIX: &str = "#include";

/// Output root for the verbatim copies. Must exist before a run.
pub const HEADERS_ROOT: &str = "headers";

/// Output root for the transformed copies. Must exist before a run.
pub const MODULES_ROOT: &str = "modules";
