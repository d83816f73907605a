// crates/transform_module_line/src/lib.rs

use fence_marker::{IMPORT_STD, INCLUDE_PREFIX, USING_NAMESPACE_STD};

/// Rewrites one block body line for the modules copy.
///
/// Returns the whole-library import in place of an exact
/// `using namespace std;` line, `None` for lines starting with `#include`
/// (they are redundant once the library is imported wholesale), and the line
/// unchanged otherwise. The verbatim headers copy never goes through this
/// function.
pub fn transform_module_line(line: &str) -> Option<&str> {
    if line == USING_NAMESPACE_STD {
        return Some(IMPORT_STD);
    }
    if line.starts_with(INCLUDE_PREFIX) {
        return None;
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_using_namespace_std() {
        assert_eq!(transform_module_line("using namespace std;"), Some("import std;"));
    }

    #[test]
    fn substitution_requires_exact_full_line() {
        // An indented or decorated variant is not the token; it passes through.
        assert_eq!(
            transform_module_line("  using namespace std;"),
            Some("  using namespace std;")
        );
        assert_eq!(
            transform_module_line("using namespace std; // comment"),
            Some("using namespace std; // comment")
        );
    }

    #[test]
    fn drops_include_lines() {
        assert_eq!(transform_module_line("#include <iostream>"), None);
        assert_eq!(transform_module_line("#include \"point.h\""), None);
    }

    #[test]
    fn include_check_is_a_prefix_match() {
        // Anything after the first eight characters is irrelevant.
        assert_eq!(transform_module_line("#include<vector>"), None);
        // An indented include is not dropped; the prefix must start the line.
        assert_eq!(
            transform_module_line("    #include <map>"),
            Some("    #include <map>")
        );
    }

    #[test]
    fn copies_ordinary_lines_verbatim() {
        assert_eq!(transform_module_line("int main() {}"), Some("int main() {}"));
        assert_eq!(transform_module_line(""), Some(""));
    }
}
