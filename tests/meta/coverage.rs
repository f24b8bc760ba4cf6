//! Layout checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    // Verifies every source file and directory has a unit test counterpart
    // Verified by adding an untested file under src
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let units = relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();
        assert!(!sources.is_empty(), "no sources found under {SRC_DIR}");

        let missing: Vec<_> = sources
            .iter()
            .filter(|path| !is_exempt_source(path) && !units.contains(*path))
            .map(|path| format!("  - {SRC_DIR}/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source paths without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Verifies no unit test outlives the source it covers
    // Verified by renaming a source file without its test
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = relative_paths(Path::new(SRC_DIR)).unwrap_or_default();
        let units = relative_paths(Path::new(UNIT_DIR)).unwrap_or_default();

        let orphaned: Vec<_> = units
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no {SRC_DIR}/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without a source counterpart:\n{}",
            orphaned.join("\n")
        );
    }

    // Verifies every test file other than harness and module files declares a test
    // Verified by adding a test file with only helpers
    #[test]
    fn test_all_test_files_contain_tests() {
        let base = Path::new(TESTS_DIR);
        let files = relative_paths(base).unwrap_or_default();

        let empty: Vec<_> = files
            .iter()
            .filter(|path| path.ends_with(".rs"))
            .filter(|path| path.as_str() != "main.rs" && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(base.join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|path| format!("  - {TESTS_DIR}/{path}"))
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }

    fn is_exempt_source(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    /// Directories and `.rs` files below `base`, relative to it
    fn relative_paths(base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .into_owned();

                if path.is_dir() {
                    paths.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    paths.insert(relative);
                }
            }
        }

        Ok(paths)
    }
}
