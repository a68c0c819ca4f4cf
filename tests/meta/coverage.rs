//! Layout checks for the test suite: unit mirrors, documented stage tests and fixtures

#[cfg(test)]
mod tests {
    use cavetown::spatial::CaveGrid;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";
    const FIXTURES: &str = "tests/fixtures";

    // Harness roots and module files carry no behavior of their own
    fn is_structural(relative: &Path) -> bool {
        matches!(
            relative.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    fn rust_files(root: &Path) -> BTreeSet<PathBuf> {
        fn walk(dir: &Path, root: &Path, out: &mut BTreeSet<PathBuf>) {
            for entry in fs::read_dir(dir).unwrap().flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(&path, root, out);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    out.insert(path.strip_prefix(root).unwrap().to_path_buf());
                }
            }
        }

        let mut files = BTreeSet::new();
        walk(root, root, &mut files);
        files.retain(|relative| !is_structural(relative));
        files
    }

    fn listing(paths: &[&PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test file at the same relative path and vice versa
    // Verified by adding a source file without a mirror
    #[test]
    fn test_unit_tree_mirrors_src() {
        let sources = rust_files(Path::new(SRC));
        let units = rust_files(Path::new(UNIT));

        let missing: Vec<_> = sources.difference(&units).collect();
        let orphaned: Vec<_> = units.difference(&sources).collect();

        assert!(
            missing.is_empty(),
            "src files without tests/unit counterparts:\n{}",
            listing(&missing)
        );
        assert!(
            orphaned.is_empty(),
            "tests/unit files without src counterparts:\n{}",
            listing(&orphaned)
        );
    }

    // Tests each unit file has tests and each test states how it was verified
    // Verified by deleting the verification comment from one generation stage test
    #[test]
    fn test_unit_tests_document_verification() {
        let mut undocumented = Vec::new();

        for relative in rust_files(Path::new(UNIT)) {
            let content = fs::read_to_string(Path::new(UNIT).join(&relative)).unwrap();
            let tests = content.matches("#[test]").count();
            let verified = content.matches("// Verified by").count();

            if tests == 0 || verified < tests {
                undocumented.push(format!(
                    "  - tests/unit/{}: {tests} tests, {verified} verification comments",
                    relative.display()
                ));
            }
        }

        assert!(
            undocumented.is_empty(),
            "unit test files missing tests or verification comments:\n{}",
            undocumented.join("\n")
        );
    }

    // Tests integration test files outside the unit tree contain tests
    // Verified by adding an empty integration test file
    #[test]
    fn test_integration_files_contain_tests() {
        let empty: Vec<_> = fs::read_dir("tests")
            .unwrap()
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
            .filter(|path| !fs::read_to_string(path).unwrap().contains("#[test]"))
            .collect();

        assert!(
            empty.is_empty(),
            "integration test files without tests:\n{}",
            listing(&empty.iter().collect::<Vec<_>>())
        );
    }

    // Tests every text fixture is a well-formed grid with a solid wall border
    // Verified by opening a border cell in the golden fixture
    #[test]
    fn test_fixtures_are_bordered_grids() {
        let mut fixtures = 0;

        for entry in fs::read_dir(FIXTURES).unwrap().flatten() {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "txt") {
                continue;
            }
            fixtures += 1;

            let text = fs::read_to_string(&path).unwrap();
            let grid = CaveGrid::from_text(&text)
                .map_err(|error| format!("{}: {error}", path.display()))
                .unwrap();

            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    if grid.is_border(x, y) {
                        assert!(
                            grid.get(x as i32, y as i32).is_wall(),
                            "{}: border cell ({x}, {y}) is open",
                            path.display()
                        );
                    }
                }
            }
        }

        assert!(fixtures > 0, "no grid fixtures found in {FIXTURES}");
    }
}
