//! Keeps `tests/unit` a file-for-file mirror of `src`
//!
//! Every source file under a module directory has a unit test file at the
//! same relative path, and every unit test file is declared by its parent
//! `mod.rs` so the `unit` harness actually compiles it.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const MODULE_DIRS: [&str; 3] = ["algorithm", "io", "spatial"];

    // Files that only declare modules or start a binary
    fn is_wiring(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("mod.rs" | "main.rs" | "lib.rs")
        )
    }

    /// Non-wiring `.rs` files below `root/dir`, relative to `root`
    fn module_files(root: &str, dir: &str) -> BTreeSet<PathBuf> {
        let base = Path::new(root);
        let mut pending = vec![base.join(dir)];
        let mut files = BTreeSet::new();

        while let Some(current) = pending.pop() {
            let Ok(entries) = fs::read_dir(&current) else {
                continue;
            };
            for path in entries.flatten().map(|entry| entry.path()) {
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") && !is_wiring(&path) {
                    if let Ok(relative) = path.strip_prefix(base) {
                        files.insert(relative.to_path_buf());
                    }
                }
            }
        }
        files
    }

    fn list(paths: &[&PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests the source tree has exactly the module directories mirrored here
    // Verified by adding an extra directory under src
    #[test]
    fn test_module_directories() {
        let found: BTreeSet<String> = fs::read_dir(SOURCE_ROOT)
            .unwrap()
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter_map(|path| path.file_name()?.to_str().map(String::from))
            .collect();
        let expected: BTreeSet<String> = MODULE_DIRS.iter().map(|dir| (*dir).to_string()).collect();

        assert_eq!(found, expected);
        for dir in MODULE_DIRS {
            assert!(
                Path::new(UNIT_ROOT).join(dir).join("mod.rs").is_file(),
                "tests/unit/{dir}/mod.rs is missing"
            );
        }
    }

    // Tests every source file has a unit test file at the same path
    // Verified by deleting one unit test file
    #[test]
    fn test_every_source_file_has_unit_tests() {
        for dir in MODULE_DIRS {
            let sources = module_files(SOURCE_ROOT, dir);
            let units = module_files(UNIT_ROOT, dir);
            let missing: Vec<_> = sources.difference(&units).collect();

            assert!(
                missing.is_empty(),
                "source files without unit tests:\n{}",
                list(&missing)
            );
        }
    }

    // Tests every unit test file still has a source file to test
    // Verified by renaming one source file
    #[test]
    fn test_every_unit_file_has_source() {
        for dir in MODULE_DIRS {
            let sources = module_files(SOURCE_ROOT, dir);
            let units = module_files(UNIT_ROOT, dir);
            let orphaned: Vec<_> = units.difference(&sources).collect();

            assert!(
                orphaned.is_empty(),
                "unit test files without a source file:\n{}",
                list(&orphaned)
            );
        }
    }

    // Tests the harness root and each mod.rs declare the whole unit tree
    // Verified by removing one declaration from a mod.rs
    #[test]
    fn test_unit_tree_is_compiled() {
        let root = fs::read_to_string(Path::new(UNIT_ROOT).join("main.rs")).unwrap();
        for dir in MODULE_DIRS {
            assert!(
                root.contains(&format!("mod {dir};")),
                "tests/unit/main.rs does not declare {dir}"
            );

            let declarations =
                fs::read_to_string(Path::new(UNIT_ROOT).join(dir).join("mod.rs")).unwrap();
            for file in module_files(UNIT_ROOT, dir) {
                let Some(stem) = file.file_stem().and_then(|stem| stem.to_str()) else {
                    continue;
                };
                assert!(
                    declarations.contains(&format!("pub mod {stem};")),
                    "tests/unit/{dir}/mod.rs does not declare {stem}"
                );
            }
        }
    }

    // Tests every unit test file defines at least one test
    // Verified by stripping the attributes from one file
    #[test]
    fn test_unit_files_contain_tests() {
        let empty: Vec<_> = MODULE_DIRS
            .iter()
            .flat_map(|dir| module_files(UNIT_ROOT, dir))
            .filter(|file| {
                fs::read_to_string(Path::new(UNIT_ROOT).join(file))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "unit test files without tests:\n{}",
            list(&empty.iter().collect::<Vec<_>>())
        );
    }
}
