#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    /// Files and directories below `root`, as `/`-joined relative paths
    fn tree(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let Ok(relative) = path.strip_prefix(root) else {
                    continue;
                };
                let relative = relative
                    .components()
                    .map(|part| part.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    /// Module roots declare their children; leaves are everything else
    fn is_module_root(relative: &str) -> bool {
        let name = relative.rsplit('/').next().unwrap_or(relative);
        matches!(name, "lib.rs" | "main.rs" | "mod.rs")
    }

    /// Names declared with `mod name;` or `pub mod name;` in a module root
    fn declared_modules(root_file: &Path) -> io::Result<BTreeSet<String>> {
        let content = fs::read_to_string(root_file)?;
        Ok(content
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                let rest = line.strip_prefix("pub ").unwrap_or(line);
                rest.strip_prefix("mod ")?
                    .strip_suffix(';')
                    .map(|name| name.trim().to_string())
            })
            .collect())
    }

    /// Module names a directory's root file must declare: sibling files and subdirectories
    fn expected_modules(dir: &Path) -> io::Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().map(|name| name.to_string_lossy().to_string())
            else {
                continue;
            };
            if path.is_dir() {
                names.insert(name);
            } else if let Some(stem) = name.strip_suffix(".rs")
                && !is_module_root(&name)
            {
                names.insert(stem.to_string());
            }
        }
        Ok(names)
    }

    /// Declaration mismatches in `base` (rooted at `root_name`) and each directory below it (rooted at `mod.rs`)
    fn module_mismatches(base: &Path, root_name: &str) -> io::Result<Vec<String>> {
        let mut mismatches = Vec::new();
        let mut dirs = vec![(base.to_path_buf(), base.join(root_name))];

        while let Some((dir, root_file)) = dirs.pop() {
            let declared = declared_modules(&root_file)?;
            let expected = expected_modules(&dir)?;

            for missing in expected.difference(&declared) {
                mismatches.push(format!(
                    "  - {} does not declare `mod {missing};`",
                    root_file.display()
                ));
            }
            for dangling in declared.difference(&expected) {
                mismatches.push(format!(
                    "  - {} declares `mod {dangling};` with no file",
                    root_file.display()
                ));
            }

            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    let nested_root: PathBuf = path.join("mod.rs");
                    dirs.push((path, nested_root));
                }
            }
        }

        Ok(mismatches)
    }

    #[test]
    fn test_unit_tree_mirrors_sources() {
        let sources = tree(Path::new(SOURCE_ROOT)).expect("Failed to read src directory");
        let units = tree(Path::new(UNIT_ROOT)).expect("Failed to read unit test directory");

        let untested: Vec<_> = sources
            .iter()
            .filter(|path| !is_module_root(path) && !units.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_ROOT}/{path}"))
            .collect();
        let orphaned: Vec<_> = units
            .iter()
            .filter(|path| !is_module_root(path) && !sources.contains(*path))
            .map(|path| format!("  - {UNIT_ROOT}/{path} has no src/{path}"))
            .collect();

        assert!(
            untested.is_empty(),
            "Source files without unit tests:\n{}",
            untested.join("\n")
        );
        assert!(
            orphaned.is_empty(),
            "Unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // A file missing from its mod.rs is silently skipped by the unit harness
    #[test]
    fn test_unit_harness_declares_every_file() {
        let mismatches = module_mismatches(Path::new(UNIT_ROOT), "main.rs")
            .expect("Failed to scan unit test modules");
        assert!(
            mismatches.is_empty(),
            "Unit test module declarations out of step with files:\n{}",
            mismatches.join("\n")
        );
    }

    #[test]
    fn test_library_declares_every_file() {
        let mismatches = module_mismatches(Path::new(SOURCE_ROOT), "lib.rs")
            .expect("Failed to scan library modules");
        assert!(
            mismatches.is_empty(),
            "Library module declarations out of step with files:\n{}",
            mismatches.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let files = tree(Path::new("tests")).expect("Failed to read tests directory");

        let without_tests: Vec<_> = files
            .iter()
            .filter(|path| path.ends_with(".rs") && !is_module_root(path))
            .filter(|path| {
                !fs::read_to_string(Path::new("tests").join(path))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            without_tests.is_empty(),
            "Test files without any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
