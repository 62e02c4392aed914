use std::fs;
use std::path::{Path, PathBuf};

use latex_typograph::transform;
use walkdir::WalkDir;

/// Get all .tex files in a directory (recursively)
fn get_tex_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("tex"))
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

#[test]
fn test_latex_files_match_expected() {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("latex_tests");
    let test_files = get_tex_files(&test_dir);

    assert!(!test_files.is_empty(), "No test files found in latex_tests");

    for test_file in test_files {
        let test_name = test_file.file_name().unwrap().to_string_lossy();
        eprintln!("\nTesting: {}", test_name);

        let input = fs::read_to_string(&test_file).expect("fixture is valid UTF-8");
        let expected = fs::read_to_string(test_file.with_extension("expected"))
            .expect("every fixture has an .expected file");
        let (actual, _) = transform(&input);

        assert_eq!(
            expected, actual,
            "Output mismatch for {}\n\nExpected:\n{}\n\nActual:\n{}",
            test_name, expected, actual
        );

        let (again, count) = transform(&actual);
        assert_eq!(count, 0, "{} is not stable under a second run", test_name);
        assert_eq!(again, actual);

        eprintln!("  ✓ Passed");
    }
}
