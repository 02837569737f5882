//! Integration tests for the `pcparse` binary.
//!
//! These run the CLI end-to-end against the workspace-level `tests/data/`
//! fixtures:
//!
//! - Lookup by file path and by package name
//! - Field queries (modversion, cflags, libs, variables, dependency lists)
//! - JSON output
//! - Validation and error exit codes

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Returns the absolute path to the workspace-level `tests/data/` directory.
fn test_data_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/pcparse -> workspace root
    let workspace_root = manifest_dir.parent().unwrap().parent().unwrap();
    workspace_root.join("tests").join("data")
}

/// A Command for the `pcparse` binary that only searches the test data
/// directory.
fn pcparse() -> Command {
    let mut cmd = Command::cargo_bin("pcparse").unwrap();
    cmd.env("PKG_CONFIG_PATH", test_data_dir().to_str().unwrap());
    cmd.env("PKG_CONFIG_LIBDIR", "");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic queries
// ============================================================================

mod basic {
    use super::*;

    #[test]
    fn version_flag() {
        pcparse()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("0.1."));
    }

    #[test]
    fn summary_by_name() {
        pcparse()
            .arg("libpng")
            .assert()
            .success()
            .stdout("libpng 1.6.40 - Loads and saves PNG files\n");
    }

    #[test]
    fn summary_by_path() {
        pcparse()
            .arg(test_data_dir().join("glib-2.0.pc"))
            .assert()
            .success()
            .stdout("GLib 2.78.0 - C Utility Library\n");
    }

    #[test]
    fn modversion() {
        pcparse()
            .args(["--modversion", "libpng"])
            .assert()
            .success()
            .stdout("1.6.40\n");
    }

    #[test]
    fn variable() {
        pcparse()
            .args(["--variable", "libdir", "libpng"])
            .assert()
            .success()
            .stdout("/usr/lib\n");
    }

    #[test]
    fn undefined_variable_prints_empty_line() {
        pcparse()
            .args(["--variable", "nope", "libpng"])
            .assert()
            .success()
            .stdout("\n");
    }

    #[test]
    fn print_variables_sorted() {
        pcparse()
            .args(["--print-variables", "libpng"])
            .assert()
            .success()
            .stdout("exec_prefix\nincludedir\nlibdir\nprefix\n");
    }
}

// ============================================================================
// Flags
// ============================================================================

mod flags {
    use super::*;

    #[test]
    fn cflags_and_libs() {
        pcparse()
            .args(["--cflags", "--libs", "libpng"])
            .assert()
            .success()
            .stdout("-I/usr/include/libpng16 -L/usr/lib -lpng16\n");
    }

    #[test]
    fn static_libs_include_private() {
        pcparse()
            .args(["--libs", "--static", "libpng"])
            .assert()
            .success()
            .stdout("-L/usr/lib -lpng16 -lm -lz -lm\n");
    }

    #[test]
    fn static_cflags_include_private() {
        pcparse()
            .args(["--cflags", "--static", "glib-2.0"])
            .assert()
            .success()
            .stdout(predicate::str::ends_with("-DGLIB_STATIC_COMPILATION\n"));
    }
}

// ============================================================================
// Dependency lists
// ============================================================================

mod dependencies {
    use super::*;

    #[test]
    fn print_requires_private() {
        pcparse()
            .args(["--print-requires-private", "glib-2.0"])
            .assert()
            .success()
            .stdout("libpcre2-8 >= 10.32\nsysprof-capture-4\n");
    }

    #[test]
    fn print_provides() {
        pcparse()
            .args(["--print-provides", "glib-2.0"])
            .assert()
            .success()
            .stdout("glib = 2.78.0\nglib-compat < 3\n");
    }

    #[test]
    fn print_requires_empty() {
        pcparse()
            .args(["--print-requires", "libpng"])
            .assert()
            .success()
            .stdout("");
    }
}

// ============================================================================
// JSON output
// ============================================================================

mod json {
    use super::*;

    #[test]
    fn json_output() {
        pcparse()
            .args(["--json", "glib-2.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""name": "GLib""#))
            .stdout(predicate::str::contains(r#""version_compare": ">=""#))
            .stdout(predicate::str::contains(r#""version_compare": null"#))
            .stdout(predicate::str::contains(r#""libdir": "/opt/glib/lib""#));
    }
}

// ============================================================================
// Errors and validation
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn validate_ok() {
        pcparse()
            .args(["--validate", "libpng", "glib-2.0", "dos-lineendings"])
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn validate_reports_parse_error() {
        pcparse()
            .args(["--validate", "bad-requires"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("line 3, column 14"))
            .stderr(predicate::str::contains("after 'Requires:'"));
    }

    #[test]
    fn missing_package() {
        pcparse()
            .arg("does-not-exist")
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "Package 'does-not-exist' was not found",
            ));
    }

    #[test]
    fn missing_file() {
        pcparse()
            .arg("/nonexistent/dir/missing.pc")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load"));
    }

    #[test]
    fn no_arguments() {
        pcparse()
            .assert()
            .failure()
            .stderr(predicate::str::contains("Please specify"));
    }

    #[test]
    fn with_path_takes_priority() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("libpng.pc"),
            "Name: shadow\nVersion: 9.9\n",
        )
        .unwrap();

        pcparse()
            .arg("--with-path")
            .arg(dir.path())
            .args(["--modversion", "libpng"])
            .assert()
            .success()
            .stdout("9.9\n");
    }
}

// ============================================================================
// Listing
// ============================================================================

mod list {
    use super::*;

    #[test]
    fn list_all_skips_unparseable() {
        pcparse()
            .arg("--list-all")
            .assert()
            .success()
            .stdout(predicate::str::contains("libpng"))
            .stdout(predicate::str::contains("GLib - C Utility Library"))
            .stdout(predicate::str::contains("bad-requires").not());
    }
}
