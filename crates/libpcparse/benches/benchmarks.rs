//! Performance benchmarks for libpcparse.
//!
//! Run with: cargo bench -p libpcparse
//!
//! Covers:
//! - .pc file parsing (from disk and from memory)
//! - Line grammar alone
//! - Variable substitution
//! - Dependency list parsing

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use libpcparse::resolve::substitute;
use libpcparse::{Dependency, Package, parser};

/// Returns the absolute path to the workspace-level `tests/data/` directory.
fn test_data_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap().parent().unwrap();
    workspace_root.join("tests").join("data")
}

/// A synthetic document with `n` chained variables and a long dependency list.
fn synthetic_pc(n: usize) -> String {
    let mut out = String::from("prefix=/usr\n");
    for i in 0..n {
        let prev = if i == 0 {
            "prefix".to_string()
        } else {
            format!("v{}", i - 1)
        };
        out.push_str(&format!("v{i}=${{{prev}}}/d{i}\n"));
    }
    out.push_str("Name: synthetic\nVersion: 1.0\nDescription: generated\n");
    out.push_str("Libs: -L${prefix}/lib");
    for i in 0..n {
        out.push_str(&format!(" -L${{v{i}}}"));
    }
    out.push_str("\nRequires:");
    for i in 0..n {
        out.push_str(&format!(" dep{i} >= {i}.0,"));
    }
    out.push('\n');
    out
}

// ============================================================================
// Parser benchmarks
// ============================================================================

fn bench_load_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    for name in ["libpng.pc", "glib-2.0.pc", "libpng-whitespace.pc"] {
        let path = test_data_dir().join(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), &path, |b, path| {
            b.iter(|| {
                let pkg = Package::load(black_box(path)).unwrap();
                black_box(pkg);
            });
        });
    }
    group.finish();
}

fn bench_parse_in_memory(c: &mut Criterion) {
    let content = fs::read_to_string(test_data_dir().join("glib-2.0.pc")).unwrap();

    c.bench_function("parse/glib-2.0 (in memory)", |b| {
        b.iter(|| {
            let pkg = libpcparse::parse(black_box(&content)).unwrap();
            black_box(pkg);
        });
    });

    c.bench_function("grammar/glib-2.0 (nodes only)", |b| {
        b.iter(|| {
            let nodes = parser::parse_document(black_box(&content)).unwrap();
            black_box(nodes);
        });
    });
}

fn bench_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse/synthetic");
    for n in [10usize, 100, 1000] {
        let content = synthetic_pc(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &content, |b, content| {
            b.iter(|| {
                let pkg = libpcparse::parse(black_box(content)).unwrap();
                black_box(pkg);
            });
        });
    }
    group.finish();
}

// ============================================================================
// Substitution benchmarks
// ============================================================================

fn bench_substitute(c: &mut Criterion) {
    let mut vars = BTreeMap::new();
    vars.insert("prefix".to_string(), "/usr".to_string());
    vars.insert("libdir".to_string(), "/usr/lib".to_string());
    vars.insert("includedir".to_string(), "/usr/include".to_string());

    c.bench_function("substitute/no refs", |b| {
        b.iter(|| black_box(substitute(black_box("-lfoo -lbar -lbaz"), &vars)));
    });

    c.bench_function("substitute/mixed refs", |b| {
        b.iter(|| {
            black_box(substitute(
                black_box("-L${libdir} -I${includedir} -I${missing}/x ${prefix}"),
                &vars,
            ))
        });
    });
}

// ============================================================================
// Dependency list benchmarks
// ============================================================================

fn bench_dependency_list(c: &mut Criterion) {
    c.bench_function("dependency/mixed list", |b| {
        b.iter(|| {
            let deps = Dependency::parse_list(black_box(
                "glib-2.0 >= 2.50, gio-2.0, gobject-2.0 = 2.78.0 zlib libpcre2-8<=10.42",
            ))
            .unwrap();
            black_box(deps);
        });
    });
}

criterion_group!(
    benches,
    bench_load_fixtures,
    bench_parse_in_memory,
    bench_parse_scaling,
    bench_substitute,
    bench_dependency_list,
);
criterion_main!(benches);
