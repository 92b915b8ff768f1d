//! Analyzer and scan benchmarks.
//!
//! Measures single-file component analysis and a full parallel scan over a
//! generated component tree.

#![allow(missing_docs, clippy::unwrap_used)]

use std::fs;
use std::hint::black_box;

use camino::{Utf8Path, Utf8PathBuf};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tempfile::TempDir;
use uxqa_core::ScannerConfig;
use uxqa_parser::ReactAnalyzer;
use uxqa_scanner::Scanner;

const COMPONENT: &str = r#"
import { useNavigate } from "react-router-dom";

interface SettingsFormProps {
    userId: string;
    compact?: boolean;
}

export default function SettingsForm({ userId, compact }: SettingsFormProps) {
    const navigate = useNavigate();
    return (
        <form onSubmit={save} data-testid="settings-form">
            <input type="text" name="displayName" />
            <input type="checkbox" name="newsletter" />
            <select name="theme" onChange={setTheme}>
                <option>Light</option>
            </select>
            <a href="/help" data-testid="help-link">Help</a>
            <button type="submit">Save changes</button>
            <button onClick={() => navigate("/profile")}>Cancel</button>
        </form>
    );
}
"#;

/// Writes `count` component files into a fresh directory tree.
fn create_component_tree(count: usize) -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().unwrap();
    let root = Utf8Path::from_path(dir.path()).unwrap().to_owned();

    for i in 0..count {
        let folder = root.join(format!("feature{}", i % 10));
        fs::create_dir_all(&folder).unwrap();
        fs::write(folder.join(format!("Settings{i}.tsx")), COMPONENT).unwrap();
    }

    (dir, root)
}

fn bench_analyze_file(c: &mut Criterion) {
    let mut analyzer = ReactAnalyzer::new().unwrap();
    let path = Utf8Path::new("src/SettingsForm.tsx");

    let mut group = c.benchmark_group("analyze_file");
    group.throughput(Throughput::Bytes(COMPONENT.len() as u64));
    group.bench_function("settings_form", |b| {
        b.iter(|| analyzer.analyze(black_box(path), black_box(COMPONENT)).unwrap());
    });
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    group.sample_size(20);

    for count in [10, 100, 500] {
        let (_dir, root) = create_component_tree(count);
        let scanner = Scanner::new(ScannerConfig::with_root(root));

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| scanner.scan().unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_analyze_file, bench_scan);
criterion_main!(benches);
