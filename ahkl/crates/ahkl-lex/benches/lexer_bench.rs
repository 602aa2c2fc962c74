//! Lexer Benchmarks
//!
//! Measures full restyles, restyles after an edit, and fold passes.
//! Run with: `cargo bench --package ahkl-lex`

use ahkl_lex::{AhkLexer, Document, ScanState, TextDocument};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SCRIPT: &str = r#"#NoEnv
#Include lib.ahk
/* Window helpers
   kept together */
MoveWindow(title, x := 0, y := 0) {
    if WinExist(title) {
        WinMove, %title%, , x, y ; park it
        return true
    }
    MsgBox, % "No window named " title "`n"
    Send, {Ctrl down}c{Ctrl up}
    return false
}
total := 0x1F + 3.5e2 - $count.length
"#;

fn lexer() -> AhkLexer {
    let mut lexer = AhkLexer::new();
    lexer.set_word_list(0, "if else return").unwrap();
    lexer.set_word_list(1, "winexist winmove msgbox send").unwrap();
    lexer.set_word_list(3, "{ctrl}").unwrap();
    lexer.set_word_list(4, "#noenv #include").unwrap();
    lexer
}

fn script(copies: usize) -> String {
    SCRIPT.repeat(copies)
}

fn bench_full_restyle(c: &mut Criterion) {
    let mut group = c.benchmark_group("restyle_all");
    let lexer = lexer();

    for copies in [1usize, 16, 256] {
        let source = script(copies);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(copies), &source, |b, source| {
            b.iter(|| {
                let mut doc = TextDocument::new(source.as_str());
                lexer.restyle_all(black_box(&mut doc))
            })
        });
    }

    group.finish();
}

fn bench_incremental_restyle(c: &mut Criterion) {
    let mut group = c.benchmark_group("restyle_after_edit");
    let lexer = lexer();

    let source = script(256);
    let mut doc = TextDocument::new(source.as_str());
    lexer.restyle_all(&mut doc);
    group.throughput(Throughput::Bytes(source.len() as u64));

    // Edits near the end only rescan a short suffix.
    for (name, fraction) in [("start", 0usize), ("middle", 2), ("end", 4)] {
        let offset = doc.length() * fraction / 4;
        let offset = doc.line_start(doc.line_of(offset));
        group.bench_function(name, |b| {
            b.iter(|| lexer.restyle(black_box(&mut doc), black_box(offset)))
        });
    }

    group.finish();
}

fn bench_scan_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    let lexer = lexer();

    let strings = "x := \"Send {Enter}{Tab 3} and `\"quoted`\" text\"\n".repeat(512);
    let comments = "; note\n/* block\n   comment */\n".repeat(512);

    for (name, source) in [("strings", strings), ("comments", comments)] {
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(name, |b| {
            let mut doc = TextDocument::new(source.as_str());
            let len = doc.length();
            b.iter(|| lexer.lex(black_box(&mut doc), 0, len, ScanState::Default))
        });
    }

    group.finish();
}

fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold");
    let lexer = lexer();

    let source = script(256);
    let mut doc = TextDocument::new(source.as_str());
    lexer.restyle_all(&mut doc);
    let len = doc.length();
    group.throughput(Throughput::Bytes(len as u64));

    group.bench_function("whole_document", |b| {
        b.iter(|| lexer.fold(black_box(&mut doc), 0, len))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_full_restyle,
    bench_incremental_restyle,
    bench_scan_only,
    bench_fold
);
criterion_main!(benches);
