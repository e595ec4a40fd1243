//! Benchmarks for the per-keystroke formatting pipeline
//!
//! Run with: cargo bench edit_cycle

use numeric_field::editable::{EditSession, TextEditMsg};
use numeric_field::field::NumericField;
use numeric_field::format::{format_display, process_edit, EditSnapshot, FormatConfig};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Pure pipeline
// ============================================================================

#[divan::bench(args = [4, 16, 64])]
fn format_digits(n: usize) {
    let config = FormatConfig::default();
    let raw = format!("{}.25", "9".repeat(n));
    divan::black_box(format_display(divan::black_box(&raw), &config));
}

#[divan::bench]
fn process_backspace_over_separator() {
    let config = FormatConfig::default();
    let snapshot = EditSnapshot::new("12,345,678", 7);
    divan::black_box(process_edit(
        divan::black_box("12,345678"),
        &snapshot,
        6,
        &config,
    ))
    .ok();
}

// ============================================================================
// Full edit cycle through a session
// ============================================================================

#[divan::bench(args = [8, 32])]
fn type_digits(n: usize) {
    let mut session = EditSession::new(NumericField::default());
    for _ in 0..n {
        session.handle(TextEditMsg::InsertChar('7'));
    }
    divan::black_box(session.text());
}
