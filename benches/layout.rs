//! Benchmarks for column layout and cell formatting
//!
//! Run with: cargo bench layout

use tabgrid::{build_layout, format_cell, CellValue, Column, FormatContext, LogicalType, PinState};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_schema(columns: usize) -> Vec<Column> {
    (0..columns)
        .map(|i| Column::new(&format!("col_{}", i), LogicalType::Decimal { scale: 2 }))
        .collect()
}

#[divan::bench(args = [8, 32, 128, 512])]
fn build_layout_with_pins(columns: usize) {
    let schema = make_schema(columns);
    let mut pin = PinState::new();
    pin.pin_left("col_3");
    pin.pin_right("col_1");

    divan::black_box(build_layout(&schema, &pin));
}

#[divan::bench(args = [1_000, 10_000])]
fn format_decimal_column(cells: usize) {
    let ctx = FormatContext::default();
    let mut total = 0usize;
    for i in 0..cells {
        let cell = format_cell(
            &CellValue::Int(i as i64),
            LogicalType::Decimal { scale: 2 },
            &ctx,
        );
        total += cell.text.len();
    }
    divan::black_box(total);
}
