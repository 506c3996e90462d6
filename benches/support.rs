//! Shared helpers for benchmarks

use slicegrid::model::{ColumnDef, ColumnSpec, DataType, Row};

/// `rows` rows over `cols` text columns plus a formula column
#[allow(dead_code)]
pub fn make_dataset(rows: usize, cols: usize) -> (Vec<Row>, ColumnSpec) {
    let mut columns: ColumnSpec = (0..cols)
        .map(|c| (format!("c{}", c), ColumnDef::default()))
        .collect();
    columns.insert("total", ColumnDef::new(DataType::Formula));

    let data = (0..rows)
        .map(|r| {
            let mut row = Row::new(r as i64);
            for c in 0..cols {
                row.set(&format!("c{}", c), (r * cols + c) as f64);
            }
            row.with("total", "c0 * c1 + 2")
        })
        .collect();
    (data, columns)
}
