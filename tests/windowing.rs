//! Windowing tests - slicing, row identity, tab order, rendering by type

mod common;

use common::{people, people_columns, red, style, Harness};
use serde_json::json;
use slicegrid::grid::{compute_slice, CellContent};
use slicegrid::model::{CellKey, ColumnDef, ColumnSpec, RowId, ViewportState};

#[test]
fn test_five_rows_window_of_two_at_four() {
    let rows = people(5);
    let columns = people_columns();
    let slice = compute_slice(&rows, &columns, &ViewportState::new(2, 6).at(4, 0));
    assert_eq!(slice.rows.len(), 1);
    assert_eq!(slice.rows[0].key, 4);
    assert_eq!(slice.rows[0].number(), 5);
}

#[test]
fn test_rendered_rows_keep_true_index() {
    let harness = Harness::new(people(50), people_columns(), ViewportState::new(3, 2).at(20, 1));
    let grid = harness.grid.rendered();
    let keys: Vec<usize> = grid.rows.iter().map(|r| r.key).collect();
    assert_eq!(keys, vec![20, 21, 22]);
    let ids: Vec<RowId> = grid.rows.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![RowId::Int(120), RowId::Int(121), RowId::Int(122)]);
    let titles: Vec<&str> = grid.headers.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Name", "Price"]);
}

#[test]
fn test_tab_index_starts_at_unsliced_position() {
    let harness = Harness::new(people(50), people_columns(), ViewportState::new(2, 3).at(10, 2));
    let tabs: Vec<usize> = harness
        .grid
        .rendered()
        .cells()
        .map(|cell| cell.tab_index)
        .collect();
    // 6 columns, first cell at row 10 col 2
    assert_eq!(tabs, vec![62, 63, 64, 65, 66, 67]);
}

#[test]
fn test_offset_past_end_renders_nothing() {
    let harness = Harness::new(people(3), people_columns(), ViewportState::new(5, 5).at(10, 0));
    let grid = harness.grid.rendered();
    assert!(grid.rows.is_empty());
    assert_eq!(grid.total_rows, 3);
    assert_eq!(harness.grid.model().cells.len(), 0);
}

#[test]
fn test_row_select_reflects_selection() {
    let mut harness = Harness::new(people(3), people_columns(), ViewportState::new(3, 6));
    let key = CellKey::new(1, "select");
    harness.grid.toggle_row(&key);
    harness.settle();

    assert!(harness.host.selection.contains(&RowId::Int(101)));
    let cell = harness.grid.rendered().cell(&key).unwrap();
    assert_eq!(cell.content, CellContent::RowSelect { checked: true });

    harness.grid.toggle_row(&key);
    harness.settle();
    assert!(harness.host.selection.is_empty());
}

#[test]
fn test_toggle_on_other_columns_changes_nothing() {
    let mut harness = Harness::new(people(3), people_columns(), ViewportState::new(3, 6));
    assert!(!harness.grid.toggle_row(&CellKey::new(1, "name")));
    assert!(!harness.grid.toggle_row(&CellKey::new(1, "total")));

    assert!(harness.settle().is_empty());
    assert!(harness.host.selection.is_empty());
}

#[test]
fn test_delete_selected_rows() {
    let mut harness = Harness::new(people(4), people_columns(), ViewportState::new(4, 6));
    harness.grid.toggle_row(&CellKey::new(0, "select"));
    harness.grid.toggle_row(&CellKey::new(2, "select"));
    harness.settle();

    assert_eq!(harness.host.delete_selected(), 2);
    harness.render();
    let ids: Vec<RowId> = harness.grid.rendered().rows.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec![RowId::Int(101), RowId::Int(103)]);
}

#[test]
fn test_style_resolution_row_over_column() {
    let rows = vec![
        people(1).remove(0).with_style(red()),
    ];
    let columns = ColumnSpec::new().with(
        "name",
        ColumnDef::text("Name").with_style(style(json!({"color": "blue", "font": {"size": 12}}))),
    );
    let harness = Harness::new(rows, columns, ViewportState::new(1, 1));
    let cell = harness.grid.rendered().cell(&CellKey::new(0, "name")).unwrap();
    assert_eq!(cell.style["color"], "red");
    assert_eq!(cell.style["font"]["size"], 12);
}

#[test]
fn test_image_and_date_time_are_not_focusable() {
    let columns = ColumnSpec::new()
        .with("avatar", ColumnDef::new(slicegrid::model::DataType::Image))
        .with("seen", ColumnDef::new(slicegrid::model::DataType::DateTime));
    let rows = vec![people(1).remove(0).with("avatar", "a.png")];
    let harness = Harness::new(rows, columns, ViewportState::new(1, 2));
    let focus: Vec<Option<usize>> = harness
        .grid
        .rendered()
        .cells()
        .map(|cell| cell.focus_index())
        .collect();
    assert_eq!(focus, vec![None, None]);
}
