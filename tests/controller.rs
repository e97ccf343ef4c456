//! End-to-end interaction scenarios: overlay lifecycle, pinning through
//! menu commands, and clipboard serialization.

use std::cell::RefCell;
use std::rc::Rc;

use tabgrid::{
    CellRect, CellValue, ClipboardService, Cmd, Column, FormatContext, GridController, GridMsg,
    LogicalType, MenuCommand, OverlayState, PointerChannel, Record,
};

#[derive(Default)]
struct RecordingClipboard {
    writes: Rc<RefCell<Vec<String>>>,
}

impl ClipboardService for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

fn schema() -> Vec<Column> {
    vec![
        Column::new("id", LogicalType::Integer).with_raw_type("BIGINT"),
        Column::new("amount", LogicalType::Decimal { scale: 2 }),
        Column::new("note", LogicalType::Text),
    ]
}

fn record(id: i64, amount: i64, note: &str) -> Record {
    Record::from([
        ("id".to_string(), CellValue::Int(id)),
        ("amount".to_string(), CellValue::Int(amount)),
        ("note".to_string(), CellValue::Text(note.to_string())),
    ])
}

fn grid(ctx: FormatContext) -> (GridController<RecordingClipboard>, Rc<RefCell<Vec<String>>>) {
    let clipboard = RecordingClipboard::default();
    let writes = clipboard.writes.clone();
    let records = vec![record(1, 150, "first"), record(2, 5, "second")];
    (GridController::new(schema(), records, ctx, clipboard), writes)
}

fn hover(row: usize, col: usize) -> GridMsg {
    GridMsg::HoverCell {
        row,
        col,
        anchor: CellRect::default(),
    }
}

#[test]
fn test_tooltip_lifecycle() {
    let (mut ctrl, _) = grid(FormatContext::default());

    // Header cell shows name and raw type
    let cmd = ctrl.update(hover(0, 1));
    assert!(matches!(
        cmd,
        Some(Cmd::ShowTooltip { ref text, .. }) if text == "id: BIGINT"
    ));

    // Moving to a body cell clears it
    assert_eq!(ctrl.update(hover(2, 1)), Some(Cmd::HideOverlay));
    assert_eq!(*ctrl.overlay(), OverlayState::None);
}

#[test]
fn test_tooltip_suppressed_while_menu_open() {
    let (mut ctrl, _) = grid(FormatContext::default());
    ctrl.update(GridMsg::ContextMenuCell { row: 1, col: 2 });
    assert_eq!(ctrl.update(hover(0, 1)), None);
    assert!(matches!(ctrl.overlay(), OverlayState::ContextMenu { .. }));
}

#[test]
fn test_transpose_swaps_header_axis() {
    let transposed = FormatContext {
        transpose: true,
        ..FormatContext::default()
    };
    let (mut ctrl, _) = grid(transposed);

    // In transpose mode the header runs down column 0
    let cmd = ctrl.update(GridMsg::ContextMenuCell { row: 3, col: 0 });
    assert_eq!(
        cmd,
        Some(Cmd::ShowMenu {
            commands: MenuCommand::header_set().to_vec()
        })
    );

    // Row 0 is now a body axis
    let cmd = ctrl.update(GridMsg::ContextMenuCell { row: 0, col: 3 });
    assert_eq!(
        cmd,
        Some(Cmd::ShowMenu {
            commands: MenuCommand::body_set().to_vec()
        })
    );

    // Hovering header cells along column 0 shows tooltips; the layout
    // column for row 2 is "amount"
    let cmd = ctrl.update(hover(2, 0));
    assert!(matches!(
        cmd,
        Some(Cmd::ShowTooltip { ref text, .. }) if text == "amount: decimal(2)"
    ));
}

#[test]
fn test_menu_pinning_round_trip() {
    let (mut ctrl, _) = grid(FormatContext::default());

    ctrl.update(GridMsg::ContextMenuCell { row: 0, col: 3 });
    let cmd = ctrl.update(GridMsg::MenuCommand {
        command: MenuCommand::PinToLeft,
        field: "note".to_string(),
    });
    assert_eq!(cmd, Some(Cmd::Batch(vec![Cmd::HideOverlay, Cmd::Relayout])));
    assert_eq!(*ctrl.overlay(), OverlayState::None);

    let keys: Vec<_> = ctrl.layout().iter().map(|c| c.key.clone()).collect();
    assert_eq!(keys, ["note", "id", "amount"]);

    ctrl.update(GridMsg::MenuCommand {
        command: MenuCommand::PinToClear,
        field: String::new(),
    });
    let keys: Vec<_> = ctrl.layout().iter().map(|c| c.key.clone()).collect();
    assert_eq!(keys, ["id", "amount", "note"]);
}

#[test]
fn test_copy_commands_serialize_selection() {
    let (mut ctrl, writes) = grid(FormatContext::default());

    // Select both data rows across amount+note (columns 2..=3)
    ctrl.update(GridMsg::SelectCell { row: 1, col: 2 });
    ctrl.update(GridMsg::ExtendSelection { row: 2, col: 3 });

    ctrl.update(GridMsg::MenuCommand {
        command: MenuCommand::CopyWithText,
        field: String::new(),
    });
    ctrl.update(GridMsg::MenuCommand {
        command: MenuCommand::Copy,
        field: String::new(),
    });

    let writes = writes.borrow();
    assert_eq!(writes[0], "150,first\n5,second");
    assert_eq!(writes[1], "1.50\tfirst\n0.05\tsecond");
}

#[test]
fn test_copy_field_and_selected_cell_callback() {
    let (mut ctrl, writes) = grid(FormatContext::default());

    ctrl.update(GridMsg::MenuCommand {
        command: MenuCommand::CopyField,
        field: "amount".to_string(),
    });
    assert_eq!(writes.borrow().as_slice(), ["amount"]);

    let cmd = ctrl.update(GridMsg::PrimaryClickCell {
        row: 1,
        col: 2,
        value: CellValue::Int(150),
    });
    assert_eq!(cmd, Some(Cmd::SelectedCell(CellValue::Int(150))));
}

#[test]
fn test_global_pointer_is_an_override_not_a_toggle() {
    let (mut ctrl, _) = grid(FormatContext::default());

    ctrl.update(hover(0, 1));
    assert_eq!(ctrl.update(GridMsg::GlobalPointer), Some(Cmd::HideOverlay));
    assert_eq!(ctrl.update(GridMsg::GlobalPointer), None);
    assert_eq!(ctrl.update(GridMsg::GlobalPointer), None);
}

#[test]
fn test_unmount_releases_subscription_and_overlay() {
    let channel = PointerChannel::new();
    let (mut ctrl, _) = grid(FormatContext::default());

    ctrl.mount(&channel);
    ctrl.update(GridMsg::ContextMenuCell { row: 1, col: 1 });
    assert_eq!(channel.subscriber_count(), 1);

    ctrl.unmount();
    assert_eq!(channel.subscriber_count(), 0);
    assert_eq!(*ctrl.overlay(), OverlayState::None);
}
