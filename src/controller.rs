//! Grid interaction controller
//!
//! State machine over the overlay (tooltip / context menu), owner of the
//! pin state and selection, and bridge from pointer events to the
//! clipboard service and host callbacks.
//!
//! # Architecture
//!
//! ```text
//! GridController
//! ├── OverlayState   (none | tooltip | context menu, at most one)
//! ├── PinState       (left/right pinned column keys)
//! ├── Selection      (rectangular cell range, optional)
//! └── ClipboardService
//! ```
//!
//! Every host event arrives as a [`GridMsg`]; `update` mutates the state
//! and returns the [`Cmd`] the host should carry out. All handlers run
//! synchronously on the host UI thread.

use crate::clipboard::ClipboardService;
use crate::commands::Cmd;
use crate::format::{format_cell, FormatContext};
use crate::layout::{build_layout, PinState};
use crate::messages::{CellRect, GridMsg, MenuCommand};
use crate::schema::Column;
use crate::subscription::{PointerChannel, PointerSubscription};
use crate::value::{CellValue, Record};

/// Which overlay is currently visible (at most one)
#[derive(Debug, Clone, Default, PartialEq)]
pub enum OverlayState {
    #[default]
    None,
    /// Header tooltip for a column
    Tooltip { column: String, anchor: CellRect },
    /// Context menu for a cell
    ContextMenu {
        row: usize,
        col: usize,
        commands: Vec<MenuCommand>,
    },
}

impl OverlayState {
    pub fn is_context_menu(&self) -> bool {
        matches!(self, OverlayState::ContextMenu { .. })
    }
}

/// Inclusive rectangular cell selection, in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: (usize, usize),
    pub head: (usize, usize),
}

impl Selection {
    fn single(row: usize, col: usize) -> Self {
        Self {
            anchor: (row, col),
            head: (row, col),
        }
    }

    fn row_range(&self) -> std::ops::RangeInclusive<usize> {
        self.anchor.0.min(self.head.0)..=self.anchor.0.max(self.head.0)
    }

    fn col_range(&self) -> std::ops::RangeInclusive<usize> {
        self.anchor.1.min(self.head.1)..=self.anchor.1.max(self.head.1)
    }
}

/// Interaction state for one mounted grid
pub struct GridController<C: ClipboardService> {
    schema: Vec<Column>,
    records: Vec<Record>,
    ctx: FormatContext,
    pin: PinState,
    overlay: OverlayState,
    selection: Option<Selection>,
    clipboard: C,
    subscription: Option<PointerSubscription>,
}

impl<C: ClipboardService> GridController<C> {
    pub fn new(schema: Vec<Column>, records: Vec<Record>, ctx: FormatContext, clipboard: C) -> Self {
        Self {
            schema,
            records,
            ctx,
            pin: PinState::new(),
            overlay: OverlayState::None,
            selection: None,
            clipboard,
            subscription: None,
        }
    }

    /// Attach to the document-level pointer channel (grid became visible)
    pub fn mount(&mut self, channel: &PointerChannel) {
        self.subscription = Some(channel.subscribe());
    }

    /// Detach from the pointer channel and drop transient state
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.overlay = OverlayState::None;
        self.selection = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    pub fn pin_state(&self) -> &PinState {
        &self.pin
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn format_context(&self) -> &FormatContext {
        &self.ctx
    }

    /// Replace display preferences (beautify/precision/transpose)
    pub fn set_format_context(&mut self, ctx: FormatContext) {
        self.ctx = ctx;
    }

    /// Visible column order under the current pin state
    pub fn layout(&self) -> Vec<&Column> {
        build_layout(&self.schema, &self.pin)
    }

    /// Process one event from the host grid engine
    pub fn update(&mut self, msg: GridMsg) -> Option<Cmd> {
        match msg {
            GridMsg::HoverCell { row, col, anchor } => self.hover_cell(row, col, anchor),
            GridMsg::ContextMenuCell { row, col } => self.context_menu_cell(row, col),
            GridMsg::PrimaryClickCell { value, .. } => Some(Cmd::SelectedCell(value)),
            GridMsg::SelectCell { row, col } => {
                self.selection = Some(Selection::single(row, col));
                None
            }
            GridMsg::ExtendSelection { row, col } => {
                match &mut self.selection {
                    Some(sel) => sel.head = (row, col),
                    None => self.selection = Some(Selection::single(row, col)),
                }
                None
            }
            GridMsg::MenuCommand { command, field } => self.menu_command(command, &field),
            GridMsg::GlobalPointer => self.global_pointer(),
        }
    }

    // === Overlay handlers ===

    /// Header hover shows a `"{name}: {type}"` tooltip below the cell
    ///
    /// Suppressed while a context menu is open; hovering anywhere else
    /// clears a visible tooltip.
    fn hover_cell(&mut self, row: usize, col: usize, anchor: CellRect) -> Option<Cmd> {
        if self.overlay.is_context_menu() {
            return None;
        }

        let tooltip = self
            .header_column_at(row, col)
            .map(|c| (c.key.clone(), format!("{}: {}", c.display_name, c.type_label())));
        if let Some((column, text)) = tooltip {
            self.overlay = OverlayState::Tooltip { column, anchor };
            return Some(Cmd::ShowTooltip { anchor, text });
        }

        if matches!(self.overlay, OverlayState::Tooltip { .. }) {
            self.overlay = OverlayState::None;
            return Some(Cmd::HideOverlay);
        }
        None
    }

    /// Right-click opens the header or body command set for the cell
    fn context_menu_cell(&mut self, row: usize, col: usize) -> Option<Cmd> {
        let commands = if self.is_header_cell(row, col) {
            MenuCommand::header_set().to_vec()
        } else {
            MenuCommand::body_set().to_vec()
        };
        self.overlay = OverlayState::ContextMenu {
            row,
            col,
            commands: commands.clone(),
        };
        Some(Cmd::ShowMenu { commands })
    }

    /// Any document-level pointer event closes whatever overlay is open
    fn global_pointer(&mut self) -> Option<Cmd> {
        if self.overlay == OverlayState::None {
            return None;
        }
        self.overlay = OverlayState::None;
        Some(Cmd::HideOverlay)
    }

    // === Menu dispatch ===

    fn menu_command(&mut self, command: MenuCommand, field: &str) -> Option<Cmd> {
        // The menu is acknowledged by the click no matter which entry ran
        self.overlay = OverlayState::None;

        match command {
            MenuCommand::CopyField => {
                self.write_clipboard(field);
                Some(Cmd::HideOverlay)
            }
            MenuCommand::PinToLeft => self.mutate_pin(field, PinState::pin_left),
            MenuCommand::PinToRight => self.mutate_pin(field, PinState::pin_right),
            MenuCommand::PinToClear => {
                self.pin.clear();
                Some(Cmd::Batch(vec![Cmd::HideOverlay, Cmd::Relayout]))
            }
            MenuCommand::Copy => {
                let text = self.selection_text(true);
                self.write_clipboard(&text);
                Some(Cmd::HideOverlay)
            }
            MenuCommand::CopyWithText => {
                let text = self.selection_text(false);
                self.write_clipboard(&text);
                Some(Cmd::HideOverlay)
            }
        }
    }

    fn mutate_pin(&mut self, field: &str, op: fn(&mut PinState, &str)) -> Option<Cmd> {
        if !self.schema.iter().any(|c| c.key == field) {
            tracing::debug!(%field, "pin request for unknown column ignored");
            return Some(Cmd::HideOverlay);
        }
        op(&mut self.pin, field);
        Some(Cmd::Batch(vec![Cmd::HideOverlay, Cmd::Relayout]))
    }

    fn write_clipboard(&mut self, text: &str) {
        if let Err(e) = self.clipboard.write_text(text) {
            tracing::warn!(error = %e, "clipboard write failed");
        }
    }

    // === Cell geometry under transpose ===

    /// True for any cell on the header axis, including the corner
    fn is_header_cell(&self, row: usize, col: usize) -> bool {
        if self.ctx.transpose {
            col == 0
        } else {
            row == 0
        }
    }

    /// The column behind a hovered header cell, excluding the corner cell
    fn header_column_at(&self, row: usize, col: usize) -> Option<&Column> {
        let layout = build_layout(&self.schema, &self.pin);
        if self.ctx.transpose {
            if col == 0 && row != 0 {
                return layout.get(row - 1).copied();
            }
        } else if row == 0 && col != 0 {
            return layout.get(col - 1).copied();
        }
        None
    }

    /// Raw value at a grid coordinate, honoring transpose
    ///
    /// Row 0 / column 0 are the header and index axes and hold no data.
    fn cell_raw_value(&self, row: usize, col: usize) -> Option<&CellValue> {
        let (record_idx, column_idx) = if self.ctx.transpose {
            (col.checked_sub(1)?, row.checked_sub(1)?)
        } else {
            (row.checked_sub(1)?, col.checked_sub(1)?)
        };
        let layout = build_layout(&self.schema, &self.pin);
        let column = layout.get(column_idx)?;
        self.records.get(record_idx)?.get(&column.key)
    }

    /// Serialize the current selection for the clipboard
    ///
    /// `formatted` picks the display text (tab-joined per row); raw mode
    /// joins the underlying values with commas. Rows join with newlines.
    fn selection_text(&self, formatted: bool) -> String {
        let Some(sel) = self.selection else {
            return String::new();
        };
        let joiner = if formatted { "\t" } else { "," };
        let layout = build_layout(&self.schema, &self.pin);

        let mut rows = Vec::new();
        for row in sel.row_range() {
            let mut cells = Vec::new();
            for col in sel.col_range() {
                let value = self.cell_raw_value(row, col);
                let text = match value {
                    Some(value) if formatted => {
                        let column_idx = if self.ctx.transpose { row } else { col };
                        let logical_type = column_idx
                            .checked_sub(1)
                            .and_then(|i| layout.get(i))
                            .map(|c| c.logical_type)
                            .unwrap_or_default();
                        format_cell(value, logical_type, &self.ctx).text
                    }
                    Some(value) => value.natural_string(),
                    None => String::new(),
                };
                cells.push(text);
            }
            rows.push(cells.join(joiner));
        }
        rows.join("\n")
    }
}
