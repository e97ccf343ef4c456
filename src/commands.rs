//! Side-effect directives returned to the host
//!
//! The controller never touches the host grid engine directly; each update
//! returns a [`Cmd`] describing what the host should do next.

use crate::messages::{CellRect, MenuCommand};
use crate::value::CellValue;

/// Directive for the host after an update
///
/// "Nothing to do" is `None` at the `update` return site, so there is no
/// dedicated no-op variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Show a tooltip anchored below the given cell rect
    ShowTooltip { anchor: CellRect, text: String },
    /// Show a context menu with the given entries
    ShowMenu { commands: Vec<MenuCommand> },
    /// Hide any visible tooltip or menu
    HideOverlay,
    /// Pin state changed; rebuild the column layout and repaint
    Relayout,
    /// Report the clicked cell's raw value to the host callback
    SelectedCell(CellValue),
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}
