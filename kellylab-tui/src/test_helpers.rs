//! Test helpers for inspecting rendered buffers

use ratatui::buffer::Buffer;

/// Concatenate every cell symbol in the buffer, row by row.
pub fn buffer_text(buf: &Buffer) -> String {
    buf.content.iter().map(|cell| cell.symbol()).collect()
}
