//! Wrap-around focus cycling over a fixed list of elements.

/// Index that should receive focus when Tab is pressed on `index`, or `None`
/// when the browser's default traversal already does the right thing.
#[must_use]
pub const fn wrap_target(index: usize, len: usize, shift: bool) -> Option<usize> {
    if len == 0 || index >= len {
        return None;
    }
    let last = len - 1;
    if shift && index == 0 {
        Some(last)
    } else if !shift && index == last {
        Some(0)
    } else {
        None
    }
}
