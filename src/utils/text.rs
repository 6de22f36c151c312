/// Capacity of the fixed character buffer in the C-style copy, terminator included.
pub const C_BUFFER_LEN: usize = 100;

/// Copies at most `C_BUFFER_LEN - 1` characters, leaving room for the terminator.
pub fn c_style_copy(src: &str) -> String {
    src.chars().take(C_BUFFER_LEN - 1).collect()
}
