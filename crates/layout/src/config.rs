#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Inner padding of the content frame on every side, in points. The frame
    /// itself sits inside the page margins.
    ///
    /// Defaults to `6.0`.
    pub frame_padding: f32,
    /// Number of spaces a tab expands to inside preformatted text.
    ///
    /// Defaults to `4`.
    pub tab_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            frame_padding: 6.0,
            tab_width: 4,
        }
    }
}
