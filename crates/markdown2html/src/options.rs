/// Switches for the inline substitution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Rewrite `**text**` as `<b>text</b>`.
    pub bold: bool,
    /// Rewrite `__text__` as `<em>text</em>`.
    pub emphasis: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            bold: true,
            emphasis: true,
        }
    }
}
