use wezterm_dynamic::{FromDynamic, ToDynamic};

fn default_true() -> bool {
    true
}

/// Knobs for line reordering.
#[derive(Debug, Clone, PartialEq, Eq, FromDynamic, ToDynamic)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "use_serde", serde(default))]
pub struct BidiConfig {
    /// When false, lines are left in logical order.
    #[dynamic(default = "default_true")]
    pub enabled: bool,

    /// Substitute mirror glyphs (eg: parentheses) in right-to-left words.
    #[dynamic(default = "default_true")]
    pub mirror: bool,
}

impl Default for BidiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mirror: true,
        }
    }
}
