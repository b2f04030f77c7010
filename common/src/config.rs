/// Which half of each lesson to play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Contrast {
    /// Only the violating version.
    Before,
    /// Only the compliant version.
    After,
    #[default]
    Both,
}

impl Contrast {
    pub fn shows_before(&self) -> bool {
        matches!(self, Contrast::Before | Contrast::Both)
    }

    pub fn shows_after(&self) -> bool {
        matches!(self, Contrast::After | Contrast::Both)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the startup banner.
    pub no_banner: bool,
    /// 1 hides banner and headers, 2 also hides the closing summary.
    pub quiet: u8,
    pub contrast: Contrast,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
