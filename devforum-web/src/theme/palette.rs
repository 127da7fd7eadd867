/// Colour values for one theme, keyed by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub background: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

impl ThemePalette {
    pub const LIGHT: Self = Self {
        primary: "#F2F0E3",
        secondary: "#2E2E2E",
        text: "#2E2E2E",
        text_secondary: "#4A4A4A",
        background: "#FFFFFF",
        card: "#F8F8F8",
        border: "#E0E0E0",
        accent: "#4A87C7",
        success: "#4CAF50",
        warning: "#FF9800",
        error: "#E53935",
    };

    pub const DARK: Self = Self {
        primary: "#1F1F1F",
        secondary: "#D1CFC0",
        text: "#D1CFC0",
        text_secondary: "#A0A0A0",
        background: "#121212",
        card: "#2A2A2A",
        border: "#3A3A3A",
        accent: "#5D93CC",
        success: "#43A047",
        warning: "#FB8C00",
        error: "#E53935",
    };

    /// `(role, colour)` pairs. Role names match the `--color-<role>` CSS
    /// custom properties.
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, &'static str); 11] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("background", self.background),
            ("card", self.card),
            ("border", self.border),
            ("accent", self.accent),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_every_role_once() {
        let roles: Vec<_> = ThemePalette::LIGHT.entries().iter().map(|(role, _)| *role).collect();
        let mut unique = roles.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), roles.len());
        assert!(roles.contains(&"textSecondary"));
    }

    #[test]
    fn test_palettes_differ_except_error() {
        let light = ThemePalette::LIGHT.entries();
        let dark = ThemePalette::DARK.entries();
        for ((role, l), (_, d)) in light.iter().zip(dark.iter()) {
            if *role == "error" {
                assert_eq!(l, d);
            } else {
                assert_ne!(l, d, "role {role} should differ between themes");
            }
        }
    }
}
