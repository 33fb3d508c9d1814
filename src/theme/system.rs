use std::env;

/// Source of the operating environment's dark-mode preference
pub trait SystemAppearance {
    fn prefers_dark(&self) -> bool;
}

/// Reads the terminal's `COLORFGBG` variable (`"<fg>;<bg>"` or `"<fg>;<default>;<bg>"`)
///
/// Background colours 0-6 and 8 are the dark half of the 16-colour palette.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvAppearance;

impl SystemAppearance for EnvAppearance {
    fn prefers_dark(&self) -> bool {
        env::var("COLORFGBG").ok().is_some_and(|value| background_is_dark(&value))
    }
}

fn background_is_dark(colorfgbg: &str) -> bool {
    colorfgbg
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| matches!(bg, 0..=6 | 8))
}

/// Fixed preference, for tests and for callers that already know the answer
#[derive(Debug, Clone, Copy)]
pub struct FixedAppearance(pub bool);

impl SystemAppearance for FixedAppearance {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_backgrounds() {
        assert!(background_is_dark("15;0"));
        assert!(background_is_dark("15;default;0"));
        assert!(background_is_dark("7;8"));
    }

    #[test]
    fn test_light_backgrounds() {
        assert!(!background_is_dark("0;15"));
        assert!(!background_is_dark("0;7"));
    }

    #[test]
    fn test_unparseable_values() {
        assert!(!background_is_dark(""));
        assert!(!background_is_dark("default"));
        assert!(!background_is_dark("15;"));
    }
}
