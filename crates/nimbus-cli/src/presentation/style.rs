use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Color configuration, chosen once at startup and carried by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    colors: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { colors: false }
    }

    pub fn colored() -> Self {
        Self { colors: true }
    }

    /// Colors stay on only when the config allows them, `--no-color` is not
    /// given, `NO_COLOR` is unset and stdout is a terminal.
    pub fn detect(config_colors: bool, no_color_flag: bool) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if !config_colors || no_color_flag || no_color_env || !std::io::stdout().is_terminal() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn bold(&self, text: &str) -> String {
        if self.colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
