use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Screen-level helpers (startup banner, prompt rendering).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    /// Compute the lines for the banner box and print them.
    pub fn print_banner(&self) {
        for line in self.banner_lines() {
            println!("{line}");
        }
    }

    pub fn banner_lines(&self) -> Vec<String> {
        const INNER_WIDTH: usize = 50;
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}T A S K I T{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Task tracking made simple{STYLE_RESET}");
        vec![
            format!("╭{}╮", "─".repeat(INNER_WIDTH)),
            format!("│{}│", " ".repeat(INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&title, INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&subtitle, INNER_WIDTH)),
            format!("│{}│", " ".repeat(INNER_WIDTH)),
            format!("╰{}╯", "─".repeat(INNER_WIDTH)),
        ]
    }

    /// Prints the prompt without a trailing newline so input is typed on
    /// the same line.
    pub fn print_prompt(&self, prompt: &str) {
        print!("{prompt}");
        let _ = io::stdout().flush();
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
