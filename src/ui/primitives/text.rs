use crossterm::style::{Color, Stylize};

use crate::ui::theme;

/// Text with a semantic color, rendered plain when color is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Color,
    bold: bool,
}

impl ColoredText {
    fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::SUCCESS)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::ERROR)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::WARNING)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, theme::colors::DIM)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().with(self.color);
        if self.bold {
            styled = styled.bold();
        }
        format!("{styled}")
    }
}
