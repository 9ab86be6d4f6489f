use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One line per tracked step: `[..] [3/10] Checking git cli utility`.
///
/// The counter is one-based; without a known limit only the position shows.
pub fn render_step_line(
    index: usize,
    limit: u32,
    description: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let counter = if limit > 0 {
        format!("[{}/{}]", index + 1, limit)
    } else {
        format!("[{}]", index + 1)
    };
    format!(
        "{} {} {}",
        Icon::Progress.colored(supports_color, supports_unicode),
        ColoredText::dim(counter).render(supports_color),
        description
    )
}

pub fn render_warning(
    message: &str,
    detail: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(message).render(supports_color)
    );
    for line in detail.lines().filter(|l| !l.trim().is_empty()) {
        out.push_str("\n    ");
        out.push_str(line);
    }
    out
}

pub fn render_finished(steps: usize, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success(format!("Deploy finished after {steps} steps"))
            .bold()
            .render(supports_color)
    )
}

pub fn render_config_updated(
    step_count: u32,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::dim(format!(
            "Configuration updated: step-count {step_count}, auto-run enabled"
        ))
        .render(supports_color)
    )
}
