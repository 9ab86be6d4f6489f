use redeploy::DeployError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Headline, then every cause indented, then a hint when one is known.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string())
            .bold()
            .render(supports_color)
    );

    let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
    for cause in err.chain().skip(1) {
        let message = cause.to_string();
        let mut lines = message.lines();
        if let Some(first) = lines.next() {
            out.push_str(&format!("\n  {arrow} {first}"));
        }
        for line in lines {
            out.push_str("\n      ");
            out.push_str(line);
        }
    }

    if let Some(hint) = hint(err) {
        out.push_str("\n\n");
        out.push_str(&ColoredText::dim(hint).render(supports_color));
    }

    out
}

fn hint(err: &anyhow::Error) -> Option<&str> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<DeployError>())
        .and_then(DeployError::hint)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    eprintln!("{}", format_error(err, ui.color, ui.unicode));
}
