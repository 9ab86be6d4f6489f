use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    let no_color = ["NO_COLOR", "REDEPLOY_NO_COLOR"]
        .iter()
        .any(|key| get_env(key).is_some());

    TerminalCapabilities {
        supports_color: is_tty && !dumb && !no_color,
        supports_unicode: !dumb && unicode_locale(&get_env),
        is_ci: is_ci_env(&get_env),
    }
}

/// Build servers that set one of these get plain output.
const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_HOME"];

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    CI_MARKERS.iter().any(|key| get_env(key).is_some())
}

/// First locale variable that is set decides; unset means unicode.
fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| get_env(key))
        .map(|locale| {
            let locale = locale.to_ascii_lowercase();
            locale != "c" && locale != "posix"
        })
        .unwrap_or(true)
}
