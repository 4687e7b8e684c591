//! Output stream capabilities

use is_terminal::IsTerminal;

/// Whether unicode icons should be used on stdout
pub fn stdout_supports_unicode() -> bool {
    supports_unicode_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn supports_unicode_impl(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if !is_tty {
        return false;
    }
    let term = get_env("TERM").unwrap_or_default();
    if term.eq_ignore_ascii_case("dumb") {
        return false;
    }

    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for key in KEYS {
        if let Some(val) = get_env(key) {
            let v = val.to_lowercase();
            // first locale variable set decides
            return v.contains("utf-8") || v.contains("utf8");
        }
    }

    // Default to true on modern systems unless explicitly "dumb".
    true
}
