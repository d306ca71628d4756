//! Settings file text transforms.
//!
//! Both transforms are pure functions over the settings text and are
//! idempotent by detection: the reference fixer rewrites to a canonical
//! form, and the app registrar bails once the app name is present.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

static ROOT_URLCONF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"ROOT_URLCONF\s*=\s*["'].*?["']"#).expect("valid pattern"));

static WSGI_APPLICATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"WSGI_APPLICATION\s*=\s*["'].*?["']"#).expect("valid pattern"));

/// Point `ROOT_URLCONF` and `WSGI_APPLICATION` at the safe project name.
///
/// Rewrites the first occurrence of each single-line assignment, whatever
/// its prior value. A settings file without the assignment is left
/// untouched. Multi-line assignments are not recognized.
pub fn fix_project_references(settings: &str, safe_project: &str) -> String {
    let urls = format!("ROOT_URLCONF = \"{safe_project}.urls\"");
    let wsgi = format!("WSGI_APPLICATION = \"{safe_project}.wsgi.application\"");

    let text = ROOT_URLCONF_RE.replace(settings, NoExpand(&urls));
    let text = WSGI_APPLICATION_RE.replace(&text, NoExpand(&wsgi));
    text.into_owned()
}

/// Scanner position relative to the `INSTALLED_APPS` list literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Outside,
    Inside,
}

/// Insert `safe_app` into `INSTALLED_APPS`, at most once.
///
/// An app name occurring anywhere in the text counts as already registered.
/// This is a substring check, not a structural one: a name that happens to
/// be a substring of another identifier suppresses the insertion.
///
/// Otherwise the text is scanned line by line; entering a line that mentions
/// `INSTALLED_APPS` arms the scanner, and the entry is inserted immediately
/// before the first subsequent line whose trimmed form starts with `]`.
pub fn register_app(settings: &str, safe_app: &str) -> String {
    if settings.contains(safe_app) {
        return settings.to_owned();
    }

    let mut out = String::with_capacity(settings.len() + safe_app.len() + 8);
    let mut state = Block::Outside;
    for line in settings.lines() {
        if line.contains("INSTALLED_APPS") {
            state = Block::Inside;
        }
        if state == Block::Inside && line.trim().starts_with(']') {
            out.push_str("    '");
            out.push_str(safe_app);
            out.push_str("',\n");
            state = Block::Outside;
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTINGS: &str = r#"DEBUG = True

INSTALLED_APPS = [
    'django.contrib.admin',
    'django.contrib.auth',
]

ROOT_URLCONF = "old.urls"

WSGI_APPLICATION = "old.wsgi.application"
"#;

    // ── fix_project_references ────────────────────────────────────────────

    #[test]
    fn rewrites_root_urlconf_to_safe_name() {
        let fixed = fix_project_references(SETTINGS, "My_Blog");
        assert!(fixed.contains("ROOT_URLCONF = \"My_Blog.urls\""));
        assert!(!fixed.contains("old.urls"));
    }

    #[test]
    fn rewrites_wsgi_application_to_safe_name() {
        let fixed = fix_project_references(SETTINGS, "My_Blog");
        assert!(fixed.contains("WSGI_APPLICATION = \"My_Blog.wsgi.application\""));
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let once = fix_project_references(SETTINGS, "My_Blog");
        let twice = fix_project_references(&once, "My_Blog");
        assert_eq!(once, twice);
    }

    #[test]
    fn single_quoted_values_are_matched() {
        let text = "ROOT_URLCONF = 'legacy.urls'\n";
        let fixed = fix_project_references(text, "site");
        assert_eq!(fixed, "ROOT_URLCONF = \"site.urls\"\n");
    }

    #[test]
    fn loose_whitespace_around_equals_is_matched() {
        let text = "ROOT_URLCONF   =   \"x.urls\"\n";
        let fixed = fix_project_references(text, "site");
        assert!(fixed.contains("ROOT_URLCONF = \"site.urls\""));
    }

    #[test]
    fn absent_assignments_leave_text_untouched() {
        let text = "DEBUG = True\nALLOWED_HOSTS = []\n";
        assert_eq!(fix_project_references(text, "site"), text);
    }

    #[test]
    fn only_first_occurrence_is_rewritten() {
        let text = "ROOT_URLCONF = \"a.urls\"\nROOT_URLCONF = \"b.urls\"\n";
        let fixed = fix_project_references(text, "site");
        assert!(fixed.contains("ROOT_URLCONF = \"site.urls\""));
        assert!(fixed.contains("ROOT_URLCONF = \"b.urls\""));
    }

    // ── register_app ──────────────────────────────────────────────────────

    #[test]
    fn app_inserted_before_list_closer() {
        let updated = register_app(SETTINGS, "blog");
        assert!(updated.contains("    'blog',\n]"));
    }

    #[test]
    fn app_inserted_exactly_once() {
        let updated = register_app(SETTINGS, "blog");
        assert_eq!(updated.matches("'blog'").count(), 1);
    }

    #[test]
    fn rerun_is_byte_identical() {
        let once = register_app(SETTINGS, "blog");
        let twice = register_app(&once, "blog");
        assert_eq!(once, twice);
    }

    #[test]
    fn existing_app_is_not_duplicated() {
        let updated = register_app(SETTINGS, "django.contrib.auth");
        assert_eq!(updated, SETTINGS);
    }

    #[test]
    fn substring_hit_suppresses_insertion() {
        // "auth" is a substring of 'django.contrib.auth', so the heuristic
        // treats the app as already registered and changes nothing.
        let updated = register_app(SETTINGS, "auth");
        assert_eq!(updated, SETTINGS);
    }

    #[test]
    fn insertion_targets_first_closer_after_marker() {
        let text = "INSTALLED_APPS = [\n    'a',\n]\n\nOTHER = [\n    'b',\n]\n";
        let updated = register_app(text, "shop");
        let apps_block = updated.split("OTHER").next().unwrap();
        assert!(apps_block.contains("'shop',"));
        assert!(!updated.split("OTHER").nth(1).unwrap().contains("'shop',"));
    }

    #[test]
    fn no_marker_means_no_insertion() {
        let text = "DEBUG = True\nALLOWED_HOSTS = [\n]\n";
        let updated = register_app(text, "shop");
        assert!(!updated.contains("shop"));
    }

    #[test]
    fn inserted_entry_uses_single_quotes() {
        let updated = register_app(SETTINGS, "user_profiles");
        assert!(updated.contains("    'user_profiles',\n"));
    }
}
