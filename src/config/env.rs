use regex::Regex;
use std::sync::OnceLock;

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern"))
}

/// Expand `${VAR_NAME}` references using `lookup`. Unknown variables are left as written.
pub fn expand_env_var_in_string<F>(value: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    env_var_pattern()
        .replace_all(value, |caps: &regex::Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// `true`, `1` and `yes` (any case) are truthy. Anything else is not.
pub fn parse_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_and_unknown() {
        let lookup = |name: &str| (name == "KEY").then(|| "abc".to_string());
        assert_eq!(expand_env_var_in_string("${KEY}", lookup), "abc");
        assert_eq!(
            expand_env_var_in_string("pre-${KEY}-${MISSING}", lookup),
            "pre-abc-${MISSING}"
        );
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("off"));
    }
}
