use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Expansion runs on the raw config text before deserialization, so
/// config structs hold plain `String`/`SecretString` values. Lines starting
/// with `#` (TOML comments) are passed through unchanged. An unset
/// variable is an error; the config should not silently lose a secret.
pub fn expand_env(input: &str) -> Result<String, String> {
    fn re() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Group 1: the key (e.g. `env.VAR_NAME`)
        RE.get_or_init(|| Regex::new(r"\{\{\s*([a-zA-Z0-9_.]+)\s*\}\}").expect("must be valid regex"))
    }

    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        // Skip expansion for comment lines
        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last_end = 0;

        for captures in re().captures_iter(line) {
            let overall = captures.get(0).expect("group 0 is the whole match");
            let key = captures.get(1).expect("group 1 is required by the pattern").as_str();

            output.push_str(&line[last_end..overall.start()]);

            match key.split_once('.') {
                Some(("env", var_name)) if !var_name.contains('.') => match std::env::var(var_name) {
                    Ok(value) => output.push_str(&value),
                    Err(_) => {
                        return Err(format!("environment variable not found: `{var_name}`"));
                    }
                },
                _ => {
                    return Err(format!("only variables scoped with 'env.' are supported: `{key}`"));
                }
            }

            last_end = overall.end();
        }

        output.push_str(&line[last_end..]);
    }

    // Preserve trailing newline if present
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
