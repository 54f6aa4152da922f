// Prompt-building utilities shared by every pipeline.
// Each service keeps its own prompt text in a prompts.rs alongside it; this
// file holds the language-name table and template substitution.

/// Language codes accepted by the service, in the order they are advertised.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("en", "English"),
    ("hi", "Hindi"),
    ("mr", "Marathi"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("kn", "Kannada"),
    ("gu", "Gujarati"),
    ("bn", "Bengali"),
    ("pa", "Punjabi"),
    ("ml", "Malayalam"),
];

/// Maps a language code to the name used inside prompts. Unknown codes fall back to English.
pub fn language_name(code: &str) -> &'static str {
    let code = code.trim();
    LANGUAGE_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
        .unwrap_or("English")
}

/// Fills `{key}` placeholders in `template` in a single pass.
///
/// Only placeholders written in the template are substituted. Braces inside
/// the supplied values are copied through untouched, and unknown `{...}`
/// sequences (such as the JSON examples in the prompts) are left as-is.
pub fn render_prompt(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];

        let hit = vars.iter().find(|(key, _)| {
            tail.strip_prefix(key)
                .is_some_and(|after| after.starts_with('}'))
        });

        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
