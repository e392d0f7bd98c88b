//! Built-in practice samples, one per supported language.
//!
//! Resolution order for the active reference text lives in the session
//! layer; this module only owns the canned material and the language list.

pub const DEFAULT_LANGUAGE: &str = "javascript";

pub const SUPPORTED_LANGUAGES: &[&str] = &["javascript", "typescript", "python", "rust"];

const JAVASCRIPT_SAMPLE: &str = r#"function debounce(fn, delay) {
  let timer = null;
  return (...args) => {
    clearTimeout(timer);
    timer = setTimeout(() => fn(...args), delay);
  };
}
"#;

const TYPESCRIPT_SAMPLE: &str = r#"interface Point {
  x: number;
  y: number;
}

function distance(a: Point, b: Point): number {
  return Math.hypot(a.x - b.x, a.y - b.y);
}
"#;

const PYTHON_SAMPLE: &str = r#"def fib(n):
    a, b = 0, 1
    for _ in range(n):
        a, b = b, a + b
    return a
"#;

const RUST_SAMPLE: &str = r#"fn main() {
    let words = ["guided", "typing", "practice"];
    for (i, word) in words.iter().enumerate() {
        println!("{i}: {word}");
    }
}
"#;

pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

/// Sample code for a language, `None` if the language is unknown.
pub fn sample_for(language: &str) -> Option<&'static str> {
    match language {
        "javascript" => Some(JAVASCRIPT_SAMPLE),
        "typescript" => Some(TYPESCRIPT_SAMPLE),
        "python" => Some(PYTHON_SAMPLE),
        "rust" => Some(RUST_SAMPLE),
        _ => None,
    }
}

/// Sample shown when everything else fails to resolve.
pub fn fallback_sample() -> &'static str {
    JAVASCRIPT_SAMPLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_language_has_a_sample() {
        for lang in SUPPORTED_LANGUAGES {
            assert!(sample_for(lang).is_some(), "missing sample for {lang}");
        }
    }

    #[test]
    fn default_language_is_supported() {
        assert!(is_supported(DEFAULT_LANGUAGE));
        assert_eq!(sample_for(DEFAULT_LANGUAGE), Some(fallback_sample()));
    }

    #[test]
    fn unknown_language_yields_none() {
        assert!(!is_supported("cobol"));
        assert!(sample_for("cobol").is_none());
    }
}
