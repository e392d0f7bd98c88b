use std::process;

use drill_core::samples;

pub fn list() {
    for lang in samples::SUPPORTED_LANGUAGES {
        let marker = if *lang == samples::DEFAULT_LANGUAGE {
            " (default)"
        } else {
            ""
        };
        println!("{lang}{marker}");
    }
}

pub fn show(language: &str) {
    match samples::sample_for(language) {
        Some(code) => print!("{code}"),
        None => {
            eprintln!(
                "Unknown language {language}; expected one of: {}",
                samples::SUPPORTED_LANGUAGES.join(", ")
            );
            process::exit(1);
        }
    }
}
