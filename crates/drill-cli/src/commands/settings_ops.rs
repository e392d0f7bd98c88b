use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn export() {
    print!("{}", drill_core::settings::DEFAULT_SETTINGS_TOML);
}

pub fn validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        drill_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: layout {}%/{}-{}%, audio {}Hz beat over {}Hz, language {}",
        s.layout.initial_percent,
        s.layout.min_percent,
        s.layout.max_percent,
        s.audio.beat_hz,
        s.audio.base_hz,
        s.editor.default_language
    );
}
