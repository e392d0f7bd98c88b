//! Replay a keystroke script against a guided session and report the
//! resulting annotations.

use std::fs;
use std::process;

use serde::Serialize;
use unicode_width::UnicodeWidthChar;

use drill_core::annotations::SlotStatus;
use drill_core::classify::{Key, RawKeyEvent};
use drill_session::{GuidedSession, RenderState};

/// One scripted keystroke. The script is a plain string with three
/// escapes: `\n` for Enter, `\b` for Backspace, `\\` for a literal
/// backslash. Everything else is typed as itself.
pub fn parse_script(script: &str) -> Result<Vec<RawKeyEvent>, String> {
    let mut events = Vec::new();
    let mut chars = script.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            events.push(RawKeyEvent::ch(c));
            continue;
        }
        match chars.next() {
            Some('n') => events.push(RawKeyEvent::plain(Key::Enter)),
            Some('b') => events.push(RawKeyEvent::plain(Key::Backspace)),
            Some('\\') => events.push(RawKeyEvent::ch('\\')),
            Some(other) => return Err(format!("unknown escape \\{other}")),
            None => return Err("dangling backslash at end of script".to_string()),
        }
    }
    Ok(events)
}

#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub key: String,
    pub consumed: bool,
    pub progress: usize,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub steps: Vec<StepRecord>,
    pub state: RenderState,
}

pub fn simulate(reference: &str, events: &[RawKeyEvent]) -> SimulationReport {
    let mut session = GuidedSession::new(reference);
    let steps = events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let response = session.handle_input(event);
            StepRecord {
                step: i + 1,
                key: describe_key(event),
                consumed: response.consumed,
                progress: session.progress(),
            }
        })
        .collect();
    SimulationReport {
        steps,
        state: session.render_state(),
    }
}

fn describe_key(event: &RawKeyEvent) -> String {
    match event.key {
        Key::Char(c) => c.to_string(),
        Key::Enter => "<enter>".to_string(),
        Key::Backspace => "<backspace>".to_string(),
        other => format!("<{other:?}>"),
    }
}

/// Two-row rendering: the reference text over per-slot status marks,
/// padded so marks line up under wide characters.
pub fn format_text(report: &SimulationReport) -> String {
    let mut out = String::new();
    for step in &report.steps {
        out.push_str(&format!(
            "{:>4}  {:<12}  p={}\n",
            step.step,
            step.key.replace('\n', "<enter>"),
            step.progress
        ));
    }

    let mut text_row = String::new();
    let mut mark_row = String::new();
    for slot in &report.state.slots {
        let (shown, width) = match slot.ch {
            '\n' => ("\u{23ce}".to_string(), 1),
            c => (c.to_string(), UnicodeWidthChar::width(c).unwrap_or(1)),
        };
        text_row.push_str(&shown);
        let mark = match slot.status {
            SlotStatus::Revealed => '\u{2713}',
            SlotStatus::Incorrect => '\u{2717}',
            SlotStatus::Untouched => '\u{b7}',
        };
        mark_row.push(mark);
        for _ in 1..width {
            mark_row.push(' ');
        }
    }
    out.push_str(&format!(
        "\n{}\n{}\nprogress {}/{}{}\n",
        text_row,
        mark_row,
        report.state.progress,
        report.state.slots.len(),
        if report.state.complete { " (complete)" } else { "" }
    ));
    out
}

pub fn run(reference_file: &str, script: &str, json: bool) {
    let reference = fs::read_to_string(reference_file).unwrap_or_else(|e| {
        eprintln!("Failed to read reference file {reference_file}: {e}");
        process::exit(1);
    });
    let events = parse_script(script).unwrap_or_else(|e| {
        eprintln!("Bad keystroke script: {e}");
        process::exit(1);
    });

    let report = simulate(&reference, &events);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("JSON serialization failed")
        );
    } else {
        print!("{}", format_text(&report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_escapes() {
        let events = parse_script(r"ab\n\b\\").unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], RawKeyEvent::ch('a'));
        assert_eq!(events[2], RawKeyEvent::plain(Key::Enter));
        assert_eq!(events[3], RawKeyEvent::plain(Key::Backspace));
        assert_eq!(events[4], RawKeyEvent::ch('\\'));
    }

    #[test]
    fn script_rejects_bad_escapes() {
        assert!(parse_script(r"\q").is_err());
        assert!(parse_script("trailing\\").is_err());
    }

    #[test]
    fn simulation_replays_the_cat_walkthrough() {
        let events = parse_script(r"cxa\bat").unwrap();
        let report = simulate("cat", &events);
        assert_eq!(report.steps.len(), 6);
        assert_eq!(report.steps[0].progress, 1);
        assert_eq!(report.steps[1].progress, 1);
        assert_eq!(report.steps[2].progress, 2);
        assert_eq!(report.steps[3].progress, 1);
        assert!(report.state.complete);
    }

    #[test]
    fn text_rendering_marks_each_slot() {
        let report = simulate("ab", &parse_script("ax").unwrap());
        let text = format_text(&report);
        assert!(text.contains('\u{2713}'));
        assert!(text.contains('\u{2717}'));
        assert!(text.contains("progress 1/2"));
    }
}
