//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! Resizing images to 1180x800...
//! Background color: (253, 242, 245)
//! --------------------------------------------------
//!   scene-01.png: 1000x1000 -> 1180x800
//!   scene-02.png: NOT FOUND
//!   ...
//! --------------------------------------------------
//! Done! All scene images are now uniform.
//! ```
//!
//! # Architecture
//!
//! Each section has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::imaging::{Background, Dimensions};
use crate::process::SceneEvent;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Return indentation string: 2 spaces per depth level.
fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Header announcing the target size and background color.
pub fn format_header(target: Dimensions, background: Background) -> Vec<String> {
    vec![
        format!("Resizing images to {}...", target),
        format!("Background color: {}", background),
        rule(),
    ]
}

/// One line per scene.
pub fn format_scene_event(event: &SceneEvent) -> String {
    match event {
        SceneEvent::NotFound { filename } => format!("{}{}: NOT FOUND", indent(1), filename),
        SceneEvent::Resized {
            filename,
            original,
            target,
        } => format!("{}{}: {} -> {}", indent(1), filename, original, target),
    }
}

/// Closing rule and completion message.
pub fn format_footer() -> Vec<String> {
    vec![rule(), "Done! All scene images are now uniform.".to_string()]
}

pub fn print_header(target: Dimensions, background: Background) {
    for line in format_header(target, background) {
        println!("{}", line);
    }
}

pub fn print_scene_event(event: &SceneEvent) {
    println!("{}", format_scene_event(event));
}

pub fn print_footer() {
    for line in format_footer() {
        println!("{}", line);
    }
}
