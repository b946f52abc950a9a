//! Help text and parse report rendering

use crate::parser::args::{ArgumentParser, ParseResult};
use std::fmt::Write;

impl ArgumentParser {
    /// Render usage, positional slots and options for `program`
    pub fn render_help(&self, program: &str) -> String {
        let mut out = String::new();

        out.push_str("Usage:\n");
        out.push('\t');
        out.push_str(program);
        if !self.flags().is_empty() {
            out.push_str(" [options]");
        }
        for slot in self.standalone() {
            let _ = write!(out, " [{}]", slot.name);
        }

        out.push_str("\nArgs:\n");
        for slot in self.standalone() {
            let _ = writeln!(out, "\t{}:\t{}", slot.name, slot.description);
        }

        out.push_str("Options:\n");
        for spec in self.flags() {
            // Nameless specs cannot be typed; leave them out
            if let Some(name) = spec.display_name() {
                let _ = writeln!(out, "\t{}:\t{}", name, spec.description);
            }
        }

        out
    }
}

impl ParseResult<'_> {
    /// Help text using the program name from the parsed argument vector
    pub fn help(&self) -> String {
        self.parser().render_help(self.program_name())
    }

    /// Render standalone tokens and each given flag with its arguments
    pub fn render_report(&self) -> String {
        let mut out = String::new();

        if !self.standalone_args().is_empty() {
            out.push_str("Standalone flags:\n");
            for arg in self.standalone_args() {
                out.push_str(arg);
                out.push(' ');
            }
            out.push('\n');
        }

        let mut seen = self.seen_flags().peekable();
        if seen.peek().is_some() {
            out.push_str("Flags:\n");
            for (spec, args) in seen {
                if let Some(name) = spec.display_name() {
                    out.push_str(&name);
                }
                out.push_str(": ");
                for arg in args {
                    out.push_str(arg);
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}
