//! Instruction translation.
//!
//! Walks logical instructions in source order and appends shell
//! statements to a script buffer, carrying environment variables and
//! the working directory across instructions. Every rule is total:
//! malformed quoting, malformed JSON, and missing tokens degrade to
//! best-effort output instead of failing.

use std::path::Path;

use crate::dockerfile::{logical_instructions, InstructionKind};

/// Convert Dockerfile text into an equivalent shell script.
///
/// Never fails. Empty input produces just the script header.
pub fn convert(content: &str) -> String {
    let mut converter = Converter::new();
    for instruction in logical_instructions(content) {
        converter.translate(&instruction);
    }
    converter.into_script()
}

/// Mutable state accumulated while converting one Dockerfile.
pub struct Converter {
    /// Environment variables seen so far, in declaration order.
    env: Vec<(String, String)>,
    /// Working directory tracked across WORKDIR instructions.
    workdir: String,
    /// Output script, one shell line per entry.
    script: Vec<String>,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            env: Vec::new(),
            workdir: "/".to_string(),
            script: vec![
                "#!/bin/bash".to_string(),
                "set -e".to_string(),
                String::new(),
            ],
        }
    }

    /// Translate one logical instruction, appending its output lines.
    ///
    /// The instruction is split on whitespace into a keyword and a
    /// remainder rejoined with single spaces, so internal spacing is
    /// normalized before the per-kind rules see it. Unknown keywords
    /// emit nothing.
    pub fn translate(&mut self, instruction: &str) {
        let mut parts = instruction.split_whitespace();
        let Some(keyword) = parts.next() else {
            return;
        };
        let args = parts.collect::<Vec<_>>().join(" ");

        let Some(kind) = InstructionKind::from_keyword(keyword) else {
            tracing::debug!(keyword, "no translation rule, skipping");
            return;
        };

        match kind {
            InstructionKind::From => self.handle_from(&args),
            InstructionKind::Run => self.handle_run(&args),
            InstructionKind::Env => self.handle_env(&args),
            InstructionKind::Copy => self.handle_copy(&args),
            InstructionKind::Workdir => self.handle_workdir(&args),
            InstructionKind::Cmd => self.handle_cmd(&args),
            InstructionKind::Arg => self.handle_arg(&args),
        }
    }

    /// Environment variables recorded so far, in declaration order.
    pub fn env(&self) -> &[(String, String)] {
        &self.env
    }

    /// Working directory after the instructions translated so far.
    pub fn workdir(&self) -> &str {
        &self.workdir
    }

    /// Consume the converter and return the accumulated script text.
    pub fn into_script(self) -> String {
        self.script.join("\n")
    }

    // --- Per-kind rules ---

    /// FROM: the base image cannot be reproduced on a host, so only a
    /// comment records it.
    fn handle_from(&mut self, args: &str) {
        self.script.push(format!("# Base image would be: {args}"));
        self.script.push(String::new());
    }

    /// RUN: emitted as-is; exec form is flattened into a shell line.
    fn handle_run(&mut self, args: &str) {
        let command = if args.starts_with('[') {
            match parse_json_array(args) {
                Some(words) => words.join(" "),
                None => args.to_string(),
            }
        } else {
            args.to_string()
        };

        self.script.push(command);
        self.script.push(String::new());
    }

    /// ENV: `KEY=VALUE` or legacy `KEY VALUE`; value is recorded and
    /// exported. Embedded quotes in the value are not escaped.
    fn handle_env(&mut self, args: &str) {
        let (name, value) = if let Some((name, value)) = args.split_once('=') {
            (name.trim().to_string(), unquote(value.trim()).to_string())
        } else {
            let mut words = args.split_whitespace();
            let Some(name) = words.next() else {
                return;
            };
            let value = words.collect::<Vec<_>>().join(" ");
            (name.to_string(), unquote(&value).to_string())
        };

        self.script.push(format!("export {name}=\"{value}\""));
        self.script.push(String::new());
        self.set_env(name, value);
    }

    /// COPY: one mkdir+cp pair per source. `--from=` sources belong to
    /// another build stage and are skipped. A destination ending in `/`
    /// gets each source's file name appended for that pair.
    fn handle_copy(&mut self, args: &str) {
        let words: Vec<&str> = args.split_whitespace().collect();
        let Some((last, sources)) = words.split_last() else {
            return;
        };

        for src in sources {
            if src.starts_with("--from=") {
                continue;
            }
            let src = unquote(src);
            let dest = unquote(last);
            let dest = if dest.ends_with('/') {
                format!("{dest}{}", file_name(src))
            } else {
                dest.to_string()
            };

            self.script.push(format!("mkdir -p \"$(dirname \"{dest}\")\""));
            self.script.push(format!("cp -r \"{src}\" \"{dest}\""));
        }
        self.script.push(String::new());
    }

    /// WORKDIR: created and entered; later instructions do not resolve
    /// paths against it.
    fn handle_workdir(&mut self, args: &str) {
        self.workdir = unquote(args).to_string();
        self.script.push(format!("mkdir -p \"{}\"", self.workdir));
        self.script.push(format!("cd \"{}\"", self.workdir));
        self.script.push(String::new());
    }

    /// CMD: the default command becomes a trailing `exec`.
    fn handle_cmd(&mut self, args: &str) {
        let command = if args.starts_with('[') && args.ends_with(']') {
            match parse_json_array(args) {
                Some(words) => words.join(" "),
                None => unquote(args).to_string(),
            }
        } else {
            unquote(args).to_string()
        };

        if !command.is_empty() {
            self.script.push(format!("# Default command: {command}"));
            self.script.push(format!("exec {command}"));
        }
        self.script.push(String::new());
    }

    /// ARG: a plain assignment, not exported. A bare name gets an
    /// empty default.
    fn handle_arg(&mut self, args: &str) {
        let (name, value) = match args.split_once('=') {
            Some((name, value)) => {
                (name.trim().to_string(), unquote(value.trim()).to_string())
            }
            None => (args.trim().to_string(), String::new()),
        };

        self.script.push(format!("{name}=\"{value}\""));
        self.script.push(String::new());
        self.set_env(name, value);
    }

    /// Record a variable, overwriting an earlier entry with the same
    /// name in place.
    fn set_env(&mut self, name: String, value: String) {
        if let Some(existing) = self.env.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.env.push((name, value));
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

// --- Helpers ---

/// Decode a JSON array literal into its elements rendered as plain
/// strings. Returns `None` when the text is not a valid JSON array, so
/// callers fall back to the literal text.
fn parse_json_array(text: &str) -> Option<Vec<String>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(text).ok()?;
    Some(
        values
            .iter()
            .map(|value| match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
    )
}

/// Strip at most one leading and one trailing quote character of each
/// kind, double quotes first, then single quotes. The two ends are
/// handled independently, so a leading `"` paired with a trailing `'`
/// both come off.
fn unquote(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    let s = s.strip_suffix('"').unwrap_or(s);
    let s = s.strip_prefix('\'').unwrap_or(s);
    s.strip_suffix('\'').unwrap_or(s)
}

/// Final path component of `path`, or empty when there is none.
fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
}
