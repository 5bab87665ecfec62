//! Dockerfile line handling.
//!
//! Reassembles raw Dockerfile text into logical instructions: comments
//! and blank lines are dropped, and backslash-continued lines are
//! joined into a single instruction. Also defines the closed set of
//! instruction keywords the converter understands.

/// Split Dockerfile text into logical instructions.
///
/// Each physical line is trimmed; empty lines and `#` comments are
/// skipped, including comment lines in the middle of a continuation
/// run. A line ending in `\` has the marker stripped and is joined to
/// the following lines with a single space. A trailing continuation
/// with no terminating line yields no instruction.
pub fn logical_instructions(content: &str) -> Vec<String> {
    let mut instructions = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_suffix('\\') {
            current.push_str(rest);
            current.push(' ');
            continue;
        }

        current.push_str(line);
        instructions.push(std::mem::take(&mut current));
    }

    instructions
}

/// Instruction keywords with a translation rule.
///
/// Everything else (EXPOSE, LABEL, USER, HEALTHCHECK, ...) has no
/// shell counterpart worth emitting and is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    From,
    Run,
    Env,
    Copy,
    Workdir,
    Cmd,
    Arg,
}

impl InstructionKind {
    /// Look up a keyword case-insensitively.
    ///
    /// Returns `None` for unrecognized keywords; the converter treats
    /// that as "emit nothing".
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "FROM" => Some(Self::From),
            "RUN" => Some(Self::Run),
            "ENV" => Some(Self::Env),
            "COPY" => Some(Self::Copy),
            "WORKDIR" => Some(Self::Workdir),
            "CMD" => Some(Self::Cmd),
            "ARG" => Some(Self::Arg),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- logical_instructions ---

    #[test]
    fn test_no_continuation() {
        let input = "FROM alpine:3.19\nRUN echo hello";
        let lines = logical_instructions(input);
        assert_eq!(lines, vec!["FROM alpine:3.19", "RUN echo hello"]);
    }

    #[test]
    fn test_continuation_joined() {
        let input = "RUN apt-get update && \\\n    apt-get install -y curl";
        let lines = logical_instructions(input);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("apt-get update"));
        assert!(lines[0].contains("apt-get install"));
    }

    #[test]
    fn test_continuation_multiple() {
        let input = "RUN a\\\n    b\\\n    c";
        let lines = logical_instructions(input);
        assert_eq!(lines, vec!["RUN a b c"]);
    }

    #[test]
    fn test_continuation_preserves_space_before_marker() {
        // A space before the backslash survives the join; dispatch
        // normalizes it later.
        let input = "RUN echo \\\nhello";
        let lines = logical_instructions(input);
        assert_eq!(lines, vec!["RUN echo  hello"]);
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let input = "\n# comment\n\nFROM alpine\n   \n# another\nRUN echo hi\n";
        let lines = logical_instructions(input);
        assert_eq!(lines, vec!["FROM alpine", "RUN echo hi"]);
    }

    #[test]
    fn test_comment_inside_continuation() {
        let input = "RUN a\\\n# interleaved comment\nb";
        let lines = logical_instructions(input);
        assert_eq!(lines, vec!["RUN a b"]);
    }

    #[test]
    fn test_unterminated_continuation_dropped() {
        let input = "FROM alpine\nRUN echo dangling \\";
        let lines = logical_instructions(input);
        assert_eq!(lines, vec!["FROM alpine"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(logical_instructions("").is_empty());
    }

    // --- InstructionKind::from_keyword ---

    #[test]
    fn test_keyword_uppercase() {
        assert_eq!(InstructionKind::from_keyword("RUN"), Some(InstructionKind::Run));
    }

    #[test]
    fn test_keyword_lowercase() {
        assert_eq!(InstructionKind::from_keyword("workdir"), Some(InstructionKind::Workdir));
    }

    #[test]
    fn test_keyword_mixed_case() {
        assert_eq!(InstructionKind::from_keyword("From"), Some(InstructionKind::From));
    }

    #[test]
    fn test_keyword_unknown() {
        assert_eq!(InstructionKind::from_keyword("HEALTHCHECK"), None);
        assert_eq!(InstructionKind::from_keyword("EXPOSE"), None);
        assert_eq!(InstructionKind::from_keyword(""), None);
    }
}
