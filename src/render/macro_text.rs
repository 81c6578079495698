//! Macro text format.
//!
//! A macro file is the macro name on the first line, one two-line block per
//! command, and a closing `End of macro` line:
//!
//! ```text
//! room
//! \t\tSELECT
//! \tEnd of group
//! \t\tKEYBOARD_CURSOR_RIGHT
//! \tEnd of group
//! End of macro
//! ```
//!
//! The macro player matches these lines literally, tabs included.

use std::fs;
use std::path::Path;

use crate::error::{DfError, Result};
use crate::types::Command;

/// Extension of generated macro files.
pub const MACRO_EXTENSION: &str = "mak";

const TOKEN_INDENT: &str = "\t\t";
const GROUP_END: &str = "\tEnd of group";
const MACRO_END: &str = "End of macro";

/// A decoded macro file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    pub name: String,
    pub commands: Vec<Command>,
}

/// Encode a command log as macro text.
pub fn encode_macro(name: &str, commands: &[Command]) -> String {
    let mut text = String::with_capacity(name.len() + commands.len() * 40 + 16);
    text.push_str(name);
    text.push('\n');
    for command in commands {
        text.push_str(TOKEN_INDENT);
        text.push_str(&command.token());
        text.push('\n');
        text.push_str(GROUP_END);
        text.push('\n');
    }
    text.push_str(MACRO_END);
    text.push('\n');
    text
}

/// Encode a command log and write it to `path`.
pub fn write_macro(path: &Path, name: &str, commands: &[Command]) -> Result<()> {
    fs::write(path, encode_macro(name, commands)).map_err(|e| DfError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write macro: {}", e),
    })
}

/// Decode macro text back into a command log.
///
/// Tokens outside the command set fail with [`DfError::UnknownCommand`].
pub fn parse_macro(text: &str) -> Result<Macro> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let name = match lines.next() {
        Some((_, name)) => name.to_string(),
        None => {
            return Err(DfError::MalformedMacro {
                line: 1,
                message: "missing macro name".to_string(),
            })
        }
    };

    let mut commands = Vec::new();
    loop {
        let Some((number, line)) = lines.next() else {
            return Err(DfError::MalformedMacro {
                line: commands.len() * 2 + 2,
                message: format!("missing '{}'", MACRO_END),
            });
        };

        if line == MACRO_END {
            break;
        }

        let token = line
            .strip_prefix(TOKEN_INDENT)
            .ok_or_else(|| DfError::MalformedMacro {
                line: number,
                message: format!("expected a command token, found {:?}", line),
            })?;
        commands.push(token.parse::<Command>()?);

        match lines.next() {
            Some((_, GROUP_END)) => {}
            Some((number, other)) => {
                return Err(DfError::MalformedMacro {
                    line: number,
                    message: format!("expected end of group, found {:?}", other),
                })
            }
            None => {
                return Err(DfError::MalformedMacro {
                    line: number + 1,
                    message: "unexpected end of file".to_string(),
                })
            }
        }
    }

    if let Some((number, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
        return Err(DfError::MalformedMacro {
            line: number,
            message: format!("content after '{}'", MACRO_END),
        });
    }

    Ok(Macro { name, commands })
}

/// Read and decode a macro file.
pub fn read_macro(path: &Path) -> Result<Macro> {
    let text = fs::read_to_string(path).map_err(|e| DfError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read macro: {}", e),
    })?;
    parse_macro(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_encode_single_cell() {
        let text = encode_macro("room", &[Command::Select, Command::Select]);
        assert_eq!(
            text,
            "room\n\t\tSELECT\n\tEnd of group\n\t\tSELECT\n\tEnd of group\nEnd of macro\n"
        );
    }

    #[test]
    fn test_encode_empty_log() {
        assert_eq!(encode_macro("empty", &[]), "empty\nEnd of macro\n");
    }

    #[test]
    fn test_encode_every_token() {
        let commands: Vec<_> = Command::all().collect();
        let text = encode_macro("all", &commands);

        let expected = [
            "all",
            "\t\tSELECT",
            "\tEnd of group",
            "\t\tKEYBOARD_CURSOR_UP",
            "\tEnd of group",
            "\t\tKEYBOARD_CURSOR_DOWN",
            "\tEnd of group",
            "\t\tKEYBOARD_CURSOR_LEFT",
            "\tEnd of group",
            "\t\tKEYBOARD_CURSOR_RIGHT",
            "\tEnd of group",
            "\t\tKEYBOARD_CURSOR_UP_FAST",
            "\tEnd of group",
            "\t\tKEYBOARD_CURSOR_DOWN_FAST",
            "\tEnd of group",
            "\t\tKEYBOARD_CURSOR_LEFT_FAST",
            "\tEnd of group",
            "\t\tKEYBOARD_CURSOR_RIGHT_FAST",
            "\tEnd of group",
            "End of macro",
        ];
        assert_eq!(text.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_parse_encoded_macro() {
        let commands = vec![
            Command::Select,
            Command::MoveFast(Direction::Down),
            Command::Move(Direction::Left),
            Command::Select,
        ];
        let parsed = parse_macro(&encode_macro("hall", &commands)).unwrap();

        assert_eq!(parsed.name, "hall");
        assert_eq!(parsed.commands, commands);
    }

    #[test]
    fn test_parse_unknown_token() {
        let text = "room\n\t\tKEYBOARD_CURSOR_NOWHERE\n\tEnd of group\nEnd of macro\n";
        let err = parse_macro(text).unwrap_err();
        assert!(matches!(err, DfError::UnknownCommand { token } if token == "KEYBOARD_CURSOR_NOWHERE"));
    }

    #[test]
    fn test_parse_malformed() {
        let missing_end = "room\n\t\tSELECT\n\tEnd of group\n";
        assert!(matches!(
            parse_macro(missing_end),
            Err(DfError::MalformedMacro { line: 4, .. })
        ));

        let missing_group = "room\n\t\tSELECT\nEnd of macro\n";
        assert!(matches!(
            parse_macro(missing_group),
            Err(DfError::MalformedMacro { line: 3, .. })
        ));

        let unindented = "room\nSELECT\n\tEnd of group\nEnd of macro\n";
        assert!(matches!(
            parse_macro(unindented),
            Err(DfError::MalformedMacro { line: 2, .. })
        ));

        assert!(matches!(
            parse_macro(""),
            Err(DfError::MalformedMacro { line: 1, .. })
        ));
    }

    #[test]
    fn test_write_and_read_macro() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("room.mak");

        write_macro(&path, "room", &[Command::Select, Command::Select]).unwrap();

        let parsed = read_macro(&path).unwrap();
        assert_eq!(parsed.name, "room");
        assert_eq!(parsed.commands.len(), 2);
    }
}
