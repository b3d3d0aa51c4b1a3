//! Shell commands and their parser.
//!
//! Each input line is tokenized with [`split_args`] and mapped onto a
//! [`Command`]. Blank lines and lines starting with `#` parse to `None`.

use widgetboard_core::WidgetKind;

use crate::error::CommandError;
use crate::tokenize::split_args;

/// Usage lines printed by `help`, in display order.
pub const USAGE: &[(&str, &str)] = &[
    ("list", "show every category and widget"),
    ("show <category>", "show one category"),
    (
        "add <category> <kind> <name> <text>",
        "add a custom widget (kind: chart, metric, progress, alert)",
    ),
    ("form <category> <name> <text>", "add a metric widget via the custom form"),
    ("presets [group]", "list predefined widget groups or one group's widgets"),
    (
        "pick <group> <name>... [--into <category>]",
        "add predefined widgets from a group",
    ),
    ("remove <category> <widget-id>", "remove a widget"),
    ("search [term...]", "set the search term and show matches"),
    ("clear", "clear the search term"),
    ("reset", "restore the demo catalog"),
    ("help", "show this help"),
    ("quit", "leave the shell"),
];

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show {
        category: String,
    },
    Add {
        category: String,
        kind: WidgetKind,
        name: String,
        text: String,
    },
    Form {
        category: String,
        name: String,
        text: String,
    },
    Presets {
        group: Option<String>,
    },
    Pick {
        group: String,
        names: Vec<String>,
        into: Option<String>,
    },
    Remove {
        category: String,
        widget_id: String,
    },
    Search {
        term: String,
    },
    Clear,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] for unknown commands, missing or surplus
    /// arguments, unclosed quotes, and unknown widget kinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use widgetboard_console::command::Command;
    ///
    /// let cmd = Command::parse("remove cspm cloud-accounts").unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Some(Command::Remove {
    ///         category: "cspm".to_string(),
    ///         widget_id: "cloud-accounts".to_string(),
    ///     })
    /// );
    /// assert_eq!(Command::parse("# note").unwrap(), None);
    /// ```
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        if line.trim_start().starts_with('#') {
            return Ok(None);
        }

        let args = split_args(line)?;
        let Some((name, rest)) = args.split_first() else {
            return Ok(None);
        };
        let mut args = Args {
            command: "",
            rest: rest.iter(),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "list" | "ls" => {
                args.command = "list";
                args.finish()?;
                Command::List
            }
            "show" => {
                args.command = "show";
                let category = args.required("category")?;
                args.finish()?;
                Command::Show { category }
            }
            "add" => {
                args.command = "add";
                let category = args.required("category")?;
                let kind = args.required("kind")?.parse::<WidgetKind>()?;
                let name = args.required("name")?;
                let text = args.required("text")?;
                args.finish()?;
                Command::Add {
                    category,
                    kind,
                    name,
                    text,
                }
            }
            "form" => {
                args.command = "form";
                let category = args.required("category")?;
                let name = args.required("name")?;
                let text = args.required("text")?;
                args.finish()?;
                Command::Form {
                    category,
                    name,
                    text,
                }
            }
            "presets" => {
                args.command = "presets";
                let group = args.optional();
                args.finish()?;
                Command::Presets { group }
            }
            "pick" => {
                args.command = "pick";
                let group = args.required("group")?;
                let mut names = Vec::new();
                let mut into = None;
                while let Some(arg) = args.optional() {
                    if arg == "--into" {
                        into = Some(args.required("category")?);
                    } else {
                        names.push(arg);
                    }
                }
                if names.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "pick",
                        argument: "name",
                    });
                }
                Command::Pick { group, names, into }
            }
            "remove" | "rm" => {
                args.command = "remove";
                let category = args.required("category")?;
                let widget_id = args.required("widget-id")?;
                args.finish()?;
                Command::Remove {
                    category,
                    widget_id,
                }
            }
            "search" => Command::Search {
                term: args.rest.cloned().collect::<Vec<_>>().join(" "),
            },
            "clear" => {
                args.command = "clear";
                args.finish()?;
                Command::Clear
            }
            "reset" => {
                args.command = "reset";
                args.finish()?;
                Command::Reset
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::UnknownCommand(name.clone())),
        };

        Ok(Some(command))
    }
}

/// Cursor over the arguments following the command name.
struct Args<'a> {
    command: &'static str,
    rest: std::slice::Iter<'a, String>,
}

impl Args<'_> {
    fn required(&mut self, argument: &'static str) -> Result<String, CommandError> {
        self.rest
            .next()
            .cloned()
            .ok_or(CommandError::MissingArgument {
                command: self.command,
                argument,
            })
    }

    fn optional(&mut self) -> Option<String> {
        self.rest.next().cloned()
    }

    fn finish(&mut self) -> Result<(), CommandError> {
        match self.rest.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument {
                command: self.command,
                argument: extra.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line)
            .expect("should parse")
            .expect("should not be blank")
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("  # seed check").unwrap(), None);
    }

    #[test]
    fn command_names_ignore_case() {
        assert_eq!(parse("LIST"), Command::List);
        assert_eq!(parse("Quit"), Command::Quit);
    }

    #[test]
    fn add_parses_kind_and_quoted_fields() {
        assert_eq!(
            parse(r#"add registry progress "Base Image Analysis" "Base image assessment""#),
            Command::Add {
                category: "registry".to_string(),
                kind: WidgetKind::Progress,
                name: "Base Image Analysis".to_string(),
                text: "Base image assessment".to_string(),
            }
        );
    }

    #[test]
    fn add_rejects_unknown_kind() {
        let err = Command::parse("add cspm gauge a b").unwrap_err();
        assert!(matches!(err, CommandError::InvalidKind(_)));
    }

    #[test]
    fn add_reports_first_missing_argument() {
        assert_eq!(
            Command::parse("add cspm chart Name").unwrap_err(),
            CommandError::MissingArgument {
                command: "add",
                argument: "text"
            }
        );
    }

    #[test]
    fn surplus_arguments_are_rejected() {
        assert_eq!(
            Command::parse("remove cspm a b").unwrap_err(),
            CommandError::UnexpectedArgument {
                command: "remove",
                argument: "b".to_string()
            }
        );
    }

    #[test]
    fn pick_collects_names_and_target() {
        assert_eq!(
            parse(r#"pick image "Registry Security" --into registry "Base Image Analysis""#),
            Command::Pick {
                group: "image".to_string(),
                names: vec![
                    "Registry Security".to_string(),
                    "Base Image Analysis".to_string()
                ],
                into: Some("registry".to_string()),
            }
        );
    }

    #[test]
    fn pick_requires_a_name() {
        assert_eq!(
            Command::parse("pick cwpp --into cwpp").unwrap_err(),
            CommandError::MissingArgument {
                command: "pick",
                argument: "name"
            }
        );
    }

    #[test]
    fn pick_into_requires_category() {
        assert_eq!(
            Command::parse("pick cwpp 'Workload Alerts' --into").unwrap_err(),
            CommandError::MissingArgument {
                command: "pick",
                argument: "category"
            }
        );
    }

    #[test]
    fn search_joins_words() {
        assert_eq!(
            parse("search namespace  alerts"),
            Command::Search {
                term: "namespace alerts".to_string()
            }
        );
        assert_eq!(
            parse("search"),
            Command::Search {
                term: String::new()
            }
        );
    }

    #[test]
    fn presets_group_is_optional() {
        assert_eq!(parse("presets"), Command::Presets { group: None });
        assert_eq!(
            parse("presets ticket"),
            Command::Presets {
                group: Some("ticket".to_string())
            }
        );
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            Command::parse("frobnicate").unwrap_err(),
            CommandError::UnknownCommand("frobnicate".to_string())
        );
    }

    #[test]
    fn every_usage_entry_names_a_parsable_command() {
        for (usage, _) in USAGE {
            let name = usage.split_whitespace().next().unwrap();
            let result = Command::parse(name);
            assert!(
                !matches!(result, Err(CommandError::UnknownCommand(_))),
                "usage entry '{usage}' is not a command"
            );
        }
    }
}
