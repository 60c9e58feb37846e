//! Command registry and metadata.
//!
//! Defines the built-in commands with their names, descriptions and
//! handlers. The registry is built once at startup and only read after
//! that; iteration follows declaration order so help lists commands the
//! way they are declared here.

use std::fmt;

use super::handlers::{self, CommandContext};

/// Minimum width of the name column in help output.
const HELP_NAME_WIDTH: usize = 10;

pub type Handler = fn(&[String], &mut CommandContext<'_>);

/// Specification for a single command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub handler: Handler,
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Built-in commands, in help order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "ai",
        description: Some("ask the assistant a question"),
        handler: handlers::ai,
    },
    CommandSpec {
        name: "define",
        description: Some("look up the definition of words"),
        handler: handlers::define,
    },
    CommandSpec {
        name: "help",
        description: Some("prints the help message"),
        handler: handlers::help,
    },
    CommandSpec {
        name: "light",
        description: Some("switch to the light mode"),
        handler: handlers::light,
    },
    CommandSpec {
        name: "dark",
        description: Some("switch to the dark mode"),
        handler: handlers::dark,
    },
    CommandSpec {
        name: "weather",
        description: Some("fetch current weather conditions"),
        handler: handlers::weather,
    },
    CommandSpec {
        name: "stock",
        description: Some("look up a stock quote"),
        handler: handlers::stock,
    },
    CommandSpec {
        name: "joke",
        description: Some("tell a random joke"),
        handler: handlers::joke,
    },
];

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    specs: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn builtin() -> Self {
        Self::from_specs(COMMANDS)
    }

    pub fn from_specs(specs: &[CommandSpec]) -> Self {
        Self {
            specs: specs.to_vec(),
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.specs.iter()
    }

    /// One line per command: the name padded into a column, then the
    /// description in blue.
    pub fn help_lines(&self) -> Vec<String> {
        let width = self
            .iter()
            .map(|spec| spec.name.len())
            .max()
            .unwrap_or(0)
            .max(HELP_NAME_WIDTH);
        self.iter()
            .map(|spec| {
                format!(
                    " {:<width$} \x1b[34m{}\x1b[0m",
                    spec.name,
                    spec.description.unwrap_or_default(),
                    width = width
                )
            })
            .collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lines_follow_declaration_order() {
        let registry = CommandRegistry::builtin();
        let lines = registry.help_lines();
        assert_eq!(lines.len(), COMMANDS.len());
        let names: Vec<&str> = registry.iter().map(|spec| spec.name).collect();
        assert_eq!(
            names,
            vec!["ai", "define", "help", "light", "dark", "weather", "stock", "joke"]
        );
        assert_eq!(
            lines[2],
            " help       \x1b[34mprints the help message\x1b[0m"
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = CommandRegistry::builtin();
        assert!(registry.contains("weather"));
        assert!(!registry.contains("Weather"));
        assert!(registry.get("WEATHER").is_none());
    }

    #[test]
    fn every_builtin_has_a_description() {
        assert!(COMMANDS.iter().all(|spec| spec.description.is_some()));
    }

    #[test]
    fn long_names_widen_the_column() {
        let registry = CommandRegistry::from_specs(&[CommandSpec {
            name: "constellation",
            description: None,
            handler: handlers::help,
        }]);
        assert_eq!(
            registry.help_lines(),
            vec![" constellation \x1b[34m\x1b[0m".to_string()]
        );
    }
}
