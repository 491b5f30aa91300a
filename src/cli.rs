//! Command line interface.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Portfolio site theme and contact tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or change the persisted theme.
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Send a message through the contact relay.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// List skills, optionally at one level.
    Skills {
        #[arg(long)]
        level: Option<String>,
    },
    /// List projects.
    Projects {
        #[arg(long)]
        featured: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    #[default]
    Show,
    Toggle,
    Dark,
    Light,
    /// Forget the explicit choice and follow the system.
    System,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_show() {
        let cli = Cli::try_parse_from(["portfolio", "theme"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Theme {
                action: ThemeAction::Show
            }
        ));
    }

    #[test]
    fn contact_requires_all_fields() {
        assert!(Cli::try_parse_from(["portfolio", "contact", "--name", "A"]).is_err());

        let cli = Cli::try_parse_from([
            "portfolio", "contact", "--name", "A", "--email", "a@b.com", "--subject", "S",
            "--message", "M",
        ])
        .unwrap();
        match cli.command {
            Command::Contact { email, .. } => assert_eq!(email, "a@b.com"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
