//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use passgen::pass::CharacterClasses;

#[derive(Debug, Parser)]
#[command(
    name = "passgen",
    version,
    about = "Password generator with character-class toggles and a strength rating",
    long_about = r#"
Generates passwords from any mix of lowercase letters, uppercase letters,
digits and symbols, and rates the selection from "Too Weak" to "Strong"
by how many classes it uses.

Run without a subcommand to open the interactive view.

The random source is a fast non-cryptographic generator.
"#
)]
pub struct Cli {
    /// Settings file holding the default length and classes
    #[arg(long, global = true, env = "PASSGEN_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate passwords
    ///
    /// Without class flags the saved defaults apply. With any class flag,
    /// exactly the given classes are used.
    #[command(visible_alias = "gen")]
    Generate(GenerateArgs),

    /// Print the strength rating for a class selection
    ///
    /// Without class flags the saved defaults are rated.
    Strength(ClassArgs),

    /// Show the saved defaults
    Defaults {
        /// Remove the settings file and return to built-in defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, Args)]
pub struct ClassArgs {
    /// Include lowercase letters (a-z)
    #[arg(long, visible_alias = "lowercase")]
    pub lower: bool,

    /// Include uppercase letters (A-Z)
    #[arg(long, visible_alias = "uppercase")]
    pub upper: bool,

    /// Include digits (0-9)
    #[arg(long, visible_alias = "digits")]
    pub numbers: bool,

    /// Include symbols (!@#$%^&*()_+~|}{[]:;?><,./-=)
    #[arg(long)]
    pub symbols: bool,
}

impl ClassArgs {
    pub fn any(&self) -> bool {
        self.lower || self.upper || self.numbers || self.symbols
    }

    pub fn classes(&self) -> CharacterClasses {
        CharacterClasses::new(self.lower, self.upper, self.numbers, self.symbols)
    }

    /// The given classes, or `fallback` when none were given.
    pub fn or(&self, fallback: CharacterClasses) -> CharacterClasses {
        if self.any() { self.classes() } else { fallback }
    }
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Characters per password (default: saved length, 12 out of the box)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub length: Option<i64>,

    #[command(flatten)]
    pub classes: ClassArgs,

    /// How many passwords to generate
    #[arg(short = 'n', long, value_name = "N", default_value_t = 1)]
    pub count: usize,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Print strength and entropy to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Store this length and class selection as the new defaults
    #[arg(long)]
    pub save: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("passgen").chain(args.iter().copied())).unwrap()
    }

    fn generate_args(args: &[&str]) -> GenerateArgs {
        match parse(args).command {
            Some(Command::Generate(g)) => g,
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_opens_view() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn generate_flags() {
        let g = generate_args(&["generate", "--length", "16", "--lower", "--symbols", "-n", "3"]);
        assert_eq!(g.length, Some(16));
        assert_eq!(g.count, 3);
        assert_eq!(g.classes.classes(), CharacterClasses::new(true, false, false, true));
        assert!(!g.board);
    }

    #[test]
    fn gen_alias_and_defaults() {
        let g = generate_args(&["gen"]);
        assert_eq!(g.length, None);
        assert_eq!(g.count, 1);
        assert!(!g.classes.any());
    }

    #[test]
    fn negative_length_reaches_validation() {
        assert_eq!(generate_args(&["generate", "--length", "-3"]).length, Some(-3));
        assert_eq!(generate_args(&["generate", "-l", "-1"]).length, Some(-1));
    }

    #[test]
    fn class_fallback() {
        let defaults = CharacterClasses::new(true, true, true, false);
        assert_eq!(ClassArgs::default().or(defaults), defaults);

        let only_digits = ClassArgs {
            numbers: true,
            ..Default::default()
        };
        assert_eq!(
            only_digits.or(defaults),
            CharacterClasses::new(false, false, true, false)
        );
    }

    #[test]
    fn strength_subcommand() {
        match parse(&["strength", "--lower", "--upper"]).command {
            Some(Command::Strength(c)) => {
                assert_eq!(c.classes().count(), 2);
            }
            other => panic!("expected strength, got {:?}", other),
        }
    }

    #[test]
    fn config_is_global() {
        let cli = parse(&["defaults", "--config", "/tmp/passgen-settings"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/passgen-settings")));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["passgen", "generate", "--emoji"]).is_err());
    }
}
