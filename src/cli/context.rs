//! CLI context - bundles settings location, loaded defaults, and the command.

use std::io;
use std::path::PathBuf;

use log::debug;

use passgen::pass::{self, CharacterClasses, MAX_LENGTH, MIN_LENGTH, Password, PasswordLength, output};
use passgen::rand::Rand;
use passgen::settings::{self, Settings};
use passgen::strength;
use passgen::Result;

use super::{ClassArgs, Command, GenerateArgs, prompts, quiet};

pub struct Context {
    pub config_path: PathBuf,
    pub settings: Settings,
}

impl Context {
    /// Load defaults from `config` (or the standard location). An unreadable
    /// settings file is reported and the built-in defaults are used.
    pub fn new(config: Option<PathBuf>) -> Self {
        let config_path = config.unwrap_or_else(settings::path);
        let settings = Settings::load(&config_path).unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });
        debug!("settings from {}: {:?}", config_path.display(), settings);

        Self {
            config_path,
            settings,
        }
    }

    pub fn run(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Generate(args) => self.generate(args),
            Command::Strength(args) => {
                self.strength(args);
                Ok(())
            }
            Command::Defaults { reset } => self.defaults(reset),
        }
    }

    fn generate(&mut self, args: GenerateArgs) -> Result<()> {
        let length = match args.length {
            Some(n) => PasswordLength::try_from(n)?,
            None => self.settings.length,
        };
        let classes = args.classes.or(self.settings.classes);

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length.get()) {
            debug!(
                "length {} is outside the interactive range {}..={}",
                length, MIN_LENGTH, MAX_LENGTH
            );
        }

        if args.save {
            self.settings = Settings { length, classes };
            self.settings.save(&self.config_path)?;
            prompts::note(&format!("Saved defaults to {}", self.config_path.display()));
        }

        let mut rng = Rand::new();
        let passwords = (0..args.count.max(1))
            .map(|_| pass::generate_with(length, &classes, &mut rng))
            .collect::<Result<Vec<Password>>>()?;

        if args.verbose {
            let charset = pass::charset::size(&classes);
            prompts::strength_report(
                strength::classify(&classes),
                charset,
                strength::entropy_bits(length.get(), charset),
            );
        }

        if args.board {
            match output::copy_to_clipboard(&passwords) {
                Ok(()) => {
                    prompts::clipboard_copied(passwords.len());
                    return Ok(());
                }
                Err(e) => {
                    prompts::warn(&e.to_string());
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(e);
                    }
                }
            }
        }

        output::write_lines(io::stdout().lock(), &passwords)?;
        Ok(())
    }

    /// Rate the given classes, or the saved ones when no flag is given.
    fn rated_classes(&self, args: ClassArgs) -> CharacterClasses {
        args.or(self.settings.classes)
    }

    fn strength(&self, args: ClassArgs) {
        println!("{}", strength::classify(&self.rated_classes(args)));
    }

    fn defaults(&mut self, reset: bool) -> Result<()> {
        if reset {
            Settings::reset(&self.config_path)?;
            self.settings = Settings::default();
            prompts::note("Defaults reset");
        }

        let c = self.settings.classes;
        println!("length:    {}", self.settings.length);
        println!("lowercase: {}", on_off(c.lowercase));
        println!("uppercase: {}", on_off(c.uppercase));
        println!("numbers:   {}", on_off(c.numbers));
        println!("symbols:   {}", on_off(c.symbols));
        println!("strength:  {}", strength::classify(&c));
        if !quiet::enabled() {
            println!("file:      {}", self.config_path.display());
        }
        Ok(())
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
