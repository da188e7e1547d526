use clap::Subcommand;
use testscope_gradle::{LanguageLevel, convert_to_gradle_string, parse_from_gradle_string};

#[derive(Subcommand)]
pub enum LevelCommands {
    /// Parse a sourceCompatibility value ('1.6', VERSION_1_6, JavaVersion.VERSION_1_6)
    Parse {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
    /// Write LEVEL in the same style as OLD
    Convert {
        #[arg(value_name = "LEVEL", value_parser = parse_level)]
        level: LanguageLevel,
        #[arg(value_name = "OLD")]
        old: String,
    },
}

fn parse_level(s: &str) -> Result<LanguageLevel, String> {
    s.parse()
}

pub fn run(cmd: LevelCommands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        LevelCommands::Parse { text } => {
            let level = parse_from_gradle_string(&text)
                .ok_or_else(|| format!("not a language level: {}", text))?;
            println!("{}", level);
        }
        LevelCommands::Convert { level, old } => {
            println!("{}", convert_to_gradle_string(level, &old));
        }
    }
    Ok(())
}
