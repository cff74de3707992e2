use clap::{Parser, Subcommand};
use solid::model::{Color, Size};
use solid::specification::{attribute_names, get_spec};
use std::path::PathBuf;

fn value_help(summary: &str, attribute: &str) -> String {
    match get_spec(attribute) {
        Some(spec) => format!("{} ({})", summary, spec.values_list()),
        None => summary.to_string(),
    }
}

fn criteria_help() -> String {
    let names: Vec<_> = attribute_names().collect();
    format!(
        "Extra criteria over {}, e.g. \"color=blue & size=large\" (repeatable, all must hold)",
        names.join(", ")
    )
}

#[derive(Parser, Debug)]
#[command(name = "solid", bin_name = "solid", version)]
#[command(about = "Design-principle demos: product specifications, a journal and shapes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the journal and config (default: platform data dir, or $SOLID_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the journal
    #[command(subcommand)]
    Journal(JournalCommands),

    /// Filter products by color, size or attribute=value criteria
    #[command(alias = "p")]
    Products {
        #[arg(short, long, help = value_help("Keep products of this color", "color"))]
        color: Option<Color>,

        #[arg(short, long, help = value_help("Keep products of this size", "size"))]
        size: Option<Size>,

        #[arg(short = 'w', long = "where", value_name = "CRITERIA", help = criteria_help())]
        criteria: Vec<String>,

        /// JSON catalog to filter instead of the configured one or the sample
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },

    /// Check whether a rectangle and a square behave alike when resized
    Shapes {
        /// Rectangle width
        #[arg(long, default_value_t = 2)]
        width: u32,

        /// Rectangle height
        #[arg(long, default_value_t = 3)]
        height: u32,

        /// Square side
        #[arg(long, default_value_t = 5)]
        side: u32,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (journal-file, catalog)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum JournalCommands {
    /// Add an entry
    #[command(alias = "a")]
    Add {
        /// Entry text (words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Remove the entry at a 0-based position in the current list
    #[command(alias = "rm")]
    Remove { position: usize },

    /// Print all entries
    #[command(alias = "ls")]
    Show,

    /// Write the journal as plain text, replacing the target file
    Save {
        /// Target file (default: the configured journal-file)
        path: Option<PathBuf>,
    },

    /// Remove every entry (numbering continues where it left off)
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_products_flags() {
        let cli = Cli::try_parse_from([
            "solid", "products", "--color", "Blue", "-s", "large", "-w", "color=blue",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Products {
                color,
                size,
                criteria,
                catalog,
            }) => {
                assert_eq!(color, Some(Color::Blue));
                assert_eq!(size, Some(Size::Large));
                assert_eq!(criteria, vec!["color=blue".to_string()]);
                assert_eq!(catalog, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_color() {
        assert!(Cli::try_parse_from(["solid", "products", "--color", "pink"]).is_err());
    }

    #[test]
    fn journal_add_joins_words() {
        let cli = Cli::try_parse_from(["solid", "journal", "add", "Hello", "World!!"]).unwrap();
        match cli.command {
            Some(Commands::Journal(JournalCommands::Add { text })) => {
                assert_eq!(text.join(" "), "Hello World!!");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["solid", "journal", "show", "-v", "--data-dir", "/tmp/x"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn shapes_defaults_match_the_classic_demo() {
        let cli = Cli::try_parse_from(["solid", "shapes"]).unwrap();
        match cli.command {
            Some(Commands::Shapes {
                width,
                height,
                side,
            }) => assert_eq!((width, height, side), (2, 3, 5)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn products_help_lists_registered_values() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        let products = cmd.find_subcommand("products").unwrap();
        let help_for = |id: &str| {
            products
                .get_arguments()
                .find(|arg| arg.get_id() == id)
                .and_then(|arg| arg.get_help())
                .map(|help| help.to_string())
                .unwrap()
        };

        assert_eq!(help_for("color"), "Keep products of this color (red, green, blue)");
        assert_eq!(help_for("size"), "Keep products of this size (small, medium, large)");
        assert!(help_for("criteria").starts_with("Extra criteria over color, size"));
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
