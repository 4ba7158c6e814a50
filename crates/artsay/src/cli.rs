//! Command-line interface for `artsay`.
//!
//! Defines the CLI contract using clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Random art with a speech bubble from stdin
//! echo "hello" | artsay --dex dex.json --art-dir art/
//!
//! # Pick by name, mirrored, with ASCII borders
//! echo "hi" | artsay --dex dex.json --art-dir art/ --name pikachu --flip --ascii-borders
//!
//! # What categories exist?
//! artsay --dex dex.json --art-dir art/ --list-categories
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Cowsay for colored terminal art.
///
/// Prints text from stdin inside a speech bubble, above a randomly chosen
/// piece of ANSI art and a caption naming it.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(name = "artsay", author, version, about)]
pub struct Cli {
    /// Path to the index JSON mapping names and categories to art
    #[arg(long, env = "ARTSAY_DEX")]
    pub dex: PathBuf,

    /// Directory of art blobs, one `<index>.ansi` file per entry
    #[arg(long, env = "ARTSAY_ART_DIR")]
    pub art_dir: PathBuf,

    /// Choose art filed under this category segment
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Choose art with this name (case-insensitive)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Maximum speech bubble width
    #[arg(long, short = 'w', default_value_t = 80)]
    pub width: usize,

    /// Disable text wrapping
    #[arg(long)]
    pub no_wrap: bool,

    /// Replace each tab character with N spaces
    #[arg(long, default_value_t = 4)]
    pub tab_width: usize,

    /// Do not replace tab characters
    #[arg(long)]
    pub no_tab_spaces: bool,

    /// Draw borders with plain ASCII instead of box-drawing characters
    #[arg(long)]
    pub ascii_borders: bool,

    /// Mirror the art horizontally
    #[arg(long, short = 'f')]
    pub flip: bool,

    /// Omit the category path from the caption
    #[arg(long)]
    pub no_category_info: bool,

    /// Frame the caption in its own border
    #[arg(long)]
    pub info_border: bool,

    /// Print the speech text without a surrounding box
    #[arg(long)]
    pub no_bubble: bool,

    /// List every category segment and exit
    #[arg(long)]
    pub list_categories: bool,

    /// List every art name and exit
    #[arg(long)]
    pub list_names: bool,

    /// Seed the random generator for reproducible picks
    #[arg(long, short = 's')]
    pub seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["artsay", "--dex", "d.json", "--art-dir", "art"]);
        assert_eq!(cli.width, 80);
        assert_eq!(cli.tab_width, 4);
        assert!(!cli.no_wrap);
        assert!(!cli.flip);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn short_flags() {
        let cli = Cli::parse_from([
            "artsay", "--dex", "d.json", "--art-dir", "art", "-n", "pikachu", "-f", "-s", "7",
        ]);
        assert_eq!(cli.name.as_deref(), Some("pikachu"));
        assert!(cli.flip);
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn contract_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
