//! Application wiring: load the index, pick an entry, render, print.

use anyhow::Context;
use ansitext::{build, reverse_lines, tokenize};
use menagerie::{Entry, NameMatch, Trie};

use crate::bubble::{BoxChars, Bubble, boxed_caption, caption};
use crate::cli::Cli;
use crate::select::Selector;
use crate::store::ArtStore;

/// Run one invocation end to end, writing to stdout.
///
/// # Errors
///
/// Load failures, lookup misses and I/O problems all bubble up; `main`
/// turns them into a non-zero exit with the message chain.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let trie = Trie::load(&cli.dex)
        .with_context(|| format!("loading index {}", cli.dex.display()))?;
    tracing::debug!(entries = trie.len(), "index loaded");

    if cli.list_categories {
        println!("{}", trie.list_categories().join(" "));
        return Ok(());
    }
    if cli.list_names {
        let names: Vec<String> = trie.entries().map(|m| m.entry.value).collect();
        println!("{}", names.join(" "));
        return Ok(());
    }

    let mut selector = match cli.seed {
        Some(seed) => Selector::seeded(seed),
        None => Selector::from_entropy(),
    };
    let (entry, category_path) = pick(cli, &trie, &mut selector)?;
    tracing::info!(name = %entry.value, index = entry.index, "chose art");

    let art = ArtStore::new(&cli.art_dir).art(entry.index)?;
    let art = if cli.flip { flip(&art) } else { art };

    let chars = if cli.ascii_borders {
        BoxChars::ascii()
    } else {
        BoxChars::unicode()
    };
    let bubble = Bubble::new()
        .width(cli.width)
        .wrap(!cli.no_wrap)
        .draw_box(!cli.no_bubble)
        .chars(chars);
    let bubble = if cli.no_tab_spaces {
        bubble.keep_tabs()
    } else {
        bubble.tab_width(cli.tab_width)
    };

    let text = std::io::read_to_string(std::io::stdin()).context("reading stdin")?;
    print!("{}", bubble.render(&text));
    print!("{art}");
    if !art.ends_with('\n') {
        println!();
    }
    let info = if cli.info_border {
        boxed_caption(&entry.value, &category_path, &chars, !cli.no_category_info)
    } else {
        caption(&entry.value, &category_path, &chars, !cli.no_category_info)
    };
    println!("{info}");
    Ok(())
}

/// Resolve the name/category flags (or neither) to one entry and its path.
fn pick<R: rand::Rng>(
    cli: &Cli,
    trie: &Trie,
    selector: &mut Selector<R>,
) -> anyhow::Result<(Entry, Vec<String>)> {
    if let Some(name) = &cli.name {
        let NameMatch {
            entry,
            category_path,
        } = selector.choose_by_name(trie, name)?;
        Ok((entry, category_path))
    } else if let Some(segment) = &cli.category {
        Ok(selector.choose_by_category(trie, segment)?)
    } else {
        let choice = selector.choose_index(trie.len());
        let m = trie
            .entries()
            .nth(choice)
            .context("the index holds no entries")?;
        Ok((m.entry, m.category_path))
    }
}

/// Mirror a blob of art, preserving a single trailing newline if present.
fn flip(art: &str) -> String {
    let trimmed = art.strip_suffix('\n').unwrap_or(art);
    let mut out = build(&reverse_lines(&tokenize(trimmed)));
    out.push('\n');
    out
}
