//! Quokka CLI
//!
//! Builds a selector string from `kind:value` fragments given on the
//! command line, applying them in argument order so ordering violations
//! surface exactly as the library reports them.

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use quokka_selector::{SelectorBuilder, combine};

/// Build CSS selector strings from ordered kind:value fragments.
///
/// Fragment kinds: element, id, class, attr, pseudo-class, pseudo-element.
///
/// Example: quokka element:div id:main class:container
#[derive(Parser)]
#[command(name = "quokka", version, about)]
struct Cli {
    /// Selector fragments in order, as kind:value pairs.
    #[arg(required = true, value_name = "PART")]
    parts: Vec<String>,

    /// Join the built selector with a second one using this combinator token.
    #[arg(long, value_name = "TOKEN", requires = "with")]
    combine: Option<String>,

    /// Fragments of the right-hand selector used with --combine.
    #[arg(long, value_name = "PART", requires = "combine")]
    with: Vec<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let left = build(&cli.parts)?;
    match cli.combine {
        Some(token) => {
            let right = build(&cli.with)?;
            println!("{}", combine(&left, &token, &right));
        }
        None => println!("{left}"),
    }
    Ok(())
}

/// Apply `kind:value` fragments to a fresh builder in the order given.
fn build(parts: &[String]) -> Result<SelectorBuilder> {
    let mut builder = SelectorBuilder::new();
    for part in parts {
        let (kind, value) = part
            .split_once(':')
            .with_context(|| format!("fragment '{part}' is not of the form kind:value"))?;
        builder = match kind {
            "element" => builder.element(value),
            "id" => builder.id(value),
            "class" => builder.class(value),
            "attr" => builder.attr(value),
            "pseudo-class" => builder.pseudo_class(value),
            "pseudo-element" => builder.pseudo_element(value),
            other => bail!(
                "unknown fragment kind '{other}' (expected element, id, class, attr, pseudo-class or pseudo-element)"
            ),
        }
        .with_context(|| format!("cannot append '{part}'"))?;
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::build;

    fn parts(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn builds_fragments_in_argument_order() {
        let builder = build(&parts(&["element:div", "id:main", "class:container"])).unwrap();
        assert_eq!(builder.as_str(), "div#main.container");
    }

    #[test]
    fn value_may_contain_colons() {
        // Only the first colon separates kind from value
        let builder = build(&parts(&["pseudo-class:not(:hover)"])).unwrap();
        assert_eq!(builder.as_str(), ":not(:hover)");
    }

    #[test]
    fn out_of_order_fragments_are_reported() {
        assert!(build(&parts(&["id:main", "element:div"])).is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(build(&parts(&["universal:*"])).is_err());
    }

    #[test]
    fn bare_part_is_rejected() {
        assert!(build(&parts(&["div"])).is_err());
    }
}
