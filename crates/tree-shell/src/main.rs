mod menu;
mod render;
mod shell;

use anyhow::Context;
use clap::Parser;
use log::info;
use std::io;

use render::Renderer;
use shell::Shell;

/// Build a complete binary tree from a traversal, then edit and print it
#[derive(Parser, Debug)]
#[command(name = "tree-shell", version, about)]
struct Opts {
    /// Tree expression, one value per character; prompted for when omitted
    expression: Option<String>,

    /// Traversal the expression follows: pre, in, post (or 0, 2, 1)
    #[arg(short, long)]
    order: Option<String>,

    /// Minimum width of tree drawings, in columns
    #[arg(short, long, default_value_t = 64)]
    width: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::parse();
    info!("starting with {:?}", opts);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), Renderer::new(opts.width));

    if shell
        .start(opts.expression, opts.order)
        .context("Failed to build the initial tree")?
    {
        shell.run().context("Menu session failed")?;
    }
    Ok(())
}
