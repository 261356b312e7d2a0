//! The interactive session
//!
//! Reads commands line by line from any [`BufRead`] and answers on any
//! [`Write`], so a session can be driven from a terminal or from a buffer.

use anyhow::{Context, Result};
use complete_tree::{BinaryTree, TraversalOrder};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

use crate::menu::MenuAction;
use crate::render::Renderer;

pub struct Shell<R, W> {
    input: R,
    output: W,
    tree: BinaryTree<char>,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, renderer: Renderer) -> Self {
        Self {
            input,
            output,
            tree: BinaryTree::new(),
            renderer,
        }
    }

    pub fn tree(&self) -> &BinaryTree<char> {
        &self.tree
    }

    /// Build the initial tree, prompting for the expression and its order
    /// when they were not given
    ///
    /// Returns false if the input ended before the tree could be built.
    pub fn start(&mut self, expression: Option<String>, order: Option<String>) -> Result<bool> {
        writeln!(self.output, "Welcome! Please enter a tree expression to continue.")?;
        let expression = match expression {
            Some(expression) => expression,
            None => match self.prompt("Tree expression, one value per character:")? {
                Some(line) => line,
                None => return Ok(false),
            },
        };
        let order = match order {
            Some(order) => order,
            None => match self.prompt(
                "Which traversal does the expression follow? \
                 (0 for pre-order, 1 for post-order, 2 for in-order)",
            )? {
                Some(line) => line,
                None => return Ok(false),
            },
        };

        let order = self.resolve_order(&order)?;
        self.load(&expression, order);
        Ok(true)
    }

    /// Replace the tree with the one built from `expression`, ignoring
    /// whitespace
    pub fn load(&mut self, expression: &str, order: TraversalOrder) {
        let values = expression.chars().filter(|c| !c.is_whitespace());
        self.tree.build_from_traversal(values, order);
        info!(
            "built a tree of {} nodes from a {} expression",
            self.tree.node_count(),
            order
        );
    }

    /// Serve the menu until the user quits or the input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(action) = self.read_action()? else {
                debug!("input ended");
                return Ok(());
            };
            debug!("menu action: {}", action);

            match action {
                MenuAction::Insert => {
                    let Some(value) = self.read_value("Element to insert into the tree:")? else {
                        return Ok(());
                    };
                    self.tree.insert(value);
                    writeln!(self.output, "Inserted {}", value)?;
                }
                MenuAction::Delete => {
                    let Some(value) = self.read_value("Element to delete from the tree:")? else {
                        return Ok(());
                    };
                    match self.tree.delete(&value) {
                        0 => writeln!(self.output, "{} is not in the tree", value)?,
                        removed => writeln!(self.output, "Deleted {} x {}", removed, value)?,
                    }
                }
                MenuAction::Print => self.print()?,
                MenuAction::Quit => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn resolve_order(&mut self, text: &str) -> Result<TraversalOrder> {
        match text.parse::<TraversalOrder>() {
            Ok(order) => Ok(order),
            Err(err) => {
                let order = TraversalOrder::default();
                warn!("{}", err);
                writeln!(
                    self.output,
                    "Since the option is invalid, the expression is read as {}",
                    order
                )?;
                Ok(order)
            }
        }
    }

    fn print(&mut self) -> Result<()> {
        if self.tree.is_empty() {
            writeln!(self.output, "The tree is empty")?;
            return Ok(());
        }

        let drawing = self.renderer.render(&self.tree);
        write!(self.output, "{}", drawing)?;
        writeln!(
            self.output,
            "{} nodes, {} leaves, height {}",
            self.tree.node_count(),
            self.tree.leaf_count(),
            self.tree.height()
        )?;
        for order in TraversalOrder::ALL {
            let values: Vec<String> = self.tree.iter(order).map(|c| c.to_string()).collect();
            writeln!(self.output, "{:>10}: {}", order.to_string(), values.join(" "))?;
        }
        Ok(())
    }

    fn read_action(&mut self) -> Result<Option<MenuAction>> {
        loop {
            writeln!(self.output, "Please choose one of the following options (1 -> 4):")?;
            for action in MenuAction::ALL {
                writeln!(self.output, "\t{}. {}", action.number(), action)?;
            }
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(action) => return Ok(Some(action)),
                Err(err) => writeln!(self.output, "{}, try again", err)?,
            }
        }
    }

    /// Read a single non-blank character, asking again until one is given
    fn read_value(&mut self, prompt: &str) -> Result<Option<char>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            let mut chars = line.chars().filter(|c| !c.is_whitespace());
            match (chars.next(), chars.next()) {
                (Some(value), None) => return Ok(Some(value)),
                _ => writeln!(self.output, "Please enter exactly one character")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
