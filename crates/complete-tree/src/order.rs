//! Depth-first traversal orders

use derive_more::Display;
use log::warn;
use std::str::FromStr;

use crate::error::{Result, TreeError};

/// The depth-first order in which a traversal visits a node relative to its
/// two subtrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree
    #[default]
    #[display(fmt = "pre-order")]
    Pre,

    /// Left subtree, then node, then right subtree
    #[display(fmt = "in-order")]
    In,

    /// Left subtree, then right subtree, then node
    #[display(fmt = "post-order")]
    Post,
}

impl TraversalOrder {
    /// All orders, in declaration order
    pub const ALL: [TraversalOrder; 3] = [Self::Pre, Self::In, Self::Post];

    /// Decode the numeric menu codes: `0` pre-order, `1` post-order,
    /// `2` in-order.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Pre),
            1 => Ok(Self::Post),
            2 => Ok(Self::In),
            other => Err(TreeError::InvalidTraversalKind(other.to_string())),
        }
    }

    /// Parse an order, falling back to pre-order when the text is not
    /// recognized.
    pub fn parse_or_default(text: &str) -> Self {
        text.parse().unwrap_or_else(|err| {
            warn!("{}, assuming {}", err, Self::default());
            Self::default()
        })
    }
}

impl FromStr for TraversalOrder {
    type Err = TreeError;

    /// Accepts `pre`, `in`, `post` (optionally suffixed with `order` or
    /// `-order`, any case) as well as the numeric codes of
    /// [`TraversalOrder::from_code`].
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if let Ok(code) = text.parse::<u8>() {
            return Self::from_code(code);
        }

        let lowered = text.to_ascii_lowercase();
        let name = lowered
            .strip_suffix("order")
            .map(|rest| rest.trim_end_matches('-'))
            .unwrap_or(&lowered);
        match name {
            "pre" => Ok(Self::Pre),
            "in" => Ok(Self::In),
            "post" => Ok(Self::Post),
            _ => Err(TreeError::InvalidTraversalKind(text.to_string())),
        }
    }
}
