//! Per-run identities joining the markup, stylesheet and script artifacts.
//!
//! Each slide and content node gets an opaque `"{kind}-{n}"` string the first
//! time any generator asks for it. The markup uses it as a CSS class, the
//! stylesheet addresses rules to it and the script selects elements by it, so
//! all three generators must share one registry for the whole pass.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::marker::PhantomData;

use crate::models::content::{Content, List};
use crate::models::document::Slide;

/// The identity family of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Slide,
    Content,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Slide => "slide",
            NodeKind::Content => "content",
        }
    }
}

/// A node that can be given an identity.
pub trait IdentifiedNode {
    const KIND: NodeKind;
    /// Distinguishes node types sharing an address, such as a `Content` and
    /// the `List` stored as its first field.
    const CLASS: u8;
}

impl IdentifiedNode for Slide {
    const KIND: NodeKind = NodeKind::Slide;
    const CLASS: u8 = 0;
}

impl IdentifiedNode for Content {
    const KIND: NodeKind = NodeKind::Content;
    const CLASS: u8 = 1;
}

/// Nested lists inside list items are content nodes of their own.
impl IdentifiedNode for List {
    const KIND: NodeKind = NodeKind::Content;
    const CLASS: u8 = 2;
}

type NodeKey = (u8, usize);

/// Memoizes identities by node instance for one generation run.
///
/// Nodes are keyed by address, so two structurally equal nodes get distinct
/// identities while the same node always gets the same one. The registry never
/// owns or clones nodes. Its `'a` is invariant: every node handed to
/// [`identity`](Self::identity) stays borrowed for as long as the registry is
/// in use, so no address can be freed and reused mid-run.
///
/// ```compile_fail
/// use slidedeck_gen::identity::IdentityRegistry;
/// use slidedeck_gen::models::document::Slide;
///
/// let registry = IdentityRegistry::new();
/// let first = {
///     let slide: Box<Slide> = serde_json::from_str(r#"{ "contents": [] }"#).unwrap();
///     registry.identity(&*slide)
/// };
/// let slide: Slide = serde_json::from_str(r#"{ "contents": [] }"#).unwrap();
/// assert_ne!(first, registry.identity(&slide));
/// ```
#[derive(Debug, Default)]
pub struct IdentityRegistry<'a> {
    ids: RefCell<HashMap<NodeKey, String>>,
    slides: Cell<usize>,
    contents: Cell<usize>,
    _tree: PhantomData<Cell<&'a ()>>,
}

impl<'a> IdentityRegistry<'a> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the node's identity, allocating the next one of its kind on
    /// first use.
    pub fn identity<N: IdentifiedNode>(&self, node: &'a N) -> String {
        let key = (N::CLASS, node as *const N as usize);
        if let Some(id) = self.ids.borrow().get(&key) {
            return id.clone();
        }
        let counter = match N::KIND {
            NodeKind::Slide => &self.slides,
            NodeKind::Content => &self.contents,
        };
        let n = counter.get() + 1;
        counter.set(n);
        let id = format!("{}-{}", N::KIND.as_str(), n);
        self.ids.borrow_mut().insert(key, id.clone());
        id
    }

    /// Forgets every identity and restarts both counters.
    pub fn reset(&mut self) {
        self.ids.get_mut().clear();
        self.slides.set(0);
        self.contents.set(0);
    }

    /// Number of identities handed out so far.
    pub fn len(&self) -> usize {
        self.ids.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
