//! Abstract syntax tree of the slide-deck language.
//!
//! The tree is produced by an external parser and arrives here as JSON. Every
//! polymorphic node carries a `$type` discriminator and is mapped onto a
//! closed Rust enum so each generator matches exhaustively over the variants.

pub mod annotation;
pub mod content;
pub mod document;
pub mod highlight;
pub mod style;
pub mod template;

pub use annotation::{Annotation, Percent};
pub use content::{
    CodeBlock, Content, ContentCommon, FreeText, ImageBlock, LayoutBlock, List, ListItem,
    MathBlock, MediaBlock,
};
pub use document::{DeckOption, Document, Import, Presentation, Slide, Template};
pub use highlight::{CodeHighlight, LineHighlight, LineSpec, VisualStep};
pub use style::{Alignment, Animation, LayoutOption, LayoutStyle, LayoutType, Size};
pub use template::{ContentPlaceholder, MediaKind, SlideTemplate, TextKind};
