//! Binds presentation slides and content to the template they import.
//!
//! Resolution is a pure function of the presentation and its imported
//! template. A reference that cannot be resolved is not an error: it yields no
//! binding, is recorded as a [`ResolutionIssue`], and generation continues
//! with defaults.

mod compat;
mod scope;

use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use log::{debug, warn};

pub use compat::{compatibility, expected_slot, offered_slot, Compatibility, Slot};
pub use scope::{candidates, flatten, ContentScope};

use crate::lookup::DocumentLookup;
use crate::models::content::Content;
use crate::models::document::{Document, Presentation, Slide, Template};
use crate::models::template::{ContentPlaceholder, SlideTemplate};

/// A diagnostic produced while resolving references. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionIssue {
    /// The import path did not lead to a template document.
    MissingTemplate { path: String },
    /// A slide names a slide template the imported template does not declare.
    UnresolvedSlideTemplate { slide: usize, name: String },
    /// A content node names a placeholder not visible from its scope.
    UnresolvedPlaceholder { slide: usize, name: String },
    /// A content node is bound to a placeholder of another family or kind.
    PlaceholderTypeMismatch {
        slide: usize,
        name: String,
        content_type: &'static str,
        placeholder_type: &'static str,
        compatibility: Compatibility,
    },
}

impl fmt::Display for ResolutionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionIssue::MissingTemplate { path } => {
                write!(f, "imported template '{}' could not be found", path)
            }
            ResolutionIssue::UnresolvedSlideTemplate { slide, name } => write!(
                f,
                "slide {}: unknown slide template '{}'",
                slide + 1,
                name
            ),
            ResolutionIssue::UnresolvedPlaceholder { slide, name } => {
                write!(f, "slide {}: unknown placeholder '{}'", slide + 1, name)
            }
            ResolutionIssue::PlaceholderTypeMismatch {
                slide,
                name,
                content_type,
                placeholder_type,
                compatibility,
            } => write!(
                f,
                "slide {}: '{}' is bound to placeholder '{}' of type {} ({:?})",
                slide + 1,
                content_type,
                name,
                placeholder_type,
                compatibility
            ),
        }
    }
}

fn node_key<T>(node: &T) -> usize {
    node as *const T as usize
}

/// The read-only outcome of one resolution pass.
///
/// Bindings are keyed by node address. `'a` is invariant, so the walked
/// presentation stays borrowed while the bindings are in use and lookups
/// only accept nodes borrowed for that same span.
///
/// ```compile_fail
/// use slidedeck_gen::{resolve, NoDocuments, Presentation};
///
/// let deck = r#"{ "name": "Deck", "slides": [{ "contents": [] }] }"#;
/// let kept: Presentation = serde_json::from_str(deck).unwrap();
/// let bindings = {
///     let dropped: Presentation = serde_json::from_str(deck).unwrap();
///     resolve(&dropped, &NoDocuments)
/// };
/// assert!(bindings.slide_template(&kept.slides[0]).is_none());
/// ```
#[derive(Debug, Default)]
pub struct Bindings<'a> {
    template: Option<&'a Template>,
    slides: HashMap<usize, &'a SlideTemplate>,
    contents: HashMap<usize, &'a ContentPlaceholder>,
    issues: Vec<ResolutionIssue>,
    _tree: PhantomData<Cell<&'a ()>>,
}

impl<'a> Bindings<'a> {
    /// The imported template, if it could be located.
    pub fn template(&self) -> Option<&'a Template> {
        self.template
    }

    pub fn slide_template(&self, slide: &'a Slide) -> Option<&'a SlideTemplate> {
        self.slides.get(&node_key(slide)).copied()
    }

    pub fn placeholder(&self, content: &'a Content) -> Option<&'a ContentPlaceholder> {
        self.contents.get(&node_key(content)).copied()
    }

    pub fn issues(&self) -> &[ResolutionIssue] {
        &self.issues
    }

    fn report(&mut self, issue: ResolutionIssue) {
        warn!("{}", issue);
        self.issues.push(issue);
    }
}

/// Resolves references of one presentation against its imported template.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    template: Option<&'a Template>,
}

impl<'a> ReferenceResolver<'a> {
    /// Locates the presentation's imported template through `lookup`.
    ///
    /// A missing import, an unknown path, or a path leading to something other
    /// than a template all leave the resolver without a template.
    pub fn new<L>(presentation: &Presentation, lookup: &'a L) -> Self
    where
        L: DocumentLookup + ?Sized,
    {
        let template = presentation.import.as_ref().and_then(|import| {
            match lookup.find_document_by_import_path(&import.path) {
                Some(Document::Template(template)) => {
                    if template.name != import.template {
                        warn!(
                            "Import names template '{}' but '{}' declares '{}'",
                            import.template, import.path, template.name
                        );
                    }
                    Some(template)
                }
                Some(Document::Presentation(other)) => {
                    warn!(
                        "Import '{}' of '{}' is the presentation '{}', not a template",
                        import.path, presentation.name, other.name
                    );
                    None
                }
                None => None,
            }
        });
        Self { template }
    }

    /// A resolver over an already located template.
    pub fn with_template(template: Option<&'a Template>) -> Self {
        Self { template }
    }

    pub fn template(&self) -> Option<&'a Template> {
        self.template
    }

    /// The first slide template whose name matches the slide's reference.
    pub fn resolve_slide_template(&self, slide: &Slide) -> Option<&'a SlideTemplate> {
        let template = self.template?;
        let name = slide.template.as_deref()?;
        template.slide_templates.iter().find(|st| st.name == name)
    }

    /// The first placeholder visible from `scope` whose name matches the
    /// content's reference.
    pub fn resolve_content_placeholder(
        &self,
        content: &Content,
        slide: &Slide,
        scope: ContentScope<'a>,
    ) -> Option<&'a ContentPlaceholder> {
        self.placeholder_in_scope(content, self.resolve_slide_template(slide), scope)
    }

    fn placeholder_in_scope(
        &self,
        content: &Content,
        slide_template: Option<&'a SlideTemplate>,
        scope: ContentScope<'a>,
    ) -> Option<&'a ContentPlaceholder> {
        let template = self.template?;
        let name = content.placeholder_ref()?;
        candidates(template, slide_template, scope)
            .into_iter()
            .find(|p| p.name() == name)
    }

    /// Walks the presentation once and records every binding.
    ///
    /// The walk is pre-order so a layout block is bound before its children
    /// look up their scope.
    pub fn resolve(&self, presentation: &'a Presentation) -> Bindings<'a> {
        let mut bindings = Bindings {
            template: self.template,
            ..Default::default()
        };

        let Some(template) = self.template else {
            if let Some(import) = &presentation.import {
                bindings.report(ResolutionIssue::MissingTemplate {
                    path: import.path.clone(),
                });
            }
            return bindings;
        };
        debug!(
            "[resolve] '{}' against template '{}'",
            presentation.name, template.name
        );

        for (index, slide) in presentation.slides.iter().enumerate() {
            let slide_template = self.resolve_slide_template(slide);
            match (slide_template, slide.template.as_deref()) {
                (Some(st), _) => {
                    bindings.slides.insert(node_key(slide), st);
                }
                (None, Some(name)) => bindings.report(ResolutionIssue::UnresolvedSlideTemplate {
                    slide: index,
                    name: name.to_string(),
                }),
                (None, None) => {}
            }
            self.resolve_contents(
                &slide.contents,
                slide_template,
                ContentScope::Slide,
                index,
                &mut bindings,
            );
        }
        bindings
    }

    fn resolve_contents(
        &self,
        contents: &'a [Content],
        slide_template: Option<&'a SlideTemplate>,
        scope: ContentScope<'a>,
        slide_index: usize,
        bindings: &mut Bindings<'a>,
    ) {
        for content in contents {
            let binding = self.placeholder_in_scope(content, slide_template, scope);
            match (binding, content.placeholder_ref()) {
                (Some(placeholder), _) => {
                    debug!(
                        "[resolve] slide {}: {} -> {} '{}'",
                        slide_index + 1,
                        content.type_name(),
                        placeholder.type_name(),
                        placeholder.name()
                    );
                    let compat = compatibility(content, placeholder);
                    if compat != Compatibility::Exact {
                        bindings.report(ResolutionIssue::PlaceholderTypeMismatch {
                            slide: slide_index,
                            name: placeholder.name().to_string(),
                            content_type: content.type_name(),
                            placeholder_type: placeholder.type_name(),
                            compatibility: compat,
                        });
                    }
                    bindings.contents.insert(node_key(content), placeholder);
                }
                (None, Some(name)) => bindings.report(ResolutionIssue::UnresolvedPlaceholder {
                    slide: slide_index,
                    name: name.to_string(),
                }),
                (None, None) => {}
            }

            if let Content::LayoutBlock(block) = content {
                self.resolve_contents(
                    &block.elements,
                    slide_template,
                    ContentScope::LayoutBlock { binding },
                    slide_index,
                    bindings,
                );
            }
        }
    }
}

/// Locates the imported template and resolves the whole presentation.
pub fn resolve<'a, L>(presentation: &'a Presentation, lookup: &'a L) -> Bindings<'a>
where
    L: DocumentLookup + ?Sized,
{
    ReferenceResolver::new(presentation, lookup).resolve(presentation)
}
