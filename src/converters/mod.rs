//! The three artifact generators and the state they share during a pass.

pub mod css;
pub mod html;
pub mod runtime;

use crate::assets::AssetCopier;
use crate::config::GeneratorConfig;
use crate::identity::IdentityRegistry;
use crate::models::document::Presentation;
use crate::resolver::Bindings;

/// Everything a generator reads during one generation pass.
///
/// The presentation and bindings are read-only. The identity registry is the
/// only state that grows, and it is shared so that every artifact addresses a
/// node by the same identity.
pub struct GenerationContext<'a> {
    pub presentation: &'a Presentation,
    pub bindings: &'a Bindings<'a>,
    pub identities: &'a IdentityRegistry<'a>,
    pub assets: &'a dyn AssetCopier,
    pub config: &'a GeneratorConfig,
}
