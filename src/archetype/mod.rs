pub mod catalog;
pub mod composer;
pub mod selection;

pub use catalog::{resolve_phrase, PhraseCatalog, StaticPhraseCatalog};
pub use composer::{ArchetypeScope, NarrativeComposer};
pub use selection::{CompetencySelector, Selection, SelectionConfig};
