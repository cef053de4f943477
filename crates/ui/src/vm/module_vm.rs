use lab_core::model::{Module, ModuleId};

use crate::vm::markdown_vm::markdown_to_html;

/// Module ready for the content viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleVm {
    pub id: ModuleId,
    pub title: String,
    pub summary: String,
    pub body_html: String,
}

impl From<&Module> for ModuleVm {
    fn from(module: &Module) -> Self {
        Self {
            id: module.id,
            title: module.title.clone(),
            summary: module.summary.clone(),
            body_html: markdown_to_html(&module.content),
        }
    }
}

/// Dashboard link to a module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleLinkVm {
    pub id: ModuleId,
    pub title: String,
    pub summary: String,
}

#[must_use]
pub fn map_module_links(modules: &[Module]) -> Vec<ModuleLinkVm> {
    modules
        .iter()
        .map(|module| ModuleLinkVm {
            id: module.id,
            title: module.title.clone(),
            summary: module.summary.clone(),
        })
        .collect()
}
