mod lab_vm;
mod markdown_vm;
mod module_vm;
mod profile_vm;

pub use lab_vm::{LabAvailability, LabCardVm, format_duration, map_lab_cards};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use module_vm::{ModuleLinkVm, ModuleVm, map_module_links};
pub use profile_vm::{ChecklistItemVm, ProfileChecklistVm};
