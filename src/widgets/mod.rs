// ============================================================================
// WIDGETS - Componentes compuestos con estado de interacción propio
// ============================================================================
// Cada widget separa su máquina de estados (pura, testeable sin DOM) del
// wrapper que construye y muta su propio subárbol DOM. El estado se pasa
// explícito: triggers e items solo se crean a través del widget padre.
// ============================================================================

pub mod dropdown;
pub mod select;

pub use dropdown::{DropdownMenu, DropdownState};
pub use select::{Select, SelectBinding, SelectOption, SelectState};
