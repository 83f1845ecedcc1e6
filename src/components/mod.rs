pub mod canvas_editor;
pub mod execution_panel;
pub mod node_palette;
pub mod workflow_switcher;
