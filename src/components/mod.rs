pub mod edit_panel;
pub mod export;
pub mod family_tree;
