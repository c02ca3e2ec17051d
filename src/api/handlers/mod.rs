pub mod panel;
pub mod system;
