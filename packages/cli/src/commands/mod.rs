pub mod init;
pub mod render;

pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};
