pub mod blocks;
pub mod init;
pub mod render;
pub mod site;
pub mod templates;

pub use blocks::{
    add, delete, edit, list, move_block, style, AddArgs, DeleteArgs, EditArgs, MoveArgs, StyleArgs,
};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};
pub use site::{publish, save};
pub use templates::{templates, TemplatesArgs};
