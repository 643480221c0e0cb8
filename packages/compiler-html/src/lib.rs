//! # WebCraft HTML Compiler
//!
//! Renders a block document to static HTML for preview and publishing.
//! Blocks are emitted in position order, each as a `<section>` carrying its
//! styles inline. Rendering dispatches on the block family; blocks of an
//! unrecognized type become a visible placeholder.

mod compiler;

pub use compiler::{
    compile_block, compile_to_html, escape_html, inline_style, CompileError, CompileOptions,
};
