//! Structured Rust source emission.
//!
//! A [`SourceFile`] collects header comments, inner attributes, `use`
//! declarations, constants and functions, and renders them in insertion
//! order. Rendering is deterministic: the same sequence of calls always
//! produces the same bytes.
pub mod ast;
pub mod ident;
pub mod render;

pub use ast::{str_literal, Const, Function, Item, Literal};

use std::collections::HashSet;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("EMIT/DUPLICATE: `{0}` is declared more than once")]
    DuplicateDeclaration(String),
    #[error("EMIT/IDENT: `{0}` is not a valid identifier")]
    InvalidIdentifier(String),
    #[error("EMIT/IO: {0}")]
    Io(#[from] io::Error),
}

/// One generated source unit.
#[derive(Debug, Clone, Default)]
pub struct SourceFile {
    module: String,
    pub(crate) header: Vec<String>,
    pub(crate) inner_docs: Vec<String>,
    pub(crate) inner_attrs: Vec<String>,
    pub(crate) uses: Vec<String>,
    pub(crate) items: Vec<Item>,
    declared: HashSet<String>,
}

impl SourceFile {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            ..Default::default()
        }
    }

    /// Module identity of the unit.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Plain `//` comment placed above everything else.
    pub fn header_comment(&mut self, line: impl Into<String>) -> &mut Self {
        self.header.push(line.into());
        self
    }

    pub fn inner_doc(&mut self, line: impl Into<String>) -> &mut Self {
        self.inner_docs.push(line.into());
        self
    }

    /// `#![...]` attribute; pass the contents without the brackets.
    pub fn inner_attr(&mut self, attr: impl Into<String>) -> &mut Self {
        self.inner_attrs.push(attr.into());
        self
    }

    pub fn use_path(&mut self, path: impl Into<String>) -> &mut Self {
        self.uses.push(path.into());
        self
    }

    pub fn constant(&mut self, c: Const) -> Result<&mut Self, EmitError> {
        self.push(Item::Const(c))
    }

    pub fn function(&mut self, f: Function) -> Result<&mut Self, EmitError> {
        self.push(Item::Function(f))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn push(&mut self, item: Item) -> Result<&mut Self, EmitError> {
        let name = item.name().to_string();
        if !ident::is_identifier(&name) {
            return Err(EmitError::InvalidIdentifier(name));
        }
        if !self.declared.insert(name.clone()) {
            return Err(EmitError::DuplicateDeclaration(name));
        }
        self.items.push(item);
        Ok(self)
    }

    pub fn render(&self) -> String {
        render::render_file(self)
    }

    /// Render and write the whole unit with a single `write_all`.
    pub fn write_to<W: io::Write>(&self, mut sink: W) -> Result<(), EmitError> {
        sink.write_all(self.render().as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}
