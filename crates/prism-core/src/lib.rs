//! Prism Core Types and Definitions
//!
//! This crate provides the foundational types for the prism color-separation
//! pipeline. It includes:
//!
//! - **Colors**: 6-hex-digit fill colors ([`color::FillColor`])
//! - **Class lists**: whitespace-delimited class token matching ([`class_list`] module)
//! - **Elements**: scanned markup elements ([`element::Element`])
//! - **Fragments**: per-color SVG fragment documents ([`fragment`] module)
//! - **Components**: JSX component snippets ([`component`] module)
//! - **Modules**: the combined component listing ([`module`] module)

pub mod class_list;
pub mod color;
pub mod component;
pub mod element;
pub mod fragment;
pub mod module;
