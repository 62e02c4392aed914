//! latex-typograph - tie spaced dashes and reference commands in LaTeX sources
//!
//! Ordinary spaces before `--`, `\ref{...}`, `\cite{...}` and friends let
//! TeX break the line in awkward places. This crate replaces them with the
//! tie `~`.
//!
//! # Example
//!
//! ```
//! use latex_typograph::transform;
//!
//! let (text, count) = transform("See Fig. \\ref{fig:1} -- and Section 3 \\ref{s}.");
//! assert_eq!(text, "See Fig.~\\ref{fig:1}~-- and Section 3~\\ref{s}.");
//! assert_eq!(count, 3);
//! ```

pub mod charset;
pub mod config;
pub mod error;
pub mod file_handler;
mod typograph;

pub use config::{Options, REF_COMMANDS, RefCommand};
pub use error::{Error, Result};
pub use typograph::{Typeset, transform, typograph};
