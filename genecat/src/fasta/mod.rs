//! FASTA format support.
//!
//! A FASTA record consists of a title line starting with `>` followed by zero
//! or more sequence lines. The first word of the title line is the record
//! identifier; the rest is a free-text description.

pub mod reader;

pub(crate) const FASTA_TITLE_PREFIX: u8 = b'>';
pub(crate) const FASTA_COMMENT_PREFIX: u8 = b';';
