use std::fmt::{Display, Formatter};

use crate::progress::ByteNum;

/// Identifier of a sequence record, i.e. the first word of its title line.
#[derive(Debug, Eq, PartialEq, Hash, Clone, Default)]
pub struct SequenceIdentifier(pub String);

impl SequenceIdentifier {
    /// Empty identifier.
    pub const EMPTY: SequenceIdentifier = SequenceIdentifier(String::new());

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns this identifier as string.
    #[inline]
    #[must_use]
    pub fn str(&self) -> &str {
        &self.0
    }
}

impl Display for SequenceIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SequenceIdentifier {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for SequenceIdentifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single sequence entry of a FASTA file, reduced to the parts needed for
/// length statistics.
#[derive(Clone, Debug, Eq)]
pub struct SequenceRecord {
    identifier: SequenceIdentifier,
    description: String,
    length: usize,
    size: ByteNum,
}

impl SequenceRecord {
    /// Creates a new instance of `SequenceRecord`.
    ///
    /// # Examples
    /// ```
    /// use genecat::sequence::{SequenceIdentifier, SequenceRecord};
    ///
    /// let record = SequenceRecord::new("gene_1", 1200);
    /// assert_eq!(record.identifier(), &SequenceIdentifier::from("gene_1"));
    /// assert_eq!(record.len(), 1200);
    /// ```
    #[must_use]
    pub fn new<T>(identifier: T, length: usize) -> Self
    where
        T: Into<SequenceIdentifier>,
    {
        let identifier = identifier.into();

        const FASTA_BOILERPLATE_LEN: usize = ">\n\n".len();
        let approximate_size = identifier.len() + length + FASTA_BOILERPLATE_LEN;

        Self::with_size(identifier, "", length, ByteNum::new(approximate_size))
    }

    #[must_use]
    pub fn with_size<T, U>(identifier: T, description: U, length: usize, size: ByteNum) -> Self
    where
        T: Into<SequenceIdentifier>,
        U: Into<String>,
    {
        Self {
            identifier: identifier.into(),
            description: description.into(),
            length,
            size,
        }
    }

    /// Returns the identifier of this record.
    #[must_use]
    pub fn identifier(&self) -> &SequenceIdentifier {
        &self.identifier
    }

    /// Returns the free-text description following the identifier on the
    /// title line; empty if there was none.
    ///
    /// # Examples
    /// ```
    /// use genecat::progress::ByteNum;
    /// use genecat::sequence::SequenceRecord;
    ///
    /// let record = SequenceRecord::with_size("k141_1", "partial=00", 9, ByteNum::new(30));
    /// assert_eq!(record.description(), "partial=00");
    /// ```
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the number of residues in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the sequence has no residues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the number of input bytes this record was parsed from.
    #[must_use]
    pub fn size(&self) -> ByteNum {
        self.size
    }
}

impl PartialEq for SequenceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.description == other.description
            && self.length == other.length
    }
}

#[cfg(test)]
mod tests {
    use crate::progress::ByteNum;
    use crate::sequence::{SequenceIdentifier, SequenceRecord};

    #[test]
    fn test_record_new() {
        let record = SequenceRecord::new("TEST", 2);

        assert_eq!(record.identifier(), &SequenceIdentifier::from("TEST"));
        assert_eq!(record.description(), "");
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
        assert_eq!(record.size(), ByteNum::new(8));
    }

    #[test]
    fn test_record_eq_ignores_size() {
        let record_1 = SequenceRecord::with_size("TEST", "", 5, ByteNum::new(10));
        let record_2 = SequenceRecord::with_size("TEST", "", 5, ByteNum::new(12));

        assert_eq!(record_1, record_2);
    }

    #[test]
    fn test_identifier() {
        let identifier = SequenceIdentifier::from(String::from("gene_7"));

        assert_eq!(identifier.len(), 6);
        assert!(!identifier.is_empty());
        assert!(SequenceIdentifier::EMPTY.is_empty());
        assert_eq!(identifier.str(), "gene_7");
        assert_eq!(format!("{}", identifier), "gene_7");
    }
}
