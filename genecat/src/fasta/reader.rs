use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::io::BufRead;

use crate::fasta::{FASTA_COMMENT_PREFIX, FASTA_TITLE_PREFIX};
use crate::progress::ByteNum;
use crate::sequence::SequenceRecord;

/// Error occurring during parsing a FASTA file.
#[derive(Debug)]
pub enum FastaReaderError {
    /// I/O error occurred when reading the FASTA file.
    IoError(std::io::Error),
    /// End-Of-File reached before the next record started.
    EofReached,
    /// Not a valid FASTA file; contains the 1-based number of the offending
    /// line.
    InvalidFormat(usize),
    /// Title line is not valid UTF-8.
    InvalidTitle(usize),
}

impl From<std::io::Error> for FastaReaderError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}

impl Display for FastaReaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FastaReaderError::IoError(e) => write!(f, "IO error: {}", e),
            FastaReaderError::EofReached => write!(f, "Reached the end of file"),
            FastaReaderError::InvalidFormat(line) => {
                write!(f, "Invalid format: expected `>` at line {}", line)
            }
            FastaReaderError::InvalidTitle(line) => {
                write!(f, "Title is not valid UTF-8 at line {}", line)
            }
        }
    }
}

impl Error for FastaReaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FastaReaderError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

/// The result of a FASTA reading operation.
pub type FastaResult<T> = Result<T, FastaReaderError>;

/// A builder for `FastaReaderParams`.
#[derive(Debug, Clone)]
pub struct FastaReaderParamsBuilder {
    delimiter: u8,
}

impl FastaReaderParamsBuilder {
    /// Returns a new instance of `FastaReaderParamsBuilder`.
    #[must_use]
    pub fn new() -> Self {
        Self { delimiter: b'\n' }
    }

    /// Sets the delimiter character to use instead of a newline.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        let mut new = self;
        new.delimiter = delimiter;
        new
    }

    /// Builds and returns [`FastaReaderParams`].
    pub fn build(&self) -> FastaReaderParams {
        FastaReaderParams {
            delimiter: self.delimiter,
        }
    }
}

impl Default for FastaReaderParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// FASTA reading params.
#[derive(Debug, Clone)]
pub struct FastaReaderParams {
    delimiter: u8,
}

impl FastaReaderParams {
    /// Returns new builder for `FastaReaderParams`.
    #[must_use]
    pub fn builder() -> FastaReaderParamsBuilder {
        FastaReaderParamsBuilder::new()
    }
}

impl Default for FastaReaderParams {
    fn default() -> Self {
        FastaReaderParamsBuilder::default().build()
    }
}

/// FASTA format reader that turns each record into a [`SequenceRecord`]
/// without keeping the residues in memory.
#[derive(Debug)]
pub struct FastaReader<R> {
    reader: R,
    params: FastaReaderParams,
    bytes_read: usize,
    line_num: usize,
    buffer: Vec<u8>,
}

impl<R: BufRead> FastaReader<R> {
    /// Creates new `FastaReader` instance with default parameters.
    ///
    /// # Examples
    /// ```
    /// use genecat::fasta::reader::FastaReader;
    ///
    /// let buf = Vec::new();
    /// let _reader = FastaReader::new(buf.as_slice());
    /// ```
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_params(reader, FastaReaderParams::default())
    }

    /// Creates new `FastaReader` instance with given parameters.
    ///
    /// # Examples
    /// ```
    /// use genecat::fasta::reader::{FastaReader, FastaReaderParams};
    ///
    /// let buf = Vec::new();
    /// let params = FastaReaderParams::builder().delimiter(b'#').build();
    /// let _reader = FastaReader::with_params(buf.as_slice(), params);
    /// ```
    #[must_use]
    pub fn with_params(reader: R, params: FastaReaderParams) -> Self {
        Self {
            reader,
            params,
            bytes_read: 0,
            line_num: 0,
            buffer: Vec::with_capacity(4096),
        }
    }

    /// Reads a single record from given reader.
    pub fn read_record(&mut self) -> FastaResult<SequenceRecord> {
        self.bytes_read = 0;
        let (identifier, description) = self.parse_title()?;
        let length = self.parse_residues()?;

        let size = ByteNum::new(self.bytes_read);
        let record = SequenceRecord::with_size(identifier, description, length, size);
        Ok(record)
    }

    /// Reads the title line of the next record, skipping blank and comment
    /// lines, and splits it into the identifier and the description.
    ///
    /// A title without any text (a bare `>`) yields an empty identifier.
    pub fn parse_title(&mut self) -> FastaResult<(String, String)> {
        loop {
            let line = Self::read_line(
                &mut self.reader,
                self.params.delimiter,
                &mut self.buffer,
                &mut self.bytes_read,
            )?;
            self.line_num += 1;

            let start = match line.iter().position(|ch| !ch.is_ascii_whitespace()) {
                Some(start) => start,
                None => continue,
            };
            let line = &line[start..];

            if line[0] == FASTA_COMMENT_PREFIX {
                continue;
            }
            if line[0] != FASTA_TITLE_PREFIX {
                return Err(FastaReaderError::InvalidFormat(self.line_num));
            }

            let title = std::str::from_utf8(&line[1..])
                .map_err(|_| FastaReaderError::InvalidTitle(self.line_num))?
                .trim();
            let (identifier, description) = match title.split_once(char::is_whitespace) {
                Some((identifier, description)) => (identifier, description.trim()),
                None => (title, ""),
            };
            return Ok((identifier.to_owned(), description.to_owned()));
        }
    }

    /// Reads sequence lines up to the next title line (or the end of file)
    /// and returns the number of residues.
    pub fn parse_residues(&mut self) -> FastaResult<usize> {
        let mut length = 0;

        loop {
            let next = self.reader.fill_buf()?;
            if next.first().map_or(true, |&ch| ch == FASTA_TITLE_PREFIX) {
                break;
            }

            let line = Self::read_line(
                &mut self.reader,
                self.params.delimiter,
                &mut self.buffer,
                &mut self.bytes_read,
            )?;
            self.line_num += 1;

            length += line.iter().filter(|ch| !ch.is_ascii_whitespace()).count();
        }

        Ok(length)
    }

    fn read_line<'a, T: BufRead>(
        mut buf_reader: T,
        delimiter: u8,
        buffer: &'a mut Vec<u8>,
        total_bytes_read: &mut usize,
    ) -> FastaResult<&'a [u8]> {
        buffer.clear();
        let bytes_read = buf_reader.read_until(delimiter, buffer)?;
        if bytes_read == 0 {
            return Err(FastaReaderError::EofReached);
        }
        *total_bytes_read += bytes_read;

        let mut buffer = buffer.as_slice();
        while matches!(buffer.last().copied(), Some(ch) if ch == delimiter || ch == b'\r') {
            buffer = &buffer[..buffer.len() - 1];
        }

        Ok(buffer)
    }
}

impl<R: BufRead> IntoIterator for FastaReader<R> {
    type Item = FastaResult<SequenceRecord>;
    type IntoIter = FastaReaderIterator<R>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            reader: self,
            no_errors: true,
        }
    }
}

/// Iterator implementation for [`FastaReader`] which iterates over all
/// records in a file.
#[derive(Debug)]
pub struct FastaReaderIterator<R> {
    reader: FastaReader<R>,
    no_errors: bool,
}

impl<R: BufRead> Iterator for FastaReaderIterator<R> {
    type Item = FastaResult<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.no_errors {
            return None;
        }

        let result = self.reader.read_record();
        if result.is_err() {
            self.no_errors = false;
            if matches!(result, Err(FastaReaderError::EofReached)) {
                return None;
            }
        }
        Some(result)
    }
}
