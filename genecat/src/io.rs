use std::io::{self, BufRead, BufReader, Read};

use flate2::bufread::MultiGzDecoder;
use log::debug;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const READ_BUF_SIZE: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputKind {
    Plain,
    Gzip,
}

/// Guesses the input kind from the leading bytes of the stream.
#[must_use]
pub fn detect_input_kind(header: &[u8]) -> InputKind {
    if header.starts_with(&GZIP_MAGIC) {
        InputKind::Gzip
    } else {
        InputKind::Plain
    }
}

/// Wraps given reader into a buffered reader, transparently decompressing
/// gzip (including multi-member and BGZF) input. Returns the detected input
/// kind along with the reader.
///
/// # Examples
/// ```
/// use std::io::Read;
///
/// use genecat::io::decompressing_reader;
///
/// let (_kind, mut reader) = decompressing_reader(&b">a\nACGT\n"[..]).unwrap();
/// let mut data = String::new();
/// reader.read_to_string(&mut data).unwrap();
/// assert_eq!(data, ">a\nACGT\n");
/// ```
pub fn decompressing_reader<'a, R: Read + Send + 'a>(
    reader: R,
) -> io::Result<(InputKind, Box<dyn BufRead + Send + 'a>)> {
    let mut reader = BufReader::with_capacity(READ_BUF_SIZE, reader);
    let kind = detect_input_kind(reader.fill_buf()?);
    debug!("Input kind: {:?}", kind);

    let reader: Box<dyn BufRead + Send + 'a> = match kind {
        InputKind::Plain => Box::new(reader),
        InputKind::Gzip => Box::new(BufReader::with_capacity(
            READ_BUF_SIZE,
            MultiGzDecoder::new(reader),
        )),
    };
    Ok((kind, reader))
}
