use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::debug;

use crate::error::SteganoError;
use crate::result::Result;

/// Marks the start of a hidden envelope.
pub const MAGIC: u16 = 0x1337;

/// magic (2) + filename length (2) + content length (4)
pub const HEADER_LEN: usize = 8;
pub const HEADER_BITS: usize = HEADER_LEN * 8;

/// Fixed size header in front of every envelope, all fields little endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeHeader {
    pub filename_len: u16,
    pub content_len: u32,
}

impl EnvelopeHeader {
    /// Parses a header, `None` when the magic is not there.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let mut reader = Cursor::new(bytes);
        let magic = reader.read_u16::<LittleEndian>().ok()?;
        if magic != MAGIC {
            debug!("no envelope magic, found {magic:#06x}");
            return None;
        }
        let filename_len = reader.read_u16::<LittleEndian>().ok()?;
        let content_len = reader.read_u32::<LittleEndian>().ok()?;

        Some(Self {
            filename_len,
            content_len,
        })
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_u16::<LittleEndian>(MAGIC)?;
        writer.write_u16::<LittleEndian>(self.filename_len)?;
        writer.write_u32::<LittleEndian>(self.content_len)?;

        Ok(())
    }

    /// Length of the whole envelope in bytes, header included.
    ///
    /// `None` when it does not fit into `usize`, which a forged header can
    /// cause on 32 bit targets.
    pub fn envelope_len(&self) -> Option<usize> {
        HEADER_LEN
            .checked_add(self.filename_len as usize)?
            .checked_add(usize::try_from(self.content_len).ok()?)
    }

    pub fn envelope_bits(&self) -> Option<usize> {
        self.envelope_len()?.checked_mul(8)
    }
}

/// A filename and some content, as they are hidden in the image.
///
/// The filename is stored with one byte per character (Latin-1), the content
/// verbatim. Any encryption of the content happens before it gets here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    filename: String,
    content: Vec<u8>,
}

impl Envelope {
    pub fn new<S: Into<String>>(filename: S, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.filename, self.content)
    }

    /// Validates the field sizes and returns the header describing them.
    pub fn header(&self) -> Result<EnvelopeHeader> {
        let filename_len = latin1_len(&self.filename)?;
        let filename_len = u16::try_from(filename_len).map_err(|_| SteganoError::FieldOverflow {
            field: "filename",
            len: filename_len,
        })?;
        let content_len =
            u32::try_from(self.content.len()).map_err(|_| SteganoError::FieldOverflow {
                field: "content",
                len: self.content.len(),
            })?;

        Ok(EnvelopeHeader {
            filename_len,
            content_len,
        })
    }

    /// Serializes header, filename and content.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let header = self.header()?;
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.filename.len() + self.content.len());

        header.write_to(&mut bytes)?;
        bytes.extend(self.filename.chars().map(|c| c as u8));
        bytes.extend_from_slice(&self.content);

        Ok(bytes)
    }

    /// Parses a complete envelope, `None` if the magic is missing or the
    /// bytes end before the lengths announced by the header.
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let header = EnvelopeHeader::parse(bytes)?;
        let len = header.envelope_len()?;
        if bytes.len() < len {
            debug!("envelope truncated, {} of {len} bytes available", bytes.len());
            return None;
        }

        let mut body = &bytes[HEADER_LEN..len];
        let mut filename = vec![0; header.filename_len as usize];
        body.read_exact(&mut filename).ok()?;
        let filename = filename.into_iter().map(char::from).collect();

        Some(Self {
            filename,
            content: body.to_vec(),
        })
    }
}

/// Byte length of `text` in Latin-1, which is its char count.
fn latin1_len(text: &str) -> Result<usize> {
    if text.chars().any(|c| c as u32 > 0xff) {
        return Err(SteganoError::InvalidFileName);
    }

    Ok(text.chars().count())
}
