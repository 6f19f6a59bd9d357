use super::error::BencodeError;

/// A read position over an immutable byte buffer.
///
/// All reads are bounds-checked and borrow from the underlying slice; the
/// buffer itself is never copied.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns the byte at the current offset without advancing.
    pub fn peek(&self) -> Result<u8, BencodeError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(BencodeError::UnexpectedEof { offset: self.pos })
    }

    pub fn advance(&mut self, n: usize) -> Result<(), BencodeError> {
        if n > self.remaining() {
            return Err(BencodeError::UnexpectedEof {
                offset: self.data.len(),
            });
        }
        self.pos += n;
        Ok(())
    }

    /// Returns the next `n` bytes and advances past them.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], BencodeError> {
        if n > self.remaining() {
            return Err(BencodeError::UnexpectedEof {
                offset: self.data.len(),
            });
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }
}
