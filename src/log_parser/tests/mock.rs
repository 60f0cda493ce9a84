use std::io::{self, Cursor, Read};

// Reader handing out its input in the chunks it was given, or failing.
#[derive(Clone, Debug)]
pub struct MockRead {
    read: Cursor<Vec<u8>>,
    next_reads: Vec<Vec<u8>>,
    pub error_on_read: bool,
    pub read_calls: usize,
}

impl MockRead {
    pub fn with_input(input: &[u8]) -> MockRead {
        MockRead::with_chunks(vec![input])
    }

    pub fn with_chunks(mut chunks: Vec<&[u8]>) -> MockRead {
        MockRead {
            read: Cursor::new(chunks.remove(0).to_vec()),
            next_reads: chunks.into_iter().map(|chunk| chunk.to_vec()).collect(),
            error_on_read: false,
            read_calls: 0,
        }
    }
}

impl Read for MockRead {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_calls += 1;

        if self.error_on_read {
            return Err(io::Error::new(io::ErrorKind::Other, "mock error"));
        }

        let n = self.read.read(buf)?;
        if self.read.position() as usize == self.read.get_ref().len() && !self.next_reads.is_empty() {
            self.read = Cursor::new(self.next_reads.remove(0));
        }
        Ok(n)
    }
}
