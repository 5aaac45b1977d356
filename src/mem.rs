use log::debug;
use std::io::{self, Read, Write};

/// Number of bytes per output line. `$readmemh()` does not care about the
/// grouping, eight bytes simply keeps the lines short.
pub const LINE_BYTES: usize = 8;

#[derive(Debug)]
pub enum MemError {
    Read(io::Error),
    Write(io::Error),
}

/// Converts a binary image into the ASCII hex format consumed by Verilog's
/// `$readmemh()`. Every group of eight bytes becomes one line of space
/// separated, zero padded lowercase hex pairs; the last line may be shorter
/// if the image length is not a multiple of eight. An empty image produces
/// no output at all.
pub fn transcode<R, W>(mut src: R, mut dst: W) -> Result<(), MemError>
where
    R: Read,
    W: Write,
{
    let mut buf = [0; LINE_BYTES];
    let mut lines = 0;
    let mut bytes = 0;

    loop {
        let len = read_chunk(&mut src, &mut buf).map_err(MemError::Read)?;

        if len == 0 {
            debug!("wrote {} lines ({} bytes)", lines, bytes);
            return Ok(());
        }

        let mut line = String::with_capacity(LINE_BYTES * 3);

        for (idx, byte) in buf[..len].iter().enumerate() {
            if idx > 0 {
                line.push(' ');
            }

            line.push_str(&format!("{:02x}", byte));
        }

        line.push('\n');
        dst.write_all(line.as_bytes()).map_err(MemError::Write)?;

        lines += 1;
        bytes += len;
    }
}

/// Reads from `src` until `buf` is full or the source is exhausted. Returns
/// the number of bytes read, which is less than `buf.len()` only at the end
/// of the source.
fn read_chunk<R: Read>(src: &mut R, buf: &mut [u8]) -> Result<usize, io::Error> {
    let mut len = 0;

    while len < buf.len() {
        match src.read(&mut buf[len..]) {
            Ok(0) => break,
            Ok(n) => len += n,
            Err(ref err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }

    Ok(len)
}
