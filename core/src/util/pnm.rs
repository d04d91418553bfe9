//! PPM image output, for saving rendered frames to disk.
//!
//! PPM is a member of the venerable PNM (NetPBM) family of extremely simple
//! image formats: a short textual header followed by pixel data. Only the
//! binary RGB sub-format, P6, is supported.

use core::fmt::{self, Display, Formatter};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::math::color::Color3;
use crate::util::buf::AsSlice2;

/// The header of a PPM image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Header {
    width: usize,
    height: usize,
    max: u16,
}

impl Header {
    /// Writes `self` to `dest` as a valid P6 header,
    /// including a trailing newline.
    fn write(&self, mut dest: impl Write) -> io::Result<()> {
        writeln!(dest, "{self}")
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { width, height, max } = *self;
        write!(f, "P6 {width} {height} {max}")
    }
}

/// Writes an image to a file in PPM format, P6 sub-format
/// (binary 8-bits-per-channel RGB).
///
/// Caution: This function overwrites the file if it already exists.
/// Use [`write_ppm`] for more control over file creation.
///
/// # Errors
/// Returns [`std::io::Error`] if an error occurs while writing.
pub fn save_ppm(
    path: impl AsRef<Path>,
    data: impl AsSlice2<Color3>,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_ppm(&mut out, data)?;
    out.flush()
}

/// Writes an image to `out` in PPM format, P6 sub-format
/// (binary 8-bits-per-channel RGB).
///
/// # Errors
/// Returns [`std::io::Error`] if an error occurs while writing.
pub fn write_ppm(
    mut out: impl Write,
    data: impl AsSlice2<Color3>,
) -> io::Result<()> {
    let slice = data.as_slice2();
    Header {
        width: slice.width(),
        height: slice.height(),
        max: 255,
    }
    .write(&mut out)?;

    slice
        .iter()
        .try_for_each(|c| out.write_all(&c.0[..]))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::math::color::rgb;
    use crate::util::buf::Buf2;

    #[test]
    fn header_format() {
        let h = Header { width: 800, height: 600, max: 255 };
        assert_eq!(alloc::format!("{h}"), "P6 800 600 255");
    }

    #[test]
    fn write_ppm_to_vec() {
        let buf = Buf2::new_with(2, 2, |x, y| rgb(x as u8, y as u8, 0xFF));

        let mut out = Vec::new();
        write_ppm(&mut out, &buf).unwrap();

        assert_eq!(
            &out[..],
            b"P6 2 2 255\n\
              \x00\x00\xFF\x01\x00\xFF\
              \x00\x01\xFF\x01\x01\xFF"
        );
    }
}
