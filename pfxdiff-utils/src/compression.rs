//! Transparent decompression of snapshot files, selected by file extension.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;

/// Compression formats supported for input files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    None,
    Gzip,
    Bzip2,
}

impl Compression {
    /// Detect the compression from the file extension (case-insensitive).
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let lower = path.as_ref().to_string_lossy().to_lowercase();
        if lower.ends_with(".gz") || lower.ends_with(".gzip") {
            Self::Gzip
        } else if lower.ends_with(".bz2") || lower.ends_with(".bzip2") {
            Self::Bzip2
        } else {
            Self::None
        }
    }
}

/// Open `path` for line-wise reading, decompressing it on the fly if needed.
pub fn open(path: impl AsRef<Path>) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let compression = Compression::from_path(path);
    log::trace!("Opening {path:?} ({compression:?})");
    Ok(match compression {
        Compression::None => Box::new(BufReader::new(file)),
        Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        Compression::Bzip2 => Box::new(BufReader::new(MultiBzDecoder::new(file))),
    })
}

#[cfg(test)]
mod test {
    use std::io::{Read, Write};

    use super::*;

    #[test]
    fn detects_compression() {
        assert_eq!(Compression::from_path("pfx2as.txt"), Compression::None);
        assert_eq!(Compression::from_path("pfx2as.txt.gz"), Compression::Gzip);
        assert_eq!(Compression::from_path("PFX2AS.GZ"), Compression::Gzip);
        assert_eq!(Compression::from_path("pfx2as_2013-01-01.bz2"), Compression::Bzip2);
        assert_eq!(Compression::from_path("a.bzip2"), Compression::Bzip2);
    }

    #[test]
    fn reads_plain_gzip_and_bzip2() {
        let dir = tempfile::tempdir().unwrap();
        let content = b"# comment\n192.0.2.0/24,1,2,3\n";

        let plain = dir.path().join("snap.txt");
        std::fs::write(&plain, content).unwrap();

        let gz = dir.path().join("snap.gz");
        let mut enc = flate2::write::GzEncoder::new(
            File::create(&gz).unwrap(),
            flate2::Compression::default(),
        );
        enc.write_all(content).unwrap();
        enc.finish().unwrap();

        let bz = dir.path().join("snap.bz2");
        let mut enc = bzip2::write::BzEncoder::new(
            File::create(&bz).unwrap(),
            bzip2::Compression::default(),
        );
        enc.write_all(content).unwrap();
        enc.finish().unwrap();

        for path in [plain, gz, bz] {
            let mut buf = Vec::new();
            open(&path).unwrap().read_to_end(&mut buf).unwrap();
            assert_eq!(buf, content, "content of {path:?} differs");
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(open("/nonexistent/pfx2as.bz2").is_err());
    }
}
