//! Image intake: size limit, format sniffing, and in-memory display encoding.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use base64::Engine as _;

use crate::error::{ValidationError, VerifyError};

/// Image formats accepted by the upload surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
}

impl ImageFormat {
    /// Identify the format from the leading magic bytes.
    #[must_use]
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::WebP)
        } else if bytes.starts_with(b"BM") {
            Some(Self::Bmp)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
            Self::Bmp => "image/bmp",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// An accepted image held in memory. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    file_name: Option<String>,
    format: ImageFormat,
    bytes: Arc<[u8]>,
}

impl ImagePayload {
    /// Read an image file, enforcing `max_bytes` before reading any content.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ImageTooLarge` when the file exceeds the
    /// limit, `ValidationError::UnsupportedImage` when it is not an image, and
    /// `VerifyError::Io` when it cannot be read.
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self, VerifyError> {
        let io_error = |source| VerifyError::Io {
            path: path.display().to_string(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_error)?.len();
        check_size(size, max_bytes)?;

        let bytes = std::fs::read(path).map_err(io_error)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string);
        Self::from_bytes(bytes, file_name, max_bytes)
    }

    /// Accept an in-memory upload.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ImageTooLarge` or `ValidationError::UnsupportedImage`.
    pub fn from_bytes(
        bytes: Vec<u8>,
        file_name: Option<String>,
        max_bytes: u64,
    ) -> Result<Self, VerifyError> {
        check_size(bytes.len() as u64, max_bytes)?;
        let format = ImageFormat::sniff(&bytes).ok_or(ValidationError::UnsupportedImage)?;
        tracing::debug!(
            file_name = file_name.as_deref().unwrap_or("-"),
            %format,
            bytes = bytes.len(),
            "image accepted"
        );
        Ok(Self {
            file_name,
            format,
            bytes: bytes.into(),
        })
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub const fn format(&self) -> ImageFormat {
        self.format
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// `data:` URL used to display the upload without sending it anywhere.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime(),
            base64::engine::general_purpose::STANDARD.encode(&self.bytes)
        )
    }

    #[cfg(test)]
    pub(crate) fn png_fixture(len: usize) -> Self {
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.resize(len.max(bytes.len()), 0);
        Self::from_bytes(bytes, Some("fixture.png".into()), u64::MAX).expect("valid png")
    }
}

fn check_size(size: u64, max_bytes: u64) -> Result<(), ValidationError> {
    if size > max_bytes {
        tracing::debug!(size, max_bytes, "image rejected before processing");
        return Err(ValidationError::ImageTooLarge {
            size,
            limit: max_bytes,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const LIMIT: u64 = 5 * 1024 * 1024;

    #[rstest]
    #[case(b"\x89PNG\r\n\x1a\nrest".to_vec(), Some(ImageFormat::Png))]
    #[case(vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00], Some(ImageFormat::Jpeg))]
    #[case(b"GIF89a....".to_vec(), Some(ImageFormat::Gif))]
    #[case(b"RIFF\x00\x00\x00\x00WEBPVP8 ".to_vec(), Some(ImageFormat::WebP))]
    #[case(b"BM\x00\x00".to_vec(), Some(ImageFormat::Bmp))]
    #[case(b"%PDF-1.7".to_vec(), None)]
    #[case(Vec::new(), None)]
    fn sniffs_magic_bytes(#[case] bytes: Vec<u8>, #[case] expected: Option<ImageFormat>) {
        assert_eq!(ImageFormat::sniff(&bytes), expected);
    }

    #[test]
    fn accepts_image_at_exact_limit() {
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.resize(usize::try_from(LIMIT).unwrap(), 0);
        let payload = ImagePayload::from_bytes(bytes, None, LIMIT).expect("at limit is fine");
        assert_eq!(payload.size(), LIMIT);
    }

    #[test]
    fn rejects_image_one_byte_over_limit() {
        let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
        bytes.resize(usize::try_from(LIMIT).unwrap() + 1, 0);
        let err = ImagePayload::from_bytes(bytes, None, LIMIT).unwrap_err();
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::ImageTooLarge {
                size: LIMIT + 1,
                limit: LIMIT
            })
        );
    }

    #[test]
    fn rejects_non_image_bytes() {
        let err = ImagePayload::from_bytes(b"hello".to_vec(), None, LIMIT).unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::UnsupportedImage));
    }

    #[test]
    fn data_url_embeds_mime_and_base64() {
        let payload =
            ImagePayload::from_bytes(vec![0xFF, 0xD8, 0xFF], Some("a.jpg".into()), LIMIT)
                .expect("jpeg");
        assert_eq!(payload.data_url(), "data:image/jpeg;base64,/9j/");
        assert_eq!(payload.file_name(), Some("a.jpg"));
    }

    #[test]
    fn from_path_checks_size_before_reading() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("big.png");
        let file = std::fs::File::create(&path).expect("create");
        file.set_len(LIMIT + 10).expect("sparse file");

        let err = ImagePayload::from_path(&path, LIMIT).unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::ImageTooLarge { .. })
        ));
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let err = ImagePayload::from_path(&tmp.path().join("nope.png"), LIMIT).unwrap_err();
        assert!(matches!(err, VerifyError::Io { .. }));
    }

    #[test]
    fn from_path_keeps_file_name() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("photo.gif");
        std::fs::write(&path, b"GIF87a\x01\x00").expect("write");
        let payload = ImagePayload::from_path(&path, LIMIT).expect("gif");
        assert_eq!(payload.file_name(), Some("photo.gif"));
        assert_eq!(payload.format(), ImageFormat::Gif);
    }
}
