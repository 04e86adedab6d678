//! Reading and writing the image formats that borders can be removed from.

use std::{fmt, io::Cursor, str::FromStr};

use image::{
    io::Reader as ImageReader, DynamicImage, ImageError, ImageFormat, ImageOutputFormat,
};

/// Same as the default of most jpeg encoders
pub const JPEG_QUALITY: u8 = 75;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Jpeg,
    Png,
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported image format: {0:?}")]
pub struct UnknownFormat(pub String);

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("not a jpeg or png image")]
    Unsupported,
    #[error("image: {0}")]
    Image(#[from] ImageError),
}

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error(transparent)]
    UnknownFormat(#[from] UnknownFormat),
    #[error("image: {0}")]
    Image(#[from] ImageError),
}

impl ImageKind {
    /// The name of the format, as in `image/<tag>`
    pub fn tag(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpeg",
            ImageKind::Png => "png",
        }
    }

    /// The file extension to use for new files of this kind
    pub fn extension(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "jpg",
            ImageKind::Png => "png",
        }
    }

    pub fn from_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(ImageKind::Jpeg),
            ImageFormat::Png => Some(ImageKind::Png),
            _ => None,
        }
    }

    pub fn format(self) -> ImageFormat {
        match self {
            ImageKind::Jpeg => ImageFormat::Jpeg,
            ImageKind::Png => ImageFormat::Png,
        }
    }

    /// Recognizes the kind by the magic bytes at the start of a file
    pub fn sniff(head: &[u8]) -> Option<Self> {
        image::guess_format(head)
            .ok()
            .and_then(Self::from_format)
    }
}

impl FromStr for ImageKind {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jpeg" => Ok(ImageKind::Jpeg),
            "png" => Ok(ImageKind::Png),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Decodes a jpeg or png image, the format is decided by the content and not by any
/// file name.
pub fn decode(bytes: &[u8]) -> Result<(DynamicImage, ImageKind), DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(ImageError::IoError)?;

    let kind = reader
        .format()
        .and_then(ImageKind::from_format)
        .ok_or(DecodeError::Unsupported)?;

    Ok((reader.decode()?, kind))
}

/// Encodes the image as `kind`. Jpegs can't store transparency, so the alpha channel is
/// dropped for those.
pub fn encode(img: &DynamicImage, kind: ImageKind) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Cursor::new(Vec::new());
    match kind {
        ImageKind::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_to(&mut bytes, ImageOutputFormat::Jpeg(JPEG_QUALITY))?,
        ImageKind::Png => img.write_to(&mut bytes, ImageOutputFormat::Png)?,
    }
    Ok(bytes.into_inner())
}

/// Same as `encode`, but with the format given by its name
pub fn encode_tagged(img: &DynamicImage, tag: &str) -> Result<Vec<u8>, EncodeError> {
    encode(img, tag.parse()?)
}
