use crate::errors::*;

use super::bitmap::Bitmap;

/// Decodes the bytes of an image file into a `Bitmap`.
pub trait BitmapDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap>;
}

impl<F> BitmapDecoder for F
where
    F: Fn(&[u8]) -> Result<Bitmap>,
{
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap> {
        (self)(bytes)
    }
}

/// Decodes PNG, JPEG and BMP files with the `image` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageDecoder {}

impl ImageDecoder {
    pub const EXTENSIONS: [&'static str; 4] = ["png", "jpg", "jpeg", "bmp"];

    pub fn new() -> Self {
        ImageDecoder {}
    }
}

impl BitmapDecoder for ImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap> {
        let image = image::load_from_memory(bytes)
            .map_err(|err| Error::Decode("image".to_owned(), err.to_string()))?
            .to_rgba8();

        let (width, height) = image.dimensions();
        Ok(Bitmap::new(width, height, image.into_raw()))
    }
}
