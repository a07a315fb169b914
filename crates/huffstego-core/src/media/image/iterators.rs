use image::buffer::{Pixels, PixelsMut};
use image::{Pixel, Rgb, RgbImage};
use std::slice::{Iter, IterMut};

/// Mutable access to every color channel, row by row, pixel by pixel,
/// channel 0, 1, 2 within a pixel
pub(crate) struct ColorIterMut<'a> {
    pixels: PixelsMut<'a, Rgb<u8>>,
    colors: Option<IterMut<'a, u8>>,
}

impl<'a> ColorIterMut<'a> {
    pub fn new(image: &'a mut RgbImage) -> Self {
        Self {
            pixels: image.pixels_mut(),
            colors: None,
        }
    }
}

impl<'a> Iterator for ColorIterMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(color);
            }
            self.colors = Some(self.pixels.next()?.channels_mut().iter_mut());
        }
    }
}

/// Readonly counterpart of [`ColorIterMut`], same order
pub(crate) struct ColorIter<'a> {
    pixels: Pixels<'a, Rgb<u8>>,
    colors: Option<Iter<'a, u8>>,
}

impl<'a> ColorIter<'a> {
    pub fn new(image: &'a RgbImage) -> Self {
        Self {
            pixels: image.pixels(),
            colors: None,
        }
    }
}

impl<'a> Iterator for ColorIter<'a> {
    type Item = &'a u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.colors.as_mut().and_then(Iterator::next) {
                return Some(color);
            }
            self.colors = Some(self.pixels.next()?.channels().iter());
        }
    }
}
