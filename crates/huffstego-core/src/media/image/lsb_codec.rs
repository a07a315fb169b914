use image::RgbImage;
use log::{debug, error};

use super::iterators::{ColorIter, ColorIterMut};
use crate::media::{HideBit, UnveilBit};
use crate::{Bitstream, HuffstegoError, Result};

/// One bit per color channel, rows first, then pixels, then channels 0, 1, 2.
///
/// ```rust
/// use huffstego_core::{Bitstream, LsbCodec};
/// use image::RgbImage;
///
/// let mut carrier = RgbImage::from_pixel(2, 1, image::Rgb([200, 201, 202]));
/// let bits: Bitstream = "1110".parse().unwrap();
///
/// LsbCodec::embed(&mut carrier, &bits).unwrap();
/// assert_eq!(LsbCodec::extract(&carrier, bits.len()), bits);
/// ```
pub struct LsbCodec;

impl LsbCodec {
    /// number of bits the image can carry
    pub fn capacity(image: &RgbImage) -> usize {
        let (width, height) = image.dimensions();
        width as usize * height as usize * 3
    }

    /// writes `bits` into the least significant bits of `carrier`.
    ///
    /// Channels after the last written bit stay untouched, a bitstream that
    /// does not fit is rejected before anything is written.
    pub fn embed(carrier: &mut RgbImage, bits: &Bitstream) -> Result<()> {
        let capacity = Self::capacity(carrier);
        if bits.len() > capacity {
            error!(
                "cannot hide {} bits in a {}x{} image",
                bits.len(),
                carrier.width(),
                carrier.height()
            );
            return Err(HuffstegoError::CapacityExceeded {
                required: bits.len(),
                capacity,
            });
        }

        for (color, bit) in ColorIterMut::new(carrier).zip(bits.iter()) {
            color.hide_bit(bit);
        }
        debug!("embedded {} of {} possible bits", bits.len(), capacity);

        Ok(())
    }

    /// reads `bit_count` bits back, fewer if the image ends earlier
    pub fn extract(image: &RgbImage, bit_count: usize) -> Bitstream {
        let bits: Bitstream = ColorIter::new(image)
            .take(bit_count)
            .map(UnveilBit::unveil_bit)
            .collect();
        if bits.len() < bit_count {
            debug!(
                "image holds only {} of {} requested bits",
                bits.len(),
                bit_count
            );
        }

        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_4x3_linear_growing_colors, prepare_5x5_noise_image};

    fn bits(s: &str) -> Bitstream {
        s.parse().unwrap()
    }

    #[test]
    fn should_embed_the_aaab_bits_in_a_2x1_image() {
        let mut img = RgbImage::from_pixel(2, 1, image::Rgb([0b1010, 0b1011, 0b1010]));
        assert_eq!(LsbCodec::capacity(&img), 6);

        LsbCodec::embed(&mut img, &bits("1110")).unwrap();

        assert_eq!(img.get_pixel(0, 0).0, [0b1011, 0b1011, 0b1011]);
        // the last two channels keep their original values
        assert_eq!(img.get_pixel(1, 0).0, [0b1010, 0b1011, 0b1010]);
        assert_eq!(LsbCodec::extract(&img, 4), bits("1110"));
    }

    #[test]
    fn should_follow_row_major_order() {
        let mut img = RgbImage::new(2, 2);
        LsbCodec::embed(&mut img, &bits("0000001")).unwrap();

        // bit 7 lands in the first channel of the first pixel of the second row
        assert_eq!(img.get_pixel(0, 1).0, [1, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0]);
    }

    #[test]
    fn should_round_trip_and_leave_the_rest_untouched() {
        let original = prepare_5x5_noise_image();
        let mut img = original.clone();
        let payload: Bitstream = (0..40).map(|i| i % 3 == 0).collect();

        LsbCodec::embed(&mut img, &payload).unwrap();
        assert_eq!(LsbCodec::extract(&img, payload.len()), payload);

        let changed = ColorIter::new(&original).zip(ColorIter::new(&img));
        for (i, (before, after)) in changed.enumerate() {
            if i < payload.len() {
                assert_eq!(before >> 1, after >> 1, "channel {i} changed more than its LSB");
            } else {
                assert_eq!(before, after, "channel {i} should be untouched");
            }
        }
    }

    #[test]
    fn should_accept_exactly_the_capacity() {
        let mut img = prepare_4x3_linear_growing_colors();
        let payload: Bitstream = (0..LsbCodec::capacity(&img)).map(|i| i % 2 == 1).collect();

        LsbCodec::embed(&mut img, &payload).unwrap();
        assert_eq!(LsbCodec::extract(&img, payload.len()), payload);
    }

    #[test]
    fn should_reject_one_bit_more_than_the_capacity_without_writing() {
        let original = prepare_4x3_linear_growing_colors();
        let mut img = original.clone();
        let payload: Bitstream = (0..=LsbCodec::capacity(&img)).map(|_| true).collect();

        match LsbCodec::embed(&mut img, &payload) {
            Err(HuffstegoError::CapacityExceeded {
                required: 37,
                capacity: 36,
            }) => (),
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
        assert_eq!(img, original);
    }

    #[test]
    fn extraction_stops_at_the_end_of_the_image() {
        let img = prepare_4x3_linear_growing_colors();
        let extracted = LsbCodec::extract(&img, 1000);
        assert_eq!(extracted.len(), 36);
    }

    #[test]
    fn empty_bitstream_changes_nothing() {
        let original = prepare_5x5_noise_image();
        let mut img = original.clone();
        LsbCodec::embed(&mut img, &Bitstream::new()).unwrap();
        assert_eq!(img, original);
        assert!(LsbCodec::extract(&img, 0).is_empty());
    }
}
