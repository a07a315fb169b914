/// A carrier primitive that can store one bit in its least significant bit
pub trait HideBit {
    fn hide_bit(&mut self, bit: bool);
}

/// A carrier primitive that reveals the bit stored in its least significant bit
pub trait UnveilBit {
    fn unveil_bit(&self) -> bool;
}

impl HideBit for u8 {
    fn hide_bit(&mut self, bit: bool) {
        *self = (*self & (u8::MAX - 1)) | u8::from(bit);
    }
}

impl UnveilBit for u8 {
    fn unveil_bit(&self) -> bool {
        self & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_only_touch_the_least_significant_bit() {
        let mut color: u8 = 0b1010_1010;
        color.hide_bit(true);
        assert_eq!(color, 0b1010_1011);
        color.hide_bit(false);
        assert_eq!(color, 0b1010_1010);
        assert!(!color.unveil_bit());
    }
}
