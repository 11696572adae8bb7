use std::ops::Range;
use std::slice::Iter;

use crate::permutation::Permutation;

/// Offsets into raw channel data, pixel by pixel in permuted order and the
/// channels of every pixel left to right.
///
/// Encoder and decoder both walk the carrier with this iterator, so their
/// traversal order is the same by construction.
pub(crate) struct PermutedChannels<'a> {
    order: Iter<'a, usize>,
    channels: usize,
    current: Range<usize>,
}

impl<'a> PermutedChannels<'a> {
    pub fn new(order: &'a Permutation, channels: usize) -> Self {
        Self {
            order: order.iter(),
            channels,
            current: 0..0,
        }
    }
}

impl Iterator for PermutedChannels<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(offset) = self.current.next() {
                return Some(offset);
            }
            let pixel = *self.order.next()?;
            self.current = pixel * self.channels..(pixel + 1) * self.channels;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.current.len() + self.order.len() * self.channels;
        (len, Some(len))
    }
}

impl ExactSizeIterator for PermutedChannels<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_visit_channels_of_each_pixel_in_order() {
        let order = Permutation::identity(3);
        let offsets: Vec<usize> = PermutedChannels::new(&order, 4).collect();

        assert_eq!(offsets, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn should_follow_the_permutation() {
        let order = Permutation::from_password("secret", 6);
        let offsets: Vec<usize> = PermutedChannels::new(&order, 3).collect();

        assert_eq!(offsets.len(), 18);
        for (step, pixel) in order.iter().enumerate() {
            assert_eq!(
                &offsets[step * 3..step * 3 + 3],
                &[pixel * 3, pixel * 3 + 1, pixel * 3 + 2]
            );
        }
    }

    #[test]
    fn should_report_exact_length() {
        let order = Permutation::identity(5);
        let mut offsets = PermutedChannels::new(&order, 1);

        assert_eq!(offsets.len(), 5);
        offsets.next();
        assert_eq!(offsets.len(), 4);
        assert_eq!(PermutedChannels::new(&Permutation::identity(0), 4).next(), None);
    }
}
