use std::cell::Cell;

use super::WIDTH;

/// Byte region an [`Int64`](super::Int64) can read its octets from.
///
/// Implementors never change length while borrowed, so a bounds check done
/// once at construction holds for the whole lifetime of the value.
pub trait Storage {
    fn len(&self) -> usize;

    /// Panics if `index` is out of bounds.
    fn octet(&self, index: usize) -> u8;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_octets(&self, offset: usize) -> [u8; WIDTH] {
        let mut octets = [0; WIDTH];
        for (i, octet) in octets.iter_mut().enumerate() {
            *octet = self.octet(offset + i);
        }
        octets
    }
}

/// Byte region an [`Int64`](super::Int64) can also write to.
pub trait StorageMut: Storage {
    fn set_octet(&mut self, index: usize, value: u8);

    fn write_octets(&mut self, offset: usize, octets: &[u8; WIDTH]) {
        for (i, octet) in octets.iter().enumerate() {
            self.set_octet(offset + i, *octet);
        }
    }
}

impl Storage for [u8; WIDTH] {
    fn len(&self) -> usize {
        WIDTH
    }

    fn octet(&self, index: usize) -> u8 {
        self[index]
    }

    fn read_octets(&self, _offset: usize) -> [u8; WIDTH] {
        *self
    }
}

impl StorageMut for [u8; WIDTH] {
    fn set_octet(&mut self, index: usize, value: u8) {
        self[index] = value;
    }

    fn write_octets(&mut self, _offset: usize, octets: &[u8; WIDTH]) {
        *self = *octets;
    }
}

impl Storage for &[u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn octet(&self, index: usize) -> u8 {
        self[index]
    }
}

impl Storage for &mut [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn octet(&self, index: usize) -> u8 {
        self[index]
    }
}

impl StorageMut for &mut [u8] {
    fn set_octet(&mut self, index: usize, value: u8) {
        self[index] = value;
    }

    fn write_octets(&mut self, offset: usize, octets: &[u8; WIDTH]) {
        self[offset..offset + WIDTH].copy_from_slice(octets);
    }
}

// Shared view: writes go through `Cell`, so the owner and any other view
// over the same bytes observe them immediately.
impl Storage for &[Cell<u8>] {
    fn len(&self) -> usize {
        <[Cell<u8>]>::len(self)
    }

    fn octet(&self, index: usize) -> u8 {
        self[index].get()
    }
}

impl StorageMut for &[Cell<u8>] {
    fn set_octet(&mut self, index: usize, value: u8) {
        self[index].set(value);
    }
}
