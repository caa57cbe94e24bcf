//! Index and coordinate containers for the spatial grid dimensions.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// Denotes the radial (level/altitude), latitudinal or longitudinal dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dim3 {
    R = 0,
    Theta = 1,
    Phi = 2,
}

impl Dim3 {
    /// Creates an array for iterating over the r-, theta- and phi-dimensions.
    pub fn slice() -> [Self; 3] {
        [Self::R, Self::Theta, Self::Phi]
    }

    /// Returns the number of the dimension.
    pub fn num(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dim3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::R => "r",
                Self::Theta => "theta",
                Self::Phi => "phi",
            }
        )
    }
}

use Dim3::{Phi, Theta, R};

/// Represents any quantity with three spatial components.
#[derive(Clone, Debug, PartialEq)]
pub struct In3D<T>([T; 3]);

impl<T> In3D<T> {
    /// Creates a new 3D quantity given the three components.
    pub fn new(r: T, theta: T, phi: T) -> Self {
        Self([r, theta, phi])
    }

    /// Creates a new 3D quantity by evaluating the given component
    /// constructor for each dimension.
    pub fn with_each_component<C>(create_component: C) -> Self
    where
        C: Fn(Dim3) -> T,
    {
        Self::new(
            create_component(R),
            create_component(Theta),
            create_component(Phi),
        )
    }

    /// Creates a new 3D quantity with the given value copied into all components.
    pub fn same(a: T) -> Self
    where
        T: Copy,
    {
        Self([a, a, a])
    }

    /// Creates a new tuple containing copies of the three components.
    pub fn to_tuple(&self) -> (T, T, T)
    where
        T: Copy,
    {
        (self[R], self[Theta], self[Phi])
    }
}

impl<T> Index<Dim3> for In3D<T> {
    type Output = T;
    fn index(&self, dim: Dim3) -> &Self::Output {
        &self.0[dim as usize]
    }
}

impl<T> IndexMut<Dim3> for In3D<T> {
    fn index_mut(&mut self, dim: Dim3) -> &mut Self::Output {
        &mut self.0[dim as usize]
    }
}

impl<'a, T> IntoIterator for &'a In3D<T> {
    type Item = &'a T;
    type IntoIter = ::std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: fmt::Display> fmt::Display for In3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        fmt::Display::fmt(&self[R], f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self[Theta], f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self[Phi], f)?;
        f.write_str("]")
    }
}

/// 3D index of a grid node, ordered (level, latitude, longitude).
pub type Idx3 = In3D<usize>;

impl Idx3 {
    /// Returns a copy of the index with the given component replaced.
    pub fn with_component(&self, dim: Dim3, value: usize) -> Self {
        let mut idx = self.clone();
        idx[dim] = value;
        idx
    }

    /// Returns the index of the given corner of the grid cell whose lower corner is this index.
    pub fn corner(&self, corner: usize) -> Self {
        let [dr, dtheta, dphi] = CELL_CORNER_OFFSETS[corner];
        Self::new(self[R] + dr, self[Theta] + dtheta, self[Phi] + dphi)
    }
}

/// Number of corners of a grid cell.
pub const N_CELL_CORNERS: usize = 8;

/// Offsets of the corners of a grid cell relative to its lower corner,
/// with the r-offset varying fastest.
pub const CELL_CORNER_OFFSETS: [[usize; 3]; N_CELL_CORNERS] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn corner_offsets_follow_flat_corner_numbering() {
        for (corner, offsets) in CELL_CORNER_OFFSETS.iter().enumerate() {
            assert_eq!(offsets[0] + 2 * offsets[1] + 4 * offsets[2], corner);
        }
        let lower = Idx3::new(3, 7, 1);
        assert_eq!(lower.corner(6), Idx3::new(3, 8, 2));
        assert_eq!(lower.with_component(Theta, 0), Idx3::new(3, 0, 1));
    }
}
