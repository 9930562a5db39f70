#![doc = include_str!("../README.md")]
#![allow(
    unsafe_code,
    // reason = "values are stored as MaybeUninit, with the occupancy mask as the source of truth"
)]

use std::{
    fmt,
    mem::MaybeUninit,
    ops::{Index, IndexMut},
};

use bitvec::{array::BitArray, order::Lsb0};

mod macros;

// reexport so that callers can name the mask type without depending on bitvec themselves
pub use bitvec;

/// Bit mask of occupied slots. Bit `i` is set ⟺ slot `i` holds a value.
pub type SlotMask = BitArray<[u64; 1], Lsb0>;

/// Largest capacity a [SlotArray] can have.
pub const MAX_CAPACITY: usize = u64::BITS as usize;

/// A fixed-size array of optional values; comparable to `[Option<T>; N]`.
///
/// # Invariants
///
/// * `N` <= [MAX_CAPACITY]
/// * `data[i]` is initialized ⟺ `flags[i] == true`
/// * `flags[i] == false` for all `i >= N`
/// * `count == flags.count_ones()`
pub struct SlotArray<T, const N: usize> {
    data: [MaybeUninit<T>; N],
    flags: SlotMask,
    count: usize,
}

impl<T, const N: usize> SlotArray<T, N> {
    const CAPACITY_CHECK: () = assert!(N <= MAX_CAPACITY, "SlotArray capacity exceeds 64");

    /// Create a new, empty [SlotArray].
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            data: std::array::from_fn(|_| MaybeUninit::uninit()),
            flags: SlotMask::ZERO,
            count: 0,
        }
    }

    /// The number of slots in this array, occupied or not.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The number of occupied slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// The occupancy mask.
    #[inline]
    pub fn mask(&self) -> &SlotMask {
        &self.flags
    }

    #[inline]
    pub fn is_occupied(&self, index: usize) -> bool {
        index < N && self.flags[index]
    }

    /// The lowest unoccupied slot, if any.
    pub fn first_free(&self) -> Option<usize> {
        self.flags[..N].first_zero()
    }

    /// Get the value at a specific slot.
    ///
    /// # Safety
    ///
    /// * `index` < `N`
    /// * slot `index` must be occupied
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.data.get_unchecked(index).assume_init_ref() }
    }

    /// Get the value at a specific slot.
    ///
    /// # Safety
    ///
    /// * `index` < `N`
    /// * slot `index` must be occupied
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.data.get_unchecked_mut(index).assume_init_mut() }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if self.is_occupied(index) {
            Some(unsafe { self.get_unchecked(index) })
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if self.is_occupied(index) {
            Some(unsafe { self.get_unchecked_mut(index) })
        } else {
            None
        }
    }

    /// Set the value of a slot and return its previous value, if extant.
    ///
    /// # Panics
    ///
    /// * `index` >= `N`
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        assert!(index < N, "slot out of range: 0..{N} ∌ {index}");
        let prev = if self.flags.replace(index, true) {
            Some(unsafe { self.data[index].assume_init_read() })
        } else {
            self.count += 1;
            None
        };
        self.data[index].write(value);
        prev
    }

    /// Empty a slot, returning the value it held.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if !self.is_occupied(index) {
            return None;
        }
        self.flags.set(index, false);
        self.count -= 1;
        Some(unsafe { self.data[index].assume_init_read() })
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        for i in self.flags.iter_ones() {
            unsafe { self.data[i].assume_init_drop() };
        }
        self.flags = SlotMask::ZERO;
        self.count = 0;
    }

    /// Iterate through occupied slots in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.flags
            .iter_ones()
            .map(move |i| (i, unsafe { self.data[i].assume_init_ref() }))
    }

    /// Iterate mutably through occupied slots in ascending order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        let flags = &self.flags;
        self.data
            .iter_mut()
            .enumerate()
            .filter(move |(i, _)| flags[*i])
            .map(|(i, v)| (i, unsafe { v.assume_init_mut() }))
    }

    /// Iterate through occupied slot indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags.iter_ones()
    }

    /// Construct a new [SlotArray] with the same occupancy, where each value is `f(slot, value)`.
    pub fn map<U>(&self, mut f: impl FnMut(usize, &T) -> U) -> SlotArray<U, N> {
        let mut res = SlotArray::new();
        for (i, v) in self.iter() {
            res.set(i, f(i, v));
        }
        res
    }

    /// As [map](Self::map), but stops at the first error.
    pub fn try_map<U, E>(
        &self,
        mut f: impl FnMut(usize, &T) -> Result<U, E>,
    ) -> Result<SlotArray<U, N>, E> {
        let mut res = SlotArray::new();
        for (i, v) in self.iter() {
            res.set(i, f(i, v)?);
        }
        Ok(res)
    }
}

impl<T, const N: usize> Default for SlotArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for SlotArray<T, N> {
    fn drop(&mut self) {
        for i in self.flags.iter_ones() {
            unsafe { self.data[i].assume_init_drop() };
        }
    }
}

impl<T: Clone, const N: usize> Clone for SlotArray<T, N> {
    fn clone(&self) -> Self {
        self.map(|_, v| v.clone())
    }
}

impl<T: PartialEq, const N: usize> PartialEq for SlotArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.flags == other.flags && self.iter().zip(other.iter()).all(|(a, b)| a.1 == b.1)
    }
}

impl<T: Eq, const N: usize> Eq for SlotArray<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for SlotArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> FromIterator<(usize, T)> for SlotArray<T, N> {
    /// # Panics
    ///
    /// * if any slot is >= `N`
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut res = Self::new();
        for (i, v) in iter {
            res.set(i, v);
        }
        res
    }
}

impl<T, const N: usize> Index<usize> for SlotArray<T, N> {
    type Output = T;

    /// # Panics
    ///
    /// * slot `index` is unoccupied
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(v) => v,
            None => panic!("attempted to access unoccupied slot {index}"),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for SlotArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Some(v) => v,
            None => panic!("attempted to access unoccupied slot {index}"),
        }
    }
}

