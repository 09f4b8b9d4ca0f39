use std::ops::{Deref, DerefMut, Index, IndexMut};

/// A slot array whose length is fixed when it is built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Array<T> {
    inner: Box<[T]>,
}

impl<T> Array<T> {
    /// Allocate `len` slots, filling slot `k` with `init(k)`.
    pub fn from_fn(len: impl TryInto<usize>, init: impl FnMut(usize) -> T) -> Self {
        let len = crate::cast_usize!(len);
        let inner = (0..len).map(init).collect();
        Self { inner }
    }

    pub fn as_slice(&self) -> &[T] {
        self
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(value: Vec<T>) -> Self {
        Self {
            inner: value.into_boxed_slice(),
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<Idx, T> Index<Idx> for Array<T>
where
    Idx: TryInto<usize>,
{
    type Output = T;
    fn index(&self, index: Idx) -> &Self::Output {
        let index = crate::cast_usize!(index);
        &self.inner[index]
    }
}

impl<Idx, T> IndexMut<Idx> for Array<T>
where
    Idx: TryInto<usize>,
{
    fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
        let index = crate::cast_usize!(index);
        &mut self.inner[index]
    }
}

#[cfg(test)]
mod tests {
    use super::Array;

    #[test]
    fn index_with_any_integer() {
        let array = Array::from(vec![1i32, 2, 3]);
        assert_eq!(array[0u32], 1);
        assert_eq!(array[1u8], 2);
        assert_eq!(array[2usize], 3);
    }

    #[test]
    fn from_fn_fills_every_slot() {
        let mut array = Array::from_fn(4u16, |k| k * 10);
        assert_eq!(array.len(), 4);
        assert_eq!(array.as_slice(), &[0, 10, 20, 30]);

        array[3i64] = 7;
        assert_eq!(array.as_mut_slice()[3], 7);
    }

    #[test]
    fn zero_length() {
        let array: Array<Option<u8>> = Array::from_fn(0, |_| None);
        assert!(array.is_empty());
    }

    #[test]
    #[should_panic]
    fn negative_index() {
        let array = Array::from(vec![1, 2, 3]);
        let _ = array[-1i32];
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let array = Array::from(vec![1, 2, 3]);
        let _ = array[3u32];
    }
}
