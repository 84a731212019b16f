/// A key/payload pair stored in a [`Heap`](crate::Heap).
///
/// Only the key takes part in ordering; the payload is carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<T> {
    key: i64,
    data: T,
}

impl<T> Element<T> {
    pub fn new(key: i64, data: T) -> Self {
        Self { key, data }
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn set_key(&mut self, key: i64) {
        self.key = key;
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn set_data(&mut self, data: T) {
        self.data = data;
    }

    pub fn into_parts(self) -> (i64, T) {
        (self.key, self.data)
    }
}

impl<T> From<(i64, T)> for Element<T> {
    fn from((key, data): (i64, T)) -> Self {
        Self::new(key, data)
    }
}
