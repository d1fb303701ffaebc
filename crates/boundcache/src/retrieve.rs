/// Produces the value for a key that is not resident in the cache.
///
/// Implemented for every `FnMut(&K) -> Result<V, E>`, so most callers pass a
/// closure. The error type is returned to the caller of
/// [`BoundedCache::get`](crate::BoundedCache::get) untouched.
pub trait Retrieve<K> {
    type Value;
    type Error;

    fn retrieve(&mut self, key: &K) -> Result<Self::Value, Self::Error>;
}

impl<K, V, E, F> Retrieve<K> for F
where
    F: FnMut(&K) -> Result<V, E>,
{
    type Value = V;
    type Error = E;

    fn retrieve(&mut self, key: &K) -> Result<V, E> {
        self(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler {
        calls: usize,
    }

    impl Retrieve<u32> for Doubler {
        type Value = u32;
        type Error = String;

        fn retrieve(&mut self, key: &u32) -> Result<u32, String> {
            self.calls += 1;
            key.checked_mul(2).ok_or_else(|| "overflow".to_string())
        }
    }

    #[test]
    fn closures_are_retrievers() {
        let mut f = |k: &u32| -> Result<u32, ()> { Ok(k + 1) };
        assert_eq!(f.retrieve(&1), Ok(2));
    }

    #[test]
    fn custom_retriever() {
        let mut r = Doubler { calls: 0 };
        assert_eq!(r.retrieve(&4), Ok(8));
        assert!(r.retrieve(&u32::MAX).is_err());
        assert_eq!(r.calls, 2);
    }
}
