/// Scope functions for building values in a single expression chain.
pub trait LetAlso: Sized {
    /// Passes the value into `f` and returns whatever `f` returns.
    fn let_owned<R, F: FnOnce(Self) -> R>(self, f: F) -> R {
        f(self)
    }
}

impl<T> LetAlso for T {}

#[cfg(test)]
mod tests {
    use super::LetAlso;

    #[test]
    fn let_owned_maps_value() {
        assert_eq!(vec![1, 2, 3].let_owned(|v| v.len()), 3);
    }
}
