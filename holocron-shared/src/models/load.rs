/// Lifecycle of a remotely loaded value.
///
/// Replaces a `loading`/`error` flag pair: a value is never loading and failed
/// at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Load<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Load<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure reason, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_variant() {
        let idle: Load<u8> = Load::default();
        assert_eq!(idle, Load::Idle);
        assert!(idle.value().is_none());

        assert!(Load::<u8>::Loading.is_loading());
        assert_eq!(Load::Loaded(3).value(), Some(&3));
        assert_eq!(Load::<u8>::Failed("boom".into()).error(), Some("boom"));
        assert!(Load::<u8>::Failed("boom".into()).value().is_none());
    }
}
