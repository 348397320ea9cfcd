macro_rules! getter {
    ($(#[$attr:meta])* ref $name:ident: $kind:ty) => (
        $(#[$attr])*
        #[inline(always)]
        pub fn $name(&self) -> &$kind {
            &self.$name
        }
    );
    ($(#[$attr:meta])* $name:ident: $kind:ty) => (
        $(#[$attr])*
        #[inline(always)]
        pub fn $name(&self) -> $kind {
            self.$name
        }
    );
}

macro_rules! getters {
    ($($(#[$attr:meta])* $name:ident: $kind:ty,)*) => (
        $(getter! { $(#[$attr])* $name: $kind })*
    );
}

macro_rules! raise(
    ($kind:ident, $($arg:tt)+) => (
        return Err(::Error::new(::ErrorKind::$kind, format!($($arg)+)))
    );
);

macro_rules! some(
    ($option:expr, $kind:ident, $($arg:tt)+) => (match $option {
        Some(value) => value,
        _ => raise!($kind, $($arg)+),
    });
);
