/// Declare a static [`EnvironmentKey`](crate::EnvironmentKey).
///
/// The default expression is evaluated each time the key is read from an
/// environment that has no value for it.
///
/// ```
/// use swim_core::{environment_key, Environment};
///
/// environment_key! {
///     /// Greeting shown by components
///     pub static GREETING: String = "Hello".to_string();
/// }
///
/// assert_eq!(Environment::new().get(&GREETING), "Hello");
/// ```
#[macro_export]
macro_rules! environment_key {
    ($(#[$meta:meta])* $vis:vis static $name:ident: $ty:ty = $default:expr;) => {
        $(#[$meta])*
        $vis static $name: $crate::__private::Lazy<$crate::EnvironmentKey<$ty>> =
            $crate::__private::Lazy::new(|| {
                $crate::EnvironmentKey::new(stringify!($name), || $default)
            });
    };
}

/// Declare a static [`PreferenceKey`](crate::PreferenceKey) with a default
/// and a reducer.
///
/// ```
/// use swim_core::{preference_key, read_preference, reduce_or, ComponentExt};
///
/// preference_key! {
///     pub static USE_JAVASCRIPT: bool = false, reduce_or;
/// }
///
/// let tree = "content".preference(&USE_JAVASCRIPT, true);
/// assert!(read_preference(tree, &USE_JAVASCRIPT).unwrap());
/// ```
#[macro_export]
macro_rules! preference_key {
    ($(#[$meta:meta])* $vis:vis static $name:ident: $ty:ty = $default:expr, $reduce:expr;) => {
        $(#[$meta])*
        $vis static $name: $crate::__private::Lazy<$crate::PreferenceKey<$ty>> =
            $crate::__private::Lazy::new(|| {
                $crate::PreferenceKey::new(stringify!($name), || $default, $reduce)
            });
    };
}
