use strum::IntoEnumIterator;

/// Comma-separated list of every variant's string form, for error messages.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    valid_names::<T>().join(", ")
}

/// Every variant's string form, in declaration order.
pub fn valid_names<T>() -> Vec<String>
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter().map(|v| v.as_ref().to_owned()).collect()
}
