//! Helpers for iterating possibly-absent sequences

/// Treat a possibly-absent sequence as an empty one
pub fn or_empty<I>(sequence: Option<I>) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
{
    sequence.into_iter().flatten()
}

/// Iterate the present elements of a possibly-absent sequence, skipping
/// absent placeholders
pub fn present<I, T>(sequence: Option<I>) -> impl Iterator<Item = T>
where
    I: IntoIterator<Item = Option<T>>,
{
    or_empty(sequence).flatten()
}
