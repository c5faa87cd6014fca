/// Normalizes a list of name arguments.
///
/// Every item is split on commas and each piece is trimmed. Pieces that are
/// empty after trimming are dropped. Order is preserved.
pub fn normalize_names<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .flat_map(|item| {
            item.as_ref()
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Argument shapes accepted wherever a list of names is expected
/// ([`Table::set_primary_key`], [`Table::add_options`], ...).
///
/// A single string is treated as a comma-separated list; arrays, slices and
/// vectors have each element comma-split. All shapes normalize through
/// [`normalize_names`].
///
/// [`Table::set_primary_key`]: crate::schema::Table::set_primary_key
/// [`Table::add_options`]: crate::schema::Table::add_options
pub trait IntoNames {
    fn into_names(self) -> Vec<String>;
}

impl IntoNames for &str {
    fn into_names(self) -> Vec<String> {
        normalize_names([self])
    }
}

impl IntoNames for String {
    fn into_names(self) -> Vec<String> {
        normalize_names([self])
    }
}

impl IntoNames for &String {
    fn into_names(self) -> Vec<String> {
        normalize_names([self])
    }
}

impl<S: AsRef<str>> IntoNames for Vec<S> {
    fn into_names(self) -> Vec<String> {
        normalize_names(self)
    }
}

impl<S: AsRef<str>> IntoNames for &[S] {
    fn into_names(self) -> Vec<String> {
        normalize_names(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoNames for [S; N] {
    fn into_names(self) -> Vec<String> {
        normalize_names(self)
    }
}
