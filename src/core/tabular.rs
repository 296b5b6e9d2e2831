use std::iter::{self, Empty};

/// A single record seen through the headers of a [`TabularView`].
///
/// Asking for a header the record knows nothing about is not an error: the
/// value is simply absent and renders as an empty field.
pub trait Row {
    /// Returns the value stored under `header`, or `None` if it is unset.
    fn get(&self, header: &str) -> Option<&str>;
}

impl<T: Row + ?Sized> Row for Box<T> {
    fn get(&self, header: &str) -> Option<&str> {
        (**self).get(header)
    }
}

/// Abstract tabular data: an ordered header sequence plus a row source.
///
/// Implementations do not validate their content; that is the job of the
/// converter consuming them. The row source is taken by value so it may be
/// a single-pass iterator.
pub trait TabularView {
    type Row: Row;
    type Rows: Iterator<Item = Self::Row>;

    /// Ordered header names.
    ///
    /// # Returns
    /// - `None` when the view has no header set at all
    /// - `Some(headers)` where a `None` entry is a missing header name
    fn headers(&self) -> Option<Vec<Option<&str>>>;

    /// Consumes the view and hands out its rows, or `None` when there is no row source.
    fn into_rows(self) -> Option<Self::Rows>;
}

/// A row without any value. Every lookup answers `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmptyRow;

impl Row for EmptyRow {
    fn get(&self, _header: &str) -> Option<&str> {
        None
    }
}

/// Owned headers plus a lazy row iterator.
///
/// This is the view produced by the record adapter, and the easiest way for
/// callers to hand their own rows to a converter.
#[derive(Debug, Clone)]
pub struct TabularData<I> {
    headers: Option<Vec<Option<String>>>,
    rows: Option<I>,
}

impl<I> TabularView for TabularData<I>
where
    I: Iterator,
    I::Item: Row,
{
    type Row = I::Item;
    type Rows = I;

    fn headers(&self) -> Option<Vec<Option<&str>>> {
        self.headers
            .as_ref()
            .map(|headers| headers.iter().map(Option::as_deref).collect())
    }

    fn into_rows(self) -> Option<I> {
        self.rows
    }
}

/// Builder for [`TabularData`].
///
/// # Examples
///
/// ```
/// use tabular_csv::core::tabular::{EmptyRow, TabularDataBuilder, TabularView};
///
/// let view = TabularDataBuilder::new()
///     .headers(["city", "country"])
///     .rows(vec![EmptyRow, EmptyRow])
///     .build();
///
/// assert_eq!(view.headers(), Some(vec![Some("city"), Some("country")]));
/// assert_eq!(view.into_rows().map(Iterator::count), Some(2));
/// ```
#[derive(Debug)]
pub struct TabularDataBuilder<I = Empty<EmptyRow>> {
    headers: Option<Vec<Option<String>>>,
    rows: Option<I>,
}

impl Default for TabularDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TabularDataBuilder {
    /// Starts a view without headers and with an empty row source.
    pub fn new() -> TabularDataBuilder {
        TabularDataBuilder {
            headers: None,
            rows: Some(iter::empty()),
        }
    }
}

impl<I> TabularDataBuilder<I> {
    pub fn headers<H, S>(mut self, headers: H) -> TabularDataBuilder<I>
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(|h| Some(h.into())).collect());
        self
    }

    /// Same as [`TabularDataBuilder::headers`], but individual names may be missing.
    pub fn nullable_headers<H, S>(mut self, headers: H) -> TabularDataBuilder<I>
    where
        H: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(|h| h.map(Into::into)).collect());
        self
    }

    pub fn rows<T: IntoIterator>(self, rows: T) -> TabularDataBuilder<T::IntoIter> {
        TabularDataBuilder {
            headers: self.headers,
            rows: Some(rows.into_iter()),
        }
    }

    /// Removes the row source entirely.
    pub fn no_rows(self) -> TabularDataBuilder<I> {
        TabularDataBuilder {
            headers: self.headers,
            rows: None,
        }
    }

    pub fn build(self) -> TabularData<I> {
        TabularData {
            headers: self.headers,
            rows: self.rows,
        }
    }
}
