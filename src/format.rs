//! Shared pieces of the `Display` impls.
//!
//! A precision given to the outer formatter (`{:.2}`) is forwarded to every
//! component. Integer components ignore it, as `std` does.

use std::fmt::{self, Display, Formatter};

pub(crate) fn write_elem<T: Display>(f: &mut Formatter<'_>, v: &T) -> fmt::Result {
    match f.precision() {
        Some(p) => write!(f, "{v:.p$}"),
        None => write!(f, "{v}"),
    }
}

/// Write `items` separated by `sep`, with no surrounding brackets.
pub(crate) fn write_joined<T: Display>(
    f: &mut Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, v) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write_elem(f, v)?;
    }
    Ok(())
}
