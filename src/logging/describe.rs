use std::fmt::{Debug, Write};
use std::panic::{self, AssertUnwindSafe};

/// Placeholder used when a value cannot be rendered
pub const UNPRINTABLE: &str = "<unprintable>";

/// Render a value for a log line without ever failing
///
/// A `Debug` impl may return `fmt::Error` or panic. Either way the caller is
/// already handling another error, so the rendering falls back to
/// [`UNPRINTABLE`] instead of masking it.
pub fn describe<T: Debug + ?Sized>(value: &T) -> String {
    let rendered = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut out = String::new();
        write!(out, "{:?}", value).map(|()| out)
    }));

    match rendered {
        Ok(Ok(out)) => out,
        _ => UNPRINTABLE.to_string(),
    }
}
