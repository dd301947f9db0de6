//! Conversion between stored text and typed values.
//!
//! Two sealed traits define the closed set of supported types:
//!
//! - [`Scalar`] – anything that can be *written* as a value: integers, floats,
//!   `bool`, `char`, `String` and `&str`.
//! - [`ParseScalar`] – anything that can be *read back* from a value: the same
//!   set minus the borrowed `str`.
//!
//! Both traits are sealed, so code outside this crate cannot add types.  A
//! getter called with an unsupported type is a compile error rather than a
//! silent default.
//!
//! # Parsing rules (strict)
//!
//! | Type            | Accepted text                                              |
//! |-----------------|------------------------------------------------------------|
//! | integers, floats| the first whitespace-delimited token, parsed completely     |
//! | `bool`          | `true` / `false` (any ASCII case), `1` / `0`               |
//! | `char`          | a first token that is exactly one character                 |
//! | `String`        | the text verbatim                                          |
//!
//! Anything else yields `None`, which the buffer turns into the caller's
//! default.  `"12abc"` is therefore *not* read as `12`.

mod private {
    pub trait Sealed {}
}

/// A value that can be stored in a config file.
pub trait Scalar: private::Sealed {
    /// Appends the canonical text form of the value to `out`.
    fn write_text(&self, out: &mut String);

    /// Returns the canonical text form of the value.
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

/// A value that can be read back from a config file.
pub trait ParseScalar: Scalar + Sized {
    /// Parses `text` using the rules in the [module docs](self).
    fn parse_text(text: &str) -> Option<Self>;
}

/// Returns the first whitespace-delimited token of `text`.
fn first_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

macro_rules! impl_numeric_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Scalar for $ty {
                fn write_text(&self, out: &mut String) {
                    use std::fmt::Write as _;
                    // Writing into a String cannot fail.
                    let _ = write!(out, "{self}");
                }
            }

            impl ParseScalar for $ty {
                fn parse_text(text: &str) -> Option<Self> {
                    first_token(text)?.parse().ok()
                }
            }
        )*
    };
}

impl_numeric_scalar!(i32, i64, u32, u64, f32, f64);

impl private::Sealed for bool {}

impl Scalar for bool {
    fn write_text(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

impl ParseScalar for bool {
    fn parse_text(text: &str) -> Option<Self> {
        let token = first_token(text)?;
        if token == "1" || token.eq_ignore_ascii_case("true") {
            Some(true)
        } else if token == "0" || token.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl private::Sealed for char {}

impl Scalar for char {
    fn write_text(&self, out: &mut String) {
        out.push(*self);
    }
}

impl ParseScalar for char {
    fn parse_text(text: &str) -> Option<Self> {
        let mut chars = first_token(text)?.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl private::Sealed for String {}

impl Scalar for String {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl ParseScalar for String {
    fn parse_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl private::Sealed for str {}

impl Scalar for str {
    fn write_text(&self, out: &mut String) {
        out.push_str(self);
    }
}

impl<T: Scalar + ?Sized> private::Sealed for &T {}

impl<T: Scalar + ?Sized> Scalar for &T {
    fn write_text(&self, out: &mut String) {
        (**self).write_text(out);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
