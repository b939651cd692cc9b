//! Append formatted values to a `String`
//!
//! One explicit method per integer width so that 8-bit values are always
//! rendered as numbers, plus a pointer formatter whose width follows the
//! process bitness.

use crate::core::environment;

macro_rules! append_decimal {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            fn $name(&mut self, value: $ty) -> &mut Self {
                self.append_display(value)
            }
        )*
    };
}

/// Extension trait for building strings out of heterogeneous values.
pub trait StringAppend {
    fn append_display<T: std::fmt::Display>(&mut self, value: T) -> &mut Self;

    fn append_str(&mut self, value: &str) -> &mut Self {
        self.append_display(value)
    }

    append_decimal! {
        append_i8: i8,
        append_u8: u8,
        append_i16: i16,
        append_u16: u16,
        append_i32: i32,
        append_u32: u32,
        append_i64: i64,
        append_u64: u64,
    }

    /// Append `0x` and the zero padded, uppercase hex address of `value`.
    fn append_ptr<T>(&mut self, value: *const T) -> &mut Self {
        self.append_display(format_address(value as usize))
    }
}

impl StringAppend for String {
    fn append_display<T: std::fmt::Display>(&mut self, value: T) -> &mut Self {
        use std::fmt::Write;
        // Writing into a String never fails.
        let _ = write!(self, "{}", value);
        self
    }
}

/// Format an address with 8 hex digits on 32-bit processes and 16 on 64-bit.
pub fn format_address(address: usize) -> String {
    let digits = if environment::is_process_32_bit() { 8 } else { 16 };
    format!("0x{:0width$X}", address, width = digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> String {
        "fooBAR".to_string()
    }

    #[test]
    fn test_append_str() {
        let mut actual = header();
        actual.append_str("test");
        assert_eq!(actual, "fooBARtest");
    }

    #[test]
    fn test_append_eight_bit_values_as_numbers() {
        let mut actual = header();
        actual.append_i8(-23);
        assert_eq!(actual, "fooBAR-23");

        let mut actual = header();
        actual.append_u8(200);
        assert_eq!(actual, "fooBAR200");
    }

    #[test]
    fn test_append_wider_integers() {
        let mut actual = header();
        actual.append_i16(-31234);
        assert_eq!(actual, "fooBAR-31234");

        let mut actual = header();
        actual.append_u16(51234);
        assert_eq!(actual, "fooBAR51234");

        let mut actual = header();
        actual.append_i32(-2147483600);
        assert_eq!(actual, "fooBAR-2147483600");

        let mut actual = header();
        actual.append_u32(4123456789);
        assert_eq!(actual, "fooBAR4123456789");

        let mut actual = header();
        actual.append_i64(-9123456789012345678);
        assert_eq!(actual, "fooBAR-9123456789012345678");

        let mut actual = header();
        actual.append_u64(18123456789012345678);
        assert_eq!(actual, "fooBAR18123456789012345678");
    }

    #[test]
    fn test_append_ptr() {
        let expected = if environment::is_process_32_bit() {
            "fooBAR0x12345678"
        } else {
            "fooBAR0x0000000012345678"
        };
        let mut actual = header();
        actual.append_ptr(0x12345678usize as *const u8);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_append_chaining() {
        let mut actual = String::new();
        actual.append_str("offset ").append_u64(42).append_str(": ").append_u8(7);
        assert_eq!(actual, "offset 42: 7");
    }
}
