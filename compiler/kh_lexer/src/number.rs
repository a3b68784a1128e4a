//! Numeric literals.
//!
//! ```text
//! number   = [prefix] digits [fraction] [exponent] [suffix]
//! prefix   = 0b | 0o | 0x            (either case)
//! fraction = . digits?               (not before another `.` or a word)
//! exponent = (e | p) [+|-] decimal   (`e` only in base 10)
//! suffix   = u | f | j | i           (either case)
//! ```
//!
//! Without a fraction, exponent or float suffix the literal is an integer:
//! `u` forces unsigned, and values above `i64::MAX` become unsigned anyway.
//! Anything else is floating: `f` is `float`, `j` imaginary float, `i`
//! imaginary double, no suffix `double`.

use kh_ir::TokenKind;
use kh_lexer_core::classify::{digit_value, is_word_continue, is_word_start};

use crate::lexer::{LexState, Lexer};
use crate::LexError;

/// Exponent part of a floating literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Exponent {
    /// 10 for `e`, 2 for `p`.
    base: u32,
    /// Signed power, saturated at the `i64` range.
    power: i64,
}

impl Lexer<'_> {
    pub(crate) fn number(&mut self) -> Result<TokenKind, LexError> {
        self.state = LexState::Integer;
        let radix = self.radix_prefix();

        let digits_start = self.cursor.pos();
        let (value, overflowed) = self.eat_digits(radix);
        if self.cursor.pos() == digits_start {
            return Err(self.invalid_number());
        }

        let kind = if self.starts_floating(radix) {
            self.state = LexState::Floating;
            self.floating(radix, digits_start)?
        } else if overflowed {
            return Err(self.invalid_number());
        } else if self.cursor.eat('u') || self.cursor.eat('U') {
            TokenKind::UInteger(value)
        } else {
            i64::try_from(value).map_or(TokenKind::UInteger(value), TokenKind::Integer)
        };

        if !self.cursor.is_eof() && is_word_continue(self.cursor.current()) {
            return Err(self.invalid_number());
        }
        Ok(kind)
    }

    /// Consume `0b`/`0o`/`0x` and return the radix; 10 when there is none.
    fn radix_prefix(&mut self) -> u32 {
        if self.cursor.current() != '0' {
            return 10;
        }
        let (radix, state) = match self.cursor.peek() {
            'b' | 'B' => (2, LexState::Bin),
            'o' | 'O' => (8, LexState::Octal),
            'x' | 'X' => (16, LexState::Hex),
            _ => return 10,
        };
        self.cursor.advance_n(2);
        self.state = state;
        radix
    }

    /// Consume digits of `radix`; returns the value and whether it passed
    /// `u64::MAX`.
    fn eat_digits(&mut self, radix: u32) -> (u64, bool) {
        let mut value: u64 = 0;
        let mut overflowed = false;
        while let Some(digit) = digit_value(self.cursor.current()).filter(|&d| d < radix) {
            match value
                .checked_mul(u64::from(radix))
                .and_then(|v| v.checked_add(u64::from(digit)))
            {
                Some(next) => value = next,
                None => overflowed = true,
            }
            self.cursor.advance();
        }
        (value, overflowed)
    }

    fn starts_floating(&self, radix: u32) -> bool {
        match self.cursor.current() {
            '.' => self.at_radix_point(radix),
            'e' | 'E' => radix == 10,
            'p' | 'P' | 'f' | 'F' | 'j' | 'J' | 'i' | 'I' => true,
            _ => false,
        }
    }

    /// A `.` after digits is a radix point unless it starts `..`/`...` or
    /// a member access such as `1.abs`.
    fn at_radix_point(&self, radix: u32) -> bool {
        let next = self.cursor.peek();
        if digit_value(next).is_some_and(|d| d < radix) {
            return true;
        }
        next != '.' && !is_word_start(next)
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "`f` and `j` literals hold f32"
    )]
    fn floating(&mut self, radix: u32, digits_start: u32) -> Result<TokenKind, LexError> {
        let integer_end = self.cursor.pos();
        let mut fraction = (integer_end, integer_end);
        if self.cursor.current() == '.' && self.at_radix_point(radix) {
            self.cursor.advance();
            let fraction_start = self.cursor.pos();
            self.eat_digits(radix);
            fraction = (fraction_start, self.cursor.pos());
        }

        let exponent = match self.cursor.current() {
            'e' | 'E' if radix == 10 => Some(self.exponent(10)?),
            'p' | 'P' => Some(self.exponent(2)?),
            _ => None,
        };

        let value = if radix == 10 {
            self.decimal_value(digits_start, integer_end, fraction, exponent)
        } else {
            let mantissa = self.radix_mantissa(radix, digits_start, integer_end, fraction);
            exponent.map_or(mantissa, |exponent| scale(mantissa, exponent))
        };

        let kind = match self.cursor.current() {
            'f' | 'F' => TokenKind::Float(value as f32),
            'j' | 'J' => TokenKind::IFloat(value as f32),
            'i' | 'I' => TokenKind::IDouble(value),
            _ => return Ok(TokenKind::Double(value)),
        };
        self.cursor.advance();
        Ok(kind)
    }

    /// Consume an exponent marker, optional sign and decimal digits.
    fn exponent(&mut self, base: u32) -> Result<Exponent, LexError> {
        self.cursor.advance();
        let negative = self.cursor.eat('-');
        if !negative {
            self.cursor.eat('+');
        }

        let digits_start = self.cursor.pos();
        let mut power: i64 = 0;
        while let Some(digit) = digit_value(self.cursor.current()).filter(|&d| d < 10) {
            power = power.saturating_mul(10).saturating_add(i64::from(digit));
            self.cursor.advance();
        }
        if self.cursor.pos() == digits_start {
            return Err(self.invalid_number());
        }

        let power = if negative { -power } else { power };
        Ok(Exponent { base, power })
    }

    /// Base 10 goes through the standard parser so `3.14` is the nearest
    /// double, not an accumulated approximation.
    fn decimal_value(
        &self,
        digits_start: u32,
        integer_end: u32,
        fraction: (u32, u32),
        exponent: Option<Exponent>,
    ) -> f64 {
        let mut text: String = self.cursor.slice(digits_start, integer_end).iter().collect();
        if fraction.0 < fraction.1 {
            text.push('.');
            text.extend(self.cursor.slice(fraction.0, fraction.1));
        }
        let scale_by = match exponent {
            Some(Exponent { base: 10, power }) => {
                text.push('e');
                text.push_str(&power.to_string());
                None
            }
            other => other,
        };
        // Digits and an optional signed exponent always parse.
        let value = text.parse::<f64>().unwrap_or(f64::NAN);
        scale_by.map_or(value, |exponent| scale(value, exponent))
    }

    fn radix_mantissa(
        &self,
        radix: u32,
        digits_start: u32,
        integer_end: u32,
        fraction: (u32, u32),
    ) -> f64 {
        let radix = f64::from(radix);
        let mut value = 0.0;
        for &c in self.cursor.slice(digits_start, integer_end) {
            value = value * radix + digit_as_f64(c);
        }
        let mut weight = 1.0 / radix;
        for &c in self.cursor.slice(fraction.0, fraction.1) {
            value += digit_as_f64(c) * weight;
            weight /= radix;
        }
        value
    }

    /// Report the literal, including any word characters glued to it.
    #[cold]
    fn invalid_number(&mut self) -> LexError {
        self.cursor.eat_while(is_word_continue);
        self.fail(LexError::invalid_numeric_literal(self.span_from_start()))
    }
}

fn digit_as_f64(c: char) -> f64 {
    digit_value(c).map_or(0.0, f64::from)
}

/// Largest power applied in one multiplication. `2^256` and `2^-256` are
/// both normal, so no intermediate factor rounds to zero or infinity early.
const SCALE_STEP: i32 = 256;

/// `mantissa * base^power`, applied in steps of at most [`SCALE_STEP`] so
/// results in the subnormal range survive. Results past the `f64` range
/// saturate to infinity or zero; a zero mantissa stays zero.
fn scale(mantissa: f64, exponent: Exponent) -> f64 {
    let base = f64::from(exponent.base);
    let mut value = mantissa;
    let mut power = exponent.power;
    while power.unsigned_abs() > u64::from(SCALE_STEP.unsigned_abs()) {
        if value == 0.0 || !value.is_finite() {
            break;
        }
        let step = if power > 0 { SCALE_STEP } else { -SCALE_STEP };
        value *= base.powi(step);
        power -= i64::from(step);
    }

    let rest = i32::try_from(power).unwrap_or(if power < 0 { i32::MIN } else { i32::MAX });
    let scaled = value * base.powi(rest);
    if scaled.is_nan() {
        0.0
    } else {
        scaled
    }
}

#[cfg(test)]
mod tests;
