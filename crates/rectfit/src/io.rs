//! Batched text input and answer formatting.
//!
//! Input is whitespace-separated: a case count `T`, then per case a point
//! count `n` followed by `n` pairs `x y`. Line breaks carry no meaning.

use thiserror::Error;

use crate::geom2::Point;

/// Point counts outside this range are accepted but unusual for the format.
pub const TYPICAL_POINTS: std::ops::RangeInclusive<usize> = 15..=1000;

/// One rectangle instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Case {
    pub points: Vec<Point>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of input: expected {expected} (case {case})")]
    UnexpectedEof { expected: &'static str, case: usize },

    #[error("token {position} ({token:?}) is not a count")]
    BadCount { token: String, position: usize },

    #[error("token {position} ({token:?}) is not a finite number")]
    BadNumber { token: String, position: usize },

    #[error("{extra} unused tokens after the last case")]
    TrailingInput { extra: usize },
}

struct Tokens<'a> {
    inner: std::iter::Enumerate<std::str::SplitWhitespace<'a>>,
    case: usize,
}

impl<'a> Tokens<'a> {
    fn next_token(&mut self, expected: &'static str) -> Result<(usize, &'a str), ParseError> {
        self.inner.next().ok_or(ParseError::UnexpectedEof {
            expected,
            case: self.case,
        })
    }

    fn count(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let (position, token) = self.next_token(expected)?;
        token.parse().map_err(|_| ParseError::BadCount {
            token: token.to_string(),
            position,
        })
    }

    fn real(&mut self) -> Result<f64, ParseError> {
        let (position, token) = self.next_token("coordinate")?;
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(ParseError::BadNumber {
                token: token.to_string(),
                position,
            }),
        }
    }
}

/// Parse a whole batch.
pub fn parse_batch(text: &str) -> Result<Vec<Case>, ParseError> {
    let mut tokens = Tokens {
        inner: text.split_whitespace().enumerate(),
        case: 0,
    };
    let t = tokens.count("case count")?;
    let mut cases = Vec::with_capacity(t.min(1 << 16));
    for case in 0..t {
        tokens.case = case;
        let n = tokens.count("point count")?;
        if !TYPICAL_POINTS.contains(&n) {
            tracing::warn!(case, n, "point count outside the usual 15..=1000");
        }
        let mut points = Vec::with_capacity(n.min(1 << 20));
        for _ in 0..n {
            let x = tokens.real()?;
            let y = tokens.real()?;
            points.push(Point::new(x, y));
        }
        cases.push(Case { points });
    }
    let extra = tokens.inner.count();
    if extra > 0 {
        return Err(ParseError::TrailingInput { extra });
    }
    Ok(cases)
}

/// Render cases back into the batch format (one case per block).
pub fn write_batch(cases: &[Case]) -> String {
    let mut out = format!("{}\n", cases.len());
    for case in cases {
        out.push_str(&format!("{}\n", case.points.len()));
        for p in &case.points {
            out.push_str(&format!("{} {}\n", p.x, p.y));
        }
    }
    out
}

/// Fixed-point rendering of an area with `precision` decimals.
#[inline]
pub fn format_area(area: f64, precision: usize) -> String {
    format!("{area:.precision$}")
}
