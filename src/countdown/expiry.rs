//! 过期时间解析
//! Expiry parsing
//!
//! 接受 RFC 3339 / ISO-8601 时间戳。没有偏移量的日期时间以及纯日期
//! 按 UTC 解释，这与浏览器把无偏移日期时间当作本地时间的行为不同。
//! 日期与时间之间的空格分隔符也被接受。
//!
//! Accepts RFC 3339 / ISO-8601 timestamps. Date-times without an offset and
//! bare dates are read as UTC, unlike browsers, which read an offset-less
//! date-time as local time. A space separator between date and time is
//! accepted as well.

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::time::Duration;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{Date, OffsetDateTime, PrimitiveDateTime};
use tracing::warn;

/// Parses an expiry attribute into an absolute instant.
///
/// 将过期属性解析为绝对时间点。
pub fn parse_expiry(value: &str) -> Result<OffsetDateTime> {
    let normalized = normalize(value.trim());
    let text = normalized.as_ref();

    if let Ok(at) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(at);
    }
    if let Ok(at) = OffsetDateTime::parse(text, &Iso8601::DEFAULT) {
        return Ok(at);
    }
    if let Ok(at) = PrimitiveDateTime::parse(text, &Iso8601::DEFAULT) {
        return Ok(at.assume_utc());
    }
    Date::parse(text, &Iso8601::DEFAULT)
        .map(|date| date.midnight().assume_utc())
        .map_err(|source| Error::InvalidExpiry {
            value: value.to_string(),
            source,
        })
}

/// `2025-01-01 12:00:00+00:00` -> `2025-01-01T12:00:00+00:00`
fn normalize(value: &str) -> Cow<'_, str> {
    if value.len() > 10 && value.as_bytes()[10] == b' ' && value.is_char_boundary(11) {
        Cow::Owned(format!("{}T{}", &value[..10], &value[11..]))
    } else {
        Cow::Borrowed(value)
    }
}

/// The expiry of a countdown entry.
///
/// An unparsable attribute is kept as [`Expiry::Invalid`] and behaves as an
/// instant that has already passed.
///
/// 倒计时条目的过期时间。无法解析的属性保存为 [`Expiry::Invalid`]，
/// 其行为等同于已经过去的时间点。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    At(OffsetDateTime),
    Invalid(String),
}

impl Expiry {
    /// Parses an attribute value, logging and degrading instead of failing.
    /// 解析属性值；失败时记录日志并降级，而不是返回错误。
    pub fn parse(value: &str) -> Self {
        match parse_expiry(value) {
            Ok(at) => Self::At(at),
            Err(err) => {
                warn!(error = %err, "Treating unparsable countdown expiry as expired");
                Self::Invalid(value.to_string())
            }
        }
    }

    /// Time left until expiry, or `None` once the expiry has passed.
    ///
    /// 距离过期的剩余时间；过期后返回 `None`。
    pub fn remaining(&self, now: OffsetDateTime) -> Option<Duration> {
        match self {
            Self::At(at) => {
                let diff = *at - now;
                if diff <= time::Duration::ZERO {
                    None
                } else {
                    Duration::try_from(diff).ok()
                }
            }
            Self::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::At(_))
    }
}

impl From<OffsetDateTime> for Expiry {
    fn from(at: OffsetDateTime) -> Self {
        Self::At(at)
    }
}
