use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;

/// Duración acumulada expresada como `horas:minutos:segundos`.
///
/// Es tiempo transcurrido, no una hora de reloj: las horas no se envuelven
/// a las 24 y nunca hay valores negativos. Siempre está normalizada
/// (`minutes < 60`, `seconds < 60`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackDuration {
  hours: u64,
  minutes: u8,
  seconds: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
  #[error("expected HH:MM:SS, got {0:?}")]
  Format(String),

  #[error("{unit} out of range: {value}")]
  OutOfRange { unit: &'static str, value: u64 },
}

impl TrackDuration {
  pub const ZERO: TrackDuration = TrackDuration { hours: 0, minutes: 0, seconds: 0 };

  /// Construye una duración normalizando componentes desbordados
  /// (`0:0:61` pasa a ser `0:1:1`). Satura en `u64::MAX` segundos; usar
  /// [`TrackDuration::checked_new`] cuando el valor viene de fuera.
  pub fn new(hours: u64, minutes: u64, seconds: u64) -> Self {
    Self::checked_new(hours, minutes, seconds).unwrap_or_else(|| Self::from_secs(u64::MAX))
  }

  /// Como [`TrackDuration::new`], pero `None` si el total no cabe en `u64`
  /// segundos.
  pub fn checked_new(hours: u64, minutes: u64, seconds: u64) -> Option<Self> {
    let total = hours
      .checked_mul(SECS_PER_HOUR)?
      .checked_add(minutes.checked_mul(SECS_PER_MINUTE)?)?
      .checked_add(seconds)?;
    Some(Self::from_secs(total))
  }

  pub fn from_secs(total: u64) -> Self {
    TrackDuration {
      hours: total / SECS_PER_HOUR,
      minutes: ((total % SECS_PER_HOUR) / SECS_PER_MINUTE) as u8,
      seconds: (total % SECS_PER_MINUTE) as u8,
    }
  }

  pub fn as_secs(&self) -> u64 {
    self
      .hours
      .saturating_mul(SECS_PER_HOUR)
      .saturating_add(self.minutes as u64 * SECS_PER_MINUTE)
      .saturating_add(self.seconds as u64)
  }

  pub fn hours(&self) -> u64 {
    self.hours
  }

  pub fn minutes(&self) -> u8 {
    self.minutes
  }

  pub fn seconds(&self) -> u8 {
    self.seconds
  }

  pub fn is_zero(&self) -> bool {
    *self == Self::ZERO
  }

  /// Suma componente a componente, arrastrando el acarreo de segundos a
  /// minutos y de minutos a horas.
  pub fn plus(self, delta: TrackDuration) -> TrackDuration {
    let seconds = self.seconds as u64 + delta.seconds as u64;
    let minutes = self.minutes as u64 + delta.minutes as u64 + seconds / SECS_PER_MINUTE;
    let hours = self.hours.saturating_add(delta.hours).saturating_add(minutes / 60);

    TrackDuration {
      hours,
      minutes: (minutes % 60) as u8,
      seconds: (seconds % SECS_PER_MINUTE) as u8,
    }
  }

  /// Resta `delta` con préstamo entre unidades. Si `delta` es mayor que la
  /// duración actual el resultado es cero, nunca negativo ni envuelto.
  pub fn minus_clamped(self, delta: TrackDuration) -> TrackDuration {
    match self.as_secs().checked_sub(delta.as_secs()) {
      Some(rest) => Self::from_secs(rest),
      None => Self::ZERO,
    }
  }
}

impl Add for TrackDuration {
  type Output = TrackDuration;

  fn add(self, rhs: TrackDuration) -> TrackDuration {
    self.plus(rhs)
  }
}

impl Sum for TrackDuration {
  fn sum<I: Iterator<Item = TrackDuration>>(iter: I) -> Self {
    iter.fold(TrackDuration::ZERO, TrackDuration::plus)
  }
}

impl<'a> Sum<&'a TrackDuration> for TrackDuration {
  fn sum<I: Iterator<Item = &'a TrackDuration>>(iter: I) -> Self {
    iter.copied().sum()
  }
}

impl From<TrackDuration> for Duration {
  fn from(d: TrackDuration) -> Self {
    Duration::from_secs(d.as_secs())
  }
}

impl From<Duration> for TrackDuration {
  /// Las fracciones de segundo se descartan.
  fn from(d: Duration) -> Self {
    TrackDuration::from_secs(d.as_secs())
  }
}

impl fmt::Display for TrackDuration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
  }
}

impl FromStr for TrackDuration {
  type Err = DurationParseError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    let [h, m, sec] = parts.as_slice() else {
      return Err(DurationParseError::Format(s.to_owned()));
    };

    let parse = |part: &str| part.parse::<u64>().map_err(|_| DurationParseError::Format(s.to_owned()));
    let (hours, minutes, seconds) = (parse(*h)?, parse(*m)?, parse(*sec)?);

    if minutes >= 60 {
      return Err(DurationParseError::OutOfRange { unit: "minutes", value: minutes });
    }
    if seconds >= 60 {
      return Err(DurationParseError::OutOfRange { unit: "seconds", value: seconds });
    }

    TrackDuration::checked_new(hours, minutes, seconds)
      .ok_or(DurationParseError::OutOfRange { unit: "hours", value: hours })
  }
}

impl Serialize for TrackDuration {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for TrackDuration {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}
