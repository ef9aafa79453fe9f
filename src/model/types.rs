use std::fmt;

/// Represents the metric family a point belongs to.
///
/// Rendered as the measurement name in line protocol and JSON output.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Measurement {
    /// Per-channel signal statistics of the cable modem
    CableModem,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Measurement::CableModem => write!(f, "cable_modem"),
        }
    }
}

/// Direction of a modem channel.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Channels the modem receives on
    Downstream,
    /// Channels the modem transmits on
    Upstream,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Downstream => write!(f, "downstream"),
            Direction::Upstream => write!(f, "upstream"),
        }
    }
}

/// Units printed after a value in the modem's status tables.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Unit {
    /// Hertz, for channel frequencies
    Hertz,
    /// Decibel-millivolts, for power levels
    DecibelMillivolt,
    /// Decibels, for signal-to-noise ratio
    Decibel,
}

impl Unit {
    /// The literal suffix the firmware appends to a value, including the
    /// separating space.
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Hertz => " Hz",
            Unit::DecibelMillivolt => " dBmV",
            Unit::Decibel => " dB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Unit::Hertz => write!(f, "Hz"),
            Unit::DecibelMillivolt => write!(f, "dBmV"),
            Unit::Decibel => write!(f, "dB"),
        }
    }
}
