//! Baud-rate lookup tables.
//!
//! Serial options name a line speed as a plain number (`9600`). Configuring
//! the port needs the termios speed code for that rate, and some router
//! consoles (Cisco IOS) report the speed as their own small code. These
//! tables convert between the three. Lookups are exact matches; there is no
//! rounding to the nearest supported rate.

use core::fmt;

/// A termios speed code (`B9600` and friends).
///
/// Values are those of Linux `<asm-generic/termbits.h>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Speed(u32);

impl Speed {
    /// Wraps a raw termios speed code.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw termios speed code.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(speed_name(*self))
    }
}

struct BaudRate {
    rate: u32,
    speed: Speed,
    name: &'static str,
}

const fn row(rate: u32, bits: u32, name: &'static str) -> BaudRate {
    BaudRate {
        rate,
        speed: Speed(bits),
        name,
    }
}

// 14400 and 28800 have no termios code.
static BAUD_RATES: &[BaudRate] = &[
    row(50, 0o000001, "50"),
    row(75, 0o000002, "75"),
    row(110, 0o000003, "110"),
    row(134, 0o000004, "134"),
    row(150, 0o000005, "150"),
    row(200, 0o000006, "200"),
    row(300, 0o000007, "300"),
    row(600, 0o000010, "600"),
    row(1200, 0o000011, "1200"),
    row(1800, 0o000012, "1800"),
    row(2400, 0o000013, "2400"),
    row(4800, 0o000014, "4800"),
    row(9600, 0o000015, "9600"),
    row(19_200, 0o000016, "19200"),
    row(38_400, 0o000017, "38400"),
    row(57_600, 0o010001, "57600"),
    row(115_200, 0o010002, "115200"),
    row(230_400, 0o010003, "230400"),
    row(460_800, 0o010004, "460800"),
    row(500_000, 0o010005, "500000"),
    row(576_000, 0o010006, "576000"),
    row(921_600, 0o010007, "921600"),
    row(1_000_000, 0o010010, "1000000"),
    row(1_152_000, 0o010011, "1152000"),
    row(1_500_000, 0o010012, "1500000"),
    row(2_000_000, 0o010013, "2000000"),
    row(2_500_000, 0o010014, "2500000"),
    row(3_000_000, 0o010015, "3000000"),
    row(3_500_000, 0o010016, "3500000"),
    row(4_000_000, 0o010017, "4000000"),
];

/// Termios speed code for a rate in bits per second.
#[must_use]
pub fn speed_for_rate(rate: u32) -> Option<Speed> {
    BAUD_RATES.iter().find(|b| b.rate == rate).map(|b| b.speed)
}

/// Rate in bits per second for a termios speed code.
#[must_use]
pub fn rate_for_speed(speed: Speed) -> Option<u32> {
    BAUD_RATES.iter().find(|b| b.speed == speed).map(|b| b.rate)
}

/// Display string for a termios speed code, `"unknown speed"` if the code is
/// not in the table.
#[must_use]
pub fn speed_name(speed: Speed) -> &'static str {
    BAUD_RATES
        .iter()
        .find(|b| b.speed == speed)
        .map_or("unknown speed", |b| b.name)
}

/// `(rate, Cisco IOS speed code)`
static CISCO_BAUD_RATES: &[(u32, u8)] = &[
    (300, 3),
    (600, 4),
    (1200, 5),
    (2400, 6),
    (4800, 7),
    (9600, 8),
    (19_200, 10),
    (38_400, 12),
    (57_600, 13),
    (115_200, 14),
    (230_400, 15),
];

/// Rate in bits per second for a Cisco IOS speed code.
#[must_use]
pub fn cisco_to_rate(code: u8) -> Option<u32> {
    CISCO_BAUD_RATES
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(rate, _)| rate)
}

/// Cisco IOS speed code for a rate in bits per second.
#[must_use]
pub fn rate_to_cisco(rate: u32) -> Option<u8> {
    CISCO_BAUD_RATES
        .iter()
        .find(|&&(r, _)| r == rate)
        .map(|&(_, code)| code)
}
