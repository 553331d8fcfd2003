use std::fmt;

use crate::CPU_CLOCK_HZ;

/// Timer input clock selected by TAC bits 1..0.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ClockFreq {
    #[default]
    Hz4096,
    Hz262144,
    Hz65536,
    Hz16384,
}

impl ClockFreq {
    pub fn from_tac(tac: u8) -> Self {
        match tac & 0x03 {
            0b00 => ClockFreq::Hz4096,
            0b01 => ClockFreq::Hz262144,
            0b10 => ClockFreq::Hz65536,
            _ => ClockFreq::Hz16384,
        }
    }

    pub fn hz(self) -> u32 {
        match self {
            ClockFreq::Hz4096 => 4_096,
            ClockFreq::Hz262144 => 262_144,
            ClockFreq::Hz65536 => 65_536,
            ClockFreq::Hz16384 => 16_384,
        }
    }

    /// CPU T-cycles per timer increment.
    pub fn period_cycles(self) -> u32 {
        CPU_CLOCK_HZ / self.hz()
    }
}

impl fmt::Display for ClockFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.hz())
    }
}

/// Consumer of timer-frequency changes and elapsed CPU cycles.
pub trait ClockScheduler {
    /// Called by the bus when a TAC write selects a different clock.
    fn set_clock_freq(&mut self, freq: ClockFreq);

    /// Advance by a number of CPU T-cycles.
    fn tick(&mut self, _cycles: u32) {}
}

/// Reference scheduler: counts down the active period and tallies how many
/// timer increments have elapsed.
#[derive(Clone, Debug)]
pub struct TimerScheduler {
    freq: ClockFreq,
    period: u32,
    countdown: u32,
    periods_elapsed: u64,
}

impl Default for TimerScheduler {
    fn default() -> Self {
        Self::new(ClockFreq::default())
    }
}

impl TimerScheduler {
    pub fn new(freq: ClockFreq) -> Self {
        let period = freq.period_cycles();
        Self {
            freq,
            period,
            countdown: period,
            periods_elapsed: 0,
        }
    }

    pub fn clock_freq(&self) -> ClockFreq {
        self.freq
    }

    /// Reload value of the countdown, in T-cycles.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// T-cycles left until the next timer increment.
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn periods_elapsed(&self) -> u64 {
        self.periods_elapsed
    }
}

impl ClockScheduler for TimerScheduler {
    fn set_clock_freq(&mut self, freq: ClockFreq) {
        self.freq = freq;
        self.period = freq.period_cycles();
        self.countdown = self.period;
    }

    fn tick(&mut self, cycles: u32) {
        let mut remaining = cycles;
        while remaining >= self.countdown {
            remaining -= self.countdown;
            self.countdown = self.period;
            self.periods_elapsed += 1;
        }
        self.countdown -= remaining;
    }
}
