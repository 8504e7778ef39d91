use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// The colors a word can be highlighted with.
pub const PALETTE: [&str; 16] = [
    "#FFCEFD", "#568EFF", "#28D66A", "#FFB34B", "#FE9C9C", "#FCEB00", "#FF5B5E", "#00FFFF",
    "#FF9CEF", "#6F9CFF", "#50E27C", "#FFCF7D", "#FFAEAE", "#FFF04D", "#FF7B7D", "#7DFFFF",
];

/// Supplies the highlight color for each extracted word.
pub trait ColorPicker {
    fn pick_color(&mut self) -> String;
}

impl<P: ColorPicker + ?Sized> ColorPicker for &mut P {
    fn pick_color(&mut self) -> String {
        (**self).pick_color()
    }
}

/// Picks a color uniformly at random from [PALETTE].
#[derive(Debug, Clone)]
pub struct RandomColors<R = ThreadRng> {
    rng: R,
}

impl RandomColors<ThreadRng> {
    pub fn new() -> Self {
        RandomColors {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomColors<ThreadRng> {
    fn default() -> Self {
        RandomColors::new()
    }
}

impl RandomColors<StdRng> {
    /// A reproducible color sequence.
    pub fn seeded(seed: u64) -> Self {
        RandomColors::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomColors<R> {
    pub fn with_rng(rng: R) -> Self {
        RandomColors { rng }
    }
}

impl<R: Rng> ColorPicker for RandomColors<R> {
    fn pick_color(&mut self) -> String {
        PALETTE[self.rng.gen_range(0..PALETTE.len())].to_string()
    }
}

/// Always picks the same color.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedColor(pub String);

impl ColorPicker for FixedColor {
    fn pick_color(&mut self) -> String {
        self.0.clone()
    }
}

/// Walks through [PALETTE] in order, starting over after the last color.
#[derive(Debug, Clone, Default)]
pub struct CycleColors {
    next: usize,
}

impl ColorPicker for CycleColors {
    fn pick_color(&mut self) -> String {
        let color = PALETTE[self.next % PALETTE.len()];
        self.next += 1;
        color.to_string()
    }
}
