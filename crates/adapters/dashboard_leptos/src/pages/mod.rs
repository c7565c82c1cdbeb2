mod sample;
mod settings;
mod welcome;

pub use sample::Sample;
pub use settings::Settings;
pub use welcome::Welcome;
