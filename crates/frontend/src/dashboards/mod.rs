pub mod welcome;

pub use welcome::ui::Welcome;
