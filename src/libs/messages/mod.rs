pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

// Prefixed message strings for surfaces that render text themselves,
// such as dashboard banners.
pub fn success(msg: Message) -> String {
    format!("✅ {}", msg)
}

pub fn error(msg: Message) -> String {
    format!("❌ {}", msg)
}

pub fn info(msg: Message) -> String {
    format!("ℹ️ {}", msg)
}
