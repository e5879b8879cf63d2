//! Emoji catalog for the picker overlay

/// Number of emoji per picker row
pub const PICKER_COLUMNS: usize = 8;

/// Symbols offered by the picker, in display order
pub const EMOJIS: &[&str] = &[
    "😀", "😂", "😊", "😍", "😎", "🤔", "😴", "😭",
    "😡", "🥳", "😱", "🙄", "👍", "👎", "👏", "🙏",
    "💪", "👀", "🎉", "🔥", "✨", "⭐", "❤️", "💔",
    "✅", "❌", "⚠️", "❗", "❓", "🚨", "🔔", "📣",
    "🚀", "🐛", "🔧", "📦", "🧪", "📈", "📉", "⏰",
    "☕", "🍕", "🍺", "🌧️", "☀️", "🌙", "🏠", "💡",
];

/// Symbol at `index`, if it exists
pub fn get(index: usize) -> Option<&'static str> {
    EMOJIS.get(index).copied()
}

/// Number of picker rows
pub fn rows() -> usize {
    EMOJIS.len().div_ceil(PICKER_COLUMNS)
}
