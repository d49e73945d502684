//! The fixed alphabet the tool collects samples for.
//!
//! The seed set is the 46 base Hiragana syllabary characters, あ through ん.
//! It is fixed at registry initialization time and is not user-configurable.

/// The 46 base Hiragana syllabary characters, in gojūon order.
pub const HIRAGANA: [char; 46] = [
    'あ', 'い', 'う', 'え', 'お', // a-row
    'か', 'き', 'く', 'け', 'こ', // ka-row
    'さ', 'し', 'す', 'せ', 'そ', // sa-row
    'た', 'ち', 'つ', 'て', 'と', // ta-row
    'な', 'に', 'ぬ', 'ね', 'の', // na-row
    'は', 'ひ', 'ふ', 'へ', 'ほ', // ha-row
    'ま', 'み', 'む', 'め', 'も', // ma-row
    'や', 'ゆ', 'よ', // ya-row
    'ら', 'り', 'る', 'れ', 'ろ', // ra-row
    'わ', 'を', 'ん', // wa-row
];

/// Check whether a symbol belongs to the seeded alphabet.
#[must_use]
pub fn contains(symbol: char) -> bool {
    HIRAGANA.contains(&symbol)
}
