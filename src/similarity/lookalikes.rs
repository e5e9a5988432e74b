//! Built-in look-alike table
//!
//! Well-known confusables, seeded into the similarity cache so common
//! queries resolve without a network round trip.

/// (query, candidates in rank order)
#[rustfmt::skip]
pub static LOOKALIKES: &[(u32, &[u32])] = &[
    // Latin capitals vs Greek / Cyrillic / symbols
    (0x0041, &[0x0391, 0x0410, 0x15C5, 0x0245]),       // A: Α А ᗅ Ʌ
    (0x0042, &[0x0392, 0x0412, 0x0181]),               // B: Β В Ɓ
    (0x0043, &[0x03F9, 0x0421, 0x216D, 0x00A9]),       // C: Ϲ С Ⅽ ©
    (0x0045, &[0x0395, 0x0415, 0x2211]),               // E: Ε Е ∑
    (0x0048, &[0x0397, 0x041D, 0x210B]),               // H: Η Н ℋ
    (0x0049, &[0x006C, 0x0031, 0x0399, 0x0406, 0x007C]), // I: l 1 Ι І |
    (0x004B, &[0x039A, 0x041A, 0x212A]),               // K: Κ К K
    (0x004D, &[0x039C, 0x041C, 0x2133]),               // M: Μ М ℳ
    (0x004F, &[0x0030, 0x039F, 0x041E, 0x25CB, 0x25EF]), // O: 0 Ο О ○ ◯
    (0x0050, &[0x03A1, 0x0420, 0x2119]),               // P: Ρ Р ℙ
    (0x0054, &[0x03A4, 0x0422, 0x22A4]),               // T: Τ Т ⊤
    (0x0058, &[0x03A7, 0x0425, 0x00D7, 0x2573]),       // X: Χ Х × ╳

    // Latin small
    (0x0061, &[0x0430, 0x03B1, 0x0251]),               // a: а α ɑ
    (0x0063, &[0x0441, 0x03F2, 0x217D]),               // c: с ϲ ⅽ
    (0x0065, &[0x0435, 0x0454, 0x212E]),               // e: е є ℮
    (0x006C, &[0x0049, 0x0031, 0x007C, 0x01C0]),       // l: I 1 | ǀ
    (0x006F, &[0x043E, 0x03BF, 0x0030, 0x00B0]),       // o: о ο 0 °
    (0x0070, &[0x0440, 0x03C1]),                       // p: р ρ
    (0x0078, &[0x0445, 0x00D7]),                       // x: х ×
    (0x0079, &[0x0443, 0x03B3]),                       // y: у γ

    // Digits
    (0x0030, &[0x004F, 0x039F, 0x041E, 0x3007]),       // 0: O Ο О 〇
    (0x0031, &[0x006C, 0x0049, 0x007C]),               // 1: l I |

    // Punctuation and operators
    (0x002A, &[0x2217, 0x204E, 0x2731]),               // *: ∗ ⁎ ✱
    (0x002D, &[0x2010, 0x2011, 0x2013, 0x2014, 0x2212]), // -: ‐ ‑ – — −
    (0x002E, &[0x00B7, 0x2219, 0x2022]),               // .: · ∙ •
    (0x002F, &[0x2215, 0x2044, 0x29F8]),               // /: ∕ ⁄ ⧸
    (0x003C, &[0x2039, 0x2329, 0x27E8]),               // <: ‹ 〈 ⟨
    (0x003E, &[0x203A, 0x232A, 0x27E9]),               // >: › 〉 ⟩
    (0x007E, &[0x223C, 0x301C, 0x02DC]),               // ~: ∼ 〜 ˜
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_well_formed() {
        let mut seen = HashSet::new();
        for (query, candidates) in LOOKALIKES {
            assert!(seen.insert(*query), "duplicate key U+{:04X}", query);
            assert!(!candidates.is_empty());
            assert!(!candidates.contains(query), "U+{:04X} lists itself", query);
            for cp in *candidates {
                assert!(char::from_u32(*cp).is_some());
            }
        }
    }
}
