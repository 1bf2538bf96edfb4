//! Two-bit group access helpers shared by the LSB codecs.

/// Number of 2-bit groups a byte splits into.
pub const GROUPS_PER_BYTE: u32 = 4;

/// Mask selecting one 2-bit group, or the low 2 bits of a carrier pixel.
pub const GROUP_MASK: u8 = 0b0000_0011;

const GROUP_BITS: u32 = 2;

/// Splits a byte into four 2-bit groups, most significant group first.
pub fn split_groups(byte: u8) -> [u8; GROUPS_PER_BYTE as usize] {
    let mut groups = [0; GROUPS_PER_BYTE as usize];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = (byte >> (u8::BITS - GROUP_BITS * (i as u32 + 1))) & GROUP_MASK;
    }
    groups
}

/// Reassembles a byte from four 2-bit groups, most significant group first.
pub fn merge_groups(groups: [u8; GROUPS_PER_BYTE as usize]) -> u8 {
    groups
        .iter()
        .fold(0, |byte, group| (byte << GROUP_BITS) | (group & GROUP_MASK))
}

/// Replaces the low 2 bits of a carrier sample with the given group.
pub fn conceal_group(carrier: u8, group: u8) -> u8 {
    (carrier & !GROUP_MASK) | (group & GROUP_MASK)
}

/// Reads the low 2 bits of a carrier sample.
pub fn reveal_group(carrier: u8) -> u8 {
    carrier & GROUP_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_split_most_significant_group_first() {
        assert_eq!(split_groups(0b11_01_00_10), [0b11, 0b01, 0b00, 0b10]);
    }

    #[test]
    fn should_merge_back_to_the_original_byte() {
        for byte in [0x00, 0x2A, b'H', 0xFF] {
            assert_eq!(merge_groups(split_groups(byte)), byte);
        }
    }

    #[test]
    fn should_conceal_without_touching_high_bits() {
        assert_eq!(conceal_group(0b1111_1100, 0b10), 0b1111_1110);
        assert_eq!(reveal_group(0b1111_1110), 0b10);
    }
}
