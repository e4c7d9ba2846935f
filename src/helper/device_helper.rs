use macaddr::MacAddr6;

pub fn format_mac_address(bytes: [u8; 6]) -> String {
    MacAddr6::from(bytes).to_string().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mac_address() {
        assert_eq!(
            format_mac_address([0x24, 0x0A, 0xC4, 0x12, 0xAB, 0xFF]),
            "24:0a:c4:12:ab:ff"
        );
    }
}
