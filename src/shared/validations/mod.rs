/// Clamp pagination parameters to sane bounds. Pages are zero-based.
pub fn validate_pagination(page: Option<u64>, size: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(0);
    let size = size.unwrap_or(10).clamp(1, 100);
    (page, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        assert_eq!(validate_pagination(None, None), (0, 10));
    }

    #[test]
    fn clamps_oversized_page_size() {
        assert_eq!(validate_pagination(Some(3), Some(1000)), (3, 100));
        assert_eq!(validate_pagination(Some(3), Some(0)), (3, 1));
    }
}
