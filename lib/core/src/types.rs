/// Normalized pagination parameters for list operations.
///
/// Raw query values are clamped the same way everywhere: page < 1 (or
/// absent) becomes 1, pageSize < 1 (or absent) becomes 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub page_size: u32,
}

pub const DEFAULT_PAGE_SIZE: u32 = 10;

impl PageParams {
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => 1,
        };
        let page_size = match page_size {
            Some(s) if s >= 1 => u32::try_from(s).unwrap_or(u32::MAX),
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, page_size }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Generate a new random entity ID (UUIDv4).
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
