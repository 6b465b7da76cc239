use serde::Serialize;

/// One page of items plus the page buttons offered below the table.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Every page number, `1..=page_count`. Empty when nothing matched.
    pub pages: Vec<usize>,
    pub page: usize,
    pub page_count: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, page_count: usize) -> Self {
        Self {
            items,
            pages: (1..=page_count).collect(),
            page: current_page,
            page_count,
        }
    }

    /// True when the current page is one of the offered buttons.
    pub fn is_in_range(&self) -> bool {
        (1..=self.page_count).contains(&self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offers_one_button_per_page() {
        let paginated = Paginated::new(vec![1, 2], 2, 4);

        assert_eq!(paginated.pages, vec![1, 2, 3, 4]);
        assert!(paginated.is_in_range());
    }

    #[test]
    fn no_pages_without_items() {
        let paginated: Paginated<u8> = Paginated::new(vec![], 1, 0);

        assert!(paginated.pages.is_empty());
        assert!(!paginated.is_in_range());
    }
}
