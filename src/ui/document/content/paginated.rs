use super::{PageView, PaginatedDocument};

impl PaginatedDocument {
    /// Pages numbered 1..=N in order, positioned on the first page.
    pub fn new(page_texts: Vec<String>) -> Self {
        let pages = page_texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| PageView {
                number: index + 1,
                text,
            })
            .collect();
        Self {
            pages,
            current_page: 1,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    pub fn footer(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }

    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }
}
